use crate::nav::{Item, Screen};
use crate::ui::app::App;
use crate::ui::focus::FocusState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::sidebar::sidebar_widget;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, SECTION_HEADER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area(), app.layout());
    let screen = app.screen();

    let header = Header::new(&screen, app.tabs().current().stack());
    frame.render_widget(header.widget(), regions.header);

    if let Some(sidebar) = regions.sidebar {
        frame.render_widget(sidebar_widget(app.tabs()), sidebar);
    }

    frame.render_widget(Clear, regions.detail);
    frame.render_widget(
        Paragraph::new(screen_lines(&screen, app.focus())),
        regions.detail,
    );

    let footer = Footer::new(app.layout(), app.tabs().selection());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    if app.show_path_log() {
        let entries = app.path_log_entries();
        let mut lines: Vec<Line> = if entries.is_empty() {
            vec![Line::from("No navigation changes yet.")]
        } else {
            entries
                .iter()
                .rev()
                .map(|entry| Line::from(entry.to_string()))
                .collect()
        };
        lines.push(Line::from(""));
        lines.push(Line::from("Newest first  Esc/p: Close"));

        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let popup = Block::default()
            .title(Span::styled("Navigation Path", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Paragraph::new(lines).block(popup), area);
    }
}

/// Lay out a screen as form-style lines, highlighting the focused link.
pub fn screen_lines(screen: &Screen, focus: &FocusState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    let mut link_index = 0;

    for section in &screen.sections {
        if let Some(header) = section.header {
            lines.push(Line::from(Span::styled(
                format!("  {}", header.to_uppercase()),
                Style::default().fg(SECTION_HEADER),
            )));
        }
        for item in &section.items {
            match item {
                Item::Text(text) => {
                    lines.push(Line::from(Span::styled(
                        format!("  {text}"),
                        Style::default().fg(HEADER_TEXT),
                    )));
                }
                Item::Link { label, .. } => {
                    let focused = focus.is_focused(link_index);
                    let marker = if focused { "› " } else { "  " };
                    let mut line = Line::from(vec![
                        Span::styled(format!("  {marker}"), Style::default().fg(ACCENT)),
                        Span::styled(label.clone(), Style::default().fg(ACCENT)),
                    ]);
                    if focused {
                        line = line.style(
                            Style::default()
                                .bg(ACTIVE_HIGHLIGHT)
                                .add_modifier(Modifier::BOLD),
                        );
                    }
                    lines.push(line);
                    link_index += 1;
                }
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{root_screen, SelectionTab};

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn root_screen_renders_sections_and_focus_marker() {
        let screen = root_screen(SelectionTab::First);
        let focus = FocusState::On { index: 3, links: 5 };
        let lines: Vec<String> = screen_lines(&screen, &focus).iter().map(text_of).collect();

        assert!(lines.contains(&"  NAVIGATIONLINK".to_string()));
        assert!(lines.contains(&"  BUTTONS".to_string()));
        assert!(lines.contains(&"  › Go to first button screen".to_string()));
        assert!(lines.contains(&"    Go to first navigation link screen".to_string()));
    }
}
