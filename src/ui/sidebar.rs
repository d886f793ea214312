use crate::nav::{SelectionTab, TabCoordinator, Tagged};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Tab list shown next to the detail screen in the expanded layout. Each
/// entry shows how deep that tab's stack currently is.
pub fn sidebar_widget(tabs: &TabCoordinator) -> Paragraph<'static> {
    let lines: Vec<Line> = SelectionTab::ALL
        .iter()
        .map(|tab| {
            let selected = *tab == tabs.selection();
            let depth = tabs.store(*tab).len();
            let label = format!(" {} {}", tab.index() + 1, tab);
            let mut line = Line::from(vec![
                Span::styled(
                    label,
                    if selected {
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(HEADER_TEXT)
                    },
                ),
                Span::styled(
                    format!("  ({depth})"),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                ),
            ]);
            if selected {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            line
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
