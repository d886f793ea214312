use crate::nav::{LayoutMode, SelectionTab, Tagged};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints; in the compact layout the footer doubles as the tab bar.
pub struct Footer {
    layout: LayoutMode,
    selection: SelectionTab,
}

impl Footer {
    pub fn new(layout: LayoutMode, selection: SelectionTab) -> Self {
        Self { layout, selection }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let mut spans = Vec::new();

        if self.layout == LayoutMode::Compact {
            for tab in SelectionTab::ALL {
                let style = if *tab == self.selection {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    text_style
                };
                spans.push(Span::styled(format!(" {}:{} ", tab.index() + 1, tab), style));
            }
            spans.push(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)));
        }

        let hints = " Enter: Open │ ⌫: Back │ r: Root │ Tab: Switch │ p: Path log │ q: Quit";
        let version = format!("v{} ", VERSION);
        let used: usize = spans.iter().map(|span| span.width()).sum();
        // Pad by char count, not byte count.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        spans.push(Span::styled(hints, text_style));
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
