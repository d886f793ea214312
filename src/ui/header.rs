use crate::nav::{NavigationStack, Screen};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title of the visible screen followed by the breadcrumb of its stack.
pub struct Header<'a> {
    screen: &'a Screen,
    stack: &'a NavigationStack,
}

impl<'a> Header<'a> {
    pub fn new(screen: &'a Screen, stack: &'a NavigationStack) -> Self {
        Self { screen, stack }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.screen.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("root", text_style),
        ];
        for route in self.stack.iter() {
            spans.push(Span::styled(" › ", separator_style));
            spans.push(Span::styled(route.qualified(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
