use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// The visible screen changed and now offers `links` activatable entries.
    ScreenChanged { links: usize },
    MoveUp,
    MoveDown,
}

impl Intent for FocusIntent {}
