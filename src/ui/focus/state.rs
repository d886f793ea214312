use crate::ui::mvi::UiState;

/// Which link of the visible screen is focused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusState {
    /// The screen has nothing to activate.
    #[default]
    None,
    On {
        index: usize,
        links: usize,
    },
}

impl UiState for FocusState {}

impl FocusState {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::On { index, .. } => Some(*index),
        }
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.index() == Some(index)
    }
}
