use crate::ui::focus::intent::FocusIntent;
use crate::ui::focus::state::FocusState;
use crate::ui::mvi::Reducer;

pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusState;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FocusIntent::ScreenChanged { links: 0 } => FocusState::None,
            FocusIntent::ScreenChanged { links } => FocusState::On { index: 0, links },
            FocusIntent::MoveUp => match state {
                FocusState::On { index, links } => {
                    let index = if index == 0 { links.saturating_sub(1) } else { index - 1 };
                    FocusState::On { index, links }
                }
                other => other,
            },
            FocusIntent::MoveDown => match state {
                FocusState::On { index, links } => {
                    let index = if index + 1 >= links { 0 } else { index + 1 };
                    FocusState::On { index, links }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_without_links_drops_focus() {
        let state = FocusReducer::reduce(
            FocusState::On { index: 2, links: 3 },
            FocusIntent::ScreenChanged { links: 0 },
        );
        assert_eq!(state, FocusState::None);
    }

    #[test]
    fn move_on_none_is_noop() {
        assert_eq!(
            FocusReducer::reduce(FocusState::None, FocusIntent::MoveDown),
            FocusState::None
        );
    }
}
