use crate::ui::contact::intent::ContactIntent;
use crate::ui::contact::state::ContactFormState;
use crate::ui::mvi::Reducer;

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactIntent::Input(ch) => {
                // Field edits while a submission is in flight are dropped;
                // the snapshot already taken must match what gets reset.
                if state.busy {
                    return state;
                }
                let mut state = state;
                state.field_mut(state.focused).push(ch);
                state
            }
            ContactIntent::Backspace => {
                if state.busy {
                    return state;
                }
                let mut state = state;
                state.field_mut(state.focused).pop();
                state
            }
            ContactIntent::FocusNext => ContactFormState {
                focused: state.focused.next(),
                ..state
            },
            ContactIntent::FocusPrev => ContactFormState {
                focused: state.focused.prev(),
                ..state
            },
            ContactIntent::SubmitStarted => {
                if state.busy {
                    return state;
                }
                ContactFormState {
                    busy: true,
                    result: None,
                    ..state
                }
            }
            ContactIntent::SubmitFinished(result) => {
                if result.success {
                    // Confirmed success is the only path that clears the form.
                    ContactFormState {
                        busy: false,
                        result: Some(result),
                        focused: state.focused,
                        ..ContactFormState::default()
                    }
                } else {
                    ContactFormState {
                        busy: false,
                        result: Some(result),
                        ..state
                    }
                }
            }
            ContactIntent::ClearResult => ContactFormState {
                result: None,
                ..state
            },
        }
    }
}
