use crate::ui::eval::intent::EvalIntent;
use crate::ui::eval::state::{EvalDisplayState, EMPTY_INPUT_MESSAGE};
use crate::ui::mvi::Reducer;

pub struct EvalReducer;

impl Reducer for EvalReducer {
    type State = EvalDisplayState;
    type Intent = EvalIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EvalIntent::Submit { expression } => {
                if expression.trim().is_empty() {
                    EvalDisplayState::Error(EMPTY_INPUT_MESSAGE.to_string())
                } else {
                    EvalDisplayState::Loading
                }
            }
            // Responses overwrite whatever is displayed, regardless of the
            // current state. Overlapping submissions are independent and
            // the last response to arrive wins; stale-response tracking is
            // deliberately not done here.
            EvalIntent::Succeeded { evaluation } => EvalDisplayState::Success(evaluation),
            EvalIntent::Failed { message } => EvalDisplayState::Error(message),
        }
    }
}
