use crate::client::Evaluation;
use crate::ui::mvi::UiState;

/// Static message shown when the user submits empty or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a mathematical expression";

/// The four visual states the display regions can occupy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EvalDisplayState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; both regions show a transient indicator.
    Loading,
    /// The evaluator answered; regions show the result and the trace.
    Success(Evaluation),
    /// Validation, service, transport or unknown failure; both regions
    /// show the message with error styling.
    Error(String),
}

impl UiState for EvalDisplayState {}

impl EvalDisplayState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
