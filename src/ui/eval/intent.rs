use crate::client::Evaluation;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EvalIntent {
    /// User triggered a submission (Enter or the calculate control).
    /// Carries the raw input text; the reducer trims and validates it.
    Submit { expression: String },
    /// The evaluator answered with a result.
    Succeeded { evaluation: Evaluation },
    /// The round trip failed; carries the user-facing message.
    Failed { message: String },
}

impl Intent for EvalIntent {}
