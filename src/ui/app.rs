use crate::ui::eval::{EvalDisplayState, EvalIntent, EvalReducer};
use crate::ui::mvi::Reducer;
use crate::ui::placeholder::pick_example;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Current text of the input field. Kept after submission so the user
    /// can tweak and resubmit.
    input: String,
    /// Example expression shown dimmed while the input is empty.
    placeholder: &'static str,
    /// Evaluation display state (MVI pattern).
    display: EvalDisplayState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            placeholder: pick_example(),
            display: EvalDisplayState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn display(&self) -> &EvalDisplayState {
        &self.display
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Apply an evaluation intent to the display state.
    pub fn apply(&mut self, intent: EvalIntent) {
        dispatch_mvi!(self, display, EvalReducer, intent);
    }

    /// Trigger a submission with the current input.
    ///
    /// Returns the trimmed expression when a network call should be made.
    /// Empty or whitespace-only input transitions straight to the
    /// validation error and returns `None` — no request is issued.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        self.apply(EvalIntent::Submit {
            expression: trimmed.clone(),
        });
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::eval::EMPTY_INPUT_MESSAGE;

    #[test]
    fn submit_trims_input_before_sending() {
        let mut app = App::new();
        for ch in "  3 + 4  ".chars() {
            app.push_char(ch);
        }
        assert_eq!(app.submit(), Some("3 + 4".to_string()));
        assert!(app.display().is_loading());
    }

    #[test]
    fn submit_with_whitespace_only_never_requests() {
        let mut app = App::new();
        for ch in "   \t ".chars() {
            app.push_char(ch);
        }
        assert_eq!(app.submit(), None);
        assert_eq!(
            app.display(),
            &EvalDisplayState::Error(EMPTY_INPUT_MESSAGE.to_string())
        );
    }

    #[test]
    fn input_survives_submission() {
        let mut app = App::new();
        app.push_char('7');
        app.submit();
        assert_eq!(app.input(), "7");
    }
}
