// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What a validator says about the text input buffer when the user presses `Enter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// The message is shown next to the closing glyph of the frame.
    Invalid(String),
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool { matches!(self, ValidationOutcome::Valid) }
}

/// Whether the failure banner of a text input is on screen.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ValidationState {
    #[default]
    Clean,
    ShowingFailure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationEvent {
    /// A key press that edits the buffer (a printable char or delete).
    Keystroke,
    /// `Enter` was pressed and the validator accepted the buffer.
    SubmitAccepted,
    /// `Enter` was pressed and the validator rejected the buffer w/ this message.
    SubmitRejected(String),
}

/// What has to be painted as a result of a [`ValidationEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationAction {
    /// Show the warning banner w/ this message. A banner that is already showing is
    /// replaced.
    PaintFailure(String),
    /// Put the frame back into its active colors and erase the message.
    RevertFailure,
}

impl ValidationState {
    /// Pure transition function. The banner is reverted at most once per failure.
    #[must_use]
    pub fn apply(self, event: ValidationEvent) -> (ValidationState, Option<ValidationAction>) {
        use ValidationEvent::{Keystroke, SubmitAccepted, SubmitRejected};
        use ValidationState::{Clean, ShowingFailure};

        match (self, event) {
            (_, SubmitRejected(message)) => {
                (ShowingFailure, Some(ValidationAction::PaintFailure(message)))
            }
            (ShowingFailure, Keystroke | SubmitAccepted) => {
                (Clean, Some(ValidationAction::RevertFailure))
            }
            (Clean, Keystroke | SubmitAccepted) => (Clean, None),
        }
    }
}

/// Ready made validators, for use w/ [`crate::text_input()`].
pub mod validators {
    use super::ValidationOutcome;

    /// Valid when the input has something other than whitespace in it.
    pub fn not_blank(message: impl Into<String>) -> impl Fn(&str) -> ValidationOutcome {
        let message = message.into();
        move |input| match input.trim().is_empty() {
            true => ValidationOutcome::Invalid(message.clone()),
            false => ValidationOutcome::Valid,
        }
    }

    /// Valid when the input, w/ leading and trailing whitespace removed, has at least
    /// `min` chars.
    pub fn min_length(
        min: usize,
        message: impl Into<String>,
    ) -> impl Fn(&str) -> ValidationOutcome {
        let message = message.into();
        move |input| match input.trim().chars().count() >= min {
            true => ValidationOutcome::Valid,
            false => ValidationOutcome::Invalid(message.clone()),
        }
    }

    #[must_use]
    pub fn always_valid(_input: &str) -> ValidationOutcome { ValidationOutcome::Valid }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(ValidationState::Clean, ValidationEvent::Keystroke,
        ValidationState::Clean, None ; "clean keystroke")]
    #[test_case(ValidationState::ShowingFailure, ValidationEvent::Keystroke,
        ValidationState::Clean, Some(ValidationAction::RevertFailure) ; "failure keystroke")]
    #[test_case(ValidationState::Clean, ValidationEvent::SubmitRejected("no".into()),
        ValidationState::ShowingFailure, Some(ValidationAction::PaintFailure("no".into())) ; "clean rejected")]
    #[test_case(ValidationState::ShowingFailure, ValidationEvent::SubmitRejected("again".into()),
        ValidationState::ShowingFailure, Some(ValidationAction::PaintFailure("again".into())) ; "failure rejected")]
    #[test_case(ValidationState::ShowingFailure, ValidationEvent::SubmitAccepted,
        ValidationState::Clean, Some(ValidationAction::RevertFailure) ; "failure accepted")]
    #[test_case(ValidationState::Clean, ValidationEvent::SubmitAccepted,
        ValidationState::Clean, None ; "clean accepted")]
    fn test_transition(
        state: ValidationState,
        event: ValidationEvent,
        expected_state: ValidationState,
        expected_action: Option<ValidationAction>,
    ) {
        assert_eq2!(state.apply(event), (expected_state, expected_action));
    }

    #[test]
    fn test_revert_happens_once_per_failure() {
        let (state, _) = ValidationState::Clean
            .apply(ValidationEvent::SubmitRejected("too short".into()));
        let (state, first) = state.apply(ValidationEvent::Keystroke);
        let (_, second) = state.apply(ValidationEvent::Keystroke);
        assert_eq2!(first, Some(ValidationAction::RevertFailure));
        assert_eq2!(second, None);
    }

    #[test_case("", false ; "empty")]
    #[test_case("   ", false ; "whitespace")]
    #[test_case(" a ", true ; "something")]
    fn test_not_blank(input: &str, is_valid: bool) {
        let validator = validators::not_blank("Please enter something");
        assert_eq2!(validator(input).is_valid(), is_valid);
    }

    #[test]
    fn test_min_length() {
        let validator =
            validators::min_length(8, "Passwords should be at least 8 characters long");
        assert_eq2!(
            validator("short"),
            ValidationOutcome::Invalid(
                "Passwords should be at least 8 characters long".into()
            )
        );
        assert_eq2!(validator("shortabc"), ValidationOutcome::Valid);
        // Counted in chars, not bytes.
        assert_eq2!(validator("ünïcödé"), ValidationOutcome::Invalid(
            "Passwords should be at least 8 characters long".into()
        ));
    }

    #[test]
    fn test_always_valid() {
        assert!(validators::always_valid("").is_valid());
    }
}
