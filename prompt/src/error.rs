// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Everything that can stop a prompt from returning a value.
///
/// A validation rejection is *not* in this list. The text input prompt handles it in
/// place by showing a warning banner and letting the user keep editing.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum PromptError {
    /// The caller broke a precondition, eg: fewer than 2 options were passed to
    /// [`crate::select_option()`]. Nothing has been rendered when this is returned.
    #[error("Caller contract violation: {message}")]
    #[diagnostic(
        code(r3bl_prompt::caller_contract_violation),
        help("This is a bug in the calling code, it is never retried")
    )]
    CallerContractViolation { message: String },

    /// The key press source ran dry before the prompt was submitted.
    #[error("No more key presses are available")]
    #[diagnostic(code(r3bl_prompt::input_stream_closed))]
    InputStreamClosed,

    /// The user pressed `Ctrl+C`.
    #[error("Prompt interrupted")]
    #[diagnostic(code(r3bl_prompt::interrupted))]
    Interrupted,

    #[error("Prompts need an interactive terminal")]
    #[diagnostic(
        code(r3bl_prompt::not_interactive_terminal),
        help("stdin is not a TTY. This happens when input is piped in, or in CI")
    )]
    NotInteractiveTerminal,

    #[error("Terminal I/O failed")]
    #[diagnostic(code(r3bl_prompt::terminal))]
    Terminal(#[from] std::io::Error),
}

impl PromptError {
    pub fn caller_contract_violation(message: impl Into<String>) -> Self {
        Self::CallerContractViolation {
            message: message.into(),
        }
    }
}

/// Returns the [`PromptError`] inside a [`miette::Report`], if there is one.
#[must_use]
pub fn as_prompt_error(report: &miette::Report) -> Option<&PromptError> {
    report.downcast_ref::<PromptError>()
}
