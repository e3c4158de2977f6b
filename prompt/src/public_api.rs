// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Stdout;

use crate::{CrosstermKeyPressReader, CrosstermSurface, KeyPressReader,
            OptionDescriptor, OptionListController, PromptError, StyleSheet,
            TerminalSurface, TextInputController, ValidationOutcome, check_option_count,
            ok, render_group_end, render_group_start, render_group_update,
            return_if_not_interactive_terminal};

/// A [`PromptSession`] that draws on `stdout` and reads key presses from the terminal.
pub type TerminalPromptSession =
    PromptSession<CrosstermSurface<Stdout>, CrosstermKeyPressReader>;

/// Runs prompts, one after the other, on a terminal. A session owns the surface and the
/// key press reader for as long as it lives, and only one prompt runs at a time.
///
/// Raw mode is turned on right before each prompt starts, and turned off right after it
/// returns, even when it returns an error.
#[derive(Debug)]
pub struct PromptSession<S: TerminalSurface, R: KeyPressReader> {
    pub surface: S,
    pub reader: R,
    pub style: StyleSheet,
}

impl TerminalPromptSession {
    /// # Errors
    ///
    /// Returns [`PromptError::NotInteractiveTerminal`] if `stdin` or `stdout` is not a
    /// TTY.
    pub fn try_new_for_terminal(style: StyleSheet) -> miette::Result<Self> {
        return_if_not_interactive_terminal!(Err(
            PromptError::NotInteractiveTerminal.into()
        ));
        ok!(PromptSession::new(
            CrosstermSurface::default(),
            CrosstermKeyPressReader,
            style
        ))
    }
}

impl<S: TerminalSurface, R: KeyPressReader> PromptSession<S, R> {
    pub fn new(surface: S, reader: R, style: StyleSheet) -> Self {
        Self {
            surface,
            reader,
            style,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn start_group(&mut self, title: &str) -> miette::Result<()> {
        self.with_raw_mode(|surface, _, style| render_group_start(surface, &style, title))
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn group_update(&mut self, title: &str) -> miette::Result<()> {
        self.with_raw_mode(|surface, _, style| render_group_update(surface, &style, title))
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn end_group(&mut self, title: &str) -> miette::Result<()> {
        self.with_raw_mode(|surface, _, style| render_group_end(surface, &style, title))
    }

    /// See [`TextInputController::run`].
    ///
    /// # Errors
    ///
    /// See [`TextInputController::run`].
    pub fn text_input(
        &mut self,
        question: &str,
        placeholder: Option<&str>,
        secure: bool,
        validator: impl Fn(&str) -> ValidationOutcome,
    ) -> miette::Result<String> {
        tracing::debug!(message = "text input start", question = %question, secure = %secure);
        let value = self.with_raw_mode(|surface, reader, style| {
            TextInputController::new(surface, reader, style).run(
                question,
                placeholder,
                secure,
                validator,
            )
        })?;
        tracing::debug!(message = "text input done", question = %question);
        ok!(value)
    }

    /// See [`OptionListController::run`]. There must be at least 2 options, this is
    /// checked before the terminal is touched.
    ///
    /// # Errors
    ///
    /// See [`OptionListController::run`].
    pub fn select_option<T>(
        &mut self,
        question: &str,
        options: Vec<OptionDescriptor<T>>,
    ) -> miette::Result<T> {
        check_option_count(options.len())?;
        tracing::debug!(
            message = "select option start",
            question = %question,
            option_count = %options.len()
        );
        let value = self.with_raw_mode(|surface, reader, style| {
            OptionListController::new(surface, reader, style).run(question, options)
        })?;
        tracing::debug!(message = "select option done", question = %question);
        ok!(value)
    }

    fn with_raw_mode<T>(
        &mut self,
        run: impl FnOnce(&mut S, &mut R, StyleSheet) -> miette::Result<T>,
    ) -> miette::Result<T> {
        self.surface.set_raw_mode(true)?;
        let result = run(&mut self.surface, &mut self.reader, self.style);
        let restored = self.surface.set_raw_mode(false);
        let value = result?;
        restored?;
        ok!(value)
    }
}

/// Draw the start of a prompt group on the terminal.
///
/// # Errors
///
/// Returns [`PromptError::NotInteractiveTerminal`] if there is no TTY, or an error if
/// the terminal can't be written to.
pub fn start_group(title: &str) -> miette::Result<()> {
    TerminalPromptSession::try_new_for_terminal(StyleSheet::default())?.start_group(title)
}

/// # Errors
///
/// Returns [`PromptError::NotInteractiveTerminal`] if there is no TTY, or an error if
/// the terminal can't be written to.
pub fn group_update(title: &str) -> miette::Result<()> {
    TerminalPromptSession::try_new_for_terminal(StyleSheet::default())?
        .group_update(title)
}

/// # Errors
///
/// Returns [`PromptError::NotInteractiveTerminal`] if there is no TTY, or an error if
/// the terminal can't be written to.
pub fn end_group(title: &str) -> miette::Result<()> {
    TerminalPromptSession::try_new_for_terminal(StyleSheet::default())?.end_group(title)
}

/// Ask a question on the terminal and block until the user submits an answer that
/// `validator` accepts.
///
/// # Errors
///
/// - [`PromptError::NotInteractiveTerminal`] if there is no TTY.
/// - [`PromptError::Interrupted`] if the user presses `Ctrl+C`.
/// - Any terminal I/O error.
pub fn text_input(
    question: &str,
    placeholder: Option<&str>,
    secure: bool,
    validator: impl Fn(&str) -> ValidationOutcome,
) -> miette::Result<String> {
    TerminalPromptSession::try_new_for_terminal(StyleSheet::default())?.text_input(
        question,
        placeholder,
        secure,
        validator,
    )
}

/// Show a list of options on the terminal and block until the user picks one.
///
/// # Errors
///
/// - [`PromptError::CallerContractViolation`] if there are fewer than 2 options. This
///   is checked first, before anything else.
/// - [`PromptError::NotInteractiveTerminal`] if there is no TTY.
/// - [`PromptError::Interrupted`] if the user presses `Ctrl+C`.
/// - Any terminal I/O error.
pub fn select_option<T>(
    question: &str,
    options: Vec<OptionDescriptor<T>>,
) -> miette::Result<T> {
    check_option_count(options.len())?;
    TerminalPromptSession::try_new_for_terminal(StyleSheet::default())?
        .select_option(question, options)
}
