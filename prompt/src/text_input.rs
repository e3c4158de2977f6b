// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A 3 row text input prompt.
//!
//! ```text
//! ● What is your email address?      <- header row
//! │ nadia@r3bl.com                   <- field row, editable text starts at col 2
//! └                                  <- closing row
//! ```
//!
//! When the validator rejects the input, the same 3 rows turn into a warning banner,
//! w/ the message next to the closing glyph. No rows are added or removed.
//!
//! ```text
//! ▲ Choose a password
//! │ ◆◆◆◆◆
//! └ Passwords should be at least 8 characters long
//! ```
//!
//! The field is a single row that ends at the right edge of the screen. Once it is full,
//! chars still go into the buffer but are no longer echoed, and deleting them changes
//! nothing on screen until the text fits again.

use unicode_width::UnicodeWidthChar;

use crate::{BRACKET_CLOSE, BRACKET_LINE, CIRCLE_FILLED, DEVELOPMENT_MODE,
            EventLoopResult, FIELD_COL, FrameGeometry, GUIDE_COL, KeyPress,
            KeyPressReader, Pos, PromptError, StyleSheet, TEXT_INPUT_FRAME_HEIGHT,
            TerminalSurface, ValidationAction, ValidationEvent, ValidationOutcome,
            ValidationState, WARNING_SYMBOL, ok, pos, read_next_key_press,
            recolor_leading_glyphs, render_completion, reserve_frame, write_at};

/// Runs a single text input prompt on `surface`, reading key presses from `reader`.
#[derive(Debug)]
pub struct TextInputController<'a, S: TerminalSurface, R: KeyPressReader> {
    pub surface: &'a mut S,
    pub reader: &'a mut R,
    pub style: StyleSheet,
}

/// Everything about the prompt that is running. The geometry and the message anchor are
/// fixed when the frame is drawn.
#[derive(Debug)]
struct TextInputState<'q> {
    placeholder: Option<&'q str>,
    secure: bool,
    buffer: String,
    geometry: FrameGeometry,
    /// Read once when the frame is drawn.
    screen_width: u16,
    /// Where a validation failure message starts: one col to the right of the position
    /// the cursor was at right after the closing glyph was written.
    message_pos: Pos,
    validation_state: ValidationState,
}

impl TextInputState<'_> {
    fn home(&self) -> Pos { pos(self.geometry.closing_row - 1, FIELD_COL) }

    /// What was written to the screen for `ch`.
    fn glyph(&self, ch: char, style: &StyleSheet) -> char {
        match self.secure {
            true => style.mask_glyph,
            false => ch,
        }
    }

    /// The col right after the glyph of every char in the buffer, whether or not they
    /// all fit on the screen.
    fn end_col(&self, style: &StyleSheet) -> usize {
        let width: usize = self
            .buffer
            .chars()
            .map(|ch| display_width(self.glyph(ch, style)))
            .sum();
        usize::from(FIELD_COL) + width
    }

    /// Whether a glyph that ends right before `end_col` is on the screen.
    fn fits(&self, end_col: usize) -> bool { end_col <= usize::from(self.screen_width) }

    /// Where the cursor goes when the user is editing: right after the last glyph, or
    /// the last col of the screen once the field is full.
    fn caret(&self, style: &StyleSheet) -> Pos {
        let last_col = usize::from(self.screen_width.saturating_sub(1));
        pos(self.home().row, to_col(self.end_col(style).min(last_col)))
    }
}

fn display_width(ch: char) -> usize { ch.width().unwrap_or(0) }

fn to_col(col: usize) -> u16 { u16::try_from(col).unwrap_or(u16::MAX) }

impl<'a, S: TerminalSurface, R: KeyPressReader> TextInputController<'a, S, R> {
    pub fn new(surface: &'a mut S, reader: &'a mut R, style: StyleSheet) -> Self {
        Self {
            surface,
            reader,
            style,
        }
    }

    /// Draw the prompt right below the cursor, then block until the user submits input
    /// that `validator` accepts, and return it. The placeholder is never returned.
    ///
    /// When `secure` is true every char is echoed as [`StyleSheet::mask_glyph`].
    ///
    /// # Errors
    ///
    /// - [`PromptError::Interrupted`] if the user presses `Ctrl+C`.
    /// - [`PromptError::InputStreamClosed`] if `reader` runs out of key presses.
    /// - Any terminal I/O error.
    pub fn run(
        &mut self,
        question: &str,
        placeholder: Option<&str>,
        secure: bool,
        validator: impl Fn(&str) -> ValidationOutcome,
    ) -> miette::Result<String> {
        let mut state = self.render_frame(question, placeholder, secure)?;

        loop {
            let key_press = read_next_key_press(self.reader)?;

            DEVELOPMENT_MODE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "text input key press",
                    key_press = ?key_press,
                    buffer_len = %state.buffer.chars().count()
                );
            });

            let result = match key_press {
                KeyPress::Char(ch) => {
                    self.handle_validation_event(&mut state, ValidationEvent::Keystroke)?;
                    self.insert_char(&mut state, ch)?;
                    EventLoopResult::Continue
                }
                KeyPress::Delete => {
                    self.handle_validation_event(&mut state, ValidationEvent::Keystroke)?;
                    self.delete_char(&mut state)?;
                    EventLoopResult::Continue
                }
                KeyPress::Enter => self.submit(&mut state, &validator)?,
                KeyPress::Interrupt => {
                    self.abort(&state)?;
                    return Err(PromptError::Interrupted.into());
                }
                KeyPress::Up | KeyPress::Down | KeyPress::Noop => EventLoopResult::Continue,
            };

            if let EventLoopResult::ExitWithResult(value) = result {
                render_completion(self.surface, &self.style, state.geometry, question)?;
                return ok!(value);
            }
        }
    }

    fn render_frame<'q>(
        &mut self,
        question: &str,
        placeholder: Option<&'q str>,
        secure: bool,
    ) -> miette::Result<TextInputState<'q>> {
        let geometry = reserve_frame(self.surface, TEXT_INPUT_FRAME_HEIGHT)?;

        let header = format!("{} {question}", self.style.active(CIRCLE_FILLED));
        write_at(self.surface, pos(geometry.header_row, GUIDE_COL), &header)?;
        recolor_leading_glyphs(
            self.surface,
            geometry.header_row,
            geometry.closing_row,
            &self.style.active(BRACKET_LINE),
            &self.style.active(BRACKET_CLOSE),
        )?;
        let closing_anchor = self.surface.cursor_position()?;
        let screen_width = self.surface.screen_width()?;

        let state = TextInputState {
            placeholder,
            secure,
            buffer: String::new(),
            geometry,
            screen_width,
            message_pos: pos(closing_anchor.row, closing_anchor.col + 1),
            validation_state: ValidationState::Clean,
        };

        self.show_placeholder(&state)?;
        self.surface.set_cursor_visible(true)?;
        self.surface.flush()?;

        ok!(state)
    }

    /// Write the placeholder at the home cell (if there is one), and leave the cursor at
    /// the home cell.
    fn show_placeholder(&mut self, state: &TextInputState<'_>) -> miette::Result<()> {
        if let Some(placeholder) = state.placeholder {
            write_at(self.surface, state.home(), &self.style.placeholder(placeholder))?;
        }
        self.surface.move_to(state.home())?;
        ok!()
    }

    fn insert_char(&mut self, state: &mut TextInputState<'_>, ch: char) -> miette::Result<()> {
        if state.buffer.is_empty() && state.placeholder.is_some() {
            self.surface.move_to(state.home())?;
            self.surface.clear_to_end_of_line()?;
        }

        let glyph = state.glyph(ch, &self.style);
        let start_col = state.end_col(&self.style);
        if state.fits(start_col + display_width(glyph)) {
            let at = pos(state.home().row, to_col(start_col));
            write_at(self.surface, at, &glyph.to_string())?;
        }
        state.buffer.push(ch);

        self.surface.flush()?;
        ok!()
    }

    fn delete_char(&mut self, state: &mut TextInputState<'_>) -> miette::Result<()> {
        if let Some(ch) = state.buffer.pop() {
            let start_col = state.end_col(&self.style);
            let glyph = state.glyph(ch, &self.style);
            if state.fits(start_col + display_width(glyph)) {
                self.surface.move_to(pos(state.home().row, to_col(start_col)))?;
                self.surface.clear_to_end_of_line()?;
            }
        }

        if state.buffer.is_empty() {
            self.show_placeholder(state)?;
        }

        self.surface.flush()?;
        ok!()
    }

    fn submit(
        &mut self,
        state: &mut TextInputState<'_>,
        validator: &impl Fn(&str) -> ValidationOutcome,
    ) -> miette::Result<EventLoopResult<String>> {
        match validator(&state.buffer) {
            ValidationOutcome::Valid => {
                self.handle_validation_event(state, ValidationEvent::SubmitAccepted)?;
                ok!(EventLoopResult::ExitWithResult(state.buffer.clone()))
            }
            ValidationOutcome::Invalid(message) => {
                tracing::debug!(message = "input rejected", reason = %message);
                self.handle_validation_event(
                    state,
                    ValidationEvent::SubmitRejected(message),
                )?;
                ok!(EventLoopResult::Continue)
            }
        }
    }

    fn handle_validation_event(
        &mut self,
        state: &mut TextInputState<'_>,
        event: ValidationEvent,
    ) -> miette::Result<()> {
        let (next_state, action) = state.validation_state.apply(event);
        state.validation_state = next_state;
        match action {
            Some(ValidationAction::PaintFailure(message)) => {
                self.paint_failure(state, &message)
            }
            Some(ValidationAction::RevertFailure) => self.revert_failure(state),
            None => ok!(),
        }
    }

    /// Turn the frame into a warning banner. The cursor goes back to where the user was
    /// typing.
    fn paint_failure(
        &mut self,
        state: &TextInputState<'_>,
        message: &str,
    ) -> miette::Result<()> {
        self.surface.set_cursor_visible(false)?;

        let geometry = state.geometry;
        write_at(
            self.surface,
            pos(geometry.header_row, GUIDE_COL),
            &self.style.warning(WARNING_SYMBOL),
        )?;
        recolor_leading_glyphs(
            self.surface,
            geometry.header_row,
            geometry.closing_row,
            &self.style.warning(BRACKET_LINE),
            &self.style.warning(BRACKET_CLOSE),
        )?;

        // Wipe the message of a previous failure, it might be longer.
        self.surface.move_to(state.message_pos)?;
        self.surface.clear_to_end_of_line()?;
        self.surface.write_text(&self.style.warning(message))?;

        self.surface.move_to(state.caret(&self.style))?;
        self.surface.set_cursor_visible(true)?;
        ok!()
    }

    fn revert_failure(&mut self, state: &TextInputState<'_>) -> miette::Result<()> {
        self.surface.set_cursor_visible(false)?;

        let geometry = state.geometry;
        write_at(
            self.surface,
            pos(geometry.header_row, GUIDE_COL),
            &self.style.active(CIRCLE_FILLED),
        )?;
        recolor_leading_glyphs(
            self.surface,
            geometry.header_row,
            geometry.closing_row,
            &self.style.active(BRACKET_LINE),
            &self.style.active(BRACKET_CLOSE),
        )?;
        self.surface.move_to(state.message_pos)?;
        self.surface.clear_to_end_of_line()?;

        self.surface.move_to(state.caret(&self.style))?;
        self.surface.set_cursor_visible(true)?;
        ok!()
    }

    /// Leave the frame as is, and put the cursor on the line below it.
    fn abort(&mut self, state: &TextInputState<'_>) -> miette::Result<()> {
        self.surface.move_to(pos(state.geometry.closing_row, 0))?;
        self.surface.line_feed(1)?;
        self.surface.set_cursor_visible(true)?;
        ok!()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{as_prompt_error, assert_eq2,
                test_fixtures::{RecordingSurface, TestVecKeyPressReader},
                validators};

    const QUESTION: &str = "What is your name?";
    const PLACEHOLDER: &str = "Type your name";

    // The recording surface starts w/ the cursor at the origin, so the frame is drawn on
    // rows 1 to 3.
    const HEADER_ROW: u16 = 1;
    const FIELD_ROW: u16 = 2;
    const CLOSING_ROW: u16 = 3;

    fn run_text_input(
        surface: &mut RecordingSurface,
        key_presses: impl IntoIterator<Item = KeyPress>,
        placeholder: Option<&str>,
        secure: bool,
        validator: impl Fn(&str) -> ValidationOutcome,
    ) -> miette::Result<String> {
        let mut reader = TestVecKeyPressReader::new(key_presses);
        TextInputController::new(surface, &mut reader, StyleSheet::default())
            .run(QUESTION, placeholder, secure, validator)
    }

    fn typing(text: &str) -> Vec<KeyPress> {
        TestVecKeyPressReader::typing(text).collect()
    }

    fn is_input_stream_closed(result: &miette::Result<String>) -> bool {
        matches!(
            result.as_ref().map_err(as_prompt_error),
            Err(Some(PromptError::InputStreamClosed))
        )
    }

    #[test]
    fn test_initial_frame() {
        let mut surface = RecordingSurface::new();
        let result = run_text_input(&mut surface, Vec::new(), Some(PLACEHOLDER), false, |_| {
            ValidationOutcome::Valid
        });

        assert!(is_input_stream_closed(&result));
        assert_eq2!(surface.row_text(HEADER_ROW), "● What is your name?");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ Type your name");
        assert_eq2!(surface.row_text(CLOSING_ROW), "└");
        // Cursor is at the home cell, on top of the placeholder.
        assert_eq2!(surface.cursor, pos(FIELD_ROW, FIELD_COL));
        assert!(surface.is_cursor_visible);
    }

    #[test]
    fn test_typed_chars_are_returned() {
        let mut surface = RecordingSurface::new();
        let mut key_presses = typing("Nadia");
        key_presses.push(KeyPress::Enter);

        let result = run_text_input(
            &mut surface,
            key_presses,
            Some(PLACEHOLDER),
            false,
            validators::always_valid,
        )
        .unwrap();

        assert_eq2!(result, "Nadia");
        assert_eq2!(surface.row_text(HEADER_ROW), "√ What is your name?");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ Nadia");
        assert_eq2!(surface.row_text(CLOSING_ROW), "│");
        assert_eq2!(surface.cursor, pos(CLOSING_ROW, 0));
    }

    #[test]
    fn test_each_char_writes_one_glyph() {
        let mut surface = RecordingSurface::new();
        let _ = run_text_input(&mut surface, typing("ab"), None, false, |_| {
            ValidationOutcome::Valid
        });

        assert_eq2!(surface.writes_at(pos(FIELD_ROW, FIELD_COL)), vec!["a"]);
        assert_eq2!(surface.writes_at(pos(FIELD_ROW, FIELD_COL + 1)), vec!["b"]);
    }

    #[test]
    fn test_placeholder_is_never_returned() {
        let mut surface = RecordingSurface::new();
        let result = run_text_input(
            &mut surface,
            [KeyPress::Enter],
            Some(PLACEHOLDER),
            false,
            validators::always_valid,
        )
        .unwrap();
        assert_eq2!(result, "");
    }

    #[test]
    fn test_delete_on_empty_buffer_changes_nothing() {
        let mut surface = RecordingSurface::new();
        let key_presses = [
            KeyPress::Delete,
            KeyPress::Char('a'),
            KeyPress::Delete,
            KeyPress::Delete,
            KeyPress::Char('b'),
            KeyPress::Enter,
        ];
        let result = run_text_input(
            &mut surface,
            key_presses,
            Some(PLACEHOLDER),
            false,
            validators::always_valid,
        )
        .unwrap();
        assert_eq2!(result, "b");
    }

    #[test]
    fn test_delete_erases_last_glyph() {
        let mut surface = RecordingSurface::new();
        let mut key_presses = typing("abc");
        key_presses.push(KeyPress::Delete);
        let _ = run_text_input(&mut surface, key_presses, None, false, |_| {
            ValidationOutcome::Valid
        });

        assert_eq2!(surface.row_text(FIELD_ROW), "│ ab");
        assert_eq2!(surface.cursor, pos(FIELD_ROW, FIELD_COL + 2));
    }

    #[test]
    fn test_delete_erases_wide_glyph() {
        let mut surface = RecordingSurface::new();
        let key_presses = [KeyPress::Char('a'), KeyPress::Char('🦀'), KeyPress::Delete];
        let _ = run_text_input(&mut surface, key_presses, None, false, |_| {
            ValidationOutcome::Valid
        });

        assert_eq2!(surface.row_text(FIELD_ROW), "│ a");
        assert_eq2!(surface.cursor, pos(FIELD_ROW, FIELD_COL + 1));
    }

    #[test]
    fn test_secure_input_never_writes_typed_chars() {
        let mut surface = RecordingSurface::new();
        let mut key_presses = typing("hunter42");
        key_presses.push(KeyPress::Enter);

        let result = run_text_input(
            &mut surface,
            key_presses,
            None,
            true,
            validators::always_valid,
        )
        .unwrap();

        assert_eq2!(result, "hunter42");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ ◆◆◆◆◆◆◆◆");
        for (at, text) in surface.writes() {
            if at.row == FIELD_ROW && at.col >= FIELD_COL {
                assert_eq2!(text, "◆");
            }
        }
    }

    #[test]
    fn test_secure_input_uses_stylesheet_mask() {
        let mut surface = RecordingSurface::new();
        let mut reader = TestVecKeyPressReader::new(typing("pw"));
        let _ = TextInputController::new(
            &mut surface,
            &mut reader,
            StyleSheet::muted_style(),
        )
        .run(QUESTION, None, true, validators::always_valid);
        assert_eq2!(surface.row_text(FIELD_ROW), "│ **");
    }

    /// For every prefix of the key presses, the placeholder is on screen iff nothing has
    /// been typed.
    #[test]
    fn test_placeholder_shown_iff_buffer_empty() {
        use KeyPress::{Char, Delete};
        let key_presses = [
            Char('x'),
            Delete,
            Delete,
            Char('y'),
            Char('z'),
            Delete,
            Delete,
            Char('🦀'),
            Delete,
        ];
        let buffer_len_after = [1, 0, 0, 1, 2, 1, 0, 1, 0];

        for (count, buffer_len) in buffer_len_after.iter().enumerate() {
            let mut surface = RecordingSurface::new();
            let prefix = key_presses[..=count].to_vec();
            let _ = run_text_input(&mut surface, prefix, Some(PLACEHOLDER), false, |_| {
                ValidationOutcome::Valid
            });

            let field = surface.text_from(pos(FIELD_ROW, FIELD_COL));
            match buffer_len {
                0 => assert_eq2!(field, PLACEHOLDER),
                _ => assert!(!field.contains("Type")),
            }
        }
    }

    #[test]
    fn test_rejected_input_paints_one_overlay_then_accepts() {
        let mut surface = RecordingSurface::new();
        let mut key_presses = typing("short");
        key_presses.push(KeyPress::Enter);
        key_presses.extend(typing("abc"));
        key_presses.push(KeyPress::Enter);

        let result = run_text_input(
            &mut surface,
            key_presses,
            None,
            true,
            |it: &str| match it.chars().count() >= 8 {
                true => ValidationOutcome::Valid,
                false => ValidationOutcome::Invalid("Too short".into()),
            },
        )
        .unwrap();

        assert_eq2!(result, "shortabc");
        let warning_count = surface
            .writes_at(pos(HEADER_ROW, GUIDE_COL))
            .iter()
            .filter(|it| it.contains(WARNING_SYMBOL))
            .count();
        assert_eq2!(warning_count, 1);
        assert_eq2!(surface.row_text(HEADER_ROW), "√ What is your name?");
        assert_eq2!(surface.row_text(CLOSING_ROW), "│");
    }

    #[test]
    fn test_failure_overlay() {
        let mut surface = RecordingSurface::new();
        let mut key_presses = typing("short");
        key_presses.push(KeyPress::Enter);

        let result = run_text_input(
            &mut surface,
            key_presses,
            None,
            false,
            validators::min_length(8, "Passwords should be at least 8 characters long"),
        );

        assert!(is_input_stream_closed(&result));
        assert_eq2!(surface.row_text(HEADER_ROW), "▲ What is your name?");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ short");
        assert_eq2!(
            surface.row_text(CLOSING_ROW),
            "└ Passwords should be at least 8 characters long"
        );
        let style = StyleSheet::default();
        assert_eq2!(
            surface.writes_at(pos(FIELD_ROW, GUIDE_COL)).last(),
            Some(&style.warning(BRACKET_LINE).as_str())
        );
        // The buffer is kept, and the cursor is back where the user was typing.
        assert_eq2!(surface.cursor, pos(FIELD_ROW, FIELD_COL + 5));
        assert!(surface.is_cursor_visible);
    }

    #[test]
    fn test_second_failure_replaces_message() {
        let mut surface = RecordingSurface::new();
        let key_presses = [KeyPress::Enter, KeyPress::Enter];
        let attempt = std::cell::Cell::new(0);

        let _ = run_text_input(&mut surface, key_presses, None, false, |_| {
            attempt.set(attempt.get() + 1);
            match attempt.get() {
                1 => ValidationOutcome::Invalid("A much longer first message".into()),
                _ => ValidationOutcome::Invalid("Second".into()),
            }
        });

        assert_eq2!(surface.row_text(CLOSING_ROW), "└ Second");
    }

    #[test]
    fn test_keystroke_reverts_overlay() {
        let mut surface = RecordingSurface::new();
        let mut key_presses = typing("short");
        key_presses.push(KeyPress::Enter);
        key_presses.push(KeyPress::Char('a'));

        let _ = run_text_input(
            &mut surface,
            key_presses,
            None,
            false,
            validators::min_length(8, "Too short"),
        );

        assert_eq2!(surface.row_text(HEADER_ROW), "● What is your name?");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ shorta");
        assert_eq2!(surface.row_text(CLOSING_ROW), "└");
        let style = StyleSheet::default();
        assert_eq2!(
            surface.writes_at(pos(CLOSING_ROW, GUIDE_COL)).last(),
            Some(&style.active(BRACKET_CLOSE).as_str())
        );
        assert_eq2!(surface.cursor, pos(FIELD_ROW, FIELD_COL + 6));
    }

    #[test]
    fn test_revert_happens_once() {
        let mut surface = RecordingSurface::new();
        let key_presses = [KeyPress::Enter, KeyPress::Char('a'), KeyPress::Char('b')];

        let _ = run_text_input(
            &mut surface,
            key_presses,
            None,
            false,
            validators::not_blank("Please enter something"),
        );

        let active_marker = StyleSheet::default().active(CIRCLE_FILLED);
        let marker_count = surface
            .writes_at(pos(HEADER_ROW, GUIDE_COL))
            .iter()
            .filter(|it| **it == active_marker.as_str())
            .count();
        // Only the revert writes the bare marker, the first render writes it w/ the
        // question.
        assert_eq2!(marker_count, 1);
    }

    #[test]
    fn test_delete_on_empty_buffer_reverts_overlay() {
        let mut surface = RecordingSurface::new();
        let key_presses = [KeyPress::Enter, KeyPress::Delete];

        let _ = run_text_input(
            &mut surface,
            key_presses,
            Some(PLACEHOLDER),
            false,
            validators::not_blank("Please enter something"),
        );

        assert_eq2!(surface.row_text(HEADER_ROW), "● What is your name?");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ Type your name");
        assert_eq2!(surface.row_text(CLOSING_ROW), "└");
    }

    #[test]
    fn test_ignored_keys_keep_overlay() {
        let mut surface = RecordingSurface::new();
        let key_presses = [KeyPress::Enter, KeyPress::Up, KeyPress::Noop];

        let _ = run_text_input(
            &mut surface,
            key_presses,
            None,
            false,
            validators::not_blank("Please enter something"),
        );

        assert_eq2!(surface.row_text(HEADER_ROW), "▲ What is your name?");
        assert_eq2!(surface.row_text(CLOSING_ROW), "└ Please enter something");
    }

    #[test]
    fn test_long_input_stops_echoing_at_screen_edge() {
        // Cols 2 to 9 hold the field, that's 8 cells.
        let mut surface = RecordingSurface::new().with_screen_width(10);
        let mut key_presses = typing("abcdefghij");
        key_presses.push(KeyPress::Enter);

        let result = run_text_input(
            &mut surface,
            key_presses,
            None,
            false,
            validators::always_valid,
        )
        .unwrap();

        assert_eq2!(result, "abcdefghij");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ abcdefgh");
        assert!(surface.writes().all(|(at, _)| at.col < 10));
    }

    #[test]
    fn test_delete_past_screen_edge_matches_buffer() {
        let mut surface = RecordingSurface::new().with_screen_width(10);
        // The crab would end on col 11, so it is not echoed, and neither is the `x`.
        let mut key_presses = typing("abcdefg🦀x");
        key_presses.extend([KeyPress::Delete, KeyPress::Delete]);

        let _ = run_text_input(&mut surface, key_presses.clone(), None, false, |_| {
            ValidationOutcome::Valid
        });
        assert_eq2!(surface.row_text(FIELD_ROW), "│ abcdefg");
        assert_eq2!(surface.cursor, pos(FIELD_ROW, 9));

        let mut surface = RecordingSurface::new().with_screen_width(10);
        key_presses.extend([KeyPress::Delete, KeyPress::Enter]);
        let result = run_text_input(
            &mut surface,
            key_presses,
            None,
            false,
            validators::always_valid,
        )
        .unwrap();
        assert_eq2!(result, "abcdef");
        assert_eq2!(surface.row_text(FIELD_ROW), "│ abcdef");
    }

    #[test]
    fn test_failure_on_full_field_keeps_caret_on_screen() {
        let mut surface = RecordingSurface::new().with_screen_width(10);
        let mut key_presses = typing("abcdefghijkl");
        key_presses.push(KeyPress::Enter);

        let _ = run_text_input(&mut surface, key_presses, None, false, |_| {
            ValidationOutcome::Invalid("Nope".into())
        });

        assert_eq2!(surface.row_text(CLOSING_ROW), "└ Nope");
        assert_eq2!(surface.cursor, pos(FIELD_ROW, 9));
    }

    #[test]
    fn test_interrupt() {
        let mut surface = RecordingSurface::new();
        let key_presses = [KeyPress::Char('a'), KeyPress::Interrupt, KeyPress::Enter];

        let result = run_text_input(&mut surface, key_presses, None, false, |_| {
            ValidationOutcome::Valid
        });

        assert!(matches!(
            result.as_ref().map_err(as_prompt_error),
            Err(Some(PromptError::Interrupted))
        ));
        assert_eq2!(surface.cursor, pos(CLOSING_ROW + 1, 0));
    }
}
