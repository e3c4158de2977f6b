// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A single select option list prompt.
//!
//! ```text
//! ● Select your favourite fruit      <- header row
//! │ ○ Apple                          <- first option row
//! │ ● Banana                         <- active row
//! │ ○ Orange
//! └                                  <- closing row
//! ```
//!
//! Moving the active row only repaints the indicator (col 2) and the title (col 4) of
//! the row that lost focus and the row that gained it.

use crate::{BRACKET_CLOSE, BRACKET_LINE, CIRCLE_FILLED, DEVELOPMENT_MODE,
            EventLoopResult, FrameGeometry, GUIDE_COL, INDICATOR_COL, KeyPress,
            KeyPressReader, MIN_OPTION_COUNT, OPTION_LIST_CHROME_HEIGHT,
            OptionDescriptor, PromptError, SelectionState, StyleSheet, TITLE_COL,
            TerminalSurface, ok, pos, read_next_key_press, render_completion,
            reserve_frame, write_at};

/// Runs a single option list prompt on `surface`, reading key presses from `reader`.
#[derive(Debug)]
pub struct OptionListController<'a, S: TerminalSurface, R: KeyPressReader> {
    pub surface: &'a mut S,
    pub reader: &'a mut R,
    pub style: StyleSheet,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl<'a, S: TerminalSurface, R: KeyPressReader> OptionListController<'a, S, R> {
    pub fn new(surface: &'a mut S, reader: &'a mut R, style: StyleSheet) -> Self {
        Self {
            surface,
            reader,
            style,
        }
    }

    /// Draw the list right below the cursor w/ the first option active, then block until
    /// the user presses `Enter`, and return the value of the active option.
    ///
    /// # Errors
    ///
    /// - [`PromptError::CallerContractViolation`] if there are fewer than 2 options.
    ///   Nothing is drawn in this case.
    /// - [`PromptError::Interrupted`] if the user presses `Ctrl+C`.
    /// - [`PromptError::InputStreamClosed`] if `reader` runs out of key presses.
    /// - Any terminal I/O error.
    pub fn run<T>(
        &mut self,
        question: &str,
        options: Vec<OptionDescriptor<T>>,
    ) -> miette::Result<T> {
        check_option_count(options.len())?;

        let (geometry, mut selection_state) = self.render_frame(question, options)?;

        loop {
            let key_press = read_next_key_press(self.reader)?;

            DEVELOPMENT_MODE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "option list key press",
                    key_press = ?key_press,
                    active_row = %selection_state.active_row()
                );
            });

            let result = match key_press {
                KeyPress::Up => {
                    self.move_active_row(&mut selection_state, Direction::Up)?;
                    EventLoopResult::Continue
                }
                KeyPress::Down => {
                    self.move_active_row(&mut selection_state, Direction::Down)?;
                    EventLoopResult::Continue
                }
                KeyPress::Enter => EventLoopResult::ExitWithResult(()),
                KeyPress::Interrupt => {
                    self.abort(geometry)?;
                    return Err(PromptError::Interrupted.into());
                }
                KeyPress::Char(_) | KeyPress::Delete | KeyPress::Noop => {
                    EventLoopResult::Continue
                }
            };

            if let EventLoopResult::ExitWithResult(()) = result {
                break;
            }
        }

        render_completion(self.surface, &self.style, geometry, question)?;

        match selection_state.into_selected_value() {
            Some(value) => ok!(value),
            None => Err(PromptError::caller_contract_violation(
                "the active row has no option",
            )
            .into()),
        }
    }

    fn render_frame<T>(
        &mut self,
        question: &str,
        options: Vec<OptionDescriptor<T>>,
    ) -> miette::Result<(FrameGeometry, SelectionState<T>)> {
        self.surface.set_cursor_visible(false)?;

        let height = options_height(options.len());
        let geometry = reserve_frame(self.surface, height)?;

        let header = format!("{} {question}", self.style.active(CIRCLE_FILLED));
        write_at(self.surface, pos(geometry.header_row, GUIDE_COL), &header)?;

        let Some(selection_state) = SelectionState::new(geometry.header_row, options)
        else {
            return Err(PromptError::caller_contract_violation("no options").into());
        };

        let guide_line = self.style.active(BRACKET_LINE);
        let rows: Vec<u16> = selection_state.options().map(|it| it.row).collect();
        for row in rows {
            write_at(self.surface, pos(row, GUIDE_COL), &guide_line)?;
            self.paint_option_row(&selection_state, row)?;
        }

        write_at(
            self.surface,
            pos(geometry.closing_row, GUIDE_COL),
            &self.style.active(BRACKET_CLOSE),
        )?;
        self.surface.flush()?;

        ok!((geometry, selection_state))
    }

    /// Bounds are checked here, [`SelectionState`] does not clamp. Moving past either
    /// end does nothing.
    fn move_active_row<T>(
        &mut self,
        selection_state: &mut SelectionState<T>,
        direction: Direction,
    ) -> miette::Result<()> {
        let current_row = selection_state.active_row();
        let range = selection_state.range();
        let next_row = match direction {
            Direction::Up if current_row > *range.start() => current_row - 1,
            Direction::Down if current_row < *range.end() => current_row + 1,
            _ => return ok!(),
        };

        selection_state.set_active_row(next_row);
        self.paint_option_row(selection_state, current_row)?;
        self.paint_option_row(selection_state, next_row)?;
        self.surface.flush()?;
        ok!()
    }

    /// Repaint the indicator and the title of the option on `row`. The guide glyph at
    /// col 0 is left alone.
    fn paint_option_row<T>(
        &mut self,
        selection_state: &SelectionState<T>,
        row: u16,
    ) -> miette::Result<()> {
        let Some(option) = selection_state.option_at_row(row) else {
            return ok!();
        };
        let is_active = selection_state.is_active(option);
        write_at(
            self.surface,
            pos(row, INDICATOR_COL),
            &self.style.option_indicator(is_active),
        )?;
        write_at(
            self.surface,
            pos(row, TITLE_COL),
            &self.style.option_title(&option.descriptor.title, is_active),
        )?;
        ok!()
    }

    fn abort(&mut self, geometry: FrameGeometry) -> miette::Result<()> {
        self.surface.move_to(pos(geometry.closing_row, 0))?;
        self.surface.line_feed(1)?;
        self.surface.set_cursor_visible(true)?;
        ok!()
    }
}

/// # Errors
///
/// Returns [`PromptError::CallerContractViolation`] if there are too few options to
/// choose from.
pub fn check_option_count(option_count: usize) -> miette::Result<()> {
    if option_count < MIN_OPTION_COUNT {
        return Err(PromptError::caller_contract_violation(format!(
            "An option list needs at least {MIN_OPTION_COUNT} options, got {option_count}"
        ))
        .into());
    }
    ok!()
}

fn options_height(option_count: usize) -> u16 {
    u16::try_from(option_count)
        .unwrap_or(u16::MAX - OPTION_LIST_CHROME_HEIGHT)
        .saturating_add(OPTION_LIST_CHROME_HEIGHT)
}
