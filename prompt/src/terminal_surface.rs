// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          io::{Stdout, Write, stdout}};

use crossterm::{cursor::{Hide, MoveTo, MoveToPreviousLine, Show},
                style::Print,
                terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode}};

use crate::{PromptError, execute_commands, ok, queue_commands};

/// An absolute position on the screen. Both `row` and `col` are 0 based, which is what
/// `crossterm` uses for [`MoveTo`] and [`crossterm::cursor::position()`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u16,
    pub col: u16,
}

#[must_use]
pub fn pos(row: u16, col: u16) -> Pos { Pos { row, col } }

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[row: {}, col: {}]", self.row, self.col)
    }
}

/// The terminal capabilities that prompts need. The terminal (its cells and the one
/// global cursor) is the only shared mutable resource, and a prompt owns it through a
/// `&mut` handle to an implementation of this trait for as long as it runs.
///
/// Writes may be buffered. [`TerminalSurface::cursor_position`] and
/// [`TerminalSurface::flush`] make sure everything written so far has reached the
/// terminal.
pub trait TerminalSurface {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn move_to(&mut self, pos: Pos) -> miette::Result<()>;

    /// Move up `rows` and to column 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn move_to_previous_line(&mut self, rows: u16) -> miette::Result<()>;

    /// Emit `count` line feeds. Unlike cursor motions this scrolls the screen when the
    /// cursor is on the last row, so it is how rows get reserved for a frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn line_feed(&mut self, count: u16) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to, or doesn't answer the
    /// cursor position query.
    fn cursor_position(&mut self) -> miette::Result<Pos>;

    /// Number of cols on the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size can't be read.
    fn screen_width(&mut self) -> miette::Result<u16>;

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn clear_to_end_of_line(&mut self) -> miette::Result<()>;

    /// Turn the cursor glyph on or off.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn set_cursor_visible(&mut self, visible: bool) -> miette::Result<()>;

    /// In raw mode key presses arrive one at a time and are not echoed, and `Ctrl+C`
    /// does not raise `SIGINT`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode can't be changed.
    fn set_raw_mode(&mut self, enabled: bool) -> miette::Result<()>;

    /// Write (possibly styled) text at the cursor, which then moves to the right of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn write_text(&mut self, text: &str) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn flush(&mut self) -> miette::Result<()>;
}

/// [`TerminalSurface`] backed by `crossterm`. Commands are queued on `writer` and only
/// flushed when the cursor position is read, the cursor visibility changes, or
/// [`TerminalSurface::flush`] is called.
#[derive(Debug)]
pub struct CrosstermSurface<W: Write> {
    pub writer: W,
}

impl Default for CrosstermSurface<Stdout> {
    fn default() -> Self { Self { writer: stdout() } }
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(writer: W) -> Self { Self { writer } }
}

impl<W: Write> TerminalSurface for CrosstermSurface<W> {
    fn move_to(&mut self, pos: Pos) -> miette::Result<()> {
        queue_commands!(&mut self.writer, MoveTo(pos.col, pos.row));
        ok!()
    }

    fn move_to_previous_line(&mut self, rows: u16) -> miette::Result<()> {
        queue_commands!(&mut self.writer, MoveToPreviousLine(rows));
        ok!()
    }

    fn line_feed(&mut self, count: u16) -> miette::Result<()> {
        // In raw mode "\n" is a bare line feed: down one row, same column, scrolling
        // when on the last row.
        let line_feeds = "\n".repeat(usize::from(count));
        queue_commands!(&mut self.writer, Print(line_feeds));
        ok!()
    }

    fn cursor_position(&mut self) -> miette::Result<Pos> {
        self.flush()?;
        let (col, row) = crossterm::cursor::position().map_err(PromptError::from)?;
        ok!(pos(row, col))
    }

    fn screen_width(&mut self) -> miette::Result<u16> {
        let (cols, _rows) = crossterm::terminal::size().map_err(PromptError::from)?;
        ok!(cols)
    }

    fn clear_to_end_of_line(&mut self) -> miette::Result<()> {
        queue_commands!(&mut self.writer, Clear(ClearType::UntilNewLine));
        ok!()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> miette::Result<()> {
        match visible {
            true => execute_commands!(&mut self.writer, Show),
            false => execute_commands!(&mut self.writer, Hide),
        }
        ok!()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> miette::Result<()> {
        match enabled {
            true => enable_raw_mode(),
            false => disable_raw_mode(),
        }
        .map_err(PromptError::from)?;
        ok!()
    }

    fn write_text(&mut self, text: &str) -> miette::Result<()> {
        queue_commands!(&mut self.writer, Print(text));
        ok!()
    }

    fn flush(&mut self) -> miette::Result<()> {
        self.writer.flush().map_err(PromptError::from)?;
        ok!()
    }
}
