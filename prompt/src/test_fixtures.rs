// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fakes for driving prompts without a TTY.
//!
//! - [`TestVecKeyPressReader`] replays a fixed list of key presses, then reports that
//!   the input is closed.
//! - [`RecordingSurface`] records every call made on the [`TerminalSurface`] and models
//!   a grid of cells, so tests can check both *what was done* (the exact sequence of
//!   position reads and writes) and *what a human would see*.
//! - [`TestStringWriter`] captures the raw bytes that [`crate::CrosstermSurface`] emits.
//! - [`TempDir`] is a scratch folder for log files, removed when dropped.

use std::{collections::VecDeque,
          io::{Result, Write},
          path::{Path, PathBuf},
          sync::atomic::{AtomicUsize, Ordering}};

use miette::IntoDiagnostic;
use unicode_width::UnicodeWidthChar;

use crate::{KeyPress, KeyPressReader, Pos, TerminalSurface, ok, pos};

#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    #[must_use]
    pub fn new() -> Self {
        TestStringWriter {
            buffer: String::new(),
        }
    }

    #[must_use]
    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let result = std::str::from_utf8(buf);
        match result {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Unlike a real terminal, this runs out: once every key press has been handed out,
/// [`KeyPressReader::read_key_press`] returns [`None`], which makes a prompt that is
/// still waiting for input return [`crate::PromptError::InputStreamClosed`].
#[derive(Debug, Default)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: VecDeque<KeyPress>,
}

impl TestVecKeyPressReader {
    pub fn new(key_presses: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            key_press_vec: key_presses.into_iter().collect(),
        }
    }

    /// A [`KeyPress::Char`] for every char in `text`.
    pub fn typing(text: &str) -> impl Iterator<Item = KeyPress> + '_ {
        text.chars().map(KeyPress::Char)
    }

    #[must_use]
    pub fn remaining(&self) -> usize { self.key_press_vec.len() }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> miette::Result<Option<KeyPress>> {
        ok!(self.key_press_vec.pop_front())
    }
}

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    MoveTo(Pos),
    MoveToPreviousLine(u16),
    LineFeed(u16),
    /// The position that was handed back to the caller.
    ReadPosition(Pos),
    ReadScreenWidth(u16),
    ClearToEndOfLine,
    CursorVisible(bool),
    RawMode(bool),
    /// `text` is exactly what was written, ANSI escape sequences included.
    Write { at: Pos, text: String },
    Flush,
}

/// Marks the second cell of a double width char.
const WIDE_CHAR_TAIL: char = '\0';

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub cursor: Pos,
    pub is_cursor_visible: bool,
    pub is_raw_mode: bool,
    /// When set, a line feed on the last row scrolls every row up by one, like a real
    /// terminal does.
    pub screen_height: Option<u16>,
    /// Reported by [`TerminalSurface::screen_width`]. Unlimited when not set. Writes past
    /// it are recorded as is, so tests can tell when a prompt runs off the edge.
    pub screen_width: Option<u16>,
    pub ops: Vec<SurfaceOp>,
    cells: Vec<Vec<char>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_cursor_visible: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: Pos) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub fn with_screen_height(mut self, screen_height: u16) -> Self {
        self.screen_height = Some(screen_height);
        self
    }

    #[must_use]
    pub fn with_screen_width(mut self, screen_width: u16) -> Self {
        self.screen_width = Some(screen_width);
        self
    }

    /// What a human would see on `row`, without trailing blanks.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(usize::from(row))
            .map(|cells| {
                cells
                    .iter()
                    .filter(|it| **it != WIDE_CHAR_TAIL)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// What a human would see on `row`, starting at `col`.
    #[must_use]
    pub fn text_from(&self, at: Pos) -> String {
        self.cells
            .get(usize::from(at.row))
            .map(|cells| {
                cells
                    .iter()
                    .skip(usize::from(at.col))
                    .filter(|it| **it != WIDE_CHAR_TAIL)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// Every write, in order, w/ the position it was made at.
    pub fn writes(&self) -> impl Iterator<Item = (Pos, &str)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Write { at, text } => Some((*at, text.as_str())),
            _ => None,
        })
    }

    /// Every write made at exactly `at`.
    #[must_use]
    pub fn writes_at(&self, at: Pos) -> Vec<&str> {
        self.writes()
            .filter(|(it, _)| *it == at)
            .map(|(_, text)| text)
            .collect()
    }

    /// Rows that had anything written on them, in order, w/o duplicates.
    #[must_use]
    pub fn rows_written(&self) -> Vec<u16> {
        let mut rows: Vec<u16> = self.writes().map(|(at, _)| at.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// Forget the recorded ops (not the cells), eg: after the first render.
    pub fn clear_ops(&mut self) { self.ops.clear(); }

    fn row_mut(&mut self, row: u16) -> &mut Vec<char> {
        let row = usize::from(row);
        if self.cells.len() <= row {
            self.cells.resize_with(row + 1, Vec::new);
        }
        &mut self.cells[row]
    }

    fn put_char(&mut self, ch: char) {
        let width = ch.width().unwrap_or(0);
        if width == 0 {
            return;
        }
        let Pos { row, col } = self.cursor;
        let line = self.row_mut(row);
        let col = usize::from(col);
        if line.len() < col + width {
            line.resize(col + width, ' ');
        }
        line[col] = ch;
        if width == 2 {
            line[col + 1] = WIDE_CHAR_TAIL;
        }
        self.cursor.col += u16::try_from(width).unwrap_or(1);
    }

    fn feed_one_line(&mut self) {
        match self.screen_height {
            Some(height) if self.cursor.row + 1 >= height => {
                if !self.cells.is_empty() {
                    self.cells.remove(0);
                }
            }
            _ => self.cursor.row += 1,
        }
    }
}

impl TerminalSurface for RecordingSurface {
    fn move_to(&mut self, pos: Pos) -> miette::Result<()> {
        self.ops.push(SurfaceOp::MoveTo(pos));
        self.cursor = pos;
        ok!()
    }

    fn move_to_previous_line(&mut self, rows: u16) -> miette::Result<()> {
        self.ops.push(SurfaceOp::MoveToPreviousLine(rows));
        self.cursor = pos(self.cursor.row.saturating_sub(rows), 0);
        ok!()
    }

    fn line_feed(&mut self, count: u16) -> miette::Result<()> {
        self.ops.push(SurfaceOp::LineFeed(count));
        for _ in 0..count {
            self.feed_one_line();
        }
        ok!()
    }

    fn cursor_position(&mut self) -> miette::Result<Pos> {
        self.ops.push(SurfaceOp::ReadPosition(self.cursor));
        ok!(self.cursor)
    }

    fn screen_width(&mut self) -> miette::Result<u16> {
        let width = self.screen_width.unwrap_or(u16::MAX);
        self.ops.push(SurfaceOp::ReadScreenWidth(width));
        ok!(width)
    }

    fn clear_to_end_of_line(&mut self) -> miette::Result<()> {
        self.ops.push(SurfaceOp::ClearToEndOfLine);
        let Pos { row, col } = self.cursor;
        self.row_mut(row).truncate(usize::from(col));
        ok!()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> miette::Result<()> {
        self.ops.push(SurfaceOp::CursorVisible(visible));
        self.is_cursor_visible = visible;
        ok!()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> miette::Result<()> {
        self.ops.push(SurfaceOp::RawMode(enabled));
        self.is_raw_mode = enabled;
        ok!()
    }

    fn write_text(&mut self, text: &str) -> miette::Result<()> {
        self.ops.push(SurfaceOp::Write {
            at: self.cursor,
            text: text.to_string(),
        });
        for ch in strip_ansi_escapes::strip_str(text).chars() {
            self.put_char(ch);
        }
        ok!()
    }

    fn flush(&mut self) -> miette::Result<()> {
        self.ops.push(SurfaceOp::Flush);
        ok!()
    }
}

#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

impl Drop for TempDir {
    fn drop(&mut self) { let _ = std::fs::remove_dir_all(&self.inner); }
}

/// Create a new, empty folder under the system temp dir.
///
/// # Errors
///
/// Returns an error if the folder can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let name = format!(
        "r3bl_prompt_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let new_temp_dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&new_temp_dir).into_diagnostic()?;
    ok!(TempDir {
        inner: new_temp_dir,
    })
}

pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}
