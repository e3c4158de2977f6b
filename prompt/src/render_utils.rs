// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stateless helpers shared by every prompt. Each one is a composition of "move the
//! cursor" and "write text". There is no retry logic, any terminal error is handed back
//! to the caller.

use std::ops::RangeInclusive;

use crate::{BRACKET_LINE, CHECKMARK, GUIDE_COL, Pos, StyleSheet, TerminalSurface, ok, pos};

/// The rows a prompt occupies. Computed once when the prompt starts, and the number of
/// rows never changes while it runs, which is what makes repainting single cells at
/// absolute positions safe.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameGeometry {
    pub header_row: u16,
    pub closing_row: u16,
}

impl FrameGeometry {
    /// `height` includes the header and closing rows, and must be at least 2.
    #[must_use]
    pub fn new(header_row: u16, height: u16) -> Self {
        Self {
            header_row,
            closing_row: header_row + height.max(2) - 1,
        }
    }

    /// Rows between the header and the closing row. Empty when they are adjacent.
    #[must_use]
    pub fn body_rows(&self) -> RangeInclusive<u16> {
        (self.header_row + 1)..=self.closing_row.saturating_sub(1)
    }
}

/// # Errors
///
/// Returns an error if the terminal can't be written to.
pub fn write_at(
    surface: &mut impl TerminalSurface,
    at: Pos,
    text: &str,
) -> miette::Result<()> {
    surface.move_to(at)?;
    surface.write_text(text)?;
    ok!()
}

/// Make room for a frame of `height` rows starting on the line after the cursor, and
/// return where its header goes. Line feeds scroll the screen if the cursor is near the
/// bottom, so the position has to be read back from the terminal afterwards.
///
/// # Errors
///
/// Returns an error if the terminal can't be written to or read from.
pub fn reserve_frame(
    surface: &mut impl TerminalSurface,
    height: u16,
) -> miette::Result<FrameGeometry> {
    let height = height.max(2);
    surface.line_feed(height)?;
    surface.move_to_previous_line(height - 1)?;
    let header = surface.cursor_position()?;
    ok!(FrameGeometry::new(header.row, height))
}

/// Overwrite the leading glyph of every row strictly between `from_row` and `to_row`
/// with `body_text`, and the leading glyph of `to_row` with `closing_text`. `from_row`
/// itself is left alone.
///
/// # Errors
///
/// Returns an error if the terminal can't be written to.
pub fn recolor_leading_glyphs(
    surface: &mut impl TerminalSurface,
    from_row: u16,
    to_row: u16,
    body_text: &str,
    closing_text: &str,
) -> miette::Result<()> {
    let geometry = FrameGeometry {
        header_row: from_row,
        closing_row: to_row,
    };
    for row in geometry.body_rows() {
        write_at(surface, pos(row, GUIDE_COL), body_text)?;
    }
    write_at(surface, pos(to_row, GUIDE_COL), closing_text)?;
    ok!()
}

/// Turn the frame of a prompt that has been answered into its "done" style: a
/// checkmark and the question on the header row, muted guide lines on every other row.
/// Leaves the cursor (visible) at the start of the closing row.
///
/// # Errors
///
/// Returns an error if the terminal can't be written to.
pub fn render_completion(
    surface: &mut impl TerminalSurface,
    style: &StyleSheet,
    geometry: FrameGeometry,
    question: &str,
) -> miette::Result<()> {
    surface.set_cursor_visible(false)?;

    let header = format!("{} {question}", style.success(CHECKMARK));
    write_at(surface, pos(geometry.header_row, GUIDE_COL), &header)?;
    let muted_line = style.muted(BRACKET_LINE);
    recolor_leading_glyphs(
        surface,
        geometry.header_row,
        geometry.closing_row,
        &muted_line,
        &muted_line,
    )?;

    surface.move_to(pos(geometry.closing_row, 0))?;
    surface.set_cursor_visible(true)?;
    surface.flush()?;
    ok!()
}
