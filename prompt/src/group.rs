// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Framing that visually ties a series of prompts together.
//!
//! ```text
//! ┌  Sign Up and Fruit:               <- render_group_start
//! │
//! √ What is your email address?      <- a prompt
//! │ nadia@r3bl.com
//! │
//! ● Information gathered...          <- render_group_update
//! │
//! └ Done                             <- render_group_end
//! ```
//!
//! Like every prompt, each of these starts on the line after the cursor and leaves the
//! cursor at col 0 of its last row.

use crate::{BRACKET_CLOSE, BRACKET_LINE, BRACKET_OPEN, CIRCLE_FILLED, GUIDE_COL,
            StyleSheet, TerminalSurface, ok, pos, reserve_frame, write_at};

/// # Errors
///
/// Returns an error if the terminal can't be written to.
pub fn render_group_start(
    surface: &mut impl TerminalSurface,
    style: &StyleSheet,
    title: &str,
) -> miette::Result<()> {
    let first_line = format!("{} {}", style.muted(BRACKET_OPEN), style.group_title(title));
    render_group_lines(surface, &first_line, &style.muted(BRACKET_LINE))
}

/// # Errors
///
/// Returns an error if the terminal can't be written to.
pub fn render_group_update(
    surface: &mut impl TerminalSurface,
    style: &StyleSheet,
    title: &str,
) -> miette::Result<()> {
    let first_line = format!("{} {title}", style.muted(CIRCLE_FILLED));
    render_group_lines(surface, &first_line, &style.muted(BRACKET_LINE))
}

/// The last line of the group is followed by an empty line, which is where the cursor
/// is left.
///
/// # Errors
///
/// Returns an error if the terminal can't be written to.
pub fn render_group_end(
    surface: &mut impl TerminalSurface,
    style: &StyleSheet,
    title: &str,
) -> miette::Result<()> {
    let first_line = format!("{} {title}", style.muted(BRACKET_CLOSE));
    render_group_lines(surface, &first_line, "")
}

fn render_group_lines(
    surface: &mut impl TerminalSurface,
    first_line: &str,
    second_line: &str,
) -> miette::Result<()> {
    surface.set_cursor_visible(false)?;

    let geometry = reserve_frame(surface, 2)?;
    write_at(surface, pos(geometry.header_row, GUIDE_COL), first_line)?;
    write_at(surface, pos(geometry.closing_row, GUIDE_COL), second_line)?;
    surface.move_to(pos(geometry.closing_row, 0))?;

    surface.set_cursor_visible(true)?;
    surface.flush()?;
    ok!()
}
