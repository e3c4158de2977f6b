// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_prompt
//!
//! Stylised, stateful prompts for CLI apps. There are two kinds of prompts:
//!
//! 1. [`text_input()`] - free text entry with an optional placeholder, optional masked
//!    (secure) entry, and validation when the user presses `Enter`. If validation fails
//!    the frame turns into a warning banner in place, and the user keeps editing.
//! 1. [`select_option()`] - pick exactly one value from a list of at least 2 options,
//!    using the `Up` and `Down` arrow keys and `Enter`.
//!
//! Prompts can be framed inside a visual group using [`start_group()`],
//! [`group_update()`], and [`end_group()`].
//!
//! ```text
//! ┌  Sign Up and Fruit:
//! │
//! √ What is your email address?
//! │ nadia@r3bl.com
//! │
//! ● Select your favourite fruit
//! │ ○ 🍎 Apple
//! │ ● 🍌 Banana
//! │ ○ 🍊 Orange
//! └
//! ```
//!
//! ## How it renders
//!
//! Each prompt reserves a fixed set of rows when it starts (a header row, N body rows,
//! and a closing row). That set never changes size while the prompt is running, so the
//! prompt can repaint individual cells at absolute positions: only the characters that
//! change are written. Navigating an option list repaints exactly 2 rows, typing a
//! character writes exactly 1 glyph.
//!
//! All terminal access goes through the [`TerminalSurface`] trait and all key presses
//! come from the [`KeyPressReader`] trait. The real implementations are backed by
//! `crossterm`, and [`test_fixtures`] has recording fakes so that every prompt can be
//! driven in tests without a TTY.
//!
//! ## How to use it as a library?
//!
//! ```no_run
//! use r3bl_prompt::{OptionDescriptor, ValidationOutcome, select_option, text_input};
//!
//! fn main() -> miette::Result<()> {
//!     let name = text_input(
//!         "What is your name?",
//!         Some("Type your name"),
//!         false,
//!         |it| match it.trim().is_empty() {
//!             true => ValidationOutcome::Invalid("Please enter something".into()),
//!             false => ValidationOutcome::Valid,
//!         },
//!     )?;
//!
//!     let likes_rust = select_option(
//!         "Do you like Rust?",
//!         vec![
//!             OptionDescriptor::new("Yes", true),
//!             OptionDescriptor::new("No", false),
//!         ],
//!     )?;
//!
//!     println!("{name} likes Rust: {likes_rust}");
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Logging is disabled by default. Call [`try_initialize_logging_global`] to write
//! `tracing` output to `log.txt`. You can use `tail -f log.txt` to watch the logs.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod constants;
pub mod crossterm_macros;
pub mod decl_macros;
pub mod error;
pub mod group;
pub mod keypress;
pub mod log;
pub mod option_descriptor;
pub mod option_list;
pub mod public_api;
pub mod render_utils;
pub mod selection_state;
pub mod style;
pub mod term;
pub mod terminal_surface;
pub mod test_fixtures;
pub mod text_input;
pub mod validation;

// Re-export.
pub use constants::*;
pub use error::*;
pub use group::*;
pub use keypress::*;
pub use log::*;
pub use option_descriptor::*;
pub use option_list::*;
pub use public_api::*;
pub use render_utils::*;
pub use selection_state::*;
pub use style::*;
pub use term::*;
pub use terminal_surface::*;
pub use text_input::*;
pub use validation::*;

/// Log every key press and repaint. Only useful when file logging is enabled.
pub const DEVELOPMENT_MODE: bool = false;
