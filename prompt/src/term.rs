// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::IsTerminal as _;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsInteractive`] if both `stdin` and `stdout` are a TTY. Prompts
/// read key presses from one and draw on the other, so they need both.
///
/// This returns [`TTYResult::IsNotInteractive`] when `cargo test` runs, or when input is
/// piped in, eg: `echo "test" | cargo run`.
#[must_use]
pub fn is_fully_interactive_terminal() -> TTYResult {
    let stdin_is_tty = std::io::stdin().is_terminal();
    let stdout_is_tty = std::io::stdout().is_terminal();
    match stdin_is_tty && stdout_is_tty {
        true => TTYResult::IsInteractive,
        false => TTYResult::IsNotInteractive,
    }
}

/// Return early from the enclosing function with the given value if the terminal is not
/// fully interactive. This won't block `cargo test` or CI/CD environments.
#[macro_export]
macro_rules! return_if_not_interactive_terminal {
    ($return_this:expr) => {
        if let $crate::TTYResult::IsNotInteractive = $crate::is_fully_interactive_terminal() {
            tracing::debug!(message = "Terminal is not interactive, bailing out");
            return $return_this;
        }
    };
}
