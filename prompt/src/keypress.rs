// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{DEVELOPMENT_MODE, PromptError};

/// The only key presses prompts care about. Everything else is [`KeyPress::Noop`].
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    /// A printable character.
    Char(char),
    Enter,
    /// Backspace or Delete. Both remove the last character.
    Delete,
    Up,
    Down,
    /// `Ctrl+C`. Raw mode swallows `SIGINT`, so this is surfaced as a key.
    Interrupt,
    #[default]
    Noop,
}

/// Blocks until exactly one key press is available, then returns it.
pub trait KeyPressReader {
    /// Returns [`None`] when there are no more key presses, ever.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be read from.
    fn read_key_press(&mut self) -> miette::Result<Option<KeyPress>>;
}

/// What a prompt's event loop does after handling one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<T> {
    Continue,
    ExitWithResult(T),
}

/// Blocks for the next key press, turning the end of input into
/// [`PromptError::InputStreamClosed`].
///
/// # Errors
///
/// Returns an error if the reader fails, or has no more key presses.
pub fn read_next_key_press(reader: &mut impl KeyPressReader) -> miette::Result<KeyPress> {
    match reader.read_key_press()? {
        Some(key_press) => Ok(key_press),
        None => Err(PromptError::InputStreamClosed.into()),
    }
}

/// Reads key presses from the terminal using a blocking [`crossterm::event::read`]. The
/// terminal must be in raw mode for key presses to arrive one at a time.
#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> miette::Result<Option<KeyPress>> {
        let event = crossterm::event::read().map_err(PromptError::from)?;

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "read event", event = ?event);
        });

        Ok(Some(KeyPress::from(event)))
    }
}

impl From<Event> for KeyPress {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => KeyPress::from(key_event),
            _ => KeyPress::Noop,
        }
    }
}

/// [`KeyEvent::kind`] is always set on Windows, where both presses and releases are
/// reported. Only presses count.
impl From<KeyEvent> for KeyPress {
    fn from(key_event: KeyEvent) -> Self {
        if key_event.kind != KeyEventKind::Press {
            return KeyPress::Noop;
        }

        let KeyEvent {
            code, modifiers, ..
        } = key_event;

        let is_ctrl = modifiers.contains(KeyModifiers::CONTROL);
        let is_alt = modifiers.contains(KeyModifiers::ALT);

        match code {
            KeyCode::Char('c') if is_ctrl => KeyPress::Interrupt,
            // AltGr arrives as Ctrl+Alt on Windows, eg: `@` on a German layout.
            KeyCode::Char(it) if is_ctrl && is_alt && !it.is_control() => {
                KeyPress::Char(it)
            }
            KeyCode::Char(_) if is_ctrl || is_alt => KeyPress::Noop,
            KeyCode::Char(it) if !it.is_control() => KeyPress::Char(it),
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Backspace | KeyCode::Delete => KeyPress::Delete,
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            _ => KeyPress::Noop,
        }
    }
}
