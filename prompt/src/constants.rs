// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Glyphs.
pub const BRACKET_OPEN: &str = "┌";
pub const BRACKET_LINE: &str = "│";
pub const BRACKET_CLOSE: &str = "└";
pub const WARNING_SYMBOL: &str = "▲";
pub const CIRCLE_FILLED: &str = "●";
pub const CIRCLE_OUTLINE: &str = "○";
pub const DIAMOND_FILLED: char = '◆';
pub const CHECKMARK: &str = "√";

// Layout. Every frame row starts with a glyph at `GUIDE_COL`.
pub const GUIDE_COL: u16 = 0;
/// Where the editable text of a text input starts on its field row.
pub const FIELD_COL: u16 = 2;
/// Filled or outline circle on an option row.
pub const INDICATOR_COL: u16 = 2;
pub const TITLE_COL: u16 = 4;

/// Header, field, closing.
pub const TEXT_INPUT_FRAME_HEIGHT: u16 = 3;
/// Header and closing rows of an option list, not including the options.
pub const OPTION_LIST_CHROME_HEIGHT: u16 = 2;
pub const MIN_OPTION_COUNT: usize = 2;
