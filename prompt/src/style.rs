// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::{Color, Stylize};

use crate::DIAMOND_FILLED;

/// Colors for every state a prompt frame can be in, and the glyph used to mask secure
/// input. Styling is purely cosmetic: it is applied to strings before they are written
/// and holds no state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    /// Marker and guide lines of the prompt that currently has focus, and the question.
    pub active_color: Color,
    /// Validation failure banner.
    pub warning_color: Color,
    /// Checkmark of a completed prompt.
    pub success_color: Color,
    /// Guide lines of completed prompts and of group framing.
    pub muted_color: Color,
    pub placeholder_color: Color,
    pub active_title_color: Color,
    pub inactive_title_color: Color,
    pub group_title_bg_color: Color,
    pub mask_glyph: char,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            active_color: Color::Cyan,
            warning_color: Color::DarkYellow,
            success_color: Color::Green,
            muted_color: Color::Grey,
            placeholder_color: Color::DarkGrey,
            active_title_color: Color::Cyan,
            inactive_title_color: Color::DarkGrey,
            group_title_bg_color: Color::DarkCyan,
            mask_glyph: DIAMOND_FILLED,
        }
    }
}

impl StyleSheet {
    /// For terminals w/ a light background, or users who don't like bright colors.
    #[must_use]
    pub fn muted_style() -> Self {
        StyleSheet {
            active_color: Color::White,
            warning_color: Color::DarkRed,
            success_color: Color::DarkGreen,
            muted_color: Color::DarkGrey,
            placeholder_color: Color::DarkGrey,
            active_title_color: Color::White,
            inactive_title_color: Color::DarkGrey,
            group_title_bg_color: Color::DarkGrey,
            mask_glyph: '*',
        }
    }

    #[must_use]
    pub fn active(&self, text: &str) -> String { paint(text, self.active_color) }

    #[must_use]
    pub fn warning(&self, text: &str) -> String { paint(text, self.warning_color) }

    #[must_use]
    pub fn success(&self, text: &str) -> String { paint(text, self.success_color) }

    #[must_use]
    pub fn muted(&self, text: &str) -> String { paint(text, self.muted_color) }

    #[must_use]
    pub fn placeholder(&self, text: &str) -> String {
        paint(text, self.placeholder_color)
    }

    #[must_use]
    pub fn option_title(&self, text: &str, is_active: bool) -> String {
        match is_active {
            true => paint(text, self.active_title_color),
            false => paint(text, self.inactive_title_color),
        }
    }

    #[must_use]
    pub fn option_indicator(&self, is_active: bool) -> String {
        match is_active {
            true => self.active(crate::CIRCLE_FILLED),
            false => paint(crate::CIRCLE_OUTLINE, self.inactive_title_color),
        }
    }

    #[must_use]
    pub fn group_title(&self, text: &str) -> String {
        format!(" {text} ").on(self.group_title_bg_color).to_string()
    }
}

fn paint(text: &str, color: Color) -> String { text.with(color).to_string() }
