// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A title to show in an option list, and the value that
/// [`crate::select_option()`] returns when it is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor<T> {
    pub title: String,
    pub value: T,
}

impl<T> OptionDescriptor<T> {
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

impl<T> From<(&str, T)> for OptionDescriptor<T> {
    fn from((title, value): (&str, T)) -> Self { Self::new(title, value) }
}
