// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::RangeInclusive;

use crate::OptionDescriptor;

/// An option and the screen row it is drawn on. The row is computed once when the
/// option list starts and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedOption<T> {
    pub descriptor: OptionDescriptor<T>,
    pub row: u16,
}

/// Which option row of an option list is active. Navigation only ever moves
/// [`SelectionState::active_row`] inside [`SelectionState::range`].
///
/// This does not clamp, and it does no I/O. Callers check [`SelectionState::range`]
/// before calling [`SelectionState::set_active_row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<T> {
    options: Vec<PositionedOption<T>>,
    active_row: u16,
}

impl<T> SelectionState<T> {
    /// Lay out `options` on consecutive rows right below `header_row`, w/ the first one
    /// active. Returns [`None`] if there are no options.
    pub fn new(header_row: u16, options: Vec<OptionDescriptor<T>>) -> Option<Self> {
        let options: Vec<PositionedOption<T>> = options
            .into_iter()
            .zip(header_row + 1..)
            .map(|(descriptor, row)| PositionedOption { descriptor, row })
            .collect();
        let active_row = options.first()?.row;
        Some(Self {
            options,
            active_row,
        })
    }

    #[must_use]
    pub fn active_row(&self) -> u16 { self.active_row }

    /// Rows of the first and last option, inclusive.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<u16> {
        let min = self.options.first().map_or(self.active_row, |it| it.row);
        let max = self.options.last().map_or(self.active_row, |it| it.row);
        min..=max
    }

    pub fn set_active_row(&mut self, row: u16) { self.active_row = row; }

    #[must_use]
    pub fn option_at_row(&self, row: u16) -> Option<&PositionedOption<T>> {
        self.options.iter().find(|it| it.row == row)
    }

    pub fn options(&self) -> impl Iterator<Item = &PositionedOption<T>> {
        self.options.iter()
    }

    #[must_use]
    pub fn is_active(&self, option: &PositionedOption<T>) -> bool {
        option.row == self.active_row
    }

    /// The value of the active option.
    pub fn into_selected_value(self) -> Option<T> {
        let active_row = self.active_row;
        self.options
            .into_iter()
            .find(|it| it.row == active_row)
            .map(|it| it.descriptor.value)
    }
}
