// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::{TracingConfig, init_tracing, ok};

/// Global default subscriber, which once set, can't be unset or changed. This is what
/// apps use.
///
/// Logging is **DISABLED** by **default**. Unless this is called w/ a level other than
/// [`tracing_core::LevelFilter::OFF`], the [`tracing::debug!`] etc. calls in this crate
/// go nowhere.
///
/// Pass a [`tracing_core::LevelFilter`] to log to `log.txt` in the current folder, and
/// use `tail -f log.txt` to watch it. Pass a [`TracingConfig`] for anything else.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    init_tracing(it)?;
    ok!()
}

/// Thread local subscriber, which is only active until the returned guard is dropped.
/// This is what tests use.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    init_tracing(it.thread_local())
}
