// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where log output goes when [`crate::try_initialize_logging_global`] is called w/ just
/// a [`LevelFilter`].
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure where log output goes, how much of it there is, and whether it applies to
/// the whole process or just the current thread.
///
/// Use [`crate::init_tracing()`] to install it.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
    pub scope: TracingScope,
}

/// There is no way to log to `stdout`. It is where the prompts are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String /* log file path */),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TracingScope {
    /// Once set, it can't be unset or changed. This is what apps use.
    Global,
    /// Only applies to the current thread, until the returned guard is dropped. This is
    /// what tests use.
    ThreadLocal,
}

impl TracingConfig {
    pub fn new_file(file_path: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
            scope: TracingScope::Global,
        }
    }

    #[must_use]
    pub fn thread_local(mut self) -> Self {
        self.scope = TracingScope::ThreadLocal;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// Log to [`DEFAULT_LOG_FILE_NAME`] at the given level.
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self { Self::new_file(None, level_filter) }
}
