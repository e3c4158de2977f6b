// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Queue `crossterm` commands on a writer, converting any I/O error into a
/// [`crate::PromptError::Terminal`] and returning early w/ it. Nothing reaches the
/// terminal until the writer is flushed. Use [`execute_commands!`] for one and done
/// commands that should show up right away.
#[macro_export]
macro_rules! queue_commands {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue($writer, $command)
                .map_err($crate::PromptError::from)?;
        )*
    }}
}

/// This is similar to [`queue_commands!`], but it flushes the writer once all the
/// commands are queued.
#[macro_export]
macro_rules! execute_commands {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $crate::queue_commands!($writer $(, $command)*);
        ::std::io::Write::flush($writer).map_err($crate::PromptError::from)?;
    }}
}
