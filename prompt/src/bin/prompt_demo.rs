// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sign up form that shows off every kind of prompt. Run it w/ `cargo run`, and pass
//! `--enable-logging` to write a `log.txt` that you can watch w/ `tail -f log.txt`.

use clap::{Parser, ValueEnum};
use r3bl_prompt::{OptionDescriptor, PromptError, StyleSheet, TerminalPromptSession,
                  as_prompt_error, try_initialize_logging_global, validators};

#[derive(Debug, Parser)]
#[command(bin_name = "prompt_demo")]
#[command(about = "🦀 Stylised prompts that redraw in place")]
#[command(version)]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = Theme::Default,
        help = "Colors to draw the prompts w/"
    )]
    pub theme: Theme,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Default,
    Muted,
}

impl From<Theme> for StyleSheet {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Default => StyleSheet::default(),
            Theme::Muted => StyleSheet::muted_style(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Fruit {
    Apple,
    Banana,
    Orange,
    Tomato,
}

#[derive(Debug)]
struct SignUp {
    email: String,
    password_len: usize,
    fruit: Fruit,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let mut session = TerminalPromptSession::try_new_for_terminal(cli_arg.theme.into())?;

    match run_sign_up(&mut session) {
        Ok(sign_up) => {
            tracing::debug!(
                message = "Sign up complete",
                email = %sign_up.email,
                password_len = %sign_up.password_len,
                fruit = ?sign_up.fruit
            );
        }
        Err(report) => {
            if !matches!(as_prompt_error(&report), Some(PromptError::Interrupted)) {
                return Err(report);
            }
            tracing::debug!(message = "Sign up cancelled");
            println!("Cancelled, nothing was saved.");
        }
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}

fn run_sign_up(session: &mut TerminalPromptSession) -> miette::Result<SignUp> {
    session.start_group("Sign Up and Fruit:")?;

    let email = session.text_input(
        "What is your email address?",
        Some("nadia@r3bl.com"),
        false,
        validators::not_blank("Please enter something"),
    )?;

    let password = session.text_input(
        "Choose a password",
        Some("At least 8 characters"),
        true,
        validators::min_length(8, "Passwords should be at least 8 characters long"),
    )?;

    let fruit = session.select_option(
        "Select your favourite fruit",
        vec![
            OptionDescriptor::new("🍎 Apple", Fruit::Apple),
            OptionDescriptor::new("🍌 Banana", Fruit::Banana),
            OptionDescriptor::new("🍊 Orange", Fruit::Orange),
            OptionDescriptor::new("🍅 Tomato", Fruit::Tomato),
        ],
    )?;

    session.group_update("Information gathered...")?;

    let summary = match fruit {
        Fruit::Tomato => format!("Welcome {email}. A tomato is a fruit, nicely done!"),
        _ => format!("Welcome {email}. Your favourite fruit is {fruit:?}."),
    };
    session.end_group(&summary)?;

    Ok(SignUp {
        email,
        password_len: password.chars().count(),
        fruit,
    })
}
