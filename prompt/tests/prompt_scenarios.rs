// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive whole prompt sessions w/ scripted key presses, the way the demo app uses them.

use r3bl_prompt::{KeyPress, OptionDescriptor, PromptError, PromptSession, StyleSheet,
                  as_prompt_error, assert_eq2, pos,
                  test_fixtures::{RecordingSurface, SurfaceOp, TestVecKeyPressReader},
                  validators};

fn session(
    key_presses: impl IntoIterator<Item = KeyPress>,
) -> PromptSession<RecordingSurface, TestVecKeyPressReader> {
    PromptSession::new(
        RecordingSurface::new().with_screen_height(24),
        TestVecKeyPressReader::new(key_presses),
        StyleSheet::default(),
    )
}

fn fruits() -> Vec<OptionDescriptor<&'static str>> {
    vec![
        OptionDescriptor::new("Apple", "Apple"),
        OptionDescriptor::new("Banana", "Banana"),
        OptionDescriptor::new("Orange", "Orange"),
        OptionDescriptor::new("Tomato", "Tomato"),
    ]
}

#[test]
fn test_fruit_scenario() {
    let mut session = session([KeyPress::Down, KeyPress::Down, KeyPress::Enter]);
    let fruit = session
        .select_option("Select your favourite fruit", fruits())
        .unwrap();
    assert_eq2!(fruit, "Orange");
    assert_eq2!(session.reader.remaining(), 0);
}

/// AltGr is reported as Ctrl+Alt on Windows, which is how `@` is typed on a German
/// keyboard.
#[test]
fn test_email_typed_w_altgr() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let key_presses = "nadia@r3bl.com"
        .chars()
        .map(|ch| match ch {
            '@' => KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL | KeyModifiers::ALT),
            _ => KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
        })
        .chain([KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)])
        .map(KeyPress::from);

    let mut session = session(key_presses);
    let email = session
        .text_input(
            "What is your email address?",
            None,
            false,
            validators::not_blank("Please enter something"),
        )
        .unwrap();
    assert_eq2!(email, "nadia@r3bl.com");
}

#[test]
fn test_single_option_is_rejected_before_rendering() {
    let mut session = session([KeyPress::Enter]);
    let result = session.select_option("Only one?", vec![OptionDescriptor::new("Yes", ())]);

    let report = result.unwrap_err();
    assert!(matches!(
        as_prompt_error(&report),
        Some(PromptError::CallerContractViolation { .. })
    ));
    assert_eq2!(session.surface.ops, Vec::<SurfaceOp>::new());
}

#[test]
fn test_password_flow() {
    let mut key_presses: Vec<KeyPress> = TestVecKeyPressReader::typing("short").collect();
    key_presses.push(KeyPress::Enter);
    key_presses.extend(TestVecKeyPressReader::typing("abc"));
    key_presses.push(KeyPress::Enter);

    let mut session = session(key_presses);
    let password = session
        .text_input(
            "Choose a password",
            Some("At least 8 characters"),
            true,
            validators::min_length(8, "Passwords should be at least 8 characters long"),
        )
        .unwrap();

    assert_eq2!(password, "shortabc");
    let surface = &session.surface;
    for (_, text) in surface.writes() {
        assert!(!text.contains("short"));
        assert!(!text.contains("abc"));
    }
    // The message was shown once, and then erased.
    let message_writes = surface
        .writes()
        .filter(|(_, text)| text.contains("Passwords should be"))
        .count();
    assert_eq2!(message_writes, 1);
    assert_eq2!(surface.row_text(1), "√ Choose a password");
    assert_eq2!(surface.row_text(2), "│ ◆◆◆◆◆◆◆◆");
    assert_eq2!(surface.row_text(3), "│");
}

#[test]
fn test_frame_fits_at_the_bottom_of_the_screen() {
    let mut session = session([KeyPress::Up, KeyPress::Enter]);
    session.surface.cursor = pos(23, 0);

    let fruit = session
        .select_option("Select your favourite fruit", fruits())
        .unwrap();

    assert_eq2!(fruit, "Apple");
    let surface = &session.surface;
    // 6 rows, the last one is the bottom row of the screen.
    assert_eq2!(surface.row_text(18), "√ Select your favourite fruit");
    assert_eq2!(surface.row_text(19), "│ ● Apple");
    assert_eq2!(surface.row_text(22), "│ ○ Tomato");
    assert_eq2!(surface.row_text(23), "│");
    assert_eq2!(surface.cursor, pos(23, 0));
}

#[test]
fn test_sign_up_form() {
    let mut key_presses: Vec<KeyPress> = vec![KeyPress::Enter];
    key_presses.extend(TestVecKeyPressReader::typing("nadia@r3bl.com"));
    key_presses.push(KeyPress::Enter);
    key_presses.extend(TestVecKeyPressReader::typing("password1"));
    key_presses.push(KeyPress::Enter);
    key_presses.extend([KeyPress::Down, KeyPress::Down, KeyPress::Down, KeyPress::Enter]);

    let mut session = session(key_presses);
    session.start_group("Sign Up and Fruit:").unwrap();
    let email = session
        .text_input(
            "What is your email address?",
            None,
            false,
            validators::not_blank("Please enter something"),
        )
        .unwrap();
    let password = session
        .text_input(
            "Choose a password",
            None,
            true,
            validators::min_length(8, "Passwords should be at least 8 characters long"),
        )
        .unwrap();
    let fruit = session
        .select_option("Select your favourite fruit", fruits())
        .unwrap();
    session.group_update("Information gathered...").unwrap();
    session.end_group("Done").unwrap();

    assert_eq2!(
        (email.as_str(), password.as_str(), fruit),
        ("nadia@r3bl.com", "password1", "Tomato")
    );
    assert!(!session.surface.is_raw_mode);
    assert!(session.surface.is_cursor_visible);
}
