// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Syntactic sugar for `Ok(())` or `Ok($value)`.
///
/// ```
/// use r3bl_prompt::ok;
///
/// fn unit() -> miette::Result<()> { ok!() }
/// fn value() -> miette::Result<u16> { ok!(42) }
/// # assert!(unit().is_ok());
/// # assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
