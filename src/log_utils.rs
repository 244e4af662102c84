//! Console logging for debug builds. Release builds compile `log!` away.

#[cfg(debug_assertions)]
#[macro_export]
/// A macro for debug log messages.
/// ```
/// log!("check", "kind = {}", kind);
/// ```
macro_rules! log {
    ($label:expr) => {{
        use colored::*;
        println!("{}", format!("[{}]", $label).bold().cyan());
    }};

    ($label:expr, $($arg:tt)*) => {{
        use colored::*;
        println!(
            "{} {}",
            format!("[{}]", $label).bold().cyan(),
            format!($($arg)*).green()
        );
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! log {
    ($label:expr) => {};
    ($label:expr, $($arg:tt)*) => {};
}
