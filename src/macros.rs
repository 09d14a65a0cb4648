//! Small crate-wide convenience macros.
//!
//! The logging macros route to the browser console on wasm32 and to stderr
//! everywhere else, so reducers and view-model code stay callable from plain
//! `cargo test` runs where `web_sys` imports would abort.

/// Debug-only console logging.  Compiled out of release builds.
///
/// ```rust,ignore
/// debug_log!("Fetched {} answers", list.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::macros::__log_line(&format!($($arg)*));
        }
    };
}

/// Error logging, kept in release builds.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::macros::__error_line(&format!($($arg)*))
    };
}

#[doc(hidden)]
pub fn __log_line(line: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[debug] {}", line);
}

#[doc(hidden)]
pub fn __error_line(line: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[error] {}", line);
}
