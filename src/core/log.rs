//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`, so messages land in the
//! browser devtools. On native targets (unit tests, benches) they compile to
//! nothing, since calling a wasm-bindgen import off-wasm panics.
//!
//! Usage:
//! ```rust
//! use pointbox_engine::console_log;
//!
//! let bodies = 50;
//! console_log!("spawned {} bodies", bodies);
//! ```

/// Log an info line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            // Keep the arguments "used" without formatting them.
            let _ = || ::std::format!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || ::std::format!($($arg)*);
        }
    }};
}
