//! Logging macros
//!
//! In the browser: `web_sys::console` (shows up in devtools).
//! Natively (tests, tooling): `tracing` events, so a subscriber can pick them up.
//!
//! Usage:
//! ```rust
//! use tumble_engine::console_log;
//!
//! let level = 2;
//! console_log!("loading level {}", level);
//! ```

/// Informational message.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::tracing::info!($($arg)*);
        }
    }};
}

/// Something went wrong but the game keeps running.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::tracing::warn!($($arg)*);
        }
    }};
}

/// Per-frame chatter. Compiled out of release builds.
#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::debug_1(&format!($($arg)*).into());
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                ::tracing::debug!($($arg)*);
            }
        }
    }};
}
