//! Console logging macros
//!
//! wasm32: forwards to the browser console through `web_sys::console`.
//! Native: compiled out (arguments are still type-checked).
//!
//! Usage:
//! ```rust
//! use bump_engine::console_warn;
//!
//! let id = 7;
//! console_warn!("sprite {} has zero mass", id);
//! ```

/// Log a message to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Warning that only exists in debug builds (hot paths)
#[macro_export]
macro_rules! debug_warn {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::console_warn!($($arg)*);
        }
    }};
}
