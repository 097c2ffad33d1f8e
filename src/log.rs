// src/log.rs
//! Short logging macros. They forward to the `log` facade; the binary
//! installs `env_logger` as the backend (`RUST_LOG` picks the level).

#[doc(hidden)]
pub use ::log::{debug, error, info};

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::error!($($arg)*)
    };
}
