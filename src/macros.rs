//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled the arguments are still type-checked
//! but nothing is emitted.

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => { ::log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! info_log {
    ($($arg:tt)*) => { ::log::info!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}
