//! Macros for generating log messages.
//!
//! Every public macro accepts an optional leading integer threshold and forwards to `__log_event!`. The threshold
//! form is recognized by two leading literals: `info!(2, "x = {}", x)`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($level:expr, critical, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            tracing::event!(
                $level,
                critical = true,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
    ($level:expr, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            tracing::event!(
                $level,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($threshold:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!(tracing::Level::ERROR, critical, $threshold, $fmt $($arg)*)
    };
    ($($arg:tt)+) => {
        $crate::__log_event!(tracing::Level::ERROR, critical, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($threshold:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!(tracing::Level::ERROR, $threshold, $fmt $($arg)*)
    };
    ($($arg:tt)+) => {
        $crate::__log_event!(tracing::Level::ERROR, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($threshold:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!(tracing::Level::WARN, $threshold, $fmt $($arg)*)
    };
    ($($arg:tt)+) => {
        $crate::__log_event!(tracing::Level::WARN, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($threshold:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!(tracing::Level::INFO, $threshold, $fmt $($arg)*)
    };
    ($($arg:tt)+) => {
        $crate::__log_event!(tracing::Level::INFO, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($threshold:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!(tracing::Level::DEBUG, $threshold, $fmt $($arg)*)
    };
    ($($arg:tt)+) => {
        $crate::__log_event!(tracing::Level::DEBUG, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($threshold:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!(tracing::Level::TRACE, $threshold, $fmt $($arg)*)
    };
    ($($arg:tt)+) => {
        $crate::__log_event!(tracing::Level::TRACE, 0, $($arg)+)
    };
}


// The following makes the macros importable directly from the `log` module.
pub use {critical, error, warning, info, debug, trace};
