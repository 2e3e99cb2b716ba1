//! The diagnostic macro set.
//!
//! Critical, error, and warning call sites come in two flavors: the plain
//! macro qualifies the message with `[file:line]`, the `_message` variant
//! omits it. Info, log, trace, and display messages are never qualified.

/// Emits a critical error with source provenance.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit_qualified(
                $crate::MessageKind::Critical,
                file!(),
                line!(),
                ::core::format_args!($($arg)+),
            );
        }
    };
}

/// Emits a critical error without source provenance.
#[macro_export]
macro_rules! critical_message {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit($crate::MessageKind::Critical, ::core::format_args!($($arg)+));
        }
    };
}

/// Emits an error with source provenance.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit_qualified(
                $crate::MessageKind::Error,
                file!(),
                line!(),
                ::core::format_args!($($arg)+),
            );
        }
    };
}

/// Emits an error without source provenance.
#[macro_export]
macro_rules! error_message {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit($crate::MessageKind::Error, ::core::format_args!($($arg)+));
        }
    };
}

/// Emits a warning with source provenance.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit_qualified(
                $crate::MessageKind::Warning,
                file!(),
                line!(),
                ::core::format_args!($($arg)+),
            );
        }
    };
}

/// Emits a warning without source provenance.
#[macro_export]
macro_rules! warning_message {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit($crate::MessageKind::Warning, ::core::format_args!($($arg)+));
        }
    };
}

/// Emits a display message.
#[macro_export]
macro_rules! display {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit($crate::MessageKind::Display, ::core::format_args!($($arg)+));
        }
    };
}

/// Emits an informational message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit($crate::MessageKind::Info, ::core::format_args!($($arg)+));
        }
    };
}

/// Emits a log message.
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit($crate::MessageKind::Log, ::core::format_args!($($arg)+));
        }
    };
}

/// Emits a trace message.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        if $crate::ENABLED {
            $crate::emit($crate::MessageKind::Trace, ::core::format_args!($($arg)+));
        }
    };
}

/// Aborts the process with a qualified `ASSERTION ERROR` message if the
/// condition is false.
///
/// The message bypasses the severity filter: a failed invariant is visible
/// even at `SeverityLevel::None`. When logging is compiled out the
/// condition is not evaluated at all. Reserved for programmer error, not
/// recoverable runtime conditions.
#[macro_export]
macro_rules! check {
    ($cond:expr, $($arg:tt)+) => {
        if $crate::ENABLED && !$cond {
            $crate::emit_assertion(file!(), line!(), ::core::format_args!($($arg)+));
            ::std::process::abort();
        }
    };
}
