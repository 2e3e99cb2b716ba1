//! Severity-filtered, tag-and-color diagnostic logging.
//!
//! All output goes to stdout as a single colorized line per message:
//! a color escape, a `[TAG]` prefix, the formatted body, an optional
//! `[file:line]` qualifier, and a color reset. Messages are filtered by a
//! process-wide [`SeverityLevel`]; assertions (`check!`) bypass the filter
//! and abort the process.
//!
//! Logging is compiled out entirely in release builds unless the
//! `always-log` feature is enabled. The macros test [`ENABLED`] before
//! evaluating any of their arguments, so disabled logging has zero cost.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};

mod macros;

/// Whether logging is compiled into this build.
///
/// True in debug builds and whenever the `always-log` feature is enabled.
/// Every logging macro expands to `if ENABLED { ... }`, which release
/// builds constant-fold away.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "always-log"));

const COLOR_RESET: &str = "\x1b[0m";

/// The process-wide verbosity threshold, ordered by increasing verbosity.
///
/// A message is emitted iff the current level is at or above the level its
/// kind requires, so `None` silences everything and `All` silences nothing.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityLevel {
    /// No diagnostic output.
    None = 0,
    /// Only critical errors.
    Critical = 1,
    /// Errors and critical errors.
    Error = 2,
    /// Warnings, errors, and critical errors.
    Warning = 3,
    /// Info, warnings, errors, and critical errors.
    Info = 4,
    /// Trace, info, warnings, errors, and critical errors.
    Trace = 5,
    /// Display, trace, info, warnings, errors, and critical errors.
    Display = 6,
    /// All output including log messages.
    Log = 7,
    /// All possible diagnostic output.
    All = 8,
}

impl SeverityLevel {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Critical,
            2 => Self::Error,
            3 => Self::Warning,
            4 => Self::Info,
            5 => Self::Trace,
            6 => Self::Display,
            7 => Self::Log,
            _ => Self::All,
        }
    }
}

/// The category of a diagnostic call site.
///
/// Each kind carries fixed display metadata (tag, color) and the minimum
/// [`SeverityLevel`] at which it becomes visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    /// Unknown or default.
    #[default]
    None,
    Assert,
    Critical,
    Display,
    Error,
    Info,
    Log,
    Trace,
    Warning,
}

impl MessageKind {
    /// The minimum severity level at which messages of this kind are
    /// emitted.
    ///
    /// Assertions share `Critical` here, but the assertion path never
    /// consults the filter; see [`emit_assertion`].
    #[must_use]
    pub fn required_severity(self) -> SeverityLevel {
        match self {
            Self::Assert | Self::Critical => SeverityLevel::Critical,
            Self::Error => SeverityLevel::Error,
            Self::Warning => SeverityLevel::Warning,
            Self::Info => SeverityLevel::Info,
            Self::Trace => SeverityLevel::Trace,
            Self::Display => SeverityLevel::Display,
            Self::Log => SeverityLevel::Log,
            Self::None => SeverityLevel::All,
        }
    }

    /// The uppercase label printed between brackets ahead of the message
    /// body.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Assert => "ASSERTION ERROR",
            Self::Critical => "CRITICAL",
            Self::Display => "DISPLAY",
            Self::Error => "ERROR",
            Self::Info => "INFO",
            Self::Log => "LOG",
            Self::Trace => "TRACE",
            Self::Warning => "WARNING",
            Self::None => "",
        }
    }

    /// The ANSI escape sequence that colors messages of this kind.
    #[must_use]
    pub fn color_code(self) -> &'static str {
        match self {
            Self::Assert | Self::Critical => "\x1b[031m",
            Self::Display => "\x1b[092m",
            Self::Error => "\x1b[091m",
            Self::Info => "\x1b[094m",
            Self::Trace => "\x1b[095m",
            Self::Warning => "\x1b[093m",
            Self::Log | Self::None => "\x1b[0m",
        }
    }
}

const DEFAULT_SEVERITY: SeverityLevel = if ENABLED {
    SeverityLevel::All
} else {
    SeverityLevel::Error
};

// Atomic so a multi-threaded host can flip the level without a data race.
static SEVERITY: AtomicU8 = AtomicU8::new(DEFAULT_SEVERITY as u8);

/// Replaces the process-wide severity filter. Takes effect on all
/// subsequent emissions.
pub fn set_severity_level(level: SeverityLevel) {
    SEVERITY.store(level as u8, Ordering::Relaxed);
}

/// The current process-wide severity filter.
#[must_use]
pub fn severity_level() -> SeverityLevel {
    SeverityLevel::from_u8(SEVERITY.load(Ordering::Relaxed))
}

/// Returns true if messages requiring `level` are currently visible.
#[must_use]
pub fn is_severity_enabled(level: SeverityLevel) -> bool {
    severity_level() >= level
}

/// Renders one diagnostic line without emitting it.
///
/// Layout: `color "[" tag "] " body ["\n[file:line]"] reset "\n"`. The
/// buffer grows to fit the body, so messages are never truncated.
#[must_use]
pub fn render(kind: MessageKind, site: Option<(&str, u32)>, args: fmt::Arguments) -> String {
    use fmt::Write;

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(out, "{}[{}] {}", kind.color_code(), kind.tag(), args);
    if let Some((file, line)) = site {
        let _ = write!(out, "\n[{}:{}]", file, line);
    }
    out.push_str(COLOR_RESET);
    out.push('\n');
    out
}

fn write_line(text: &str) {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    // A logger that fails to log has nowhere to report it.
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

/// Emits an unqualified message of the given kind, subject to the severity
/// filter. Formatting is skipped entirely when the filter rejects the kind.
#[doc(hidden)]
pub fn emit(kind: MessageKind, args: fmt::Arguments) {
    if !is_severity_enabled(kind.required_severity()) {
        return;
    }
    write_line(&render(kind, None, args));
}

/// Emits a message qualified with its source location, subject to the
/// severity filter.
#[doc(hidden)]
pub fn emit_qualified(kind: MessageKind, file: &str, line: u32, args: fmt::Arguments) {
    if !is_severity_enabled(kind.required_severity()) {
        return;
    }
    write_line(&render(kind, Some((file, line)), args));
}

/// Emits a failed-assertion message. Never filtered: a failed `check!`
/// must be visible even at `SeverityLevel::None`. The caller aborts the
/// process after this returns.
#[doc(hidden)]
pub fn emit_assertion(file: &str, line: u32, args: fmt::Arguments) {
    write_line(&render(MessageKind::Assert, Some((file, line)), args));
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LEVELS: [SeverityLevel; 9] = [
        SeverityLevel::None,
        SeverityLevel::Critical,
        SeverityLevel::Error,
        SeverityLevel::Warning,
        SeverityLevel::Info,
        SeverityLevel::Trace,
        SeverityLevel::Display,
        SeverityLevel::Log,
        SeverityLevel::All,
    ];

    const ALL_KINDS: [MessageKind; 9] = [
        MessageKind::None,
        MessageKind::Assert,
        MessageKind::Critical,
        MessageKind::Display,
        MessageKind::Error,
        MessageKind::Info,
        MessageKind::Log,
        MessageKind::Trace,
        MessageKind::Warning,
    ];

    // All assertions that touch the process-wide filter live in this one
    // test so concurrently running tests cannot interfere with each other.
    #[test]
    fn severity_filtering() {
        for current in ALL_LEVELS {
            set_severity_level(current);
            assert_eq!(severity_level(), current);

            for required in ALL_LEVELS {
                assert_eq!(
                    is_severity_enabled(required),
                    current as u8 >= required as u8,
                    "current={current:?} required={required:?}"
                );
            }
        }

        // Each kind becomes visible exactly at its required level.
        for kind in ALL_KINDS {
            let required = kind.required_severity();

            set_severity_level(required);
            assert!(
                is_severity_enabled(required),
                "{kind:?} must be visible at its required level"
            );

            if required > SeverityLevel::None {
                set_severity_level(SeverityLevel::from_u8(required as u8 - 1));
                assert!(
                    !is_severity_enabled(required),
                    "{kind:?} must be filtered one step below its required level"
                );
            }
        }

        set_severity_level(DEFAULT_SEVERITY);
    }

    #[test]
    fn kind_severity_table() {
        assert_eq!(
            MessageKind::Assert.required_severity(),
            SeverityLevel::Critical
        );
        assert_eq!(
            MessageKind::Critical.required_severity(),
            SeverityLevel::Critical
        );
        assert_eq!(MessageKind::Error.required_severity(), SeverityLevel::Error);
        assert_eq!(
            MessageKind::Warning.required_severity(),
            SeverityLevel::Warning
        );
        assert_eq!(MessageKind::Info.required_severity(), SeverityLevel::Info);
        assert_eq!(MessageKind::Trace.required_severity(), SeverityLevel::Trace);
        assert_eq!(
            MessageKind::Display.required_severity(),
            SeverityLevel::Display
        );
        assert_eq!(MessageKind::Log.required_severity(), SeverityLevel::Log);
        assert_eq!(MessageKind::None.required_severity(), SeverityLevel::All);
    }

    #[test]
    fn render_unqualified_line() {
        let line = render(MessageKind::Warning, None, format_args!("{}={}", "x", 5));
        assert_eq!(line, "\x1b[093m[WARNING] x=5\x1b[0m\n");
    }

    #[test]
    fn render_qualified_line() {
        let line = render(
            MessageKind::Error,
            Some(("src/main.rs", 42)),
            format_args!("boom"),
        );
        assert_eq!(line, "\x1b[091m[ERROR] boom\n[src/main.rs:42]\x1b[0m\n");
    }

    #[test]
    fn render_assertion_line() {
        let line = render(
            MessageKind::Assert,
            Some(("lib.rs", 7)),
            format_args!("index {} out of bounds", 9),
        );
        assert!(
            line.starts_with("\x1b[031m[ASSERTION ERROR] "),
            "assertions carry the ASSERTION ERROR tag"
        );
        assert!(line.contains("index 9 out of bounds\n[lib.rs:7]"));
    }

    #[test]
    fn render_never_truncates() {
        let body = "a".repeat(5000);
        let line = render(MessageKind::Log, None, format_args!("{body}"));
        assert!(
            line.contains(&body),
            "messages longer than any fixed buffer must survive intact"
        );
    }

    #[test]
    fn check_true_has_no_effect() {
        let mut evaluations = 0;
        crate::check!(
            {
                evaluations += 1;
                true
            },
            "never printed"
        );
        if ENABLED {
            assert_eq!(evaluations, 1, "the condition is evaluated exactly once");
        } else {
            assert_eq!(evaluations, 0, "disabled builds must not evaluate the condition");
        }
    }
}
