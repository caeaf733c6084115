//! Leveled stderr logging for cerror
//!
//! The core (define, construct, match) never logs. [`crate::Registry`]
//! warns about accepted collisions and traces definitions; the `cmd/`
//! binaries log per attempt.
//!
//! # Environment Variables
//!
//! - `CERROR_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace (or 0-5)
//! - `CERROR_FLUSH_EPRINT=1` - Flush stderr after each line
//!
//! Both are read once, on the first log call. [`set_log_level`] wins over
//! the environment.
//!
//! # Usage
//!
//! ```ignore
//! use cerror::{kdebug, kwarn};
//!
//! kwarn!("category {:?} collides with {:?}", name, existing);
//! kdebug!("defined category {:?}", name);
//! ```

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::env::{env_get_bool, env_get_opt};

/// Logging threshold. A line is printed when its level is at or below it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Parse a level name or digit. Unknown input is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "1" => Some(LogLevel::Error),
            "warn" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Info => "[INFO] ",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Trace => "[TRACE]",
        }
    }
}

const DEFAULT_LEVEL: LogLevel = LogLevel::Warn;

static READY: AtomicBool = AtomicBool::new(false);
static THRESHOLD: AtomicU8 = AtomicU8::new(DEFAULT_LEVEL as u8);
static FLUSH: AtomicBool = AtomicBool::new(false);

fn ensure_ready() {
    if READY.swap(true, Ordering::SeqCst) {
        return;
    }
    FLUSH.store(env_get_bool("CERROR_FLUSH_EPRINT", false), Ordering::Relaxed);
    if let Some(raw) = env_get_opt::<String>("CERROR_LOG_LEVEL") {
        let level = LogLevel::parse(&raw).unwrap_or(DEFAULT_LEVEL);
        THRESHOLD.store(level as u8, Ordering::Relaxed);
    }
}

/// Current threshold.
pub fn log_level() -> LogLevel {
    ensure_ready();
    LogLevel::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

/// Override the threshold. Later environment reads do not undo this.
pub fn set_log_level(level: LogLevel) {
    READY.store(true, Ordering::SeqCst);
    THRESHOLD.store(level as u8, Ordering::Relaxed);
}

/// True if a line at `level` would be printed.
#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

#[doc(hidden)]
pub fn _klog_impl(level: LogLevel, args: fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{} {}", level.tag(), args);
    if FLUSH.load(Ordering::Relaxed) {
        let _ = out.flush();
    }
}

/// Warning level log
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Warn, format_args!($($arg)*))
    };
}

/// Info level log
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Info, format_args!($($arg)*))
    };
}

/// Debug level log
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => {
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Debug, format_args!($($arg)*))
    };
}
