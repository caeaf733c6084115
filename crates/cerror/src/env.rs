//! Environment variable utilities
//!
//! Typed lookups with defaults, used by [`crate::config`] and
//! [`crate::kprint`].
//!
//! # Usage
//!
//! ```
//! use cerror::env::{env_get, env_get_bool};
//! use cerror::MatchMode;
//!
//! let mode: MatchMode = env_get("CERROR_MATCH_MODE", MatchMode::Delimited);
//! let strict: bool = env_get_bool("CERROR_REJECT_PREFIX_COLLISIONS", false);
//! # let _ = (mode, strict);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default
///
/// Unset variables and parse failures both yield the default.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Get environment variable as boolean
///
/// Accepts: "1", "true", "yes", "on" (case-insensitive) as true.
/// Any other set value is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Get environment variable as optional value
///
/// `Some(T)` only if the variable is set and parses.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Get environment variable as string, or return default
#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Check if environment variable is set (regardless of value)
#[inline]
pub fn env_is_set(key: &str) -> bool {
    std::env::var_os(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchMode;

    // Each test owns its variable names; tests run in parallel.

    #[test]
    fn test_env_get_default() {
        let val: usize = env_get("__CERROR_TEST_UNSET_1__", 42);
        assert_eq!(val, 42);
    }

    #[test]
    fn test_env_get_bool_default() {
        assert!(env_get_bool("__CERROR_TEST_UNSET_2__", true));
        assert!(!env_get_bool("__CERROR_TEST_UNSET_2__", false));
    }

    #[test]
    fn test_env_get_opt_none() {
        let val: Option<usize> = env_get_opt("__CERROR_TEST_UNSET_3__");
        assert!(val.is_none());
    }

    #[test]
    fn test_env_get_str_default() {
        assert_eq!(env_get_str("__CERROR_TEST_UNSET_4__", "hello"), "hello");
    }

    #[test]
    fn test_env_is_set() {
        assert!(!env_is_set("__CERROR_TEST_UNSET_5__"));
        std::env::set_var("__CERROR_TEST_SET_5__", "");
        assert!(env_is_set("__CERROR_TEST_SET_5__"));
        std::env::remove_var("__CERROR_TEST_SET_5__");
    }

    #[test]
    fn test_env_get_match_mode() {
        std::env::set_var("__CERROR_TEST_MODE__", "prefix");
        let mode: MatchMode = env_get("__CERROR_TEST_MODE__", MatchMode::Delimited);
        assert_eq!(mode, MatchMode::Prefix);

        std::env::set_var("__CERROR_TEST_MODE__", "bogus");
        let mode: MatchMode = env_get("__CERROR_TEST_MODE__", MatchMode::Delimited);
        assert_eq!(mode, MatchMode::Delimited);
        std::env::remove_var("__CERROR_TEST_MODE__");
    }

    #[test]
    fn test_env_get_bool_variants() {
        for yes in ["1", "true", "TRUE", "yes", "on", " on "] {
            std::env::set_var("__CERROR_TEST_BOOL__", yes);
            assert!(env_get_bool("__CERROR_TEST_BOOL__", false), "{yes:?}");
        }
        for no in ["0", "false", "garbage", ""] {
            std::env::set_var("__CERROR_TEST_BOOL__", no);
            assert!(!env_get_bool("__CERROR_TEST_BOOL__", true), "{no:?}");
        }
        std::env::remove_var("__CERROR_TEST_BOOL__");
    }

    #[test]
    fn test_env_get_invalid_parse() {
        std::env::set_var("__CERROR_TEST_INVALID__", "not_a_number");
        let val: usize = env_get("__CERROR_TEST_INVALID__", 99);
        assert_eq!(val, 99);
        std::env::remove_var("__CERROR_TEST_INVALID__");
    }
}
