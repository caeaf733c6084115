//! Category matching.
//!
//! [`type_of`] wraps any error in a [`Predicate`]; [`Predicate::is`] checks
//! the error's message against a category's zero-detail rendering.
//!
//! ```text
//! "[cerror] IllegalArgument - user is nil"
//!  ├──────────────────────┤
//!  IllegalArgument.error()   ← compared for exact equality
//! ```
//!
//! Plain prefix matching lets `Foo` claim errors made by `FooBar`.
//! [`MatchMode::Delimited`] closes that gap by also requiring the matched
//! prefix to end the message or be followed by the separator.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::category::{Category, SEPARATOR};
use crate::error::CategoricalError;

/// How a predicate compares a message against a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Leading substring equality. Compatible, admits `Foo`/`FooBar`.
    Prefix,
    /// Prefix, followed by end-of-message or the separator.
    ///
    /// Only sound for names that do not contain the separator themselves:
    /// `Foo - Bar` renders as `Foo` with detail `Bar`. [`crate::Registry`]
    /// refuses such names.
    #[default]
    Delimited,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Prefix => "prefix",
            MatchMode::Delimited => "delimited",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`MatchMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMatchModeError(pub String);

impl fmt::Display for ParseMatchModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown match mode: {:?} (expected prefix or delimited)", self.0)
    }
}

impl Error for ParseMatchModeError {}

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefix" => Ok(MatchMode::Prefix),
            "delimited" | "strict" => Ok(MatchMode::Delimited),
            _ => Err(ParseMatchModeError(s.to_string())),
        }
    }
}

/// Thin wrapper around an error's message exposing the matching operations.
///
/// Obtained from [`type_of`], [`CategoricalError::type_of`], or
/// [`Predicate::from_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate<'a> {
    message: Cow<'a, str>,
}

/// Wrap an error for matching.
///
/// A [`CategoricalError`] is borrowed as is; any other error is rendered
/// once through `Display`, so foreign errors match only if their `Display`
/// text carries the prefix.
///
/// ```
/// use cerror::{type_of, Category};
///
/// const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
/// const ILLEGAL_STATE: Category = Category::new("IllegalState");
///
/// let e = ILLEGAL_ARGUMENT.with(["user is nil"]);
/// assert!(type_of(&e).is(&ILLEGAL_ARGUMENT));
/// assert!(!type_of(&e).is(&ILLEGAL_STATE));
/// ```
pub fn type_of<'a>(err: &'a (dyn Error + 'static)) -> Predicate<'a> {
    match err.downcast_ref::<CategoricalError>() {
        Some(categorical) => categorical.type_of(),
        None => Predicate {
            message: Cow::Owned(err.to_string()),
        },
    }
}

impl<'a> Predicate<'a> {
    /// Wrap raw message text, e.g. an error string that crossed a boundary.
    #[inline]
    pub fn from_message(message: &'a str) -> Self {
        Self {
            message: Cow::Borrowed(message),
        }
    }

    /// The text being classified.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True iff the message starts with `category.error()`'s message.
    ///
    /// Returns false for messages shorter than that prefix.
    #[inline]
    pub fn is(&self, category: &Category) -> bool {
        category.prefixes(&self.message)
    }

    /// Like [`Predicate::is`], but the match must end at the message end
    /// or at the separator.
    ///
    /// ```
    /// use cerror::Category;
    /// const FOO: Category = Category::new("Foo");
    /// const FOO_BAR: Category = Category::new("FooBar");
    ///
    /// let e = FOO_BAR.error();
    /// assert!(e.type_of().is(&FOO));
    /// assert!(!e.type_of().is_exact(&FOO));
    /// assert!(e.type_of().is_exact(&FOO_BAR));
    /// ```
    #[inline]
    pub fn is_exact(&self, category: &Category) -> bool {
        self.matches(category, MatchMode::Delimited)
    }

    /// Match under an explicit [`MatchMode`].
    pub fn matches(&self, category: &Category, mode: MatchMode) -> bool {
        if !category.prefixes(&self.message) {
            return false;
        }
        match mode {
            MatchMode::Prefix => true,
            MatchMode::Delimited => {
                // prefixes() succeeded, so the slice point is a char boundary
                let message: &str = &self.message;
                let rest = &message[category.prefix_len()..];
                rest.is_empty() || rest.starts_with(SEPARATOR)
            }
        }
    }

    /// First category in `candidates` that [`Predicate::is`] accepts.
    ///
    /// Order is the caller's dispatch order, as in a chain of `is` checks.
    pub fn which<'c>(&self, candidates: &'c [Category]) -> Option<&'c Category> {
        self.which_with(candidates, MatchMode::Prefix)
    }

    /// First category in `candidates` accepted under `mode`.
    pub fn which_with<'c>(
        &self,
        candidates: &'c [Category],
        mode: MatchMode,
    ) -> Option<&'c Category> {
        candidates.iter().find(|c| self.matches(c, mode))
    }

    /// Longest-named category in `candidates` accepted under `mode`.
    ///
    /// Independent of slice order; ties keep the earliest.
    pub fn best_match<'c>(
        &self,
        candidates: &'c [Category],
        mode: MatchMode,
    ) -> Option<&'c Category> {
        candidates
            .iter()
            .filter(|c| self.matches(c, mode))
            .fold(None, |best: Option<&'c Category>, c| match best {
                Some(b) if b.name().len() >= c.name().len() => Some(b),
                _ => Some(c),
            })
    }

    /// Detach from the borrowed error.
    pub fn into_owned(self) -> Predicate<'static> {
        Predicate {
            message: Cow::Owned(self.message.into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define;

    const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
    const ILLEGAL_STATE: Category = Category::new("IllegalState");
    const FOO: Category = Category::new("Foo");
    const FOO_BAR: Category = Category::new("FooBar");

    #[test]
    fn zero_detail_matches_own_category() {
        let e = ILLEGAL_ARGUMENT.error();
        assert!(type_of(&e).is(&ILLEGAL_ARGUMENT));
        assert!(type_of(&e).is_exact(&ILLEGAL_ARGUMENT));
    }

    #[test]
    fn detailed_matches_own_category() {
        let e = ILLEGAL_ARGUMENT.with(["user is nil"]);
        assert!(type_of(&e).is(&ILLEGAL_ARGUMENT));
        assert!(!type_of(&e).is(&ILLEGAL_STATE));
    }

    #[test]
    fn shorter_message_is_false() {
        let p = Predicate::from_message("[cerror] Ill");
        assert!(!p.is(&ILLEGAL_ARGUMENT));
        assert!(!Predicate::from_message("").is(&ILLEGAL_ARGUMENT));
    }

    #[test]
    fn foreign_error_without_prefix_does_not_match() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "IllegalArgument - nope");
        assert!(!type_of(&io).is(&ILLEGAL_ARGUMENT));
    }

    #[test]
    fn foreign_error_with_matching_text_matches() {
        // identity is the text, wherever it came from
        let io = std::io::Error::new(std::io::ErrorKind::Other, "[cerror] IllegalArgument - x");
        assert!(type_of(&io).is(&ILLEGAL_ARGUMENT));
    }

    #[test]
    fn boxed_error_matches() {
        let boxed: Box<dyn Error + Send + Sync> = Box::new(ILLEGAL_STATE.with(["x"]));
        assert!(type_of(boxed.as_ref()).is(&ILLEGAL_STATE));
    }

    #[test]
    fn prefix_collision_preserved_by_is() {
        let e = FOO_BAR.error();
        assert!(e.type_of().is(&FOO));
        assert!(!e.type_of().is_exact(&FOO));
        assert!(e.type_of().matches(&FOO, MatchMode::Prefix));
        assert!(!e.type_of().matches(&FOO, MatchMode::Delimited));
    }

    #[test]
    fn delimited_accepts_details() {
        let e = FOO.with(["bar"]);
        assert!(e.type_of().is_exact(&FOO));
        assert!(!e.type_of().is_exact(&FOO_BAR));
    }

    #[test]
    fn delimited_accepts_empty_detail() {
        let e = FOO.with([""]);
        assert!(e.type_of().is_exact(&FOO));
    }

    #[test]
    fn separator_in_name_reads_as_detail() {
        let e = define("Foo - Bar").error();
        assert!(e.type_of().is_exact(&FOO));
    }

    #[test]
    fn same_name_is_indistinguishable() {
        let twin = define("IllegalArgument");
        let e = ILLEGAL_ARGUMENT.with(["x"]);
        assert!(e.type_of().is(&twin));
    }

    #[test]
    fn which_respects_order() {
        let e = FOO_BAR.error();
        let cats = [FOO, FOO_BAR];
        assert_eq!(e.type_of().which(&cats), Some(&FOO));
        assert_eq!(e.type_of().which_with(&cats, MatchMode::Delimited), Some(&FOO_BAR));
        assert_eq!(ILLEGAL_STATE.error().type_of().which(&cats), None);
    }

    #[test]
    fn best_match_prefers_longest() {
        let e = FOO_BAR.with(["x"]);
        let cats = [FOO, FOO_BAR];
        assert_eq!(e.type_of().best_match(&cats, MatchMode::Prefix), Some(&FOO_BAR));
        let cats = [FOO_BAR, FOO];
        assert_eq!(e.type_of().best_match(&cats, MatchMode::Prefix), Some(&FOO_BAR));
        assert_eq!(FOO.error().type_of().best_match(&cats, MatchMode::Prefix), Some(&FOO));
    }

    #[test]
    fn into_owned_outlives_error() {
        let p = {
            let e = ILLEGAL_STATE.error();
            e.type_of().into_owned()
        };
        assert!(p.is(&ILLEGAL_STATE));
    }

    #[test]
    fn match_mode_parse() {
        assert_eq!("prefix".parse::<MatchMode>(), Ok(MatchMode::Prefix));
        assert_eq!("Delimited".parse::<MatchMode>(), Ok(MatchMode::Delimited));
        assert_eq!(" strict ".parse::<MatchMode>(), Ok(MatchMode::Delimited));
        assert!("fuzzy".parse::<MatchMode>().is_err());
        assert_eq!(MatchMode::default(), MatchMode::Delimited);
        assert_eq!(MatchMode::Prefix.to_string(), "prefix");
    }
}
