use std::error::Error;
use std::fmt;

use crate::predicate::Predicate;

/// An instance of a [`crate::Category`].
///
/// Carries only its rendered message. Classification re-derives the
/// expected prefix from a category and compares it against this text, so
/// no structured fields survive construction.
///
/// Equality, hashing, and `Display` are all defined by the message.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CategoricalError {
    message: String,
}

// ── Constructors ──────────────────────────────────────────────────

impl CategoricalError {
    /// Wrap an already rendered message. Only [`crate::Category`] renders.
    #[inline]
    pub(crate) fn from_rendered(message: String) -> Self {
        Self { message }
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl CategoricalError {
    /// The rendered message: `PREFIX + name [+ " - " + details]`.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Borrowing predicate over this error, for `.type_of().is(&CAT)`.
    ///
    /// ```
    /// use cerror::Category;
    /// const ILLEGAL_STATE: Category = Category::new("IllegalState");
    ///
    /// let e = ILLEGAL_STATE.with(["not logged in"]);
    /// assert!(e.type_of().is(&ILLEGAL_STATE));
    /// ```
    #[inline]
    pub fn type_of(&self) -> Predicate<'_> {
        Predicate::from_message(&self.message)
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl Error for CategoricalError {}

// ── Display / Debug ───────────────────────────────────────────────

impl fmt::Display for CategoricalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for CategoricalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CategoricalError").field(&self.message).finish()
    }
}
