use std::borrow::Cow;

use crate::error::CategoricalError;

/// Literal marker prepended to every rendered categorical error.
///
/// Distinguishes categorical errors from ad hoc error strings.
pub const PREFIX: &str = "[cerror] ";

/// Placed between the category name and the details, when there are any.
pub const SEPARATOR: &str = " - ";

/// A named error kind, and the constructor for its instances.
///
/// Identity is the name and nothing else: two categories defined with the
/// same name are equal and match each other's errors. There is no registry
/// behind this type (see [`crate::Registry`] for an opt-in one).
///
/// # Naming conventions
///
/// Categories are usually process-wide constants named after the error kind:
///
/// | Constant           | Name                 |
/// |--------------------|----------------------|
/// | `ILLEGAL_ARGUMENT` | `"IllegalArgument"`  |
/// | `ILLEGAL_STATE`    | `"IllegalState"`     |
/// | `BUG`              | `"BUG"`              |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Category {
    name: Cow<'static, str>,
}

impl Category {
    /// Construct a category from a static name.
    ///
    /// ```
    /// use cerror::Category;
    /// const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
    /// assert_eq!(ILLEGAL_ARGUMENT.name(), "IllegalArgument");
    /// ```
    pub const fn new(name: &'static str) -> Self {
        Self { name: Cow::Borrowed(name) }
    }

    /// The category name, as given to [`Category::new`] or [`define`].
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instantiate an error of this category with no details.
    ///
    /// The message is exactly `PREFIX + name`.
    pub fn error(&self) -> CategoricalError {
        CategoricalError::from_rendered(self.render(core::iter::empty::<&str>()))
    }

    /// Instantiate an error of this category with free-form details.
    ///
    /// Details are joined by single spaces after the separator:
    ///
    /// ```
    /// use cerror::{Category, PREFIX};
    /// const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
    ///
    /// let e = ILLEGAL_ARGUMENT.with(["user", "is nil"]);
    /// assert_eq!(e.message(), format!("{PREFIX}IllegalArgument - user is nil"));
    /// ```
    pub fn with<I, S>(&self, details: I) -> CategoricalError
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CategoricalError::from_rendered(self.render(details))
    }

    /// Length of the zero-detail rendering, i.e. of every match prefix.
    #[inline]
    pub(crate) fn prefix_len(&self) -> usize {
        PREFIX.len() + self.name.len()
    }

    /// Checks whether `message` starts with this category's zero-detail
    /// rendering. Never panics on short or non-ASCII input.
    #[inline]
    pub(crate) fn prefixes(&self, message: &str) -> bool {
        message
            .strip_prefix(PREFIX)
            .is_some_and(|rest| rest.starts_with(self.name()))
    }

    fn render<I, S>(&self, details: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::with_capacity(self.prefix_len());
        out.push_str(PREFIX);
        out.push_str(&self.name);

        let mut details = details.into_iter();
        if let Some(first) = details.next() {
            out.push_str(SEPARATOR);
            out.push_str(first.as_ref());
            // one space between details, none after the last
            for detail in details {
                out.push(' ');
                out.push_str(detail.as_ref());
            }
        }
        out
    }
}

/// Define a new category at runtime.
///
/// Empty and duplicate names are accepted; the core does not validate.
///
/// ```
/// let not_found = cerror::define(format!("NotFound{}", "Error"));
/// assert_eq!(not_found.name(), "NotFoundError");
/// ```
pub fn define(name: impl Into<Cow<'static, str>>) -> Category {
    Category { name: name.into() }
}

impl core::fmt::Debug for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Category({:?})", self.name)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
