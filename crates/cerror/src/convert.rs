use std::io;

use crate::category::Category;
use crate::error::CategoricalError;
use crate::CResult;

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<CategoricalError> for io::Error {
    /// Wrap a categorical error as a custom `io::Error`.
    ///
    /// The message survives, so `type_of` still classifies the result.
    fn from(err: CategoricalError) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

// ── ResultExt — categorize foreign errors ─────────────────────────

/// Extension trait for turning any `Result` error into a categorical one.
///
/// The foreign error's text becomes the detail, so nothing is lost but the
/// type:
///
/// ```
/// use cerror::{Category, ResultExt};
/// const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
///
/// let port = "80a".parse::<u16>().categorize_with(&ILLEGAL_ARGUMENT, "port:");
/// let e = port.unwrap_err();
/// assert!(e.type_of().is(&ILLEGAL_ARGUMENT));
/// assert_eq!(
///     e.message(),
///     "[cerror] IllegalArgument - port: invalid digit found in string"
/// );
/// ```
pub trait ResultExt<T> {
    /// Replace the error with `category`, using its text as the detail.
    fn categorize(self, category: &Category) -> CResult<T>;

    /// Like [`ResultExt::categorize`], with a leading context detail.
    fn categorize_with(self, category: &Category, context: &str) -> CResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn categorize(self, category: &Category) -> CResult<T> {
        self.map_err(|e| category.with([e.to_string()]))
    }

    fn categorize_with(self, category: &Category, context: &str) -> CResult<T> {
        self.map_err(|e| category.with([context.to_string(), e.to_string()]))
    }
}
