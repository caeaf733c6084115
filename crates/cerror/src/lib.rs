//! # cerror — Categorical Errors
//!
//! Named error kinds that can be defined anywhere, instantiated with
//! optional free-text details, and identified at the handling site with a
//! predicate instead of message parsing or a shared concrete error type.
//!
//! ## Design
//!
//! - A [`Category`] is just a name. It is both the constructor for its
//!   errors and the token they are matched against. No registry, no ids.
//!
//! - A [`CategoricalError`] is just its rendered message:
//!
//!   ```text
//!   [cerror] IllegalArgument                     no details
//!   [cerror] IllegalArgument - user is nil       details, space-joined
//!   └──┬───┘└──────┬──────┘└┬┘
//!    PREFIX      name    SEPARATOR
//!   ```
//!
//!   The zero-detail rendering is a prefix of every rendering, which is all
//!   [`Predicate::is`] needs.
//!
//! ## Quick Start
//!
//! ```rust
//! use cerror::{cerr, match_category, type_of, CResult, Category};
//!
//! const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
//! const ILLEGAL_STATE: Category = Category::new("IllegalState");
//!
//! fn change_password(user: &str, logged_in: bool) -> CResult<()> {
//!     if user.is_empty() {
//!         return Err(cerr!(ILLEGAL_ARGUMENT, "user is nil"));
//!     }
//!     if !logged_in {
//!         return Err(ILLEGAL_STATE.with(["user must be logged in"]));
//!     }
//!     Ok(())
//! }
//!
//! let err = change_password("", false).unwrap_err();
//! assert!(type_of(&err).is(&ILLEGAL_ARGUMENT));
//! assert!(!type_of(&err).is(&ILLEGAL_STATE));
//!
//! let action = match_category!(err, {
//!     ILLEGAL_ARGUMENT => "fix the input",
//!     ILLEGAL_STATE    => "log in first",
//! });
//! assert_eq!(action, "fix the input");
//! ```
//!
//! ## Beyond prefix matching
//!
//! - [`Predicate::is_exact`] / [`MatchMode::Delimited`]: `Foo` no longer
//!   matches errors made by `FooBar`.
//! - [`category_enum!`] + [`CategorySet`]: classify once into an enum and
//!   `match` exhaustively.
//! - [`Registry`]: opt-in rejection of empty, duplicate, and colliding names.
//! - [`ResultExt`]: categorize any `Result`'s error.
//!
//! ## Environment
//!
//! | Variable                          | Effect |
//! |-----------------------------------|--------|
//! | `CERROR_LOG_LEVEL`                | off, error, warn, info, debug, trace |
//! | `CERROR_FLUSH_EPRINT`             | Flush stderr after each log line |
//! | `CERROR_MATCH_MODE`               | Registry match mode: prefix, delimited |
//! | `CERROR_REJECT_PREFIX_COLLISIONS` | Registry rejects `Foo`/`FooBar` pairs |
//! | `CERROR_WARN_ON_COLLISION`        | Registry warns on accepted collisions |

#[macro_use]
mod macros;
mod category;
mod error;
mod predicate;
mod set;
mod registry;
mod convert;

pub mod config;
pub mod env;
pub mod kprint;

#[cfg(test)]
mod properties;

// ── Public API ────────────────────────────────────────────────────

pub use category::{define, Category, PREFIX, SEPARATOR};
pub use error::CategoricalError;
pub use predicate::{type_of, MatchMode, ParseMatchModeError, Predicate};
pub use set::CategorySet;
pub use registry::{Registry, RegistryError, RegistryResult};
pub use config::{Config, ConfigError};
pub use convert::ResultExt;
pub use kprint::{set_log_level, LogLevel};

/// Convenience Result alias.
pub type CResult<T> = Result<T, CategoricalError>;
