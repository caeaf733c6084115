//! Opt-in uniqueness checks for category definitions.
//!
//! The core accepts any name, including empty and duplicate ones. A
//! `Registry` is an owned value that refuses those, refuses names containing
//! the separator (they defeat delimited matching), optionally refuses
//! names that prefix each other (`Foo` / `FooBar`), and classifies errors
//! against everything it has defined. There is no global registry.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::category::{define, Category, SEPARATOR};
use crate::config::{Config, ConfigError};
use crate::predicate::type_of;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur when defining categories through a [`Registry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Category name was empty
    EmptyName,

    /// Category name was already defined
    Duplicate(String),

    /// Category name contains the separator
    SeparatorInName(String),

    /// One name is a prefix of the other
    PrefixCollision { name: String, existing: String },

    /// Registry configuration was rejected
    Config(ConfigError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyName => write!(f, "category name is empty"),
            RegistryError::Duplicate(name) => write!(f, "category {:?} already defined", name),
            RegistryError::SeparatorInName(name) => {
                write!(f, "category {:?} contains the separator {:?}", name, SEPARATOR)
            }
            RegistryError::PrefixCollision { name, existing } => write!(
                f,
                "category {:?} collides with {:?}: one is a prefix of the other",
                name, existing
            ),
            RegistryError::Config(e) => write!(f, "config error: {}", e),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegistryError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RegistryError {
    fn from(e: ConfigError) -> Self {
        RegistryError::Config(e)
    }
}

/// A validated, ordered set of categories.
///
/// ```
/// use cerror::{Registry, RegistryError};
///
/// let mut registry = Registry::new();
/// let illegal_argument = registry.define("IllegalArgument")?;
/// assert!(matches!(
///     registry.define("IllegalArgument"),
///     Err(RegistryError::Duplicate(_))
/// ));
///
/// let e = illegal_argument.with(["user is nil"]);
/// assert_eq!(registry.classify(&e), Some(&illegal_argument));
/// # Ok::<(), RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    config: Config,
    categories: Vec<Category>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry with library defaults (no env lookup).
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            categories: Vec::new(),
        }
    }

    /// Empty registry with an explicit configuration.
    pub fn with_config(config: Config) -> RegistryResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            categories: Vec::new(),
        })
    }

    /// Empty registry configured from the environment.
    pub fn from_env() -> RegistryResult<Self> {
        Self::with_config(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Define a category, enforcing non-empty, unique names that do not
    /// contain [`SEPARATOR`].
    pub fn define(&mut self, name: impl Into<Cow<'static, str>>) -> RegistryResult<Category> {
        let category = define(name);
        let name = category.name();

        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if name.contains(SEPARATOR) {
            return Err(RegistryError::SeparatorInName(name.to_string()));
        }
        if self.contains(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        if let Some(existing) = self
            .categories
            .iter()
            .find(|c| c.name().starts_with(name) || name.starts_with(c.name()))
        {
            if self.config.reject_prefix_collisions {
                return Err(RegistryError::PrefixCollision {
                    name: name.to_string(),
                    existing: existing.name().to_string(),
                });
            }
            if let Some(warning) = self.collision_warning(name, existing.name()) {
                crate::kwarn!("{}", warning);
            }
        }

        crate::kdebug!("defined category {:?}", name);
        self.categories.push(category.clone());
        Ok(category)
    }

    fn collision_warning(&self, name: &str, existing: &str) -> Option<String> {
        self.config.warn_on_collision.then(|| {
            format!(
                "category {:?} collides with {:?}; prefix matching cannot tell them apart",
                name, existing
            )
        })
    }

    /// Look up a defined category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All categories, in definition order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The defined category an error belongs to.
    ///
    /// Matches under the configured [`crate::MatchMode`] and prefers the
    /// longest name when several match.
    pub fn classify(&self, err: &(dyn Error + 'static)) -> Option<&Category> {
        type_of(err).best_match(&self.categories, self.config.match_mode)
    }
}
