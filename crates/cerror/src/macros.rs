/// Instantiate a categorical error, with any number of details.
///
/// # Forms
///
/// ```ignore
/// // No details: "[cerror] IllegalState"
/// cerr!(ILLEGAL_STATE)
///
/// // Details of any string-like type, joined by spaces:
/// // "[cerror] IllegalArgument - user is nil"
/// cerr!(ILLEGAL_ARGUMENT, "user", String::from("is nil"))
/// ```
#[macro_export]
macro_rules! cerr {
    ($category:expr $(,)?) => {
        $crate::Category::error(&$category)
    };

    ($category:expr, $($detail:expr),+ $(,)?) => {
        $crate::Category::with(
            &$category,
            [$( ::core::convert::AsRef::<str>::as_ref(&$detail) ),+],
        )
    };
}

/// Early-return a categorical error if a condition is false.
///
/// ```ignore
/// ensure_category!(!user.is_empty(), ILLEGAL_ARGUMENT, "user is nil");
/// ```
#[macro_export]
macro_rules! ensure_category {
    ($cond:expr, $category:expr $(, $detail:expr)* $(,)?) => {
        if !$cond {
            return Err($crate::cerr!($category $(, $detail)*).into());
        }
    };
}

/// Dispatch on an error's category with sequential `is` checks.
///
/// Arms are tried top to bottom, so put `FooBar` before `Foo` when both
/// exist. `_` is the fallback. Without a `_` arm, an error that matches no
/// arm panics: the producer broke its own contract.
///
/// ```ignore
/// match_category!(err, {
///     ILLEGAL_ARGUMENT => "bad input",
///     ILLEGAL_STATE    => "not ready",
///     _                => "unknown",
/// })
/// ```
#[macro_export]
macro_rules! match_category {
    ($error:expr, {
        $($arms:tt)*
    }) => {{
        let __predicate = $crate::type_of(&$error);
        $crate::__match_category_arms!(__predicate; $($arms)*)
    }};
}

/// Internal helper for match_category! — one arm per recursion.
#[doc(hidden)]
#[macro_export]
macro_rules! __match_category_arms {
    // No arms left: nothing matched and there was no fallback
    ($p:ident; ) => {
        unreachable!("unhandled categorical error: {}", $p.message())
    };

    // Fallback arm: _
    ($p:ident; _ => $handler:expr $(, $($rest:tt)*)?) => {
        $handler
    };

    // Category arm
    ($p:ident; $category:expr => $handler:expr $(, $($rest:tt)*)?) => {
        if $p.is(&$category) {
            $handler
        } else {
            $crate::__match_category_arms!($p; $($($rest)*)?)
        }
    };
}

/// Declare a closed set of categories as a `Copy` enum.
///
/// Each variant maps to one category name. The enum implements
/// [`crate::CategorySet`], so an error can be classified into a variant and
/// handled with an exhaustive `match`.
///
/// ```
/// use cerror::{category_enum, CategorySet};
///
/// category_enum! {
///     pub enum PasswordError {
///         IllegalArgument = "IllegalArgument",
///         IllegalState = "IllegalState",
///     }
/// }
///
/// let e = PasswordError::IllegalState.with(["not logged in"]);
/// assert_eq!(PasswordError::of(&e), Some(PasswordError::IllegalState));
/// ```
#[macro_export]
macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub const fn category(self) -> $crate::Category {
                match self {
                    $( $name::$variant => $crate::Category::new($label), )+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            pub fn error(self) -> $crate::CategoricalError {
                self.category().error()
            }

            pub fn with<I, S>(self, details: I) -> $crate::CategoricalError
            where
                I: ::core::iter::IntoIterator<Item = S>,
                S: ::core::convert::AsRef<str>,
            {
                self.category().with(details)
            }
        }

        impl $crate::CategorySet for $name {
            fn all() -> &'static [Self] {
                $name::ALL
            }

            fn category(self) -> $crate::Category {
                $name::category(self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
