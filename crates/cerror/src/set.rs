//! Closed sets of categories as enums.
//!
//! Sequential `is` checks make the category a derived string comparison.
//! A [`CategorySet`] turns it into a first-class tag: classify once, then
//! `match` exhaustively. Implement it with [`crate::category_enum!`].

use std::error::Error;

use crate::category::Category;
use crate::predicate::{type_of, Predicate};

/// An enumerable set of categories, one per variant.
pub trait CategorySet: Sized + Copy + 'static {
    /// Every member of the set.
    fn all() -> &'static [Self];

    /// The category this member stands for.
    fn category(self) -> Category;

    /// The member whose category the predicate matches.
    ///
    /// Uses delimited matching and prefers the longest name, so neither
    /// declaration order nor `Foo`/`FooBar` style names can misclassify.
    fn classify(predicate: &Predicate<'_>) -> Option<Self> {
        let mut best: Option<(Self, usize)> = None;
        for &member in Self::all() {
            let category = member.category();
            if !predicate.is_exact(&category) {
                continue;
            }
            let len = category.name().len();
            match best {
                Some((_, best_len)) if best_len >= len => {}
                _ => best = Some((member, len)),
            }
        }
        best.map(|(member, _)| member)
    }

    /// Classify an error value.
    fn of(err: &(dyn Error + 'static)) -> Option<Self> {
        Self::classify(&type_of(err))
    }
}
