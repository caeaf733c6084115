//! Property tests over rendering and matching.

use proptest::prelude::*;

use crate::{define, type_of, Category, MatchMode, Predicate, PREFIX, SEPARATOR};

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}"
}

fn details_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,12}", 1..6)
}

proptest! {
    #[test]
    fn identical_details_render_identically(name in name_strategy(), details in details_strategy()) {
        let copy = details.clone();
        prop_assert_eq!(define(name.clone()).with(&details), define(name).with(&copy));
    }

    #[test]
    fn zero_detail_instance_matches_its_category(name in name_strategy()) {
        let cat = define(name);
        let e = cat.error();
        prop_assert!(type_of(&e).is(&cat));
        prop_assert!(type_of(&e).is_exact(&cat));
    }

    #[test]
    fn detailed_instance_matches_its_category(name in name_strategy(), details in details_strategy()) {
        let cat = define(name);
        let e = cat.with(&details);
        prop_assert!(type_of(&e).is(&cat));
        prop_assert!(type_of(&e).is_exact(&cat));
    }

    #[test]
    fn zero_detail_render_is_prefix(name in name_strategy(), details in details_strategy()) {
        let cat = define(name);
        let bare = cat.error();
        let full = cat.with(&details);
        prop_assert!(full.message().starts_with(bare.message()));
    }

    #[test]
    fn render_format(name in name_strategy(), details in details_strategy()) {
        let e = define(name.clone()).with(&details);
        let expected = format!("{}{}{}{}", PREFIX, name, SEPARATOR, details.join(" "));
        prop_assert_eq!(e.message(), expected.as_str());
    }

    #[test]
    fn unrelated_categories_do_not_match(a in name_strategy(), b in name_strategy()) {
        prop_assume!(!a.starts_with(&b) && !b.starts_with(&a));
        let (ca, cb) = (define(a), define(b));
        prop_assert!(!type_of(&ca.error()).is(&cb));
        prop_assert!(!type_of(&cb.error()).is(&ca));
    }

    #[test]
    fn delimited_never_matches_longer_name(a in name_strategy(), suffix in "[A-Za-z0-9]{1,8}") {
        let short = define(a.clone());
        let long = define(format!("{a}{suffix}"));
        let e = long.error();
        prop_assert!(type_of(&e).is(&short));
        prop_assert!(!type_of(&e).matches(&short, MatchMode::Delimited));
    }

    #[test]
    fn arbitrary_text_never_panics(text in any::<String>(), name in any::<String>()) {
        let cat = define(name);
        let p = Predicate::from_message(&text);
        let _ = p.is(&cat);
        let _ = p.is_exact(&cat);
    }
}

#[test]
fn scenario_illegal_argument_vs_state() {
    const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
    const ILLEGAL_STATE: Category = Category::new("IllegalState");

    let result = ILLEGAL_ARGUMENT.with(["user is nil"]);
    assert!(type_of(&result).is(&ILLEGAL_ARGUMENT));
    assert!(!type_of(&result).is(&ILLEGAL_STATE));
}

#[test]
fn exact_renderings() {
    assert_eq!(define("X").error().message(), format!("{PREFIX}X"));
    assert_eq!(define("X").with(["a", "b"]).message(), format!("{PREFIX}X - a b"));
}

#[test]
fn empty_detail_boundary() {
    // neither double-trimmed nor left with a stray space of its own
    assert_eq!(define("X").with(["a", ""]).message(), format!("{PREFIX}X - a "));
    assert_eq!(define("X").with([""]).message(), format!("{PREFIX}X - "));
    assert_eq!(define("X").with(["", ""]).message(), format!("{PREFIX}X -  "));
}
