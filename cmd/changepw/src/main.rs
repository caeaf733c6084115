//! Change-password example
//!
//! Defines canonical categories, returns them from a fallible function,
//! and classifies them at the call site, both with sequential `is` checks
//! and with a category enum.
//!
//! # Usage
//!
//! ```text
//! changepw                      run the built-in scenarios
//! changepw <user> <old> <new>   try one change
//! ```
//!
//! # Environment Variables
//!
//! - `CHANGEPW_LOGGED_IN=<user>` - Treat this user as logged in (default: nobody)
//! - `CERROR_LOG_LEVEL=info` - Show per-attempt log lines

use cerror::env::env_get_str;
use cerror::{category_enum, ensure_category, kdebug, kinfo, match_category};
use cerror::{CResult, Category, CategorySet};

const ILLEGAL_ARGUMENT: Category = Category::new("IllegalArgument");
const ILLEGAL_STATE: Category = Category::new("IllegalState");
const BUG: Category = Category::new("BUG");

category_enum! {
    /// Everything `change_password` may return.
    enum PasswordError {
        IllegalArgument = "IllegalArgument",
        IllegalState = "IllegalState",
    }
}

/// Change the user's password.
///
/// Returns IllegalArgument for any empty input; IllegalState if the user
/// is not logged in.
fn change_password(user: &str, old_password: &str, new_password: &str) -> CResult<()> {
    ensure_category!(!user.is_empty(), ILLEGAL_ARGUMENT, "user is nil");
    ensure_category!(!old_password.is_empty(), ILLEGAL_ARGUMENT, "oldpassword is nil");
    ensure_category!(!new_password.is_empty(), ILLEGAL_ARGUMENT, "newPassword is nil");

    if !user_logged_in(user) {
        return Err(ILLEGAL_STATE.with(["user must be logged in to change pw"]));
    }

    kdebug!("password changed for {}", user);
    Ok(())
}

fn user_logged_in(user: &str) -> bool {
    env_get_str("CHANGEPW_LOGGED_IN", "") == user
}

/// Handle the outcome with sequential checks. Anything unexpected is a bug
/// in `change_password`, not a condition to recover from.
fn describe(user: &str, old: &str, new: &str) -> String {
    match change_password(user, old, new) {
        Ok(()) => "password changed".to_string(),
        Err(e) => match_category!(e, {
            ILLEGAL_ARGUMENT => format!("bad input ({e})"),
            ILLEGAL_STATE => format!("not allowed now ({e})"),
            _ => panic!(
                "{}",
                BUG.with([format!("unexpected error {e} returned by change_password()")])
            ),
        }),
    }
}

/// Same outcome, classified once into an enum.
fn advice(user: &str, old: &str, new: &str) -> &'static str {
    let Err(e) = change_password(user, old, new) else {
        return "nothing to do";
    };
    match PasswordError::of(&e) {
        Some(PasswordError::IllegalArgument) => "fill in every field",
        Some(PasswordError::IllegalState) => "log in first",
        None => panic!("{}", BUG.with(["unclassified", e.message()])),
    }
}

fn run(user: &str, old: &str, new: &str) {
    kinfo!("change_password(user={:?})", user);
    println!("{:<28} {}", format!("{user:?}/{old:?}/{new:?}"), describe(user, old, new));
    println!("{:<28} advice: {}", "", advice(user, old, new));
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let [user, old, new] = args.as_slice() {
        run(user, old, new);
        return;
    }

    println!("=== cerror change-password example ===\n");
    let scenarios = [
        ("", "old-secret", "new-secret"),
        ("theuser", "", "new-secret"),
        ("theuser", "old-secret", ""),
        ("theuser", "old-secret", "new-secret"),
    ];
    for (user, old, new) in scenarios {
        run(user, old, new);
    }
    println!("\n=== Example Complete ===");
}
