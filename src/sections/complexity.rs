//! Complexity section - checks for the required character classes.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::report::CheckResult;

/// Characters that count as symbols.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?\\|~`";

fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Passes if every required character class is present.
///
/// On failure the reason lists only the missing classes, in the order
/// upper, lower, digit, symbol.
pub fn complexity_section(
    password: &SecretString,
    _context: &[String],
    config: &PolicyConfig,
) -> CheckResult {
    let pwd = password.expose_secret();
    let required = config.required();

    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(is_symbol);

    let missing: Vec<_> = [
        (required.upper && !has_upper).then_some("uppercase letters (A-Z)"),
        (required.lower && !has_lower).then_some("lowercase letters (a-z)"),
        (required.digit && !has_digit).then_some("digits (0-9)"),
        (required.symbol && !has_symbol).then_some("symbols (e.g., !@#$%)"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return CheckResult::fail(format!("Password must include: {}.", missing.join(", ")));
    }
    CheckResult::pass()
}
