//! Repetition section - detects long runs of one character.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::report::CheckResult;

/// Fails if any character repeats more than `max_consecutive_repeats` times
/// in a row. Comparison is case-sensitive.
pub fn repetition_section(
    password: &SecretString,
    _context: &[String],
    config: &PolicyConfig,
) -> CheckResult {
    let limit = config.max_consecutive_repeats();

    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for c in password.expose_secret().chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run > limit {
            return CheckResult::fail(format!(
                "Password contains {} or more identical consecutive characters.",
                limit + 1
            ));
        }
    }
    CheckResult::pass()
}
