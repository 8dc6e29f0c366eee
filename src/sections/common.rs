//! Common-password section - exact match against the denylist.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::report::CheckResult;

/// Fails if the lowercased password is one of the configured common passwords.
///
/// Only whole-password matches count; substrings are the sequence section's job.
pub fn common_password_section(
    password: &SecretString,
    _context: &[String],
    config: &PolicyConfig,
) -> CheckResult {
    if config
        .common_passwords()
        .contains(&password.expose_secret().to_lowercase())
    {
        return CheckResult::fail("Password is too common.");
    }
    CheckResult::pass()
}
