//! Context section - rejects passwords that contain the username or similar.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::report::CheckResult;

/// Context strings shorter than this are ignored.
const MIN_CONTEXT_LEN: usize = 3;

/// Passes if no context string appears in the password, ignoring case.
///
/// The first offending entry is reported as supplied.
pub fn context_section(
    password: &SecretString,
    context: &[String],
    _config: &PolicyConfig,
) -> CheckResult {
    if context.is_empty() {
        return CheckResult::pass();
    }

    let pwd_lower = password.expose_secret().to_lowercase();
    let leaked = context
        .iter()
        .filter(|info| info.chars().count() >= MIN_CONTEXT_LEN)
        .find(|info| pwd_lower.contains(&info.to_lowercase()));

    match leaked {
        Some(info) => CheckResult::fail(format!(
            "Password should not contain significant parts of your username or related info ('{info}')."
        )),
        None => CheckResult::pass(),
    }
}
