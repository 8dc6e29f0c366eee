//! Sequence section - detects keyboard rows and digit runs.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::report::CheckResult;

/// Fails on the first configured sequence found anywhere in the password.
///
/// Matching ignores case. The list is scanned in configured order, so that
/// order decides which sequence is named when several match.
pub fn sequence_section(
    password: &SecretString,
    _context: &[String],
    config: &PolicyConfig,
) -> CheckResult {
    let pwd_lower = password.expose_secret().to_lowercase();

    let found = config
        .sequences()
        .iter()
        .filter(|seq| !seq.is_empty())
        .find(|seq| pwd_lower.contains(&seq.to_lowercase()));

    match found {
        Some(seq) => CheckResult::fail(format!("Password contains a common sequence ('{seq}').")),
        None => CheckResult::pass(),
    }
}
