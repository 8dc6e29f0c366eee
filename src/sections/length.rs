//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use crate::config::PolicyConfig;
use crate::report::CheckResult;

/// Passes if the password has at least `min_length` characters.
///
/// Characters are Unicode scalar values, not bytes.
pub fn length_section(
    password: &SecretString,
    _context: &[String],
    config: &PolicyConfig,
) -> CheckResult {
    if password.expose_secret().chars().count() < config.min_length() {
        return CheckResult::fail(format!(
            "Password is too short (minimum {} characters required).",
            config.min_length()
        ));
    }
    CheckResult::pass()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> CheckResult {
        let pwd = SecretString::new(pwd.to_string().into());
        length_section(&pwd, &[], &PolicyConfig::default())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            check("Short1!"),
            CheckResult::fail("Password is too short (minimum 12 characters required).")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(check("123456789012"), CheckResult::pass());
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 12 characters, 24 bytes
        assert_eq!(check("éééééééééééé"), CheckResult::pass());
        assert!(!check("ééééé").passed);
    }

    #[test]
    fn test_length_section_custom_minimum() {
        let config = PolicyConfig::default().with_min_length(4);
        let pwd = SecretString::new("abcd".to_string().into());
        assert_eq!(length_section(&pwd, &[], &config), CheckResult::pass());

        let pwd = SecretString::new("abc".to_string().into());
        let result = length_section(&pwd, &[], &config);
        assert_eq!(
            result.reason.as_deref(),
            Some("Password is too short (minimum 4 characters required).")
        );
    }
}
