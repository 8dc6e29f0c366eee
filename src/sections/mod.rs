//! Password policy sections
//!
//! Each section checks one independent aspect of the password. Sections never
//! look at each other's results and all of them run on every evaluation.

mod common;
mod complexity;
mod context;
mod length;
mod repetition;
mod sequence;

pub use common::common_password_section;
pub use complexity::complexity_section;
pub use context::context_section;
pub use length::length_section;
pub use repetition::repetition_section;
pub use sequence::sequence_section;

use secrecy::SecretString;

use crate::config::PolicyConfig;
use crate::report::CheckResult;

/// Signature shared by every section: password, context strings, policy.
pub type Section = fn(&SecretString, &[String], &PolicyConfig) -> CheckResult;

/// Sections in evaluation order. Feedback follows this order.
pub const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("complexity", complexity_section),
    ("context", context_section),
    ("common", common_password_section),
    ("sequence", sequence_section),
    ("repetition", repetition_section),
];
