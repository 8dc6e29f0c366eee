//! Rule-based password policy evaluation
//!
//! This library checks a password against an ordered set of independent
//! rules and returns a [`Report`] with a `Strong`/`Weak` verdict and one
//! feedback line per failed rule.
//!
//! # Rules
//!
//! In evaluation order: minimum length, required character classes, leakage
//! of context strings (e.g. the username), common-password denylist,
//! keyboard/number sequence denylist, and runs of identical characters.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `server` (default): axum HTTP front end
//! - `cli` (default): interactive command-line front end
//!
//! # Environment Variables
//!
//! See [`PolicyConfig::from_env`]. `PWD_BLACKLIST_PATH` points at an extra
//! common-password file merged into the built-in list.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PolicyEngine, Verdict};
//! use secrecy::SecretString;
//!
//! let engine = PolicyEngine::default();
//! let password = SecretString::new("Tr0ub4dor&3Zz!".to_string().into());
//!
//! let report = engine.evaluate(Some(&password), None);
//! assert_eq!(report.verdict, Verdict::Strong);
//! assert_eq!(report.passed_checks, 6);
//! ```

// Internal modules
mod blacklist;
mod config;
mod evaluator;
mod report;
mod sections;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "server")]
pub mod server;

// Public API
pub use blacklist::{blacklist_path_from_env, load_blacklist, BlacklistError, BLACKLIST_PATH_ENV};
pub use config::{ConfigError, PolicyConfig, RequiredClasses};
pub use evaluator::{PolicyEngine, TOTAL_CHECKS};
pub use report::{CheckResult, Report, Verdict, EMPTY_PASSWORD_MESSAGE};
pub use sections::{Section, SECTIONS};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
