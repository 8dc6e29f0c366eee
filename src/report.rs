//! Evaluation results: per-rule outcomes and the aggregated report.

use serde::{Deserialize, Serialize};

/// Feedback line used when no password was supplied.
pub const EMPTY_PASSWORD_MESSAGE: &str = "Password cannot be empty.";

/// Outcome of a single rule.
///
/// A passing result never carries a reason. A failing result normally does,
/// but may be silent: it still lowers the pass count while adding no feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub passed: bool,
    pub reason: Option<String>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: Some(reason.into()),
        }
    }

    /// A failure without a message.
    pub fn fail_silently() -> Self {
        Self {
            passed: false,
            reason: None,
        }
    }
}

/// Binary outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Strong,
    Weak,
}

impl Verdict {
    /// Short glyph shown next to the verdict.
    pub fn symbol(self) -> &'static str {
        match self {
            Verdict::Strong => "✅",
            Verdict::Weak => "❌",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Strong => "Strong",
            Verdict::Weak => "Weak",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated result of running every rule against one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub verdict: Verdict,
    pub verdict_message: String,
    pub feedback: Vec<String>,
    pub passed_checks: usize,
    pub total_checks: usize,
}

impl Report {
    /// Report for a missing or empty password. No rule is executed.
    pub fn empty_password(total_checks: usize) -> Self {
        Self {
            verdict: Verdict::Weak,
            verdict_message: Verdict::Weak.symbol().to_string(),
            feedback: vec![EMPTY_PASSWORD_MESSAGE.to_string()],
            passed_checks: 0,
            total_checks,
        }
    }

    /// Folds rule results, in execution order, into a report.
    ///
    /// The verdict follows the feedback list, not the pass count: a silent
    /// failure lowers `passed_checks` and still leaves the verdict `Strong`.
    pub fn aggregate<I>(results: I) -> Self
    where
        I: IntoIterator<Item = CheckResult>,
    {
        let mut feedback = Vec::new();
        let mut passed_checks = 0;
        let mut total_checks = 0;

        for result in results {
            total_checks += 1;
            if result.passed {
                passed_checks += 1;
                continue;
            }
            match result.reason {
                Some(reason) if !reason.is_empty() => feedback.push(reason),
                _ => {}
            }
        }

        let verdict = if feedback.is_empty() {
            Verdict::Strong
        } else {
            Verdict::Weak
        };

        Self {
            verdict,
            verdict_message: verdict.symbol().to_string(),
            feedback,
            passed_checks,
            total_checks,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.verdict == Verdict::Strong
    }
}
