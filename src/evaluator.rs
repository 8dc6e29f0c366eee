//! Policy engine - runs every section and aggregates the results.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{ConfigError, PolicyConfig};
use crate::report::{CheckResult, Report};
use crate::sections::SECTIONS;

/// Number of checks in every report, including the empty-password one.
pub const TOTAL_CHECKS: usize = SECTIONS.len();

/// Evaluates passwords against a fixed [`PolicyConfig`].
///
/// The engine holds no mutable state; share it behind an `Arc` and call
/// [`evaluate`](Self::evaluate) from as many threads as needed.
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    config: PolicyConfig,
}

impl PolicyEngine {
    /// Binds a config to a new engine.
    ///
    /// # Errors
    ///
    /// Returns the [`PolicyConfig::validate`] error for a zero minimum length
    /// or a zero repeat threshold.
    pub fn new(config: PolicyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Evaluates a password, using the username (if any) as context.
    ///
    /// A missing or empty password returns the empty-password report without
    /// running any section. An empty username means no context.
    pub fn evaluate(&self, password: Option<&SecretString>, username: Option<&str>) -> Report {
        let context: Vec<String> = username
            .filter(|u| !u.is_empty())
            .map(|u| vec![u.to_string()])
            .unwrap_or_default();
        self.evaluate_with_context(password, &context)
    }

    /// Evaluates a password against an arbitrary list of context strings.
    pub fn evaluate_with_context(
        &self,
        password: Option<&SecretString>,
        context: &[String],
    ) -> Report {
        let password = match password {
            Some(p) if !p.expose_secret().is_empty() => p,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Empty password, skipping sections");
                return Report::empty_password(TOTAL_CHECKS);
            }
        };

        // Every section runs; no short-circuit on failure.
        let report = Report::aggregate(SECTIONS.iter().map(|(_section_name, section_fn)| {
            let result: CheckResult = section_fn(password, context, &self.config);

            #[cfg(feature = "tracing")]
            tracing::trace!(section = *_section_name, passed = result.passed, "Section evaluated");

            result
        }));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            verdict = %report.verdict,
            passed = report.passed_checks,
            total = report.total_checks,
            "Password evaluated"
        );

        report
    }
}

/// Evaluates and sends the report over a channel.
///
/// Nothing is sent if `token` is cancelled before the report is ready.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    engine: &PolicyEngine,
    password: &SecretString,
    username: Option<&str>,
    token: CancellationToken,
    tx: mpsc::Sender<Report>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Evaluation cancelled before start");
        return;
    }

    let report = engine.evaluate(Some(password), username);

    if token.is_cancelled() {
        return;
    }

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_tx_sends_report() {
        let (tx, mut rx) = mpsc::channel(1);
        let engine = PolicyEngine::default();

        evaluate_tx(&engine, &secret("Tr0ub4dor&3Zz!"), None, CancellationToken::new(), tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert!(report.is_strong());
    }

    #[tokio::test]
    async fn test_evaluate_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_tx(&PolicyEngine::default(), &secret("whatever"), None, token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
