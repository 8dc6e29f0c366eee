use std::sync::Arc;

use crate::evaluator::PolicyEngine;

use super::config::ServerConfig;

/// Shared state available to handlers via `State<AppState>`.
///
/// Cheap to clone; the engine and config are read-only behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PolicyEngine>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(engine: PolicyEngine, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}
