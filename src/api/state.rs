use std::sync::Arc;

use crate::adapters::{InMemoryHistory, JwtVerifier, NoopRecorder};
use crate::config::ServerConfig;
use crate::core::engine::NumerologyEngine;
use crate::domain::ports::{CalculationRecorder, CallerVerifier};
use crate::utils::error::Result;
use crate::utils::validation::ValidationRules;

pub struct AppState {
    pub engine: NumerologyEngine,
    pub rules: ValidationRules,
    pub verifier: Arc<dyn CallerVerifier>,
    pub recorder: Arc<dyn CalculationRecorder>,
}

impl AppState {
    pub fn new(
        rules: ValidationRules,
        verifier: Arc<dyn CallerVerifier>,
        recorder: Arc<dyn CalculationRecorder>,
    ) -> Arc<Self> {
        Arc::new(Self {
            engine: NumerologyEngine::new(),
            rules,
            verifier,
            recorder,
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Arc<Self>> {
        let rules = config.validation_rules()?;
        let verifier: Arc<dyn CallerVerifier> = Arc::new(JwtVerifier::new(config.jwt_secret()));

        let recorder: Arc<dyn CalculationRecorder> = if config.history_enabled() {
            tracing::info!(
                "History enabled, keeping up to {} records per caller",
                config.max_records_per_caller()
            );
            Arc::new(InMemoryHistory::new(config.max_records_per_caller()))
        } else {
            tracing::info!("History disabled");
            Arc::new(NoopRecorder)
        };

        Ok(Self::new(rules, verifier, recorder))
    }
}
