use config_engine::EngineConfig;
use error_common::{MediCostError, Result};
use estimate_service::CostEstimator;
use logger_redacted::PiiRedactor;
use std::sync::Arc;
use std::time::Instant;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct MediCostServer {
    /// Merged, validated configuration
    pub config: Arc<EngineConfig>,
    /// Estimator built from the configured pricing tables
    pub estimator: Arc<CostEstimator>,
    /// Redactor for request values echoed into logs
    pub redactor: Arc<PiiRedactor>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl MediCostServer {
    /// Build server state from a loaded configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        let estimator = config
            .build_estimator()
            .map_err(|e| MediCostError::ConfigError(e.to_string()))?;
        let redactor = PiiRedactor::new(&config.logging)
            .map_err(|e| MediCostError::ConfigError(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            estimator: Arc::new(estimator),
            redactor: Arc::new(redactor),
            started_at: Instant::now(),
        })
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
