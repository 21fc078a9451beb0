// Configuration validation beyond what deserialization enforces
use estimate_service::CostEstimator;

use crate::error::{ConfigError, Result};
use crate::settings::EngineConfig;

pub fn validate(config: &EngineConfig) -> Result<()> {
    config.pricing.validate()?;

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be non-zero".to_string(),
        ));
    }
    if config.server.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "server.request_timeout_secs must be at least 1".to_string(),
        ));
    }
    if config.logging.log_level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.log_level must not be empty".to_string(),
        ));
    }

    Ok(())
}

impl EngineConfig {
    /// Estimator over the configured pricing tables and catalog mode
    pub fn build_estimator(&self) -> Result<CostEstimator> {
        Ok(CostEstimator::new(self.pricing.clone())?
            .with_strict_catalog(self.estimator.strict_catalog))
    }
}
