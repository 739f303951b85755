//! Service identity loaded from environment variables.

use crate::response::{HealthCheck, default_version};

/// Identity a service reports in its health checks.
///
/// Reads from environment variables:
/// - `SERVICE_NAME` — service name (default: `"food-delivery"`)
/// - `SERVICE_VERSION` — reported version (default: `"1.0.0"`)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub name: String,
    pub version: String,
}

impl ServiceConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: std::env::var("SERVICE_NAME").unwrap_or(defaults.name),
            version: std::env::var("SERVICE_VERSION").unwrap_or(defaults.version),
        }
    }

    /// A healthy report for this service, stamped with the current time.
    pub fn health_check(&self) -> HealthCheck {
        tracing::trace!(service = %self.name, "building health check");
        HealthCheck::new(self.name.clone()).with_version(self.version.clone())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "food-delivery".to_string(),
            version: default_version(),
        }
    }
}
