//! Environment-driven settings and logging initialization.

use tracing_subscriber::{EnvFilter, fmt};

use crate::adapters::DEFAULT_COMPOSE_PROGRAM;

/// Overrides the orchestrator program.
pub const COMPOSE_BIN_ENV: &str = "DCM_COMPOSE_BIN";

/// Tracing filter directive; falls back to `RUST_LOG`.
pub const LOG_ENV: &str = "DCM_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings.
///
/// The installation root is deliberately absent: it always derives from the binary location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub compose_program: String,
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty =
            |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            compose_program: non_empty(COMPOSE_BIN_ENV)
                .unwrap_or_else(|| DEFAULT_COMPOSE_PROGRAM.to_string()),
            log_filter: non_empty(LOG_ENV),
        }
    }

    /// Install the stderr tracing subscriber. Safe to call more than once.
    pub fn init_logging(&self) {
        let filter = match &self.log_filter {
            Some(directive) => EnvFilter::try_new(directive)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        };

        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { compose_program: DEFAULT_COMPOSE_PROGRAM.to_string(), log_filter: None }
    }
}
