//! Configuration for all subsystems.
//!
//! Every section is serde-deserializable with full defaults, so a partial
//! TOML file (or none at all) always yields a working config.

pub mod defaults;

mod context_config;
mod dispatch_config;
mod extraction_config;
mod retrieval_config;

pub use context_config::ContextConfig;
pub use dispatch_config::DispatchConfig;
pub use extraction_config::ExtractionConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ExinError, ExinResult};

/// Root configuration for the decision engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExinConfig {
    pub retrieval: RetrievalConfig,
    pub context: ContextConfig,
    pub extraction: ExtractionConfig,
    pub dispatch: DispatchConfig,
}

impl ExinConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml_str(s: &str) -> ExinResult<Self> {
        toml::from_str(s).map_err(|e| ExinError::Config(e.to_string()))
    }
}
