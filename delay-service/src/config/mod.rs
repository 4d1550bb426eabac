use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, Deserialize)]
pub struct DelayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub host: String,
    pub model: ModelConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// JSON weights file; the built-in weights are used when unset.
    pub weights_path: Option<String>,
    /// Overrides the decision threshold stored with the weights.
    pub threshold: Option<f32>,
}

impl DelayConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Build the service config from `common` plus a key lookup, so tests
    /// can supply variables without touching the process environment.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_prod = lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()) == "prod";

        let weights_path = if is_prod {
            Some(require(&lookup, "MODEL_WEIGHTS_PATH")?)
        } else {
            lookup("MODEL_WEIGHTS_PATH")
        };

        let threshold = lookup("MODEL_THRESHOLD")
            .map(|raw| parse_threshold(&raw))
            .transpose()?;

        Ok(DelayConfig {
            common,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            model: ModelConfig {
                weights_path,
                threshold,
            },
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|e| !e.is_empty()),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.common.port)
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            host: DEFAULT_HOST.to_string(),
            model: ModelConfig::default(),
            otlp_endpoint: None,
        }
    }
}

fn parse_threshold(raw: &str) -> Result<f32, AppError> {
    let value: f32 = raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "MODEL_THRESHOLD must be a number, got '{}': {}",
            raw,
            e
        ))
    })?;

    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "MODEL_THRESHOLD must be within [0, 1], got {}",
            value
        )));
    }

    Ok(value)
}

fn require<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| {
        AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))
    })
}
