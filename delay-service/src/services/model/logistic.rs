//! Logistic-regression delay scorer over one-hot encoded flight features.

use super::{DelayPredictor, FeatureMatrix, ModelError};
use crate::config::ModelConfig;
use crate::models::{FlightFrame, FlightRecord, FlightType, Month};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_THRESHOLD: f32 = 0.5;

/// Serialized form of the model, as stored in the weights file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelWeights {
    pub features: Vec<String>,
    pub weights: Vec<f32>,
    pub intercept: f32,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

impl Default for ModelWeights {
    /// Class-balanced fit over the ten most informative one-hot features.
    fn default() -> Self {
        let (features, weights): (Vec<String>, Vec<f32>) = [
            ("OPERA_Latin American Wings", 0.69),
            ("MES_7", 0.60),
            ("MES_10", 0.49),
            ("OPERA_Grupo LATAM", -0.32),
            ("MES_12", 0.55),
            ("TIPOVUELO_I", 0.42),
            ("MES_4", -0.35),
            ("MES_11", -0.28),
            ("OPERA_Sky Airline", 0.28),
            ("OPERA_Copa Air", -0.95),
        ]
        .into_iter()
        .map(|(name, w)| (name.to_string(), w))
        .unzip();

        Self {
            features,
            weights,
            intercept: -0.13,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A single one-hot column: `OPERA_<name>`, `TIPOVUELO_<code>` or `MES_<n>`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FeatureKey {
    Operator(String),
    FlightType(FlightType),
    Month(Month),
}

impl FeatureKey {
    fn parse(name: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidWeights(format!("unknown feature column '{}'", name));

        if let Some(operator) = name.strip_prefix("OPERA_") {
            Ok(FeatureKey::Operator(operator.to_string()))
        } else if let Some(code) = name.strip_prefix("TIPOVUELO_") {
            code.parse::<FlightType>()
                .map(FeatureKey::FlightType)
                .map_err(|_| invalid())
        } else if let Some(month) = name.strip_prefix("MES_") {
            month
                .parse::<u64>()
                .ok()
                .and_then(Month::new)
                .map(FeatureKey::Month)
                .ok_or_else(invalid)
        } else {
            Err(invalid())
        }
    }

    fn is_set(&self, record: &FlightRecord) -> bool {
        match self {
            FeatureKey::Operator(name) => record.carrier == *name,
            FeatureKey::FlightType(flight_type) => record.flight_type == *flight_type,
            FeatureKey::Month(month) => record.month == *month,
        }
    }
}

/// Bundled delay model.
#[derive(Debug, Clone)]
pub struct DelayModel {
    columns: Vec<String>,
    keys: Vec<FeatureKey>,
    weights: Vec<f32>,
    intercept: f32,
    threshold: f32,
}

impl DelayModel {
    pub fn new(stored: ModelWeights) -> Result<Self, ModelError> {
        if stored.features.len() != stored.weights.len() {
            return Err(ModelError::InvalidWeights(format!(
                "{} features but {} weights",
                stored.features.len(),
                stored.weights.len()
            )));
        }
        if stored.features.is_empty() {
            return Err(ModelError::InvalidWeights("no features".to_string()));
        }
        check_threshold(stored.threshold)?;

        let keys = stored
            .features
            .iter()
            .map(|name| FeatureKey::parse(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            columns: stored.features,
            keys,
            weights: stored.weights,
            intercept: stored.intercept,
            threshold: stored.threshold,
        })
    }

    /// Load weights from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        let stored: ModelWeights = serde_json::from_str(&raw)?;
        Self::new(stored)
    }

    /// Weights file from config when set, built-in weights otherwise.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
        let model = match &config.weights_path {
            Some(path) => {
                tracing::info!(path = %path, "Loading delay model weights from file");
                Self::load(path)?
            }
            None => {
                tracing::info!("Using built-in delay model weights");
                Self::new(ModelWeights::default())?
            }
        };

        match config.threshold {
            Some(threshold) => model.with_threshold(threshold),
            None => Ok(model),
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, ModelError> {
        check_threshold(threshold)?;
        self.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Delay probability per row.
    pub fn probabilities(&self, features: &FeatureMatrix) -> Result<Vec<f32>, ModelError> {
        if features.width() != self.weights.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.weights.len(),
                actual: features.width(),
            });
        }

        features
            .rows
            .iter()
            .map(|row| {
                if row.len() != self.weights.len() {
                    return Err(ModelError::ShapeMismatch {
                        expected: self.weights.len(),
                        actual: row.len(),
                    });
                }
                let logit = self.intercept
                    + self
                        .weights
                        .iter()
                        .zip(row)
                        .map(|(w, x)| w * x)
                        .sum::<f32>();
                Ok(sigmoid(logit))
            })
            .collect()
    }
}

impl DelayPredictor for DelayModel {
    fn preprocess(&self, frame: &FlightFrame) -> Result<FeatureMatrix, ModelError> {
        let rows: Vec<Vec<f32>> = frame
            .rows()
            .iter()
            .map(|record| {
                self.keys
                    .iter()
                    .map(|key| if key.is_set(record) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();

        Ok(FeatureMatrix {
            columns: self.columns.clone(),
            rows,
        })
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<u8>, ModelError> {
        Ok(self
            .probabilities(features)?
            .into_iter()
            .map(|p| u8::from(p >= self.threshold))
            .collect())
    }
}

fn check_threshold(threshold: f32) -> Result<(), ModelError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(ModelError::InvalidWeights(format!(
            "threshold {} outside [0, 1]",
            threshold
        )))
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
