//! Delay model abstraction.
//!
//! Handlers only see the `DelayPredictor` trait, so the bundled
//! logistic-regression scorer can be swapped for another backend (or a
//! stub in tests) without touching request handling.

pub mod logistic;

pub use logistic::{DelayModel, ModelWeights};

use crate::models::FlightFrame;
use thiserror::Error;

/// Error type for model operations.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Feature matrix has {actual} columns, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid model weights: {0}")]
    InvalidWeights(String),

    #[error("Failed to read weights file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse weights file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Encoded model input: named feature columns and one row per flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f32>>,
}

impl FeatureMatrix {
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Feature engineering plus inference for flight delays.
///
/// Implementations are shared read-only across requests.
pub trait DelayPredictor: Send + Sync {
    /// Encode a frame of flights into the model's feature layout.
    fn preprocess(&self, frame: &FlightFrame) -> Result<FeatureMatrix, ModelError>;

    /// One label per row: `1` for a predicted delay, `0` otherwise.
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<u8>, ModelError>;

    /// Health check.
    fn health_check(&self) -> Result<(), ModelError> {
        Ok(())
    }
}
