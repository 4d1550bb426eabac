pub mod metrics;
pub mod model;

pub use self::metrics::{get_metrics, init_metrics, record_prediction};
pub use model::{DelayModel, DelayPredictor, FeatureMatrix, ModelError, ModelWeights};
