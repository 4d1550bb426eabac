pub mod predict;

pub use predict::{FlightInput, HealthResponse, PredictRequest, PredictResponse};
