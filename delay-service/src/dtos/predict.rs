use crate::models::{CarrierRegistry, FlightRecord, FlightType, Month};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

pub const INVALID_OPERA: &str = "OPERA should be an airline operator";
pub const INVALID_TIPOVUELO: &str = "TIPOVUELO should be either 'N' or 'I'";
pub const INVALID_MES: &str = "MES should be an integer between 1 and 12";
pub const EMPTY_FLIGHTS: &str = "flights should contain at least one flight";

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub flights: Vec<FlightInput>,
}

impl PredictRequest {
    /// Split off the flight that gets scored, along with how many trailing
    /// flights are dropped. An empty batch is rejected.
    pub fn into_first(self) -> Result<(FlightInput, usize), AppError> {
        let mut flights = self.flights.into_iter();
        let first = flights
            .next()
            .ok_or_else(|| AppError::bad_request(EMPTY_FLIGHTS))?;
        Ok((first, flights.count()))
    }
}

/// One flight as submitted. `MES` is kept as a raw JSON number so that
/// whole floats (`3.0`) are accepted and fractional months fail with the
/// field message instead of a generic parse error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlightInput {
    #[serde(rename = "OPERA")]
    pub opera: String,
    #[serde(rename = "TIPOVUELO")]
    pub tipovuelo: String,
    #[serde(rename = "MES")]
    pub mes: serde_json::Number,
}

impl FlightInput {
    /// Check `OPERA`, `TIPOVUELO` and `MES`, in that order, and build the
    /// typed record. The first failing field decides the error.
    pub fn into_record(self, carriers: &CarrierRegistry) -> Result<FlightRecord, AppError> {
        if !carriers.contains(&self.opera) {
            return Err(AppError::bad_request(INVALID_OPERA));
        }

        let flight_type: FlightType = self
            .tipovuelo
            .parse()
            .map_err(|_| AppError::bad_request(INVALID_TIPOVUELO))?;

        let month = month_from_json(&self.mes).ok_or_else(|| AppError::bad_request(INVALID_MES))?;

        Ok(FlightRecord {
            carrier: self.opera,
            flight_type,
            month,
        })
    }
}

/// Integers and integral floats in 1..=12.
fn month_from_json(value: &serde_json::Number) -> Option<Month> {
    if let Some(month) = value.as_u64() {
        return Month::new(month);
    }

    let month = value.as_f64()?;
    if month.is_finite() && month.fract() == 0.0 && (1.0..=12.0).contains(&month) {
        Month::new(month as u64)
    } else {
        None
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predict: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}
