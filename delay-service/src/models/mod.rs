pub mod carrier;
pub mod flight;

pub use carrier::CarrierRegistry;
pub use flight::{FlightFrame, FlightRecord, FlightType, Month};
