/// Flight type code carried in `TIPOVUELO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightType {
    Domestic,
    International,
}

impl FlightType {
    /// Wire code: `N` (nacional) or `I` (internacional).
    pub fn code(self) -> &'static str {
        match self {
            FlightType::Domestic => "N",
            FlightType::International => "I",
        }
    }
}

impl std::str::FromStr for FlightType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(FlightType::Domestic),
            "I" => Ok(FlightType::International),
            _ => Err(format!("Invalid flight type: {}", s)),
        }
    }
}

/// Calendar month, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month(u8);

impl Month {
    pub fn new(value: u64) -> Option<Self> {
        match value {
            1..=12 => Some(Month(value as u8)),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A validated flight, ready to be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub carrier: String,
    pub flight_type: FlightType,
    pub month: Month,
}

/// Tabular view of flights handed to the model: one row per record with
/// the `OPERA`, `TIPOVUELO` and `MES` columns.
#[derive(Debug, Clone, Default)]
pub struct FlightFrame {
    rows: Vec<FlightRecord>,
}

impl FlightFrame {
    pub const COLUMNS: [&'static str; 3] = ["OPERA", "TIPOVUELO", "MES"];

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FlightRecord>,
    {
        Self {
            rows: records.into_iter().collect(),
        }
    }

    pub fn single(record: FlightRecord) -> Self {
        Self { rows: vec![record] }
    }

    pub fn rows(&self) -> &[FlightRecord] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
