use std::collections::HashSet;

/// Operators seen in the training data. Anything else is rejected before
/// it reaches the model.
const KNOWN_OPERATORS: [&str; 23] = [
    "American Airlines",
    "Air Canada",
    "Air France",
    "Aeromexico",
    "Aerolineas Argentinas",
    "Austral",
    "Avianca",
    "Alitalia",
    "British Airways",
    "Copa Air",
    "Delta Air",
    "Gol Trans",
    "Iberia",
    "K.L.M.",
    "Qantas Airways",
    "United Airlines",
    "Grupo LATAM",
    "Sky Airline",
    "Latin American Wings",
    "Plus Ultra Lineas Aereas",
    "JetSmart SPA",
    "Oceanair Linhas Aereas",
    "Lacsa",
];

/// Closed allow-list of airline operator names (`OPERA`).
///
/// Built once at startup and shared read-only through the app state.
/// Matching is exact: case and punctuation are significant.
#[derive(Debug, Clone)]
pub struct CarrierRegistry {
    operators: HashSet<String>,
}

impl CarrierRegistry {
    fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operators: operators.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, operator: &str) -> bool {
        self.operators.contains(operator)
    }
}

impl Default for CarrierRegistry {
    fn default() -> Self {
        Self::new(KNOWN_OPERATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_holds_every_known_operator() {
        let registry = CarrierRegistry::default();
        for operator in KNOWN_OPERATORS {
            assert!(registry.contains(operator), "{} missing", operator);
        }
        assert_eq!(registry.operators.len(), KNOWN_OPERATORS.len());
    }

    #[test]
    fn matching_is_exact() {
        let registry = CarrierRegistry::default();
        assert!(!registry.contains("grupo latam"));
        assert!(!registry.contains("KLM"));
        assert!(!registry.contains(" Lacsa"));
        assert!(!registry.contains(""));
    }
}
