use serde::{Deserialize, Serialize};

/// Airport entry as served by the airport lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, e.g. `KUL`.
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.city.to_lowercase().contains(needle)
            || self.code.to_lowercase().contains(needle)
    }
}

/// Case-insensitive substring filter over name, city and code.
///
/// An empty query keeps every airport.
pub fn filter_airports<'a>(airports: &'a [Airport], query: &str) -> Vec<&'a Airport> {
    let needle = query.to_lowercase();
    airports.iter().filter(|a| a.matches(&needle)).collect()
}
