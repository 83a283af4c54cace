//! Fixed airport directory served after a short simulated delay.

use std::time::Duration;

use async_trait::async_trait;

use wayfare_core::domain::Airport;
use wayfare_core::ports::{AirportError, AirportSource};

const AIRPORTS: [(&str, &str, &str, &str); 10] = [
    ("KUL", "Kuala Lumpur International Airport", "Kuala Lumpur", "Malaysia"),
    ("SIN", "Singapore Changi Airport", "Singapore", "Singapore"),
    ("BKK", "Suvarnabhumi Airport", "Bangkok", "Thailand"),
    ("CGK", "Soekarno-Hatta International Airport", "Jakarta", "Indonesia"),
    ("MNL", "Ninoy Aquino International Airport", "Manila", "Philippines"),
    ("HKG", "Hong Kong International Airport", "Hong Kong", "Hong Kong"),
    ("ICN", "Incheon International Airport", "Seoul", "South Korea"),
    ("NRT", "Narita International Airport", "Tokyo", "Japan"),
    ("SYD", "Sydney Kingsford Smith Airport", "Sydney", "Australia"),
    ("MEL", "Melbourne Airport", "Melbourne", "Australia"),
];

pub struct StaticAirportSource {
    delay: Duration,
}

impl StaticAirportSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_env() -> Self {
        Self::new(Duration::from_millis(
            std::env::var("AIRPORTS_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
        ))
    }
}

impl Default for StaticAirportSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

#[async_trait]
impl AirportSource for StaticAirportSource {
    async fn airports(&self) -> Result<Vec<Airport>, AirportError> {
        tokio::time::sleep(self.delay).await;
        Ok(AIRPORTS
            .iter()
            .map(|&(code, name, city, country)| Airport::new(code, name, city, country))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_core::domain::filter_airports;

    #[tokio::test(start_paused = true)]
    async fn test_lists_all_airports() {
        let airports = StaticAirportSource::default().airports().await.unwrap();
        assert_eq!(airports.len(), 10);
        assert_eq!(airports[0].code, "KUL");
        assert_eq!(airports[9].code, "MEL");
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_over_directory() {
        let airports = StaticAirportSource::default().airports().await.unwrap();

        let hits: Vec<_> = filter_airports(&airports, "mel")
            .into_iter()
            .map(|a| a.code.as_str())
            .collect();
        assert_eq!(hits, vec!["MEL"]);

        let international = filter_airports(&airports, "International");
        assert_eq!(international.len(), 6);
    }
}
