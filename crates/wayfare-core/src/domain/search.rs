use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Airport;

/// Returned when a trip type or cabin class name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneWay => "one-way",
            Self::RoundTrip => "round-trip",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-way" => Ok(Self::OneWay),
            "round-trip" => Ok(Self::RoundTrip),
            other => Err(ParseChoiceError {
                kind: "trip type",
                value: other.to_string(),
            }),
        }
    }
}

/// Fare class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        Self::Economy,
        Self::PremiumEconomy,
        Self::Business,
        Self::First,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium-economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CabinClass {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseChoiceError {
                kind: "cabin class",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerKind {
    Adults,
    Children,
    Infants,
}

/// Passenger counts per age band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passengers {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for Passengers {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

impl Passengers {
    pub fn new(adults: u32, children: u32, infants: u32) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    pub fn total(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    pub fn count(&self, kind: PassengerKind) -> u32 {
        match kind {
            PassengerKind::Adults => self.adults,
            PassengerKind::Children => self.children,
            PassengerKind::Infants => self.infants,
        }
    }

    /// Apply one press of the passenger selector's +/- buttons.
    ///
    /// Counts floor at zero, and the adult count never drops to zero: that
    /// press is refused with `None`. The store itself accepts any counts; this
    /// rule belongs to the control only.
    pub fn stepped(&self, kind: PassengerKind, delta: i64) -> Option<Self> {
        let next = i64::from(self.count(kind))
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX)) as u32;
        if kind == PassengerKind::Adults && next == 0 {
            return None;
        }

        let mut out = *self;
        match kind {
            PassengerKind::Adults => out.adults = next,
            PassengerKind::Children => out.children = next,
            PassengerKind::Infants => out.infants = next,
        }
        Some(out)
    }
}

/// A flight search request as assembled by the search widget.
///
/// Serializes with the camelCase keys the booking backend expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub trip_type: TripType,
    pub from: Option<Airport>,
    pub to: Option<Airport>,
    pub depart_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub passengers: Passengers,
    #[serde(rename = "class")]
    pub cabin_class: CabinClass,
    pub promo_code: String,
    pub airline_only: bool,
}
