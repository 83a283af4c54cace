//! Search-criteria store backing the flight search widget.

use chrono::NaiveDate;

use crate::domain::{Airport, CabinClass, Passengers, SearchPayload, TripType};

/// Holds the search form. Setters never validate: a round trip without a
/// return date, a past departure or zero adults are all accepted as given.
#[derive(Debug, Clone, Default)]
pub struct SearchStore {
    criteria: SearchPayload,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_trip_type(&mut self, trip_type: TripType) {
        self.criteria.trip_type = trip_type;
    }

    pub fn set_from(&mut self, airport: Option<Airport>) {
        self.criteria.from = airport;
    }

    pub fn set_to(&mut self, airport: Option<Airport>) {
        self.criteria.to = airport;
    }

    pub fn set_depart_date(&mut self, date: Option<NaiveDate>) {
        self.criteria.depart_date = date;
    }

    pub fn set_return_date(&mut self, date: Option<NaiveDate>) {
        self.criteria.return_date = date;
    }

    pub fn set_passengers(&mut self, passengers: Passengers) {
        self.criteria.passengers = passengers;
    }

    pub fn set_class(&mut self, class: CabinClass) {
        self.criteria.cabin_class = class;
    }

    pub fn set_promo_code(&mut self, code: impl Into<String>) {
        self.criteria.promo_code = code.into();
    }

    pub fn set_airline_only(&mut self, only: bool) {
        self.criteria.airline_only = only;
    }

    /// Exchange origin and destination. Either side may be empty.
    pub fn swap_locations(&mut self) {
        let SearchPayload { from, to, .. } = &mut self.criteria;
        std::mem::swap(from, to);
    }

    /// Snapshot of every field, as entered.
    pub fn search_payload(&self) -> SearchPayload {
        self.criteria.clone()
    }

    /// Read-only view without cloning.
    pub fn criteria(&self) -> &SearchPayload {
        &self.criteria
    }

    /// Back to the empty form.
    pub fn reset(&mut self) {
        self.criteria = SearchPayload::default();
    }
}
