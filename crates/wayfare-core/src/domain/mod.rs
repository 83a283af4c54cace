//! Domain records - the data the stores own.

mod airport;
mod search;
mod user;

pub use airport::{Airport, filter_airports};
pub use search::{
    CabinClass, ParseChoiceError, PassengerKind, Passengers, SearchPayload, TripType,
};
pub use user::{AuthResponse, User};
