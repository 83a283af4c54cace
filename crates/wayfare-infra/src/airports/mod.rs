//! Airport sources.

mod cached;
mod static_list;

pub use cached::CachedAirportSource;
pub use static_list::StaticAirportSource;
