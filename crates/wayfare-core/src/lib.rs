//! # Wayfare Core
//!
//! The client-side state layer of the Wayfare booking app.
//! Domain records, the ports infrastructure must implement, and the stores
//! the screens read from and write to. No I/O happens in this crate.

pub mod domain;
pub mod error;
pub mod ports;
pub mod stores;

pub use error::SessionError;
