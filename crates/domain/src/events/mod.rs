//! Domain events
//!
//! Return types from simulation steps, communicating what happened when a
//! creature's state was modified.

pub mod creature_events;

pub use creature_events::*;
