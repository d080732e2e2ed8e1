//! Blipkin Engine library.
//!
//! Runs the creature simulation for many owners at once.
//!
//! ## Structure
//!
//! - `use_cases/` - Per-owner request orchestration (load, reconcile, act, save)
//! - `infrastructure/` - Ports, in-memory adapters, clocks, owner locks, config
//! - `replay` - Transcript replay used by the `blipkin-sim` binary
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod replay;
pub mod use_cases;

pub use app::App;
