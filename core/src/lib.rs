//! churnplan-core — the bonus sequencing engine.
//!
//! Given an offer catalog, a user's deposit cadence, and their past
//! completion history, one call to [`run_sequencer`] greedily fills a
//! fixed number of parallel account slots with the highest-velocity
//! bonuses first, honoring per-offer feasibility and cooldown state.
//!
//! The whole crate is a pure computation over one input snapshot:
//! no I/O, no wall clock, no state shared between runs. Recompute on
//! demand whenever an input changes.

pub mod catalog;
pub mod churn;
pub mod error;
pub mod feasibility;
pub mod history;
pub mod profile;
pub mod scheduler;
pub mod summary;
pub mod types;

pub use error::{PlanError, PlanResult};
pub use scheduler::run_sequencer;
pub use summary::SequencerResult;
