//! Shared primitive types used across the entire planner.

/// A simulated week, 1-indexed from the start of a planning run.
pub type Week = u32;

/// A stable, unique identifier for a catalog offer.
pub type OfferId = String;

/// Identifier for a completion-history record.
pub type RecordId = String;
