//! Plain-text Incident Logging
//!
//! Incidents are single-line records stored in an append-only journal file.

pub mod domain;
pub use domain::{EventTime, FieldText, Incident, IncidentId};

pub mod query;
pub use query::FilterField;

/// Flat-file persistence and the in-memory store.
pub mod storage;
pub use storage::{CapacityError, Store};
