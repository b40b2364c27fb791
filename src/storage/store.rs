//! The incident store: an in-memory working set backed by a journal file.

use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{
    domain::{EventTime, FieldText, Incident, IncidentId},
    query::{self, FilterField},
    storage::journal::{Journal, LoadOutcome},
};

/// The default maximum number of incidents a store will hold.
pub const DEFAULT_CAPACITY: usize = 100;

/// The default journal file name, relative to the working directory.
pub const DEFAULT_JOURNAL: &str = "incidents.txt";

/// The persistence-and-query component of the incident log.
///
/// The store owns the authoritative in-memory collection for the session,
/// with the journal file as an append-only mirror plus the bootstrap source.
/// Records are kept in insertion order, which is also journal file order.
#[derive(Debug)]
pub struct Store {
    journal: Journal,
    incidents: Vec<Incident>,
    capacity: usize,
    skipped: usize,
}

impl Store {
    /// Opens the store backed by the journal at `path`, with the default
    /// capacity bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal file exists but cannot be read. A
    /// missing journal is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    /// Opens the store with an explicit capacity bound.
    ///
    /// Loading stops early once `capacity` records have been read; malformed
    /// journal lines are skipped and counted, never fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal file exists but cannot be read.
    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> io::Result<Self> {
        let journal = Journal::new(path.into());
        let LoadOutcome { incidents, skipped } = journal.read_all(capacity)?;

        if skipped > 0 {
            tracing::debug!(
                "loaded {} incidents from {}; skipped {skipped} malformed lines",
                incidents.len(),
                journal.path().display()
            );
        }

        Ok(Self {
            journal,
            incidents,
            capacity,
            skipped,
        })
    }

    /// The location of the backing journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.journal.path()
    }

    /// Number of incidents currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Whether the store holds no incidents. An empty store is a valid,
    /// non-error state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// The maximum number of incidents this store will hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of malformed journal lines skipped during the load.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// The identifier the next appended incident will receive.
    ///
    /// This is one greater than the highest identifier currently held, or
    /// [`IncidentId::FIRST`] for an empty store. It is recomputed from the
    /// live collection on every call so it stays correct after a reload,
    /// including journals with identifier gaps.
    #[must_use]
    pub fn next_id(&self) -> IncidentId {
        self.incidents
            .iter()
            .map(Incident::id)
            .max()
            .map_or(IncidentId::FIRST, IncidentId::successor)
    }

    /// Records a new incident.
    ///
    /// Assigns the next identifier, writes the record to the journal, and
    /// inserts it into the in-memory collection. A journal write failure
    /// degrades durability, not availability: the insert still happens and
    /// the returned [`Durability`] carries the error so the caller can warn.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] without mutating any state if the store is
    /// already at capacity.
    pub fn append(
        &mut self,
        area: FieldText,
        kind: FieldText,
        time: EventTime,
    ) -> Result<Appended, CapacityError> {
        if self.incidents.len() >= self.capacity {
            return Err(CapacityError {
                capacity: self.capacity,
            });
        }

        let id = self.next_id();
        let incident = Incident::new(id, area, kind, time);

        let durability = match self.journal.append(&incident) {
            Ok(()) => Durability::Durable,
            Err(e) => {
                tracing::warn!(
                    "could not write incident {id} to {}: {e}",
                    self.journal.path().display()
                );
                Durability::MemoryOnly(e)
            }
        };

        self.incidents.push(incident);

        Ok(Appended { id, durability })
    }

    /// Every incident, in insertion order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Incidents whose selected field contains `needle`, case-insensitively.
    #[must_use]
    pub fn filter(&self, field: FilterField, needle: &str) -> Vec<&Incident> {
        query::filter(&self.incidents, field, needle)
    }

    /// Incidents whose area contains `needle`, case-insensitively.
    #[must_use]
    pub fn filter_by_area(&self, needle: &str) -> Vec<&Incident> {
        self.filter(FilterField::Area, needle)
    }

    /// Incidents whose type contains `needle`, case-insensitively.
    #[must_use]
    pub fn filter_by_kind(&self, needle: &str) -> Vec<&Incident> {
        self.filter(FilterField::Kind, needle)
    }
}

/// The outcome of a successful append.
#[derive(Debug)]
pub struct Appended {
    /// The identifier assigned to the new incident.
    pub id: IncidentId,
    /// Whether the record reached the journal file.
    pub durability: Durability,
}

/// Whether an appended record was persisted to the journal.
#[derive(Debug)]
pub enum Durability {
    /// The record was written to the journal.
    Durable,
    /// The record is held in memory only; the journal could not be written.
    MemoryOnly(io::Error),
}

impl Durability {
    /// Whether the record reached the journal.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        matches!(self, Self::Durable)
    }
}

/// Error returned when an append is attempted on a full store.
///
/// Capacity exhaustion is terminal for new incidents only; reads continue to
/// work.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("the incident log is full ({capacity} records); no further incidents can be recorded")]
pub struct CapacityError {
    /// The capacity bound that was hit.
    pub capacity: usize,
}
