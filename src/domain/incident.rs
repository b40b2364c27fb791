use std::{fmt, hash::Hash, num::NonZeroU32, str::FromStr};

use super::{EventTime, FieldText};

/// The unique identifier of an incident.
///
/// Identifiers are positive integers assigned monotonically by the store:
/// each new incident receives one greater than the highest identifier in the
/// collection. Identifiers are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IncidentId(NonZeroU32);

impl IncidentId {
    /// The identifier assigned to the first incident in an empty store.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Returns the identifier as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<NonZeroU32> for IncidentId {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IncidentId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: NonZeroU32 = s.parse().map_err(|_| InvalidIdError(s.to_string()))?;
        Ok(Self(id))
    }
}

/// Error returned when a string is not a valid incident identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid incident id '{0}': expected a positive integer")]
pub struct InvalidIdError(String);

/// A single reported incident.
///
/// Incidents are immutable once created: there are no update or delete
/// operations. Construction goes through the validated field types, so every
/// `Incident` holds four non-empty, well-formed fields.
///
/// Equality and hashing are by identifier.
#[derive(Debug, Clone, Eq)]
pub struct Incident {
    id: IncidentId,
    area: FieldText,
    kind: FieldText,
    time: EventTime,
}

impl Incident {
    pub(crate) const fn new(
        id: IncidentId,
        area: FieldText,
        kind: FieldText,
        time: EventTime,
    ) -> Self {
        Self {
            id,
            area,
            kind,
            time,
        }
    }

    /// The unique identifier of this incident.
    #[must_use]
    pub const fn id(&self) -> IncidentId {
        self.id
    }

    /// Where the incident occurred.
    #[must_use]
    pub fn area(&self) -> &str {
        self.area.as_str()
    }

    /// The category of the incident (e.g. "pothole").
    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_str()
    }

    /// When the incident occurred, as the literal `HH:MM` string.
    #[must_use]
    pub fn time(&self) -> &str {
        self.time.as_str()
    }
}

impl PartialEq for Incident {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for Incident {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(id: u32, area: &str, kind: &str) -> Incident {
        Incident::new(
            id.to_string().parse().unwrap(),
            area.parse().unwrap(),
            kind.parse().unwrap(),
            "08:15".parse().unwrap(),
        )
    }

    #[test]
    fn id_parses_from_str() {
        let id: IncidentId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn id_rejects_zero() {
        assert!("0".parse::<IncidentId>().is_err());
    }

    #[test]
    fn id_rejects_non_numeric() {
        assert!("abc".parse::<IncidentId>().is_err());
        assert!("-1".parse::<IncidentId>().is_err());
    }

    #[test]
    fn successor_increments() {
        assert_eq!(IncidentId::FIRST.successor().get(), 2);
    }

    #[test]
    fn accessors() {
        let incident = incident(7, "Oak Ave", "streetlight");
        assert_eq!(incident.id().get(), 7);
        assert_eq!(incident.area(), "Oak Ave");
        assert_eq!(incident.kind(), "streetlight");
        assert_eq!(incident.time(), "08:15");
    }

    #[test]
    fn identity_is_by_id() {
        let a = incident(1, "Main St", "pothole");
        let b = incident(1, "Oak Ave", "streetlight");
        let c = incident(2, "Main St", "pothole");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
