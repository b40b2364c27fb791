//! Serialization of incidents as journal lines.
//!
//! One record per line, four fields joined by [`DELIMITER`] in the order
//! `id|area|type|time`. There is no escaping: the field types reject the
//! delimiter at construction, so every representable incident round-trips.

use crate::domain::{
    EventTime, FieldText, Incident, IncidentId, InvalidFieldError, InvalidIdError,
    InvalidTimeError,
};

/// The field separator used in journal lines.
pub const DELIMITER: char = '|';

/// Errors that can occur when parsing a journal line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into exactly four fields.
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    /// The id field was not a positive integer.
    #[error(transparent)]
    Id(#[from] InvalidIdError),

    /// The area or type field failed validation.
    #[error(transparent)]
    Field(#[from] InvalidFieldError),

    /// The time field was not a valid `HH:MM` string.
    #[error(transparent)]
    Time(#[from] InvalidTimeError),
}

/// Parses a single journal line into an [`Incident`].
///
/// # Errors
///
/// Returns [`ParseError`] if the line does not contain exactly four
/// well-formed fields. Callers treat this as a malformed record and skip the
/// line rather than aborting the load.
pub fn parse_line(line: &str) -> Result<Incident, ParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    let [id, area, kind, time] = fields.as_slice() else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    Ok(Incident::new(
        id.parse::<IncidentId>()?,
        area.parse::<FieldText>()?,
        kind.parse::<FieldText>()?,
        time.parse::<EventTime>()?,
    ))
}

/// Formats an incident as a journal line, without the trailing newline.
#[must_use]
pub fn format_line(incident: &Incident) -> String {
    format!(
        "{id}{d}{area}{d}{kind}{d}{time}",
        id = incident.id(),
        area = incident.area(),
        kind = incident.kind(),
        time = incident.time(),
        d = DELIMITER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_line() {
        let incident = parse_line("1|Main St|pothole|08:15").unwrap();

        assert_eq!(incident.id().get(), 1);
        assert_eq!(incident.area(), "Main St");
        assert_eq!(incident.kind(), "pothole");
        assert_eq!(incident.time(), "08:15");
    }

    #[test]
    fn round_trip() {
        let line = "42|Oak Ave|broken streetlight|23:59";
        let incident = parse_line(line).unwrap();
        assert_eq!(format_line(&incident), line);
    }

    #[test]
    fn missing_field() {
        assert_eq!(
            parse_line("1|Main St|pothole"),
            Err(ParseError::FieldCount(3))
        );
    }

    #[test]
    fn excess_fields() {
        // A field value containing the delimiter shifts every following
        // boundary; the line is rejected whole rather than misread.
        assert_eq!(
            parse_line("1|Main|St|pothole|08:15"),
            Err(ParseError::FieldCount(5))
        );
    }

    #[test]
    fn empty_line() {
        assert_eq!(parse_line(""), Err(ParseError::FieldCount(1)));
    }

    #[test]
    fn unparseable_id() {
        assert!(matches!(
            parse_line("x|Main St|pothole|08:15"),
            Err(ParseError::Id(_))
        ));
        assert!(matches!(
            parse_line("0|Main St|pothole|08:15"),
            Err(ParseError::Id(_))
        ));
    }

    #[test]
    fn empty_field() {
        assert!(matches!(
            parse_line("1||pothole|08:15"),
            Err(ParseError::Field(_))
        ));
    }

    #[test]
    fn invalid_time() {
        assert!(matches!(
            parse_line("1|Main St|pothole|25:00"),
            Err(ParseError::Time(_))
        ));
    }
}
