use std::{fmt, str::FromStr};

/// A time of day in 24-hour `HH:MM` form.
///
/// The value is stored as the literal validated string, never as a parsed
/// timestamp: incidents record what the reporter typed, and the journal
/// writes it back out verbatim.
///
/// The grammar is strict: exactly two digits, a colon, and two digits, with
/// `00 <= HH <= 23` and `00 <= MM <= 59`. `9:5` is not a valid spelling of
/// `09:05`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventTime(String);

impl EventTime {
    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EventTime {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventTime {
    type Err = InvalidTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax_error = || InvalidTimeError::Syntax(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(syntax_error)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(syntax_error());
        }

        let hour: u8 = hour.parse().map_err(|_| syntax_error())?;
        let minute: u8 = minute.parse().map_err(|_| syntax_error())?;

        if hour > 23 {
            return Err(InvalidTimeError::HourRange(hour));
        }
        if minute > 59 {
            return Err(InvalidTimeError::MinuteRange(minute));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for EventTime {
    type Error = InvalidTimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

/// Error returned when a string is not a valid `HH:MM` time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidTimeError {
    /// The string does not have the shape `HH:MM`.
    #[error("invalid time '{0}': expected HH:MM (24-hour clock)")]
    Syntax(String),

    /// The hour component is outside `00..=23`.
    #[error("invalid hour {0}: must be 00-23")]
    HourRange(u8),

    /// The minute component is outside `00..=59`.
    #[error("invalid minute {0}: must be 00-59")]
    MinuteRange(u8),
}
