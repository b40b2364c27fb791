use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// Maximum length, in characters, of a free-form incident field.
pub const MAX_FIELD_LEN: usize = 49;

/// A validated free-form text field, used for an incident's area and type.
///
/// A `FieldText` is guaranteed to be non-empty, at most [`MAX_FIELD_LEN`]
/// characters long, and free of the journal record delimiter (`|`) and
/// control characters. Every value that can be constructed survives a
/// journal round-trip intact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldText(NonEmptyString);

impl FieldText {
    /// Creates a new `FieldText` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldError`] if the string is empty, longer than
    /// [`MAX_FIELD_LEN`] characters, or contains the record delimiter or a
    /// control character.
    pub fn new(s: String) -> Result<Self, InvalidFieldError> {
        let length = s.chars().count();
        if length > MAX_FIELD_LEN {
            return Err(InvalidFieldError::TooLong { length });
        }

        if let Some(c) = s.chars().find(|&c| c == '|' || c.is_control()) {
            return Err(InvalidFieldError::IllegalCharacter(c));
        }

        let non_empty = NonEmptyString::new(s).map_err(|_| InvalidFieldError::Empty)?;

        Ok(Self(non_empty))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for FieldText {
    type Error = InvalidFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FieldText {
    type Error = InvalidFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for FieldText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for FieldText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for FieldText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldText {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when a string is not a valid incident field.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidFieldError {
    /// The field was empty.
    #[error("field cannot be empty")]
    Empty,

    /// The field exceeded [`MAX_FIELD_LEN`] characters.
    #[error("field is {length} characters long (max {MAX_FIELD_LEN})")]
    TooLong {
        /// Length of the rejected input, in characters.
        length: usize,
    },

    /// The field contained the record delimiter or a control character.
    #[error("field contains illegal character {0:?}")]
    IllegalCharacter(char),
}
