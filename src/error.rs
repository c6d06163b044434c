//! Construction-time validation errors.
//!
//! Every fallible constructor in [`crate::model`] reports one of these.
//! The combination search itself never fails; it only ever sees values
//! that already passed validation.

use thiserror::Error;

use crate::model::TimeOfDay;

/// Reason a timetable input value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Weekday name is not one of the six recognized days.
    #[error("unrecognized weekday: {0:?}")]
    Weekday(String),

    /// A block must start strictly before it ends.
    #[error("start time {start} must be before end time {end}")]
    TimeOrdering {
        /// Block start.
        start: TimeOfDay,
        /// Block end.
        end: TimeOfDay,
    },

    /// Hour outside `0..24`.
    #[error("hour must be in range 0..24, got {0}")]
    HourOutOfRange(u32),

    /// Minute outside `0..60`.
    #[error("minute must be in range 0..60, got {0}")]
    MinuteOutOfRange(u32),

    /// Time string could not be read as `hh..mm`.
    #[error("malformed time string: {0:?}")]
    MalformedTime(String),

    /// Section identifiers must be non-empty.
    #[error("section identifier must not be empty")]
    EmptyIdentifier,

    /// Two sections of the same subject share an identifier.
    #[error("duplicate section {id:?} in subject {subject:?}")]
    DuplicateSection {
        /// Subject name.
        subject: String,
        /// Repeated section id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        let err = ValidationError::Weekday("sunday".into());
        assert_eq!(err.to_string(), "unrecognized weekday: \"sunday\"");

        let err = ValidationError::HourOutOfRange(24);
        assert!(err.to_string().contains("24"));

        let err = ValidationError::TimeOrdering {
            start: TimeOfDay::new(10, 0).unwrap(),
            end: TimeOfDay::new(9, 0).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "start time 10:00 must be before end time 09:00"
        );
    }

    #[test]
    fn test_variants_are_distinguishable() {
        let a = ValidationError::HourOutOfRange(30);
        let b = ValidationError::MinuteOutOfRange(30);
        assert_ne!(a, b);
        assert!(matches!(a, ValidationError::HourOutOfRange(30)));
    }
}
