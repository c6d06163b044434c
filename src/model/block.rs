//! Course blocks and the pairwise collision rule.

use std::fmt;

use super::time::{TimeOfDay, Weekday};
use crate::error::ValidationError;

/// One weekly meeting slot: a weekday and a half-open time interval
/// `[start, end)`.
///
/// Invariant: `start < end`.
///
/// # Examples
///
/// ```
/// use u_timetable::model::CourseBlock;
///
/// let a = CourseBlock::parse("monday", "09:00", "10:00").unwrap();
/// let b = CourseBlock::parse("MONDAY", "10:00", "11:00").unwrap();
/// let c = CourseBlock::parse("Monday", "09:30", "10:30").unwrap();
///
/// assert!(!a.collides_with(&b)); // touching intervals do not collide
/// assert!(a.collides_with(&c));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCourseBlock")
)]
pub struct CourseBlock {
    weekday: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl CourseBlock {
    /// Creates a block, rejecting `start >= end`.
    pub fn new(weekday: Weekday, start: TimeOfDay, end: TimeOfDay) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::TimeOrdering { start, end });
        }
        Ok(Self {
            weekday,
            start,
            end,
        })
    }

    /// Builds a block from user-entered strings.
    pub fn parse(weekday: &str, start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(weekday.parse()?, start.parse()?, end.parse()?)
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length of the block in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether both blocks fall on the same weekday and their intervals
    /// overlap. Symmetric; blocks that only touch do not collide.
    pub fn collides_with(&self, other: &CourseBlock) -> bool {
        self.weekday == other.weekday && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for CourseBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.weekday, self.start, self.end)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCourseBlock {
    weekday: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCourseBlock> for CourseBlock {
    type Error = ValidationError;

    fn try_from(raw: RawCourseBlock) -> Result<Self, Self::Error> {
        Self::new(raw.weekday, raw.start, raw.end)
    }
}
