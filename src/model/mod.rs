//! Timetable input model.
//!
//! - [`Weekday`], [`TimeOfDay`]: validated scalar values
//! - [`CourseBlock`]: weekday + half-open time interval, with the
//!   collision rule
//! - [`Section`]: identified group of blocks
//! - [`Subject`]: a course and its candidate sections
//!
//! All constructors validate and return [`ValidationError`](crate::ValidationError)
//! on malformed input. Values are immutable once built.

mod block;
mod section;
mod time;

pub use block::CourseBlock;
pub use section::{Section, Subject};
pub use time::{TimeOfDay, Weekday};
