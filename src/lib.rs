//! Conflict-free timetable enumeration.
//!
//! Given a list of courses (subjects), each offered as several sections
//! with fixed weekly meeting times, enumerates every way to pick one
//! section per subject such that no two chosen sections meet at the same
//! time.
//!
//! - **Model** ([`model`]): validated weekdays, times, course blocks,
//!   sections and subjects. Construction fails fast with a
//!   [`ValidationError`].
//! - **Search** ([`combine`]): pruned depth-first enumeration with
//!   optional result/time limits, cancellation and rayon fan-out.
//! - **Grid** ([`grid`]): a weekday × time-bucket view of one combination
//!   for renderers and exporters.
//!
//! # Collision rule
//!
//! Two blocks collide iff they share a weekday and their half-open
//! intervals `[s1, e1)` and `[s2, e2)` satisfy `s1 < e2 && s2 < e1`.
//! Blocks that only touch (one ends when the other starts) do not collide.
//!
//! # Example
//!
//! ```
//! use u_timetable::{find_combinations, CourseBlock, Section, Subject};
//!
//! let slot = |id: &str, day: &str, start: &str, end: &str| {
//!     Section::new(id)
//!         .unwrap()
//!         .with_block(CourseBlock::parse(day, start, end).unwrap())
//! };
//!
//! let subjects = vec![
//!     Subject::new("Algebra", vec![slot("A", "monday", "09:00", "11:00"), slot("B", "tuesday", "09:00", "11:00")]).unwrap(),
//!     Subject::new("Physics", vec![slot("X", "monday", "10:00", "12:00")]).unwrap(),
//! ];
//!
//! let combinations = find_combinations(&subjects);
//! assert_eq!(combinations.len(), 1);
//! assert_eq!(combinations[0].ids(), vec!["B", "X"]);
//! ```
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize for model types; deserialization
//!   runs the same validation as the constructors.
//! - `parallel`: honour [`SearchConfig::parallel`](combine::SearchConfig::parallel)
//!   using rayon.

pub mod combine;
mod error;
pub mod grid;
pub mod model;

pub use combine::{find_combinations, Combination, CombinationSearch, SearchConfig};
pub use error::ValidationError;
pub use model::{CourseBlock, Section, Subject, TimeOfDay, Weekday};
