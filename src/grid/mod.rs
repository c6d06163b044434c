//! Weekly grid view of a combination.
//!
//! A [`WeeklyGrid`] has one row per time bucket and one column per
//! weekday. Each cell holds the name of the subject meeting in that
//! bucket, if any. Renderers and exporters build on this; the crate itself
//! writes no files.

use crate::combine::Combination;
use crate::model::{CourseBlock, Subject, TimeOfDay, Weekday};

/// Shape of a [`WeeklyGrid`].
///
/// # Examples
///
/// ```
/// use u_timetable::grid::GridConfig;
/// use u_timetable::model::TimeOfDay;
///
/// let config = GridConfig::default()
///     .with_day_start(TimeOfDay::at_hour(8).unwrap())
///     .with_bucket_minutes(60);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.slots().len(), 15); // 08:00..=22:00
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// First row.
    pub day_start: TimeOfDay,
    /// Last row (inclusive).
    pub day_end: TimeOfDay,
    /// Row height in minutes.
    pub bucket_minutes: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            day_start: TimeOfDay::from_minutes(7 * 60).unwrap_or_default(),
            day_end: TimeOfDay::from_minutes(22 * 60).unwrap_or_default(),
            bucket_minutes: 30,
        }
    }
}

impl GridConfig {
    /// Sets the first row.
    pub fn with_day_start(mut self, start: TimeOfDay) -> Self {
        self.day_start = start;
        self
    }

    /// Sets the last row.
    pub fn with_day_end(mut self, end: TimeOfDay) -> Self {
        self.day_end = end;
        self
    }

    /// Sets the row height in minutes.
    pub fn with_bucket_minutes(mut self, minutes: u32) -> Self {
        self.bucket_minutes = minutes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.bucket_minutes == 0 {
            return Err("bucket_minutes must be positive".into());
        }
        if self.day_start >= self.day_end {
            return Err(format!(
                "day_start {} must be before day_end {}",
                self.day_start, self.day_end
            ));
        }
        Ok(())
    }

    /// Row start times, `day_start..=day_end` stepping `bucket_minutes`.
    pub fn slots(&self) -> Vec<TimeOfDay> {
        if self.bucket_minutes == 0 {
            return Vec::new();
        }
        (self.day_start.minutes()..=self.day_end.minutes())
            .step_by(self.bucket_minutes as usize)
            .filter_map(TimeOfDay::from_minutes)
            .collect()
    }
}

/// Time buckets by weekdays, labelled with subject names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyGrid {
    slots: Vec<TimeOfDay>,
    cells: Vec<[Option<String>; 6]>,
}

impl WeeklyGrid {
    /// An empty grid.
    pub fn new(config: &GridConfig) -> Self {
        let slots = config.slots();
        let cells = vec![Default::default(); slots.len()];
        Self { slots, cells }
    }

    /// Builds the grid for one combination of `subjects`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_timetable::combine::find_combinations;
    /// use u_timetable::grid::{GridConfig, WeeklyGrid};
    /// use u_timetable::model::{CourseBlock, Section, Subject, TimeOfDay, Weekday};
    ///
    /// let section = Section::new("S")
    ///     .unwrap()
    ///     .with_block(CourseBlock::parse("thursday", "08:00", "10:00").unwrap());
    /// let subjects = vec![Subject::new("Imaging", vec![section]).unwrap()];
    /// let combinations = find_combinations(&subjects);
    ///
    /// let grid = WeeklyGrid::from_combination(&subjects, &combinations[0], &GridConfig::default());
    /// let at = |h, m| TimeOfDay::new(h, m).unwrap();
    /// assert_eq!(grid.cell(at(8, 30), Weekday::Thursday), Some("Imaging"));
    /// assert_eq!(grid.cell(at(10, 0), Weekday::Thursday), None);
    /// ```
    pub fn from_combination(
        subjects: &[Subject],
        combination: &Combination<'_>,
        config: &GridConfig,
    ) -> Self {
        let mut grid = Self::new(config);
        grid.add_combination(subjects, combination);
        grid
    }

    /// Labels every block of every chosen section with its subject name.
    pub fn add_combination(&mut self, subjects: &[Subject], combination: &Combination<'_>) {
        for (subject, section) in combination.pairs(subjects) {
            for block in section.blocks() {
                self.add_block(block, subject.name());
            }
        }
    }

    /// Labels every row `t` with `start <= t < end` in the block's weekday
    /// column. Parts of the block outside the grid are ignored.
    pub fn add_block(&mut self, block: &CourseBlock, label: &str) {
        let column = block.weekday().index();
        for (slot, row) in self.slots.iter().zip(self.cells.iter_mut()) {
            if block.start() <= *slot && *slot < block.end() {
                row[column] = Some(label.to_string());
            }
        }
    }

    /// Row start times.
    pub fn slots(&self) -> &[TimeOfDay] {
        &self.slots
    }

    /// Label of the row starting exactly at `slot`.
    pub fn cell(&self, slot: TimeOfDay, day: Weekday) -> Option<&str> {
        let row = self.slots.iter().position(|s| *s == slot)?;
        self.cells[row][day.index()].as_deref()
    }

    /// Rows as `(slot, labels by weekday)`.
    pub fn rows(&self) -> impl Iterator<Item = (TimeOfDay, &[Option<String>; 6])> {
        self.slots.iter().copied().zip(self.cells.iter())
    }
}
