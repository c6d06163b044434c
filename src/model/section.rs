//! Sections (offered instances of a course) and subjects.

use std::collections::HashSet;
use std::fmt;

use super::block::CourseBlock;
use crate::error::ValidationError;

/// One offered instance of a course with its fixed weekly meeting blocks.
///
/// Built once through [`Section::new`] and the `with_*` builders, then
/// treated as read-only.
///
/// # Examples
///
/// ```
/// use u_timetable::model::{CourseBlock, Section};
///
/// let a = Section::new("A")
///     .unwrap()
///     .with_block(CourseBlock::parse("monday", "14:00", "16:00").unwrap())
///     .with_block(CourseBlock::parse("thursday", "14:00", "16:00").unwrap());
/// let b = Section::new("B")
///     .unwrap()
///     .with_block(CourseBlock::parse("thursday", "15:00", "17:00").unwrap());
///
/// assert!(a.collides_with(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSection")
)]
pub struct Section {
    id: String,
    blocks: Vec<CourseBlock>,
}

impl Section {
    /// Creates a section with no blocks. The identifier must be non-empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        Ok(Self {
            id,
            blocks: Vec::new(),
        })
    }

    /// Appends a meeting block.
    pub fn with_block(mut self, block: CourseBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Appends several meeting blocks in order.
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = CourseBlock>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn blocks(&self) -> &[CourseBlock] {
        &self.blocks
    }

    /// Whether any block of `self` collides with any block of `other`.
    pub fn collides_with(&self, other: &Section) -> bool {
        self.blocks
            .iter()
            .any(|mine| other.blocks.iter().any(|theirs| mine.collides_with(theirs)))
    }

    /// Total weekly meeting time in minutes.
    pub fn weekly_minutes(&self) -> u32 {
        self.blocks.iter().map(CourseBlock::duration_minutes).sum()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.id)?;
        for block in &self.blocks {
            writeln!(f, "{block}")?;
        }
        Ok(())
    }
}

/// A course together with its candidate sections, in offering order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSubject")
)]
pub struct Subject {
    name: String,
    sections: Vec<Section>,
}

impl Subject {
    /// Creates a subject. Section ids must be unique within the subject.
    ///
    /// An empty section list is allowed; such a subject admits no
    /// combination.
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Result<Self, ValidationError> {
        let name = name.into();
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section.id()) {
                return Err(ValidationError::DuplicateSection {
                    subject: name,
                    id: section.id().to_string(),
                });
            }
        }
        Ok(Self { name, sections })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "_".repeat(self.name.chars().count());
        writeln!(f, "{rule}\n{}\n{rule}", self.name)?;
        for section in &self.sections {
            writeln!(f, "{section}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSection {
    id: String,
    #[serde(default)]
    blocks: Vec<CourseBlock>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSection> for Section {
    type Error = ValidationError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        Ok(Section::new(raw.id)?.with_blocks(raw.blocks))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSubject {
    name: String,
    #[serde(default)]
    sections: Vec<Section>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSubject> for Subject {
    type Error = ValidationError;

    fn try_from(raw: RawSubject) -> Result<Self, Self::Error> {
        Subject::new(raw.name, raw.sections)
    }
}
