//! Ordered selections of sections, one per subject.

use std::fmt;

use crate::model::{Section, Subject};

/// An ordered selection of sections; index `i` holds a section of
/// subject `i`.
///
/// Sections are borrowed from the subjects they belong to; a combination
/// never owns them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination<'a> {
    choices: Vec<&'a Section>,
}

impl<'a> Combination<'a> {
    /// The empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_choices(choices: Vec<&'a Section>) -> Self {
        Self { choices }
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Chosen sections in subject order.
    pub fn sections(&self) -> &[&'a Section] {
        &self.choices
    }

    pub fn get(&self, index: usize) -> Option<&'a Section> {
        self.choices.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Section> + '_ {
        self.choices.iter().copied()
    }

    /// Section ids in subject order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.choices.iter().map(|s| s.id()).collect()
    }

    /// Pairs each chosen section with the subject it was chosen for.
    ///
    /// `subjects` must be the list the combination was built from.
    pub fn pairs<'s>(
        &'s self,
        subjects: &'s [Subject],
    ) -> impl Iterator<Item = (&'s Subject, &'a Section)> + 's {
        subjects.iter().zip(self.choices.iter().copied())
    }

    /// A copy of this combination with `section` appended.
    pub fn extended(&self, section: &'a Section) -> Self {
        let mut choices = Vec::with_capacity(self.choices.len() + 1);
        choices.extend_from_slice(&self.choices);
        choices.push(section);
        Self { choices }
    }

    /// Whether appending `section` keeps a valid combination valid.
    ///
    /// Only the new section is checked against existing ones; pairs
    /// already in the combination are assumed non-colliding.
    pub fn admits(&self, section: &Section) -> bool {
        !self.choices.iter().any(|chosen| chosen.collides_with(section))
    }

    /// Full pairwise check over every distinct pair of chosen sections.
    pub fn is_valid(&self) -> bool {
        self.choices.iter().enumerate().all(|(i, a)| {
            self.choices[i + 1..]
                .iter()
                .all(|b| !a.collides_with(b))
        })
    }
}

impl<'a, 'c> IntoIterator for &'c Combination<'a> {
    type Item = &'a Section;
    type IntoIter = std::iter::Copied<std::slice::Iter<'c, &'a Section>>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter().copied()
    }
}

impl fmt::Display for Combination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.ids().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CourseBlock;
    use proptest::prelude::*;

    fn section(id: &str, day: &str, start: &str, end: &str) -> Section {
        Section::new(id)
            .unwrap()
            .with_block(CourseBlock::parse(day, start, end).unwrap())
    }

    #[test]
    fn test_empty_combination_is_valid() {
        let c = Combination::new();
        assert!(c.is_empty());
        assert!(c.is_valid());
        assert_eq!(c.to_string(), "[]");
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let a = section("A1", "monday", "09:00", "10:00");
        let b = section("B2", "monday", "11:00", "12:00");
        let base = Combination::new().extended(&a);
        let longer = base.extended(&b);

        assert_eq!(base.len(), 1);
        assert_eq!(longer.ids(), vec!["A1", "B2"]);
        assert_eq!(longer.to_string(), "[A1, B2]");
        assert!(longer.is_valid());
    }

    #[test]
    fn test_is_valid_detects_any_colliding_pair() {
        let a = section("A", "monday", "09:00", "10:00");
        let b = section("B", "tuesday", "09:00", "10:00");
        let c = section("C", "monday", "09:30", "10:30");
        let combo = Combination::from_choices(vec![&a, &b, &c]);
        assert!(!combo.is_valid());
        assert!(!Combination::from_choices(vec![&a, &b]).admits(&c));
    }

    #[test]
    fn test_pairs_zip_with_subjects() {
        let a = section("A1", "monday", "09:00", "10:00");
        let b = section("B1", "tuesday", "09:00", "10:00");
        let subjects = vec![
            Subject::new("Algebra", vec![a.clone()]).unwrap(),
            Subject::new("Calculus", vec![b.clone()]).unwrap(),
        ];
        let combo = Combination::from_choices(vec![
            &subjects[0].sections()[0],
            &subjects[1].sections()[0],
        ]);
        let pairs: Vec<(&str, &str)> = combo
            .pairs(&subjects)
            .map(|(subject, section)| (subject.name(), section.id()))
            .collect();
        assert_eq!(pairs, vec![("Algebra", "A1"), ("Calculus", "B1")]);

        let ids: Vec<&str> = (&combo).into_iter().map(Section::id).collect();
        assert_eq!(ids, vec!["A1", "B1"]);
        assert_eq!(combo.get(1).map(Section::id), Some("B1"));
        assert!(combo.get(2).is_none());
    }

    fn arb_section(id: usize) -> impl Strategy<Value = Section> {
        prop::collection::vec((0usize..3, 8u32..18, 1u32..3), 0..3).prop_map(move |slots| {
            Section::new(format!("S{id}")).unwrap().with_blocks(slots.into_iter().map(
                |(day, hour, len)| {
                    CourseBlock::new(
                        crate::model::Weekday::ALL[day],
                        crate::model::TimeOfDay::at_hour(hour).unwrap(),
                        crate::model::TimeOfDay::at_hour(hour + len).unwrap(),
                    )
                    .unwrap()
                },
            ))
        })
    }

    fn arb_sections() -> impl Strategy<Value = Vec<Section>> {
        (1usize..7).prop_flat_map(|n| {
            (0..n).map(arb_section).collect::<Vec<_>>()
        })
    }

    proptest! {
        #[test]
        fn prop_incremental_matches_full_recheck(sections in arb_sections()) {
            let (last, prefix) = sections.split_last().unwrap();

            // Greedily build a valid prefix, then compare both checks for `last`.
            let mut partial = Combination::new();
            for s in prefix {
                if partial.admits(s) {
                    partial = partial.extended(s);
                }
            }
            prop_assert!(partial.is_valid());
            prop_assert_eq!(partial.extended(last).is_valid(), partial.admits(last));
        }
    }
}
