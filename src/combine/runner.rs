//! Backtracking enumeration of conflict-free combinations.
//!
//! # Algorithm
//!
//! Depth-first over subject index `0..n`, keeping a valid partial
//! combination:
//!
//! 1. For each section of the current subject, in input order, check it
//!    against the sections already chosen
//! 2. On a collision, discard it without descending (prune)
//! 3. Otherwise append it; at the last subject emit the combination,
//!    else descend to the next subject
//! 4. Remove it again and continue with the next section
//!
//! Because the partial combination is valid by construction, only the
//! newly appended section needs checking. Output order is the order in
//! which completed combinations are discovered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use super::combination::Combination;
use super::config::{SearchConfig, Traversal};
use crate::model::{Section, Subject};

/// How often (in visited nodes) the wall-clock limit is checked.
const DEADLINE_CHECK_INTERVAL: u64 = 256;

/// Why a search stopped.
///
/// Variants are ordered by precedence when merging parallel branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Termination {
    /// Every branch was explored; the result is complete.
    Exhausted,
    /// `max_results` combinations were found; more may exist.
    LimitReached,
    /// The time limit elapsed.
    TimedOut,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a combination search.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// Valid combinations in discovery order.
    pub combinations: Vec<Combination<'a>>,
    /// Candidate extensions examined.
    pub nodes_visited: u64,
    /// Candidates discarded because they collided with the partial choice.
    pub pruned: u64,
    /// Why the search stopped.
    pub termination: Termination,
}

impl<'a> SearchResult<'a> {
    fn empty() -> Self {
        Self {
            combinations: Vec::new(),
            nodes_visited: 0,
            pruned: 0,
            termination: Termination::Exhausted,
        }
    }

    /// Whether the search space was fully explored.
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Exhausted
    }
}

/// Enumerates every conflict-free way to pick one section per subject.
pub struct CombinationSearch;

impl CombinationSearch {
    /// Runs the search.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_timetable::combine::{CombinationSearch, SearchConfig};
    /// use u_timetable::model::{CourseBlock, Section, Subject};
    ///
    /// let slot = |id: &str, start: &str, end: &str| {
    ///     Section::new(id)
    ///         .unwrap()
    ///         .with_block(CourseBlock::parse("monday", start, end).unwrap())
    /// };
    /// let subjects = vec![
    ///     Subject::new("A", vec![slot("A1", "09:00", "10:00"), slot("A2", "10:00", "11:00")]).unwrap(),
    ///     Subject::new("B", vec![slot("B1", "09:00", "10:00"), slot("B2", "11:00", "12:00")]).unwrap(),
    /// ];
    ///
    /// let result = CombinationSearch::run(&subjects, &SearchConfig::default());
    /// let found: Vec<String> = result.combinations.iter().map(|c| c.to_string()).collect();
    /// assert_eq!(found, vec!["[A1, B2]", "[A2, B1]", "[A2, B2]"]);
    /// assert!(result.is_complete());
    /// ```
    pub fn run<'a>(subjects: &'a [Subject], config: &SearchConfig) -> SearchResult<'a> {
        Self::run_with_cancel(subjects, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search
    /// stops at the next candidate and returns the combinations found
    /// so far.
    pub fn run_with_cancel<'a>(
        subjects: &'a [Subject],
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SearchResult<'a> {
        if let Err(reason) = config.validate() {
            warn!("invalid SearchConfig ({reason}); running with it anyway");
        }

        debug!(
            "searching {} subjects, search space {}",
            subjects.len(),
            Self::search_space(subjects).map_or_else(|| "overflow".to_string(), |n| n.to_string())
        );

        if let Some(subject) = subjects.iter().find(|s| s.sections().is_empty()) {
            debug!(
                "subject {:?} has no sections; no combination is possible",
                subject.name()
            );
            return SearchResult::empty();
        }

        let limits = Limits {
            max_results: config.max_results,
            deadline: config
                .time_limit_ms
                .map(|ms| Instant::now() + Duration::from_millis(ms)),
            cancel: cancel.as_deref(),
        };

        let result = if config.parallel && !subjects.is_empty() {
            explore_parallel(subjects, &limits, config.traversal)
        } else {
            let mut explorer = Explorer::new(subjects, &limits);
            explorer.explore(0, config.traversal);
            explorer.into_result()
        };

        debug!(
            "found {} combinations ({} nodes visited, {} pruned, {:?})",
            result.combinations.len(),
            result.nodes_visited,
            result.pruned,
            result.termination
        );
        result
    }

    /// Size of the unpruned cross product: the product of section counts.
    ///
    /// `None` if it does not fit in a `u128`.
    pub fn search_space(subjects: &[Subject]) -> Option<u128> {
        subjects
            .iter()
            .try_fold(1u128, |acc, s| acc.checked_mul(s.sections().len() as u128))
    }
}

/// Every valid combination, in canonical exploration order.
///
/// Shorthand for [`CombinationSearch::run`] with the default
/// configuration. An empty subject list yields exactly one empty
/// combination; a subject without sections yields none.
pub fn find_combinations(subjects: &[Subject]) -> Vec<Combination<'_>> {
    CombinationSearch::run(subjects, &SearchConfig::default()).combinations
}

/// Stop conditions shared by every branch of one search.
struct Limits<'l> {
    max_results: Option<usize>,
    deadline: Option<Instant>,
    cancel: Option<&'l AtomicBool>,
}

/// Depth-first state for one search (or one parallel branch).
struct Explorer<'a, 'l> {
    subjects: &'a [Subject],
    limits: &'l Limits<'l>,
    partial: Vec<&'a Section>,
    found: Vec<Combination<'a>>,
    nodes_visited: u64,
    pruned: u64,
    stop: Option<Termination>,
}

impl<'a, 'l> Explorer<'a, 'l> {
    fn new(subjects: &'a [Subject], limits: &'l Limits<'l>) -> Self {
        Self {
            subjects,
            limits,
            partial: Vec::with_capacity(subjects.len()),
            found: Vec::new(),
            nodes_visited: 0,
            pruned: 0,
            stop: None,
        }
    }

    /// Explores every completion of the current partial combination,
    /// starting at subject `depth`.
    fn explore(&mut self, depth: usize, traversal: Traversal) {
        if depth == self.subjects.len() {
            self.emit();
            return;
        }
        match traversal {
            Traversal::Recursive => self.descend(depth),
            Traversal::Iterative => self.descend_iterative(depth),
        }
    }

    fn descend(&mut self, depth: usize) {
        let subjects = self.subjects;
        for section in subjects[depth].sections() {
            if self.should_stop() {
                return;
            }
            if self.try_extend(depth, section) {
                self.descend(depth + 1);
                self.partial.pop();
            }
        }
    }

    /// Same visiting order as [`descend`](Self::descend), with one cursor
    /// per level instead of a call frame.
    fn descend_iterative(&mut self, start: usize) {
        let subjects = self.subjects;
        let mut cursors: Vec<usize> = vec![0];

        while let Some(level) = cursors.len().checked_sub(1) {
            let sections = subjects[start + level].sections();
            let cursor = cursors[level];

            if cursor == sections.len() || self.should_stop() {
                cursors.pop();
                if !cursors.is_empty() {
                    self.partial.pop();
                }
                continue;
            }

            cursors[level] += 1;
            if self.try_extend(start + level, &sections[cursor]) {
                cursors.push(0);
            }
        }
    }

    /// Considers `section` for subject `depth`.
    ///
    /// Returns `true` when the section was appended and its subtree must
    /// be explored; the caller pops it afterwards.
    fn try_extend(&mut self, depth: usize, section: &'a Section) -> bool {
        self.nodes_visited += 1;

        if self.partial.iter().any(|chosen| chosen.collides_with(section)) {
            self.pruned += 1;
            trace!("pruned section {:?} of subject {}", section.id(), depth);
            return false;
        }

        self.partial.push(section);
        if depth + 1 == self.subjects.len() {
            self.emit();
            self.partial.pop();
            return false;
        }
        true
    }

    fn emit(&mut self) {
        if self.limit_reached() {
            self.halt(Termination::LimitReached);
            return;
        }
        self.found
            .push(Combination::from_choices(self.partial.clone()));
        if self.limit_reached() {
            self.halt(Termination::LimitReached);
        }
    }

    fn limit_reached(&self) -> bool {
        self.limits
            .max_results
            .is_some_and(|max| self.found.len() >= max)
    }

    fn should_stop(&mut self) -> bool {
        if self.stop.is_some() {
            return true;
        }
        if let Some(flag) = self.limits.cancel {
            if flag.load(Ordering::Relaxed) {
                self.halt(Termination::Cancelled);
                return true;
            }
        }
        if let Some(deadline) = self.limits.deadline {
            if self.nodes_visited % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                self.halt(Termination::TimedOut);
                return true;
            }
        }
        false
    }

    fn halt(&mut self, reason: Termination) {
        if self.stop.is_none() {
            debug!(
                "search stopped early: {:?} after {} combinations",
                reason,
                self.found.len()
            );
            self.stop = Some(reason);
        }
    }

    fn into_result(self) -> SearchResult<'a> {
        SearchResult {
            combinations: self.found,
            nodes_visited: self.nodes_visited,
            pruned: self.pruned,
            termination: self.stop.unwrap_or(Termination::Exhausted),
        }
    }
}

/// Explores each section of the first subject as an independent subtree
/// and concatenates the results in section order.
#[cfg(feature = "parallel")]
fn explore_parallel<'a>(
    subjects: &'a [Subject],
    limits: &Limits<'_>,
    traversal: Traversal,
) -> SearchResult<'a> {
    use rayon::prelude::*;

    let branches: Vec<SearchResult<'a>> = subjects[0]
        .sections()
        .par_iter()
        .map(|section| {
            let mut explorer = Explorer::new(subjects, limits);
            if !explorer.should_stop() && explorer.try_extend(0, section) {
                explorer.explore(1, traversal);
            }
            explorer.into_result()
        })
        .collect();

    merge_branches(branches, limits.max_results)
}

#[cfg(not(feature = "parallel"))]
fn explore_parallel<'a>(
    subjects: &'a [Subject],
    limits: &Limits<'_>,
    traversal: Traversal,
) -> SearchResult<'a> {
    let mut explorer = Explorer::new(subjects, limits);
    explorer.explore(0, traversal);
    explorer.into_result()
}

#[cfg(feature = "parallel")]
fn merge_branches<'a>(
    branches: Vec<SearchResult<'a>>,
    max_results: Option<usize>,
) -> SearchResult<'a> {
    let mut merged = SearchResult::empty();
    for branch in branches {
        merged.nodes_visited += branch.nodes_visited;
        merged.pruned += branch.pruned;
        merged.termination = merged.termination.max(branch.termination);
        merged.combinations.extend(branch.combinations);
    }

    if let Some(max) = max_results {
        if merged.combinations.len() >= max {
            merged.combinations.truncate(max);
            merged.termination = merged.termination.max(Termination::LimitReached);
        }
    }
    merged
}
