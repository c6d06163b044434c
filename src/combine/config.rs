//! Search configuration.

/// Depth-first traversal strategy.
///
/// Both strategies visit candidates in the same order and produce
/// identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Direct recursion; depth is bounded by the subject count.
    #[default]
    Recursive,
    /// Explicit-stack loop, for very long subject lists.
    Iterative,
}

/// Configuration for [`CombinationSearch`](super::CombinationSearch).
///
/// The defaults reproduce an unbounded, sequential, exhaustive search.
/// The limits exist because the result set can grow exponentially with
/// the number of subjects.
///
/// # Examples
///
/// ```
/// use u_timetable::combine::{SearchConfig, Traversal};
///
/// let config = SearchConfig::default()
///     .with_max_results(1000)
///     .with_time_limit_ms(5_000)
///     .with_traversal(Traversal::Iterative);
/// assert_eq!(config.max_results, Some(1000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after this many combinations have been found.
    ///
    /// `None` enumerates every valid combination (the default).
    pub max_results: Option<usize>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked periodically during traversal, so the actual runtime may
    /// slightly exceed the limit.
    pub time_limit_ms: Option<u64>,

    /// Traversal strategy.
    pub traversal: Traversal,

    /// Explore the first subject's sections in parallel using rayon.
    ///
    /// Only honoured when the `parallel` feature is enabled. Output order
    /// is the same as a sequential run.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: None,
            time_limit_ms: None,
            traversal: Traversal::Recursive,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the maximum number of combinations to return.
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = Some(n);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the traversal strategy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Enables or disables parallel exploration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == Some(0) {
            return Err("max_results must be positive or None".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(config.max_results.is_none());
        assert!(config.time_limit_ms.is_none());
        assert_eq!(config.traversal, Traversal::Recursive);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_max_results(10)
            .with_time_limit_ms(250)
            .with_traversal(Traversal::Iterative)
            .with_parallel(true);

        assert_eq!(config.max_results, Some(10));
        assert_eq!(config.time_limit_ms, Some(250));
        assert_eq!(config.traversal, Traversal::Iterative);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_zero_max_results() {
        let config = SearchConfig::default().with_max_results(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = SearchConfig::default().with_time_limit_ms(0);
        assert!(config.validate().is_err());
    }
}
