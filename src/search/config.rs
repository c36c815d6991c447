/// Options for a [`SearchEngine`](crate::search::SearchEngine)
///
/// Default options:
/// ```
/// # use maze_pathfinding::search::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         max_iterations: 10_000,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// The maximum number of cells a single search may expand before it gives up with
    /// [`IterationLimitReached`](crate::search::SearchStatus::IterationLimitReached).
    ///
    /// This is the only bound on a search; there is no timeout. Expanding every cell of a
    /// `w × h` map never takes more than `w * h` iterations.
    pub max_iterations: usize,
}

impl SearchConfig {
    /// A small limit, suited for stepping through searches by hand
    ///
    /// Values:
    /// ```
    /// # use maze_pathfinding::search::SearchConfig;
    /// assert_eq!(SearchConfig { max_iterations: 500 }, SearchConfig::DEBUG);
    /// ```
    pub const DEBUG: SearchConfig = SearchConfig {
        max_iterations: 500,
    };
    /// No limit at all
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        max_iterations: usize::MAX,
    };

    /// A config with the given iteration limit
    pub fn with_max_iterations(max_iterations: usize) -> SearchConfig {
        SearchConfig { max_iterations }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            max_iterations: 10_000,
        }
    }
}
