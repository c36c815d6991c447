//! The Search Engine: Dijkstra and A* over a [`TileMap`](crate::grid::TileMap), one expansion
//! at a time or in one go.

use crate::{Cost, Point};

mod config;
pub use self::config::SearchConfig;

mod error;
pub use self::error::{Endpoint, SearchError};

mod engine;
pub use self::engine::SearchEngine;

/// The algorithm used to order the Frontier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Expand cells strictly in order of their Cost from the origin.
    #[default]
    Dijkstra,
    /// Expand cells in order of Cost from the origin plus the Manhattan distance to the
    /// destination. Finds equally cheap Paths while usually expanding far fewer cells.
    AStar,
}

/// The state of a [`SearchEngine`]
///
/// ```no_code
/// Idle ──begin──> Running ──step──> Found
///                    │     └──step──> Exhausted
///                    └────────step──> IterationLimitReached
/// ```
/// Starting a new search from any state discards the old one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// No search has been started, or it was cancelled.
    Idle,
    /// The search has not reached a conclusion yet.
    Running,
    /// The destination was reached. The solution can be retrieved.
    Found,
    /// Every reachable cell was expanded without reaching the destination.
    Exhausted,
    /// The configured maximum number of expansions was used up.
    IterationLimitReached,
}

impl SearchStatus {
    /// `true` for the three states a search ends in
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SearchStatus::Found | SearchStatus::Exhausted | SearchStatus::IterationLimitReached
        )
    }
}

/// What a search knows about a discovered cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeRecord {
    /// the lowest Cost found so far to reach the cell from the origin
    pub cost: Cost,
    /// the cell this one is reached from on that cheapest route. The origin points to itself.
    pub came_from: Point,
}
