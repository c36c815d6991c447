#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Paths through procedurally generated tile mazes.
//!
//! ## Introduction
//! The map is a rectangle of cells. Each cell is either a wall or holds one of three Tiles
//! (floor, sand or water), and entering a cell costs a fixed amount depending on its Tile.
//! Agents move up, down, left or right.
//!
//! Paths can be searched using either Dijkstra or A* (with the Manhattan distance as Heuristic).
//! Both always return a Path with the lowest possible total Cost, A* usually has to look at
//! far fewer cells to get there.
//!
//! Besides a one-shot search, the [`SearchEngine`](search::SearchEngine) can be driven one
//! expansion at a time, so that the visited cells, the frontier and the cost of every
//! discovered cell can be inspected (and drawn) between steps.
//!
//! ## Examples
//! Generating a maze and searching it:
//! ```
//! use maze_pathfinding::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let map = GridMap::new_maze(&MazeConfig::default(), &mut rng);
//! let navigator = Navigator::new(map, SearchConfig::default());
//!
//! // corridor cells always have odd coordinates, and every corridor cell is reachable
//! let path = navigator
//!     .find_path((1, 1), (19, 19), Algorithm::AStar)
//!     .unwrap();
//!
//! assert_eq!(path[0], (1, 1));
//! assert_eq!(path[path.len() - 1], (19, 19));
//! ```
//!
//! ### Stepping through a search
//! ```
//! use maze_pathfinding::prelude::*;
//!
//! let map: GridMap = "
//!     .....
//!     .###.
//!     .....
//! "
//! .parse()
//! .unwrap();
//!
//! let mut navigator = Navigator::new(map, SearchConfig::DEBUG);
//! navigator.begin_search((0, 0), (4, 2), Algorithm::Dijkstra).unwrap();
//!
//! while navigator.step() == SearchStatus::Running {
//!     // inspect navigator.search().visited(), frontier_nodes(), ... here
//! }
//!
//! assert!(navigator.is_path_found());
//! assert_eq!(navigator.current_solution().cost, 6.0);
//! assert_eq!(navigator.cost_to_reach((4, 0)), 4.0);
//! ```
//!
//! ### Configuration
//! Maze generation, Tile costs and searches are configured through small `Copy` structs with
//! sensible defaults: [`MazeConfig`](grid::MazeConfig), [`TileCosts`](grid::TileCosts),
//! [`CellLayout`](grid::CellLayout) and [`SearchConfig`](search::SearchConfig).

/// A shorthand for Points on the grid
pub type Point = (i32, i32);

/// The Type used for the Cost of entering a cell and of whole Paths.
///
/// [`Cost::INFINITY`] marks cells that cannot be entered or have not been reached.
pub type Cost = f32;

/// A [`HashMap`](hashbrown::HashMap) keyed by Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of Points
pub type PointSet = hashbrown::HashSet<Point>;

mod utils;
pub use self::utils::Dir;

pub mod neighbors;

pub mod grid;

pub mod graph;

pub mod frontier;

mod path;
pub use self::path::Path;

pub mod search;

mod navigator;
pub use self::navigator::Navigator;

/// The most commonly used types, for glob importing
pub mod prelude {
    pub use crate::{
        graph::{EdgeDirection, Graph},
        grid::{Bounds, CellLayout, GridMap, MazeConfig, Tile, TileCosts, TileMap},
        neighbors::{ManhattanNeighborhood, Neighborhood},
        search::{Algorithm, SearchConfig, SearchEngine, SearchError, SearchStatus},
        Cost, Navigator, Path, Point,
    };
}
