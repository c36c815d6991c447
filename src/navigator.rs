use crate::{
    grid::{GridMap, MazeConfig, Tile},
    search::{Algorithm, SearchConfig, SearchEngine, SearchError, SearchStatus},
    Cost, Path, Point,
};
use rand::Rng;

/// Owns a [`GridMap`] and answers Path requests on it.
///
/// One-shot requests through [`find_path`](Navigator::find_path) use a fresh [`SearchEngine`]
/// each time and leave the Navigator untouched, so they can be made through a shared reference.
///
/// Next to that, the Navigator holds one incremental search that is driven with
/// [`begin_search`](Navigator::begin_search) and [`step`](Navigator::step). Any change to the
/// map cancels that search, since its state would no longer match the map.
///
/// ## Examples
/// ```
/// use maze_pathfinding::prelude::*;
///
/// let map: GridMap = "
///     ..s
///     .#.
///     ...
/// "
/// .parse()
/// .unwrap();
/// let mut navigator = Navigator::new(map, SearchConfig::default());
///
/// let path = navigator.find_path((0, 0), (2, 0), Algorithm::Dijkstra).unwrap();
/// assert_eq!(path.cost, 3.0);
///
/// navigator.set_tile((2, 0), Some(Tile::Water));
/// let path = navigator.find_path((0, 0), (2, 0), Algorithm::Dijkstra).unwrap();
/// assert_eq!(path.cost, 4.0);
///
/// navigator.set_tile((2, 0), None);
/// assert!(navigator.find_path((0, 0), (2, 0), Algorithm::Dijkstra).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Navigator {
    map: GridMap,
    config: SearchConfig,
    engine: SearchEngine,
}

impl Navigator {
    /// Creates a Navigator for `map`. `config` applies to every search it runs.
    pub fn new(map: GridMap, config: SearchConfig) -> Navigator {
        Navigator {
            map,
            config,
            engine: SearchEngine::new(config),
        }
    }

    /// The map searches are run on
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Mutable access to the map. Cancels the incremental search.
    pub fn map_mut(&mut self) -> &mut GridMap {
        self.cancel_search();
        &mut self.map
    }

    /// Gives back the map
    pub fn into_map(self) -> GridMap {
        self.map
    }

    /// The config searches are run with
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Changes a single cell, see [`GridMap::set_tile`]. Cancels the incremental search if
    /// `point` is on the map.
    pub fn set_tile(&mut self, point: Point, tile: Option<Tile>) -> bool {
        let changed = self.map.set_tile(point, tile);
        if changed {
            self.cancel_search();
        }
        changed
    }

    /// Replaces the map with a new maze, see [`GridMap::generate_maze`]. Cancels the incremental
    /// search.
    pub fn generate_maze<R: Rng>(&mut self, config: &MazeConfig, rng: &mut R) {
        self.cancel_search();
        self.map.generate_maze(config, rng);
    }

    /// Searches the cheapest Path from `origin` to `destination`.
    ///
    /// ## Returns
    /// the Path, starting with `origin` and ending with `destination`, or the reason why none
    /// could be found. `origin == destination` yields a single-cell Path with Cost `0`.
    pub fn find_path(
        &self,
        origin: Point,
        destination: Point,
        algorithm: Algorithm,
    ) -> Result<Path<Point>, SearchError> {
        SearchEngine::new(self.config).find_path(&self.map, origin, destination, algorithm)
    }

    /// Runs [`find_path`](Navigator::find_path) for every `(origin, destination)` pair, spread
    /// over the rayon thread pool.
    ///
    /// The results are in the same order as `requests`.
    #[cfg(feature = "parallel")]
    pub fn find_paths_parallel(
        &self,
        requests: &[(Point, Point)],
        algorithm: Algorithm,
    ) -> Vec<Result<Path<Point>, SearchError>> {
        use rayon::prelude::*;

        log::debug!("answering {} path requests in parallel", requests.len());
        requests
            .par_iter()
            .map(|&(origin, destination)| self.find_path(origin, destination, algorithm))
            .collect()
    }

    /// Starts an incremental search, replacing the previous one.
    ///
    /// Nothing is expanded yet; call [`step`](Navigator::step) to make progress.
    pub fn begin_search(
        &mut self,
        origin: Point,
        destination: Point,
        algorithm: Algorithm,
    ) -> Result<(), SearchError> {
        self.engine.begin(&self.map, origin, destination, algorithm)
    }

    /// Advances the incremental search by one expansion. See [`SearchEngine::step`].
    pub fn step(&mut self) -> SearchStatus {
        self.engine.step(&self.map)
    }

    /// Steps the incremental search until it ends
    pub fn run_search(&mut self) -> SearchStatus {
        self.engine.run(&self.map)
    }

    /// `true` once the incremental search has reached its destination
    pub fn is_path_found(&self) -> bool {
        self.engine.is_path_found()
    }

    /// The Path found by the incremental search.
    ///
    /// ## Panics
    /// if no Path has been found (yet). Check [`is_path_found`](Navigator::is_path_found) first.
    #[track_caller]
    pub fn current_solution(&self) -> Path<Point> {
        self.engine.solution()
    }

    /// The cheapest Cost the incremental search knows for reaching `point`.
    ///
    /// [`Cost::INFINITY`] if `point` has not been discovered.
    pub fn cost_to_reach(&self, point: Point) -> Cost {
        self.engine.cost_to_reach(point)
    }

    /// The incremental search, for inspection
    pub fn search(&self) -> &SearchEngine {
        &self.engine
    }

    /// Abandons the incremental search
    pub fn cancel_search(&mut self) {
        if self.engine.status() != SearchStatus::Idle {
            log::debug!("cancelling {:?} search", self.engine.algorithm());
        }
        self.engine.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Bounds, TileMap};
    use rand::{rngs::StdRng, SeedableRng};

    fn navigator(map: &str) -> Navigator {
        Navigator::new(map.parse().unwrap(), SearchConfig::default())
    }

    #[test]
    fn one_shot_leaves_incremental_search_alone() {
        let mut nav = navigator(
            "
            .....
            .....
            ",
        );
        nav.begin_search((0, 0), (4, 1), Algorithm::AStar).unwrap();
        nav.step();
        let path = nav.find_path((4, 1), (0, 0), Algorithm::Dijkstra).unwrap();
        assert_eq!(path.cost, 5.0);
        assert_eq!(nav.search().status(), SearchStatus::Running);
        assert_eq!(nav.search().iterations(), 1);
    }

    #[test]
    fn editing_the_map_cancels() {
        let mut nav = navigator("....");
        nav.begin_search((0, 0), (3, 0), Algorithm::Dijkstra).unwrap();
        nav.step();
        assert!(!nav.set_tile((7, 7), Some(Tile::Sand)));
        assert_eq!(nav.search().status(), SearchStatus::Running);

        assert!(nav.set_tile((2, 0), Some(Tile::Sand)));
        assert_eq!(nav.search().status(), SearchStatus::Idle);
        assert_eq!(nav.step(), SearchStatus::Idle);

        nav.begin_search((0, 0), (3, 0), Algorithm::Dijkstra).unwrap();
        nav.map_mut().set_tile((1, 0), None);
        assert_eq!(nav.search().status(), SearchStatus::Idle);
    }

    #[test]
    fn regenerating_replaces_map() {
        let mut nav = Navigator::new(
            GridMap::filled(Bounds::from_size(2, 2), Some(Tile::Floor)),
            SearchConfig::default(),
        );
        nav.begin_search((0, 0), (1, 1), Algorithm::AStar).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        nav.generate_maze(&MazeConfig::with_size(11, 7), &mut rng);
        assert_eq!(nav.map().bounds(), Bounds::from_size(11, 7));
        assert_eq!(nav.search().status(), SearchStatus::Idle);

        let path = nav.find_path((1, 1), (9, 5), Algorithm::AStar).unwrap();
        assert_eq!(path.start(), Some(&(1, 1)));
        assert_eq!(path.goal(), Some(&(9, 5)));
    }

    #[test]
    fn incremental_solution() {
        let mut nav = navigator(
            "
            .s.
            ...
            ",
        );
        nav.begin_search((0, 0), (2, 0), Algorithm::Dijkstra).unwrap();
        assert!(!nav.is_path_found());
        assert_eq!(nav.run_search(), SearchStatus::Found);
        assert!(nav.is_path_found());
        let path = nav.current_solution();
        assert_eq!(path.cost, 3.0);
        assert_eq!(nav.cost_to_reach((2, 0)), 3.0);
    }

    #[test]
    #[should_panic]
    fn solution_without_search() {
        navigator("..").current_solution();
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(11);
        let nav = Navigator::new(
            GridMap::new_maze(&MazeConfig::with_size(31, 31), &mut rng),
            SearchConfig::default(),
        );
        let requests = [((1, 1), (29, 29)), ((29, 1), (1, 29)), ((0, 0), (1, 1))];
        let results = nav.find_paths_parallel(&requests, Algorithm::AStar);
        assert_eq!(results.len(), requests.len());
        for (&(origin, destination), result) in requests.iter().zip(results) {
            assert_eq!(result, nav.find_path(origin, destination, Algorithm::AStar));
        }
    }
}
