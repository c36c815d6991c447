use super::{Algorithm, Endpoint, NodeRecord, SearchConfig, SearchError, SearchStatus};
use crate::{
    frontier::Frontier,
    grid::{Bounds, TileMap},
    neighbors::{ManhattanNeighborhood, Neighborhood},
    path::walk_back,
    Cost, Path, Point, PointMap, PointSet,
};

/// Runs Dijkstra or A* searches over a [`TileMap`], either to completion or one expansion at a time.
///
/// The engine only holds the state of the current search. The map is passed into every call
/// instead of being stored, and must not change while a search is running.
///
/// Every call to [`begin`](SearchEngine::begin) throws away all state of the previous search.
/// Between two calls to [`step`](SearchEngine::step), the cost table, the visited cells and the
/// Frontier can be inspected freely.
///
/// An engine runs one search at a time. For concurrent searches, use one engine each.
///
/// ## Examples
/// ```
/// use maze_pathfinding::prelude::*;
///
/// let map: GridMap = "
///     ...
///     .#.
///     ...
/// "
/// .parse()
/// .unwrap();
///
/// let mut engine = SearchEngine::new(SearchConfig::default());
/// engine.begin(&map, (0, 0), (2, 2), Algorithm::AStar).unwrap();
///
/// assert_eq!(engine.step(&map), SearchStatus::Running);
/// assert!(engine.visited().contains(&(0, 0)));
/// assert_eq!(engine.cost_to_reach((1, 0)), 1.0);
/// assert_eq!(engine.cost_to_reach((2, 2)), f32::INFINITY);
///
/// assert_eq!(engine.run(&map), SearchStatus::Found);
/// assert_eq!(engine.solution().cost, 4.0);
/// ```
#[derive(Clone, Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    status: SearchStatus,
    algorithm: Algorithm,
    origin: Point,
    destination: Point,
    records: PointMap<NodeRecord>,
    visited: PointSet,
    frontier: Frontier<Point>,
    iterations: usize,
    neighbors: Vec<Point>,
    neighborhood: ManhattanNeighborhood,
    heuristic_scale: Cost,
}

impl SearchEngine {
    /// Creates an idle engine
    pub fn new(config: SearchConfig) -> SearchEngine {
        SearchEngine {
            config,
            status: SearchStatus::Idle,
            algorithm: Algorithm::default(),
            origin: (0, 0),
            destination: (0, 0),
            records: PointMap::default(),
            visited: PointSet::default(),
            frontier: Frontier::new(),
            iterations: 0,
            neighbors: Vec::with_capacity(4),
            neighborhood: ManhattanNeighborhood::new(Bounds::from_size(0, 0)),
            heuristic_scale: 1.0,
        }
    }

    /// The config this engine was created with
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Starts a new search, discarding whatever the engine did before.
    ///
    /// If `origin` or `destination` is not traversable, the engine is left [`Idle`] and
    /// [`SearchError::InvalidSearchRequest`] is returned.
    ///
    /// [`Idle`]: SearchStatus::Idle
    pub fn begin<M: TileMap + ?Sized>(
        &mut self,
        map: &M,
        origin: Point,
        destination: Point,
        algorithm: Algorithm,
    ) -> Result<(), SearchError> {
        self.cancel();

        for (endpoint, point) in [
            (Endpoint::Origin, origin),
            (Endpoint::Destination, destination),
        ] {
            if !map.is_traversable(point) {
                log::debug!("rejected search request: {} {:?} is not traversable", endpoint, point);
                return Err(SearchError::InvalidSearchRequest { endpoint, point });
            }
        }

        self.algorithm = algorithm;
        self.origin = origin;
        self.destination = destination;
        self.neighborhood = ManhattanNeighborhood::new(map.bounds());
        // no step is cheaper than this, so the scaled distance never overestimates
        let min_cost = map.min_cost_to_enter();
        self.heuristic_scale = if min_cost.is_finite() && min_cost > 0.0 {
            min_cost
        } else {
            0.0
        };
        self.records.insert(
            origin,
            NodeRecord {
                cost: 0.0,
                came_from: origin,
            },
        );
        let priority = self.priority(origin, 0.0);
        self.frontier.enqueue(origin, priority);
        self.status = SearchStatus::Running;

        log::debug!(
            "{:?} search from {:?} to {:?} started",
            algorithm,
            origin,
            destination
        );
        Ok(())
    }

    /// Expands the next cell of the Frontier and returns the resulting status.
    ///
    /// One step:
    /// 1. gives up with [`IterationLimitReached`] if `max_iterations` cells were expanded already,
    /// 2. pops the cheapest cell off the Frontier, skipping cells that were already expanded
    ///    (those do not count as an iteration), or ends [`Exhausted`] if nothing is left,
    /// 3. marks it visited. If it is the destination, the search is [`Found`],
    /// 4. otherwise records every traversable neighbor that is new or now cheaper to reach,
    ///    and queues it.
    ///
    /// Does nothing and returns the current status if the engine is not [`Running`].
    ///
    /// [`IterationLimitReached`]: SearchStatus::IterationLimitReached
    /// [`Exhausted`]: SearchStatus::Exhausted
    /// [`Found`]: SearchStatus::Found
    /// [`Running`]: SearchStatus::Running
    pub fn step<M: TileMap + ?Sized>(&mut self, map: &M) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }
        if self.iterations >= self.config.max_iterations {
            return self.finish(SearchStatus::IterationLimitReached);
        }

        let current_id = loop {
            match self.frontier.dequeue() {
                Some(id) if self.visited.contains(&id) => continue,
                Some(id) => break id,
                None => return self.finish(SearchStatus::Exhausted),
            }
        };
        self.visited.insert(current_id);
        self.iterations += 1;

        if current_id == self.destination {
            return self.finish(SearchStatus::Found);
        }

        let current_cost = self.records[&current_id].cost;
        log::trace!("expanding {:?} at cost {}", current_id, current_cost);

        let mut neighbors = std::mem::take(&mut self.neighbors);
        neighbors.clear();
        map.adjacent(current_id, &mut neighbors);

        for &other_id in neighbors.iter() {
            let other_cost = current_cost + map.cost_to_enter(other_id);

            let mut needs_visit = true;
            if let Some(record) = self.records.get_mut(&other_id) {
                if record.cost > other_cost {
                    record.cost = other_cost;
                    record.came_from = current_id;
                } else {
                    needs_visit = false;
                }
            } else {
                self.records.insert(
                    other_id,
                    NodeRecord {
                        cost: other_cost,
                        came_from: current_id,
                    },
                );
            }

            if needs_visit {
                let priority = self.priority(other_id, other_cost);
                self.frontier.enqueue(other_id, priority);
            }
        }
        self.neighbors = neighbors;

        SearchStatus::Running
    }

    /// Calls [`step`](SearchEngine::step) until the search ends, and returns how it ended.
    ///
    /// Returns [`Idle`](SearchStatus::Idle) if no search was started.
    pub fn run<M: TileMap + ?Sized>(&mut self, map: &M) -> SearchStatus {
        loop {
            let status = self.step(map);
            if status != SearchStatus::Running {
                return status;
            }
        }
    }

    /// Runs a complete search and returns the cheapest Path from `origin` to `destination`.
    ///
    /// The engine keeps the final state, so it can still be inspected afterwards.
    pub fn find_path<M: TileMap + ?Sized>(
        &mut self,
        map: &M,
        origin: Point,
        destination: Point,
        algorithm: Algorithm,
    ) -> Result<Path<Point>, SearchError> {
        self.begin(map, origin, destination, algorithm)?;
        match self.run(map) {
            SearchStatus::Found => Ok(self.solution()),
            SearchStatus::Exhausted => Err(SearchError::NoPathExists {
                origin,
                destination,
            }),
            SearchStatus::IterationLimitReached => Err(SearchError::IterationLimitExceeded {
                iterations: self.iterations,
            }),
            status => unreachable!("search stopped while {:?}", status),
        }
    }

    /// Abandons the current search (if any) and returns to [`Idle`](SearchStatus::Idle).
    pub fn cancel(&mut self) {
        self.status = SearchStatus::Idle;
        self.records.clear();
        self.visited.clear();
        self.frontier.clear();
        self.iterations = 0;
    }

    /// The current state of the search
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// `true` once the destination has been reached
    pub fn is_path_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// The algorithm of the current (or last) search
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// `(origin, destination)` of the current search. `None` while [`Idle`](SearchStatus::Idle).
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self.status {
            SearchStatus::Idle => None,
            _ => Some((self.origin, self.destination)),
        }
    }

    /// The number of cells expanded so far
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The cheapest known Cost to reach `point` from the origin.
    ///
    /// [`Cost::INFINITY`] if the search has not discovered `point` (yet).
    pub fn cost_to_reach(&self, point: Point) -> Cost {
        self.records
            .get(&point)
            .map_or(Cost::INFINITY, |record| record.cost)
    }

    /// What the search knows about `point`, if it was discovered
    pub fn record(&self, point: Point) -> Option<NodeRecord> {
        self.records.get(&point).copied()
    }

    /// The cell `point` is currently reached from. The origin is reached from itself.
    pub fn came_from(&self, point: Point) -> Option<Point> {
        self.records.get(&point).map(|record| record.came_from)
    }

    /// Every discovered cell with its record, in arbitrary order
    pub fn records(&self) -> impl Iterator<Item = (Point, NodeRecord)> + '_ {
        self.records.iter().map(|(&point, &record)| (point, record))
    }

    /// The cells whose Cost is final
    pub fn visited(&self) -> &PointSet {
        &self.visited
    }

    /// The discovered cells still waiting to be expanded
    pub fn frontier_nodes(&self) -> PointSet {
        self.frontier
            .iter()
            .map(|(&point, _)| point)
            .filter(|point| !self.visited.contains(point))
            .collect()
    }

    /// The raw Frontier, stale entries included
    pub fn frontier(&self) -> &Frontier<Point> {
        &self.frontier
    }

    /// The cheapest Path from origin to destination.
    ///
    /// ## Panics
    /// if the search has not [found](SearchStatus::Found) the destination. Use
    /// [`try_solution`](SearchEngine::try_solution) if that is not known in advance.
    #[track_caller]
    pub fn solution(&self) -> Path<Point> {
        match self.try_solution() {
            Some(path) => path,
            None => panic!(
                "solution requested while the search is {:?}, not Found",
                self.status
            ),
        }
    }

    /// The cheapest Path from origin to destination, or `None` if the search has not found it.
    pub fn try_solution(&self) -> Option<Path<Point>> {
        if !self.is_path_found() {
            return None;
        }
        let steps = walk_back(self.origin, self.destination, |id| {
            self.records[&id].came_from
        });
        Some(Path::new(steps, self.records[&self.destination].cost))
    }

    fn priority(&self, point: Point, cost: Cost) -> Cost {
        match self.algorithm {
            Algorithm::Dijkstra => cost,
            Algorithm::AStar => {
                cost + self.neighborhood.heuristic(point, self.destination) * self.heuristic_scale
            }
        }
    }

    fn finish(&mut self, status: SearchStatus) -> SearchStatus {
        self.status = status;
        match status {
            SearchStatus::Found => log::debug!(
                "{:?} search found a path from {:?} to {:?} with cost {} after {} iterations",
                self.algorithm,
                self.origin,
                self.destination,
                self.records[&self.destination].cost,
                self.iterations
            ),
            SearchStatus::Exhausted => log::debug!(
                "{:?} search found no path from {:?} to {:?} after {} iterations",
                self.algorithm,
                self.origin,
                self.destination,
                self.iterations
            ),
            SearchStatus::IterationLimitReached => log::warn!(
                "{:?} search from {:?} to {:?} reached the iteration limit of {}",
                self.algorithm,
                self.origin,
                self.destination,
                self.config.max_iterations
            ),
            SearchStatus::Idle | SearchStatus::Running => {}
        }
        status
    }
}

impl Default for SearchEngine {
    fn default() -> SearchEngine {
        SearchEngine::new(SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Bounds, GridMap, Tile, TileCosts};

    fn open_field(size: usize) -> GridMap {
        GridMap::filled(Bounds::from_size(size, size), Some(Tile::Floor))
    }

    #[test]
    fn idle_until_started() {
        let map = open_field(3);
        let mut engine = SearchEngine::default();
        assert_eq!(engine.step(&map), SearchStatus::Idle);
        assert_eq!(engine.run(&map), SearchStatus::Idle);
        assert_eq!(engine.endpoints(), None);
        assert_eq!(engine.try_solution(), None);
    }

    #[test]
    #[should_panic(expected = "not Found")]
    fn solution_before_found_panics() {
        let map = open_field(3);
        let mut engine = SearchEngine::default();
        engine.begin(&map, (0, 0), (2, 2), Algorithm::Dijkstra).unwrap();
        engine.solution();
    }

    #[test]
    fn origin_is_destination() {
        let map = open_field(3);
        let mut engine = SearchEngine::default();
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let path = engine.find_path(&map, (1, 1), (1, 1), algorithm).unwrap();
            assert_eq!(path.path, vec![(1, 1)]);
            assert_eq!(path.cost, 0.0);
            assert_eq!(engine.iterations(), 1);
        }
    }

    #[test]
    fn invalid_endpoints() {
        let mut map = open_field(3);
        map.set_tile((1, 1), None);
        let mut engine = SearchEngine::default();

        assert_eq!(
            engine.begin(&map, (1, 1), (0, 0), Algorithm::Dijkstra),
            Err(SearchError::InvalidSearchRequest {
                endpoint: Endpoint::Origin,
                point: (1, 1)
            })
        );
        assert_eq!(
            engine.find_path(&map, (0, 0), (5, 0), Algorithm::AStar),
            Err(SearchError::InvalidSearchRequest {
                endpoint: Endpoint::Destination,
                point: (5, 0)
            })
        );
        assert_eq!(engine.status(), SearchStatus::Idle);
    }

    #[test]
    fn exhausted() {
        let map: GridMap = "..#..".parse().unwrap();
        let mut engine = SearchEngine::default();
        assert_eq!(
            engine.find_path(&map, (0, 0), (4, 0), Algorithm::Dijkstra),
            Err(SearchError::NoPathExists {
                origin: (0, 0),
                destination: (4, 0)
            })
        );
        assert_eq!(engine.status(), SearchStatus::Exhausted);
        assert_eq!(engine.iterations(), 2);
        assert_eq!(engine.cost_to_reach((4, 0)), Cost::INFINITY);
    }

    #[test]
    fn iteration_limit() {
        let map = open_field(10);
        let mut engine = SearchEngine::new(SearchConfig::with_max_iterations(5));
        assert_eq!(
            engine.find_path(&map, (0, 0), (9, 9), Algorithm::Dijkstra),
            Err(SearchError::IterationLimitExceeded { iterations: 5 })
        );
        assert_eq!(engine.status(), SearchStatus::IterationLimitReached);
        assert_eq!(engine.visited().len(), 5);
    }

    #[test]
    fn destination_on_last_allowed_iteration_is_found() {
        let map: GridMap = "...".parse().unwrap();
        let mut engine = SearchEngine::new(SearchConfig::with_max_iterations(3));
        let path = engine
            .find_path(&map, (0, 0), (2, 0), Algorithm::Dijkstra)
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(engine.iterations(), 3);
    }

    #[test]
    fn stepping_exposes_state() {
        let map: GridMap = "
            ....
            .ww.
            ....
        "
        .parse()
        .unwrap();
        let mut engine = SearchEngine::default();
        engine.begin(&map, (0, 0), (3, 2), Algorithm::Dijkstra).unwrap();
        assert_eq!(engine.endpoints(), Some(((0, 0), (3, 2))));
        assert_eq!(engine.cost_to_reach((0, 0)), 0.0);
        assert_eq!(engine.came_from((0, 0)), Some((0, 0)));
        assert_eq!(engine.frontier_nodes().len(), 1);

        assert_eq!(engine.step(&map), SearchStatus::Running);
        assert_eq!(engine.iterations(), 1);
        // up, down, left, right of (0, 0): only (0, 1) and (1, 0) exist
        let frontier = engine.frontier_nodes();
        assert_eq!(frontier.len(), 2);
        assert!(frontier.contains(&(0, 1)) && frontier.contains(&(1, 0)));
        assert_eq!(engine.came_from((1, 0)), Some((0, 0)));

        assert_eq!(engine.step(&map), SearchStatus::Running);
        // (0, 1) came first (up before right) and leads into water
        assert!(engine.visited().contains(&(0, 1)));
        assert_eq!(engine.cost_to_reach((1, 1)), 4.0);

        assert_eq!(engine.run(&map), SearchStatus::Found);
        let path = engine.solution();
        assert_eq!(path.cost, 5.0);
        assert_eq!(path.len(), 6);
        assert_eq!(engine.step(&map), SearchStatus::Found);
    }

    #[test]
    fn water_is_crossed_when_cheaper() {
        let map: GridMap = "
            ..w..
            .###.
            .....
        "
        .parse()
        .unwrap();
        let mut engine = SearchEngine::default();
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let path = engine.find_path(&map, (0, 0), (4, 0), algorithm).unwrap();
            assert_eq!(path.cost, 6.0);
            assert_eq!(path.path, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        }
    }

    #[test]
    fn cancel_discards_state() {
        let map = open_field(4);
        let mut engine = SearchEngine::default();
        engine.begin(&map, (0, 0), (3, 3), Algorithm::AStar).unwrap();
        engine.step(&map);
        engine.step(&map);
        engine.cancel();
        assert_eq!(engine.status(), SearchStatus::Idle);
        assert!(engine.visited().is_empty());
        assert!(engine.frontier().is_empty());
        assert_eq!(engine.cost_to_reach((0, 0)), Cost::INFINITY);
    }

    #[test]
    fn restarting_does_not_reuse_state() {
        let map = open_field(5);
        let mut engine = SearchEngine::default();
        let first = engine
            .find_path(&map, (0, 0), (4, 4), Algorithm::Dijkstra)
            .unwrap();
        let second = engine
            .find_path(&map, (4, 4), (0, 0), Algorithm::Dijkstra)
            .unwrap();
        assert_eq!(first.cost, second.cost);
        assert_eq!(engine.came_from((4, 4)), Some((4, 4)));
        assert_eq!(engine.cost_to_reach((4, 4)), 0.0);
    }

    #[test]
    fn a_star_with_cheap_floor() {
        // the floor detour is cheaper than the straight sand row
        let map: GridMap = "
            ssss
            ....
        "
        .parse()
        .unwrap();
        let map = map.with_costs(TileCosts {
            floor: 0.1,
            sand: 1.0,
            water: 3.0,
        });
        let mut engine = SearchEngine::default();
        let dijkstra = engine
            .find_path(&map, (0, 0), (3, 0), Algorithm::Dijkstra)
            .unwrap();
        let a_star = engine
            .find_path(&map, (0, 0), (3, 0), Algorithm::AStar)
            .unwrap();
        assert!((dijkstra.cost - 1.4).abs() < 1e-5);
        assert_eq!(a_star.cost, dijkstra.cost);
        assert_eq!(a_star.path, dijkstra.path);
    }

    #[test]
    fn a_star_expands_less() {
        let map = open_field(15);
        let mut engine = SearchEngine::default();
        let dijkstra = engine
            .find_path(&map, (0, 0), (14, 0), Algorithm::Dijkstra)
            .unwrap();
        let dijkstra_iterations = engine.iterations();
        let a_star = engine
            .find_path(&map, (0, 0), (14, 0), Algorithm::AStar)
            .unwrap();
        assert_eq!(dijkstra.cost, a_star.cost);
        assert!(engine.iterations() < dijkstra_iterations);
    }
}
