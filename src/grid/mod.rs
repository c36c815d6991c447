//! The Grid Map Model: which cells can be walked on and what it costs to enter them.

use crate::{
    neighbors::{ManhattanNeighborhood, Neighborhood},
    Cost, Point,
};

mod bounds;
pub use self::bounds::Bounds;

mod config;
pub use self::config::{CellLayout, TileCosts};

mod maze;
pub use self::maze::MazeConfig;

mod parse;
pub use self::parse::ParseMapError;

/// A position in world space, as consumed by whatever draws or moves things on the map.
pub type WorldPoint = (f32, f32);

/// The kinds of walkable Tiles. A cell without a Tile is a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// cheapest to walk over
    Floor,
    /// slower than floor
    Sand,
    /// the most expensive walkable Tile
    Water,
}

/// Read access to a grid of Tiles, as required by every search in this crate.
///
/// All functions must be total: asking about a Point outside of [`bounds`](TileMap::bounds)
/// is not an error, such a Point is simply not traversable.
pub trait TileMap {
    /// The rectangle of cells this map covers.
    fn bounds(&self) -> Bounds;
    /// `true` iff `point` is inside the bounds and holds a Tile.
    fn is_traversable(&self, point: Point) -> bool;
    /// The cost of stepping onto `point`, regardless of which side it is entered from.
    ///
    /// [`Cost::INFINITY`] for anything that is not traversable.
    fn cost_to_enter(&self, point: Point) -> Cost;
    /// A lower bound for [`cost_to_enter`](TileMap::cost_to_enter) over all traversable cells.
    ///
    /// A* multiplies its distance estimate with this, so it must never exceed the real
    /// cost of any step. `0` is always correct, but turns A* into Dijkstra.
    fn min_cost_to_enter(&self) -> Cost;
    /// Appends the traversable neighbors of `point` to `target`, in the order up, down, left, right.
    fn adjacent(&self, point: Point, target: &mut Vec<Point>) {
        let start = target.len();
        ManhattanNeighborhood::new(self.bounds()).get_all_neighbors(point, target);
        // stable in-place filter of the newly appended Points
        let mut kept = start;
        for i in start..target.len() {
            if self.is_traversable(target[i]) {
                target.swap(kept, i);
                kept += 1;
            }
        }
        target.truncate(kept);
    }
}

/// A rectangular map of [`Tile`]s.
///
/// ## Examples
/// ```
/// use maze_pathfinding::prelude::*;
///
/// let map: GridMap = "\
/// ######
/// #.sw#
/// ######"
///     .parse()
///     .unwrap();
///
/// assert!(map.is_traversable((2, 1)));
/// assert!(!map.is_traversable((0, 0)));
/// assert_eq!(map.cost_to_enter((3, 1)), 3.0);
/// assert_eq!(map.cost_to_enter((9, 9)), f32::INFINITY);
/// assert_eq!(map.adjacent_tiles((2, 1)), vec![(1, 1), (3, 1)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridMap {
    bounds: Bounds,
    tiles: Vec<Option<Tile>>,
    costs: TileCosts,
    layout: CellLayout,
}

impl GridMap {
    /// Creates a map of the given size without any Tiles (all walls).
    pub fn new(bounds: Bounds) -> GridMap {
        GridMap::filled(bounds, None)
    }

    /// Creates a map where every cell holds `tile`.
    pub fn filled(bounds: Bounds, tile: Option<Tile>) -> GridMap {
        GridMap {
            bounds,
            tiles: vec![tile; bounds.area()],
            costs: TileCosts::default(),
            layout: CellLayout::default(),
        }
    }

    /// Replaces the entry costs of the three Tile types.
    ///
    /// Negative and NaN costs are replaced with `0`, see [`TileCosts::sanitized`].
    pub fn with_costs(mut self, costs: TileCosts) -> GridMap {
        let sanitized = costs.sanitized();
        if sanitized != costs {
            log::warn!("invalid tile costs {:?} replaced with {:?}", costs, sanitized);
        }
        self.costs = sanitized;
        self
    }

    /// Replaces the mapping from cells to world space.
    pub fn with_layout(mut self, layout: CellLayout) -> GridMap {
        self.layout = layout;
        self
    }

    /// The Tile at `point`. `None` for walls and anything out of bounds.
    pub fn tile(&self, point: Point) -> Option<Tile> {
        self.index(point).and_then(|i| self.tiles[i])
    }

    /// Places (or with `None` removes) a Tile.
    ///
    /// Returns `false` and changes nothing if `point` is out of bounds.
    pub fn set_tile(&mut self, point: Point, tile: Option<Tile>) -> bool {
        match self.index(point) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// The entry costs used by this map.
    pub fn costs(&self) -> TileCosts {
        self.costs
    }

    /// The mapping from cells to world space used by this map.
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Same as [`TileMap::adjacent`], collected into a fresh Vec.
    pub fn adjacent_tiles(&self, point: Point) -> Vec<Point> {
        let mut target = Vec::with_capacity(4);
        self.adjacent(point, &mut target);
        target
    }

    /// The world-space center of a cell. Works for any Point, even out of bounds ones.
    pub fn tile_center_world(&self, point: Point) -> WorldPoint {
        self.layout.cell_center(point)
    }

    /// Iterates over all traversable cells, row by row.
    pub fn traversable_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds
            .points()
            .filter(move |&p| self.is_traversable(p))
    }

    fn index(&self, (x, y): Point) -> Option<usize> {
        if !self.bounds.contains((x, y)) {
            return None;
        }
        let width = self.bounds.width();
        let dx = (x - self.bounds.min.0) as usize;
        let dy = (y - self.bounds.min.1) as usize;
        Some(dy * width + dx)
    }
}

impl TileMap for GridMap {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
    fn is_traversable(&self, point: Point) -> bool {
        self.tile(point).is_some()
    }
    fn cost_to_enter(&self, point: Point) -> Cost {
        match self.tile(point) {
            Some(tile) => self.costs.cost_of(tile),
            None => Cost::INFINITY,
        }
    }
    fn min_cost_to_enter(&self) -> Cost {
        self.costs.min_cost()
    }
}

impl<M: TileMap + ?Sized> TileMap for &M {
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }
    fn is_traversable(&self, point: Point) -> bool {
        (**self).is_traversable(point)
    }
    fn cost_to_enter(&self, point: Point) -> Cost {
        (**self).cost_to_enter(point)
    }
    fn min_cost_to_enter(&self) -> Cost {
        (**self).min_cost_to_enter()
    }
    fn adjacent(&self, point: Point, target: &mut Vec<Point>) {
        (**self).adjacent(point, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_total() {
        let map = GridMap::filled(Bounds::new((0, 0), (3, 3)), Some(Tile::Floor));
        assert!(map.is_traversable((2, 2)));
        assert!(!map.is_traversable((3, 0)));
        assert!(!map.is_traversable((-1, 0)));
        assert_eq!(map.cost_to_enter((0, -1)), Cost::INFINITY);
        assert_eq!(map.tile((100, 100)), None);
    }

    #[test]
    fn costs_follow_tile_type() {
        let mut map = GridMap::new(Bounds::new((0, 0), (3, 1)));
        map.set_tile((0, 0), Some(Tile::Floor));
        map.set_tile((1, 0), Some(Tile::Sand));
        map.set_tile((2, 0), Some(Tile::Water));
        assert_eq!(map.cost_to_enter((0, 0)), 1.0);
        assert_eq!(map.cost_to_enter((1, 0)), 2.0);
        assert_eq!(map.cost_to_enter((2, 0)), 3.0);

        let map = map.with_costs(TileCosts {
            floor: 1.0,
            sand: 5.0,
            water: 10.0,
        });
        assert_eq!(map.cost_to_enter((2, 0)), 10.0);
        assert_eq!(map.min_cost_to_enter(), 1.0);

        let map = map.with_costs(TileCosts {
            floor: -2.0,
            sand: Cost::NAN,
            water: 0.5,
        });
        assert_eq!(map.cost_to_enter((0, 0)), 0.0);
        assert_eq!(map.cost_to_enter((1, 0)), 0.0);
        assert_eq!(map.cost_to_enter((2, 0)), 0.5);
        assert_eq!(map.min_cost_to_enter(), 0.0);
    }

    #[test]
    fn set_tile_out_of_bounds() {
        let mut map = GridMap::new(Bounds::new((0, 0), (2, 2)));
        assert!(!map.set_tile((2, 0), Some(Tile::Floor)));
        assert!(map.set_tile((1, 1), Some(Tile::Floor)));
        assert_eq!(map.traversable_cells().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn adjacent_skips_walls() {
        let mut map = GridMap::filled(Bounds::new((-1, -1), (2, 2)), Some(Tile::Floor));
        map.set_tile((0, 1), None);
        assert_eq!(map.adjacent_tiles((0, 0)), vec![(0, -1), (-1, 0), (1, 0)]);

        map.set_tile((0, 0), None);
        // the queried cell itself does not need to be traversable
        assert_eq!(map.adjacent_tiles((0, 0)), vec![(0, -1), (-1, 0), (1, 0)]);
    }

    #[test]
    fn tile_center_world() {
        let map = GridMap::new(Bounds::new((0, 0), (4, 4))).with_layout(CellLayout {
            cell_size: 2.0,
            origin: (10.0, -4.0),
        });
        assert_eq!(map.tile_center_world((0, 0)), (11.0, -3.0));
        assert_eq!(map.tile_center_world((3, 1)), (17.0, -1.0));
    }
}
