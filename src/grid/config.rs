use super::{Tile, WorldPoint};
use crate::{Cost, Point};

/// The cost of entering each [`Tile`] type.
///
/// Default costs:
/// ```
/// # use maze_pathfinding::grid::TileCosts;
/// assert_eq!(
///     TileCosts {
///         floor: 1.0,
///         sand: 2.0,
///         water: 3.0,
///     },
///     Default::default()
/// );
/// ```
///
/// Costs must not be negative. [`GridMap::with_costs`](super::GridMap::with_costs) replaces
/// negative and NaN costs with `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileCosts {
    /// Cost of entering a [`Tile::Floor`] (defaults to `1`)
    pub floor: Cost,
    /// Cost of entering a [`Tile::Sand`] (defaults to `2`)
    pub sand: Cost,
    /// Cost of entering a [`Tile::Water`] (defaults to `3`)
    pub water: Cost,
}

impl TileCosts {
    /// Every Tile costs `1`, turning searches into plain breadth-first distance.
    pub const UNIFORM: TileCosts = TileCosts {
        floor: 1.0,
        sand: 1.0,
        water: 1.0,
    };

    /// The cost of entering `tile`
    pub fn cost_of(&self, tile: Tile) -> Cost {
        match tile {
            Tile::Floor => self.floor,
            Tile::Sand => self.sand,
            Tile::Water => self.water,
        }
    }

    /// The cheapest of the three costs
    ///
    /// ```
    /// # use maze_pathfinding::grid::TileCosts;
    /// let costs = TileCosts { floor: 0.5, ..Default::default() };
    /// assert_eq!(costs.min_cost(), 0.5);
    /// assert_eq!(TileCosts::default().min_cost(), 1.0);
    /// ```
    pub fn min_cost(&self) -> Cost {
        self.floor.min(self.sand).min(self.water)
    }

    /// A copy with every negative or NaN cost replaced by `0`.
    ///
    /// `INFINITY` is kept and makes that Tile impassable in practice.
    ///
    /// ```
    /// # use maze_pathfinding::grid::TileCosts;
    /// let costs = TileCosts { floor: -1.0, sand: f32::NAN, water: 3.0 }.sanitized();
    /// assert_eq!(costs, TileCosts { floor: 0.0, sand: 0.0, water: 3.0 });
    /// ```
    pub fn sanitized(&self) -> TileCosts {
        fn sanitize(cost: Cost) -> Cost {
            if cost >= 0.0 {
                cost
            } else {
                0.0
            }
        }
        TileCosts {
            floor: sanitize(self.floor),
            sand: sanitize(self.sand),
            water: sanitize(self.water),
        }
    }
}

impl Default for TileCosts {
    fn default() -> TileCosts {
        TileCosts {
            floor: 1.0,
            sand: 2.0,
            water: 3.0,
        }
    }
}

/// Maps cells to world space: cell `(x, y)` covers
/// `origin + [x, x + 1) * cell_size` × `origin + [y, y + 1) * cell_size`.
///
/// ```
/// # use maze_pathfinding::grid::CellLayout;
/// assert_eq!(
///     CellLayout {
///         cell_size: 1.0,
///         origin: (0.0, 0.0),
///     },
///     Default::default()
/// );
/// assert_eq!(CellLayout::default().cell_center((2, 3)), (2.5, 3.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    /// The edge length of one cell in world units (defaults to `1`)
    pub cell_size: f32,
    /// The world position of the corner of cell `(0, 0)` (defaults to `(0, 0)`)
    pub origin: WorldPoint,
}

impl CellLayout {
    /// The world-space center of a cell
    pub fn cell_center(&self, (x, y): Point) -> WorldPoint {
        (
            self.origin.0 + (x as f32 + 0.5) * self.cell_size,
            self.origin.1 + (y as f32 + 0.5) * self.cell_size,
        )
    }
}

impl Default for CellLayout {
    fn default() -> CellLayout {
        CellLayout {
            cell_size: 1.0,
            origin: (0.0, 0.0),
        }
    }
}
