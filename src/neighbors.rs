//! A module with the Neighborhood used for walking the Grid

use crate::{grid::Bounds, utils::Dir, Cost, Point};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point and a Heuristic
/// for how long it might take to reach a goal from a Point.
///
/// The searches in this crate use [`ManhattanNeighborhood`], since Agents walking a maze can
/// only step up, down, left or right.
pub trait Neighborhood: Clone + Debug {
    /// Appends all Neighbors of a Point to `target`, in a fixed order.
    ///
    /// Note that it is not necessary to check whether the Tile at a Point is solid or not.
    /// That check is done later.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// The result must never overestimate the real Cost, otherwise A* loses its optimality.
    fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// The heuristic counts one per step. The search engine multiplies it with the cheapest entry
/// cost of the map to keep it admissible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManhattanNeighborhood {
    bounds: Bounds,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `bounds` is the area of the Grid to move on.
    pub fn new(bounds: Bounds) -> ManhattanNeighborhood {
        ManhattanNeighborhood { bounds }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let bounds = self.bounds;
        target.extend(
            Dir::all()
                .map(|dir| dir.jump(point, 1))
                .filter(|&p| bounds.contains(p)),
        );
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        manhattan_distance(point, goal) as Cost
    }
}

/// `|dx| + |dy|` between two Points
pub fn manhattan_distance(a: Point, b: Point) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_all_neighbors_in_order() {
        let neighborhood = ManhattanNeighborhood::new(Bounds::new((0, 0), (5, 5)));
        let mut neighbors = vec![];
        neighborhood.get_all_neighbors((0, 2), &mut neighbors);
        assert_eq!(neighbors, vec![(0, 3), (0, 1), (1, 2)]);
    }

    #[test]
    fn get_all_neighbors_offset_bounds() {
        let neighborhood = ManhattanNeighborhood::new(Bounds::new((-2, -2), (1, 1)));
        let mut neighbors = vec![];
        neighborhood.get_all_neighbors((-2, 0), &mut neighbors);
        assert_eq!(neighbors, vec![(-2, -1), (-1, 0)]);
    }

    #[test]
    fn heuristic() {
        let neighborhood = ManhattanNeighborhood::new(Bounds::new((0, 0), (5, 5)));
        assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 4.0);
        assert_eq!(manhattan_distance((-3, 2), (1, -1)), 7);
    }
}
