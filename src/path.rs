use crate::Cost;

/// A sequence of Nodes together with the total Cost of walking it.
///
/// The first Node is where the Path starts and the last one is the goal. The Cost of the
/// starting Node itself is never included, so a Path consisting of only its start costs `0`.
///
/// A Path is always handed out as a fresh, caller-owned value. Modifying it (for example
/// popping Nodes off the front while walking along it) never affects the search that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    /// the Nodes of the Path
    pub path: Vec<P>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use maze_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42.0);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost, 42.0);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// appends a Node to the Path, adding it's Cost to the total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use maze_pathfinding::Path;
    /// let mut path = Path::new(vec!['a', 'b', 'c'], 42.0);
    /// path.append('d', 5.0);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c', 'd']);
    /// assert_eq!(path.cost, 47.0);
    /// ```
    pub fn append(&mut self, node: P, cost: Cost) -> &mut Self {
        self.path.push(node);
        self.cost += cost;
        self
    }

    /// The first Node, if any
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Node, if any
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// Consumes the Path, returning only the Nodes
    pub fn into_nodes(self) -> Vec<P> {
        self.path
    }
}

/// Follows the `prev` links from `goal` back to `start` and returns the Nodes in walking order.
///
/// `start` must be reachable by following `prev`, otherwise this never terminates.
pub(crate) fn walk_back<P: Copy + PartialEq>(
    start: P,
    goal: P,
    mut prev: impl FnMut(P) -> P,
) -> Vec<P> {
    let mut steps = vec![];
    let mut current = goal;

    while current != start {
        steps.push(current);
        current = prev(current);
    }
    steps.push(start);
    steps.reverse();
    steps
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}
