use crate::Point;

/// The four directions an Agent can step in on the Grid.
///
/// `UP` points towards increasing `y`, matching the world coordinates produced by
/// [`CellLayout`](crate::grid::CellLayout).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    /// towards `y + 1`
    UP = 0,
    /// towards `y - 1`
    DOWN = 1,
    /// towards `x - 1`
    LEFT = 2,
    /// towards `x + 1`
    RIGHT = 3,
}
pub use self::Dir::*;

const UNIT_CIRCLE: [(i32, i32); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

impl Dir {
    /// All directions, in the fixed order up, down, left, right.
    ///
    /// Every search expands neighbors in this order, which keeps tie-breaking reproducible.
    pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
        [UP, DOWN, LEFT, RIGHT].iter().copied()
    }
    /// The direction pointing the other way.
    pub fn opposite(self) -> Dir {
        match self {
            UP => DOWN,
            DOWN => UP,
            LEFT => RIGHT,
            RIGHT => LEFT,
        }
    }
    /// The index of this direction in [`Dir::all`]
    pub fn num(self) -> usize {
        self as usize
    }
    /// `true` for [`UP`] and [`DOWN`]
    pub fn is_vertical(self) -> bool {
        self == UP || self == DOWN
    }
    /// The unit offset `(dx, dy)` of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        UNIT_CIRCLE[self.num()]
    }
    /// Moves `pos` by `dist` steps in this direction. No bounds are checked.
    pub fn jump(self, pos: Point, dist: i32) -> Point {
        let (dx, dy) = self.offset();
        (pos.0 + dx * dist, pos.1 + dy * dist)
    }
}

impl From<usize> for Dir {
    #[track_caller]
    fn from(val: usize) -> Dir {
        match val {
            0 => UP,
            1 => DOWN,
            2 => LEFT,
            3 => RIGHT,
            _ => panic!("invalid Dir: {}", val),
        }
    }
}
