use crate::Point;

/// A rectangle of cells `[min.0, max.0) × [min.1, max.1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// the smallest contained cell
    pub min: Point,
    /// one past the largest contained cell on both axes
    pub max: Point,
}

impl Bounds {
    /// Creates new Bounds. An inverted rectangle is treated as empty.
    pub fn new(min: Point, max: Point) -> Bounds {
        Bounds {
            min,
            max: (max.0.max(min.0), max.1.max(min.1)),
        }
    }

    /// Bounds of a `width × height` map starting at `(0, 0)`.
    pub fn from_size(width: usize, height: usize) -> Bounds {
        Bounds::new((0, 0), (width as i32, height as i32))
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        (self.max.0 - self.min.0) as usize
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        (self.max.1 - self.min.1) as usize
    }

    /// The number of cells
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// `true` if `point` lies inside the rectangle
    pub fn contains(&self, (x, y): Point) -> bool {
        x >= self.min.0 && x < self.max.0 && y >= self.min.1 && y < self.max.1
    }

    /// Iterates all cells, row by row starting at `min`.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.min.1..self.max.1).flat_map(move |y| (self.min.0..self.max.0).map(move |x| (x, y)))
    }
}
