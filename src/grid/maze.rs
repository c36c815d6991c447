use super::{Bounds, GridMap, Tile};
use crate::{utils::Dir, Point};
use rand::Rng;

/// Options for [`GridMap::generate_maze`]
///
/// Default options:
/// ```
/// # use maze_pathfinding::grid::MazeConfig;
/// assert_eq!(
///     MazeConfig {
///         width: 21,
///         height: 21,
///         loop_factor: 30,
///         floor_chance: 0.75,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeConfig {
    /// Requested width. Even values are reduced by one, anything below `3` becomes `3`.
    pub width: usize,
    /// Requested height. Same normalization as `width`.
    pub height: usize,
    /// How many random attempts are made to knock down an extra wall after the perfect maze
    /// is carved. `0` keeps exactly one route between any two cells.
    pub loop_factor: usize,
    /// Probability (`0..=1`) of a carved cell becoming [`Tile::Floor`]. The rest is split
    /// evenly between [`Tile::Sand`] and [`Tile::Water`].
    pub floor_chance: f32,
}

impl MazeConfig {
    /// A maze without extra loops and only floor Tiles
    pub const PERFECT: MazeConfig = MazeConfig {
        width: 21,
        height: 21,
        loop_factor: 0,
        floor_chance: 1.0,
    };

    /// Creates a config for a maze of the given size, with the other options at their defaults.
    pub fn with_size(width: usize, height: usize) -> MazeConfig {
        MazeConfig {
            width,
            height,
            ..Default::default()
        }
    }

    /// The size actually generated: both sides odd and at least `3`.
    ///
    /// ```
    /// # use maze_pathfinding::grid::MazeConfig;
    /// assert_eq!(MazeConfig::with_size(10, 7).normalized_size(), (9, 7));
    /// assert_eq!(MazeConfig::with_size(0, 2).normalized_size(), (3, 3));
    /// ```
    pub fn normalized_size(&self) -> (usize, usize) {
        fn normalize(side: usize) -> usize {
            let side = if side % 2 == 0 { side.saturating_sub(1) } else { side };
            side.max(3)
        }
        (normalize(self.width), normalize(self.height))
    }
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            width: 21,
            height: 21,
            loop_factor: 30,
            floor_chance: 0.75,
        }
    }
}

impl GridMap {
    /// Creates a new map and fills it with a maze. See [`generate_maze`](GridMap::generate_maze).
    ///
    /// ## Examples
    /// ```
    /// use maze_pathfinding::prelude::*;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let map = GridMap::new_maze(&MazeConfig::with_size(10, 10), &mut rng);
    ///
    /// assert_eq!(map.bounds(), Bounds::from_size(9, 9));
    /// assert!(map.is_traversable((1, 1)));
    /// assert!(!map.is_traversable((0, 0)));
    /// ```
    pub fn new_maze<R: Rng>(config: &MazeConfig, rng: &mut R) -> GridMap {
        let mut map = GridMap::new(Bounds::from_size(0, 0));
        map.generate_maze(config, rng);
        map
    }

    /// Replaces the contents of this map with a freshly generated maze.
    ///
    /// The map is resized to [`config.normalized_size()`](MazeConfig::normalized_size) with its
    /// corner at `(0, 0)`. Corridor cells sit on odd coordinates, walls on even ones, and the
    /// outer border always stays solid. Costs and layout of the map are kept.
    ///
    /// Carving is a randomized depth-first backtracker starting at `(1, 1)`, which connects every
    /// corridor cell through exactly one route. Afterwards `loop_factor` random walls between two
    /// corridor cells are removed to create alternative routes.
    ///
    /// All randomness comes from `rng`, so a seeded generator reproduces the same maze.
    pub fn generate_maze<R: Rng>(&mut self, config: &MazeConfig, rng: &mut R) {
        let (width, height) = config.normalized_size();
        let floor_chance = config.floor_chance.clamp(0.0, 1.0);

        self.bounds = Bounds::from_size(width, height);
        self.tiles = vec![None; self.bounds.area()];

        let (w, h) = (width as i32, height as i32);
        let is_corridor = |(x, y): Point| x > 0 && x < w && y > 0 && y < h;
        let index = |(x, y): Point| y as usize * width + x as usize;

        let mut carved = 0;
        let mut visited = vec![false; width * height];
        let mut stack = Vec::with_capacity(width * height / 4);
        let mut candidates = Vec::with_capacity(4);

        let start = (1, 1);
        visited[index(start)] = true;
        carved += self.carve(start, floor_chance, rng);
        stack.push(start);

        while let Some(cell) = stack.pop() {
            candidates.clear();
            candidates.extend(
                Dir::all()
                    .map(|dir| dir.jump(cell, 2))
                    .filter(|&next| is_corridor(next) && !visited[index(next)]),
            );
            if candidates.is_empty() {
                continue;
            }
            stack.push(cell);

            let next = candidates[rng.gen_range(0..candidates.len())];
            visited[index(next)] = true;

            let between = ((cell.0 + next.0) / 2, (cell.1 + next.1) / 2);
            carved += self.carve(between, floor_chance, rng);
            carved += self.carve(next, floor_chance, rng);
            stack.push(next);
        }

        for _ in 0..config.loop_factor {
            let cell = (rng.gen_range(1..w), rng.gen_range(1..h));
            if cell.0 % 2 == 0 || cell.1 % 2 == 0 {
                continue;
            }
            let dir = Dir::from(rng.gen_range(0..4usize));
            let wall = dir.jump(cell, 1);
            if is_corridor(dir.jump(cell, 2)) && self.tile(wall).is_none() {
                carved += self.carve(wall, floor_chance, rng);
            }
        }

        log::info!(
            "maze generated ({}x{}), loop trials: {}, carved cells: {}",
            width,
            height,
            config.loop_factor,
            carved
        );
    }

    fn carve<R: Rng>(&mut self, point: Point, floor_chance: f32, rng: &mut R) -> usize {
        let tile = choose_tile(floor_chance, rng);
        self.set_tile(point, Some(tile)) as usize
    }
}

fn choose_tile<R: Rng>(floor_chance: f32, rng: &mut R) -> Tile {
    let r: f32 = rng.gen();
    if r < floor_chance {
        return Tile::Floor;
    }
    let half_rest = (1.0 - floor_chance) * 0.5;
    if r < floor_chance + half_rest {
        Tile::Sand
    } else {
        Tile::Water
    }
}
