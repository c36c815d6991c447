use super::{Bounds, GridMap, Tile};
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a [`GridMap`] out of text
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseMapError {
    /// A character other than `#`, `.`, `s` or `w` was found.
    #[error("unexpected character {found:?} at column {column}, row {row}")]
    UnexpectedChar {
        /// the offending character
        found: char,
        /// zero-based column
        column: usize,
        /// zero-based row
        row: usize,
    },
    /// Not all rows have the same length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// zero-based row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of this row
        found: usize,
    },
}

impl FromStr for GridMap {
    type Err = ParseMapError;

    /// Parses a map from rows of `#` (wall), `.` (floor), `s` (sand) and `w` (water).
    ///
    /// Row `i` of the text becomes `y = i`, column `j` becomes `x = j`. Leading and trailing
    /// whitespace on each line as well as empty lines are ignored.
    fn from_str(s: &str) -> Result<GridMap, ParseMapError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map_or(0, |row| row.chars().count());

        let mut map = GridMap::new(Bounds::from_size(width, rows.len()));
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseMapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let tile = match c {
                    '#' => None,
                    '.' => Some(Tile::Floor),
                    's' => Some(Tile::Sand),
                    'w' => Some(Tile::Water),
                    found => {
                        return Err(ParseMapError::UnexpectedChar {
                            found,
                            column: x,
                            row: y,
                        })
                    }
                };
                map.set_tile((x as i32, y as i32), tile);
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileMap;

    #[test]
    fn parse() {
        let map: GridMap = "
            ..#
            sw.
        "
        .parse()
        .unwrap();
        assert_eq!(map.bounds(), Bounds::from_size(3, 2));
        assert_eq!(map.tile((0, 0)), Some(Tile::Floor));
        assert_eq!(map.tile((2, 0)), None);
        assert_eq!(map.tile((0, 1)), Some(Tile::Sand));
        assert_eq!(map.tile((1, 1)), Some(Tile::Water));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "..\n.x".parse::<GridMap>(),
            Err(ParseMapError::UnexpectedChar {
                found: 'x',
                column: 1,
                row: 1
            })
        );
        assert_eq!(
            "...\n..".parse::<GridMap>(),
            Err(ParseMapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn parse_empty() {
        let map: GridMap = "".parse().unwrap();
        assert_eq!(map.bounds().area(), 0);
    }
}
