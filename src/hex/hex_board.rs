use itertools::Itertools;
use std::fmt::{self, Display};

/// One cell of a received snapshot. The agent only ever asks whether a cell
/// is free; whose stone occupies a taken cell is irrelevant to it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Empty,
    Taken,
}

/// Board snapshot embedded in a host message, row-major. Parsed fresh for
/// every move request and dropped once the move is chosen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Wire marker for a free cell. Every other marker means taken.
    pub const EMPTY_MARKER: char = '0';

    /// Parses the board field of a host message: `size` comma separated
    /// rows, each of `size` single-character cell markers.
    pub fn parse(s: &str, size: usize) -> Option<Board> {
        let rows: Vec<&str> = s.split(',').collect();
        if rows.len() != size {
            log::error!("expected {} board rows, got {}", size, rows.len());
            return None;
        }
        let mut tiles = Vec::with_capacity(size * size);
        for row in rows {
            if row.chars().count() != size {
                log::error!("board row of wrong length: {:?}", row);
                return None;
            }
            tiles.extend(row.chars().map(|marker| {
                if marker == Board::EMPTY_MARKER {
                    Tile::Empty
                } else {
                    Tile::Taken
                }
            }));
        }
        Some(Board { size, tiles })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get_tile(&self, r: usize, c: usize) -> Tile {
        assert!(r < self.size && c < self.size);
        self.tiles[r * self.size + c]
    }

    /// Coordinates of every free cell, in row-major order.
    pub fn empty_tiles(&self) -> Vec<(usize, usize)> {
        (0..self.size)
            .cartesian_product(0..self.size)
            .filter(|&(r, c)| self.get_tile(r, c) == Tile::Empty)
            .collect()
    }
}

impl Display for Board {
    /// The board is a rhombus slanted right, so each row is indented one
    /// step less than the one below it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            let row_characters: Vec<String> = (0..self.size)
                .map(|c| {
                    String::from(match self.get_tile(r, c) {
                        Tile::Empty => '.',
                        Tile::Taken => '#',
                    })
                })
                .collect();
            let spaces = " ".repeat(self.size - r - 1);
            writeln!(f, "{}{}", spaces, row_characters.join(" "))?;
        }
        Ok(())
    }
}
