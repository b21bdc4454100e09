pub use moves::*;
pub use predecessor_table::*;
pub use pretty::*;
pub use search::*;
pub use state_map::*;

mod board;
mod encoding;
mod moves;
mod predecessor_table;
mod pretty;
mod search;
mod state_map;

#[cfg(test)]
mod tests;

use std::fmt::{self, Display, Formatter};

pub const BOARD_WIDTH: i8 = 6;
pub const BOARD_HEIGHT: i8 = 3;
pub const CELL_COUNT: usize = 14;

/// The puzzle is solved once the target knight stands here
/// (the left cell of the short bottom row).
pub const GOAL: Cell = Cell(12);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Piece {
    /// Steps one cell orthogonally.
    Straight,
    /// Steps one cell diagonally.
    Diagonal,
    /// Jumps like a chess knight.
    Jumper,
    /// Jumps like a chess knight.
    /// There is exactly one of these, and its position decides the goal.
    Target,
}

/// An index into the 14 playable cells, in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(pub u8);

/// A position on the 6x3 grid the board is drawn on.
/// Unlike `Cell`, this may lie off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coords {
    pub x: i8,
    pub y: i8,
}

/// A full assignment of the 13 pieces to 13 of the 14 cells.
///
/// A `Board` can only be built through `Board::new` (or parsing),
/// so the piece counts always hold and there is exactly one gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board([Option<Piece>; CELL_COUNT]);

/// The dense integer encoding of a `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    KeyOutOfRange(u32),
    PieceCountMismatch {
        piece: Piece,
        expected: usize,
        found: usize,
    },
    WrongCellCount(usize),
    UnknownSymbol(char),
    /// A goal cell that is not one of the 14 playable cells.
    CellOffBoard(u8),
    /// A search was handed a table that already held this many entries.
    TableNotEmpty(usize),
    /// A recorded key whose predecessor chain stops short of the initial key.
    BrokenPredecessorChain(Key),
}

impl Piece {
    pub const ALL: [Piece; 4] = [
        Piece::Straight,
        Piece::Diagonal,
        Piece::Jumper,
        Piece::Target,
    ];

    pub const fn count(self) -> usize {
        match self {
            Piece::Straight | Piece::Diagonal | Piece::Jumper => 4,
            Piece::Target => 1,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Piece::Straight => 'R',
            Piece::Diagonal => 'B',
            Piece::Jumper => 'N',
            Piece::Target => 'n',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Piece> {
        match symbol {
            'R' => Some(Piece::Straight),
            'B' => Some(Piece::Diagonal),
            'N' => Some(Piece::Jumper),
            'n' => Some(Piece::Target),
            _ => None,
        }
    }
}

impl Cell {
    pub const fn coords(self) -> Coords {
        Coords {
            x: self.0 as i8 % BOARD_WIDTH,
            y: self.0 as i8 / BOARD_WIDTH,
        }
    }

    /// Fails unless `self` is one of the playable cells.
    pub fn checked(self) -> Result<Cell, Error> {
        if (self.0 as usize) < CELL_COUNT {
            Ok(self)
        } else {
            Err(Error::CellOffBoard(self.0))
        }
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }
}

impl Coords {
    pub const fn new(x: i8, y: i8) -> Coords {
        Coords { x, y }
    }

    pub const fn offset(self, offset: (i8, i8)) -> Coords {
        Coords {
            x: self.x + offset.0,
            y: self.y + offset.1,
        }
    }

    /// Returns `None` if `self` is off the board.
    ///
    /// The bottom row only has its first two columns.
    pub const fn cell(self) -> Option<Cell> {
        if self.x < 0 || self.x >= BOARD_WIDTH || self.y < 0 || self.y >= BOARD_HEIGHT {
            return None;
        }

        if self.x >= 2 && self.y >= 2 {
            return None;
        }

        Some(Cell((self.x + self.y * BOARD_WIDTH) as u8))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyOutOfRange(raw) => {
                write!(f, "key {raw} is not below the key limit {}", Key::LIMIT.0)
            }
            Error::PieceCountMismatch {
                piece,
                expected,
                found,
            } => write!(
                f,
                "expected {expected} {piece:?} piece(s), but found {found}"
            ),
            Error::WrongCellCount(count) => {
                write!(f, "expected {CELL_COUNT} cells, but found {count}")
            }
            Error::UnknownSymbol(symbol) => write!(f, "unknown board symbol {symbol:?}"),
            Error::CellOffBoard(index) => write!(f, "cell {index} is not on the board"),
            Error::TableNotEmpty(len) => {
                write!(f, "expected an empty predecessor table, but it has {len} entries")
            }
            Error::BrokenPredecessorChain(key) => write!(
                f,
                "key {} has no recorded predecessor, but is not the initial key",
                key.0
            ),
        }
    }
}

impl std::error::Error for Error {}
