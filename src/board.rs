use super::*;

use std::str::FromStr;

impl Board {
    /// Fails unless `cells` holds exactly 4 straight movers, 4 diagonal movers,
    /// 4 jumpers, 1 target, and 1 gap.
    pub fn new(cells: [Option<Piece>; CELL_COUNT]) -> Result<Board, Error> {
        for piece in Piece::ALL {
            let found = cells.iter().filter(|&&cell| cell == Some(piece)).count();
            if found != piece.count() {
                return Err(Error::PieceCountMismatch {
                    piece,
                    expected: piece.count(),
                    found,
                });
            }
        }

        Ok(Board(cells))
    }

    /// ```text
    /// RBBBBn
    /// RRNNNN
    ///  R
    /// ```
    pub const fn initial() -> Board {
        const R: Option<Piece> = Some(Piece::Straight);
        const B: Option<Piece> = Some(Piece::Diagonal);
        const N: Option<Piece> = Some(Piece::Jumper);
        const T: Option<Piece> = Some(Piece::Target);
        Board([R, B, B, B, B, T, R, R, N, N, N, N, None, R])
    }

    pub const fn cells(&self) -> &[Option<Piece>; CELL_COUNT] {
        &self.0
    }

    pub const fn get(&self, cell: Cell) -> Option<Piece> {
        self.0[cell.0 as usize]
    }

    pub fn gap(&self) -> Cell {
        let index = self.0.iter().position(Option::is_none).unwrap_or_default();
        Cell(index as u8)
    }

    pub fn is_solved(&self, goal: Cell) -> bool {
        self.get(goal) == Some(Piece::Target)
    }

    /// Moves whatever stands on `from` into the gap.
    /// The caller is responsible for checking that the move is legal.
    pub(crate) fn with_piece_moved_into_gap(mut self, from: Cell) -> Board {
        let gap = self.gap();
        self.0[gap.0 as usize] = self.0[from.0 as usize].take();
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

/// Parses 14 symbols in cell order (`R`, `B`, `N`, `n`, and `.` or a space for the gap).
/// Line breaks are ignored, so the rows may be written on separate lines.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;

        for symbol in s.chars().filter(|&c| c != '\n' && c != '\r') {
            let cell = match symbol {
                '.' | ' ' => None,
                _ => Some(Piece::from_symbol(symbol).ok_or(Error::UnknownSymbol(symbol))?),
            };

            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(Error::WrongCellCount(count));
        }

        Board::new(cells)
    }
}
