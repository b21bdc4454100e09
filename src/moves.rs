use super::*;

/// The way a piece gets from its cell into the gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stride {
    Orthogonal,
    Diagonal,
    Knight,
}

impl Stride {
    /// In the order moves are generated.
    pub const ALL: [Stride; 3] = [Stride::Orthogonal, Stride::Diagonal, Stride::Knight];

    /// Offsets from the gap to the cell a piece would come from.
    /// The order is part of the search's determinism, so don't reorder these.
    pub const fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            Stride::Orthogonal => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
            Stride::Diagonal => &[(-1, -1), (1, -1), (-1, 1), (1, 1)],
            Stride::Knight => &[
                (-1, -2),
                (1, -2),
                (-2, -1),
                (2, -1),
                (-2, 1),
                (2, 1),
                (-1, 2),
                (1, 2),
            ],
        }
    }
}

impl Piece {
    pub const fn stride(self) -> Stride {
        match self {
            Piece::Straight => Stride::Orthogonal,
            Piece::Diagonal => Stride::Diagonal,
            Piece::Jumper | Piece::Target => Stride::Knight,
        }
    }
}

impl Board {
    /// Returns the board after moving the piece on `from` into the gap,
    /// or `None` if that move is illegal.
    ///
    /// The move is legal iff `from` is on the board, the piece there moves
    /// with `stride`, and the gap is exactly one `stride` away from `from`.
    pub fn try_move(&self, from: Coords, stride: Stride) -> Option<Board> {
        let from_cell = from.cell()?;
        let piece = self.get(from_cell)?;
        if piece.stride() != stride {
            return None;
        }

        let gap = self.gap().coords();
        let offset = (from.x - gap.x, from.y - gap.y);
        if !stride.offsets().contains(&offset) {
            return None;
        }

        Some(self.with_piece_moved_into_gap(from_cell))
    }

    /// Straight moves come first, then diagonal moves, then knight moves,
    /// each in `Stride::offsets` order.
    pub fn visit_children(&self, mut visitor: impl FnMut(Board)) {
        let gap = self.gap().coords();

        for stride in Stride::ALL {
            for &offset in stride.offsets() {
                if let Some(child) = self.try_move(gap.offset(offset), stride) {
                    visitor(child);
                }
            }
        }
    }

    pub fn children(&self) -> Vec<Board> {
        let mut out = Vec::with_capacity(16);
        self.visit_children(|child| out.push(child));
        out
    }
}
