use super::*;

use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy)]
pub struct Pretty<T>(pub T);

pub trait IntoPretty: Sized {
    fn pretty(self) -> Pretty<Self>;
}

impl IntoPretty for Board {
    fn pretty(self) -> Pretty<Self> {
        Pretty(self)
    }
}

impl IntoPretty for &Solution {
    fn pretty(self) -> Pretty<Self> {
        Pretty(self)
    }
}

impl IntoPretty for Vec<Board> {
    fn pretty(self) -> Pretty<Self> {
        Pretty(self)
    }
}

/// ```text
/// +------+
/// |RBBBBn|
/// |RRNNNN|
/// | R+---+
/// +--+
/// ```
impl Display for Pretty<Board> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r0c0, r0c1, r0c2, r0c3, r0c4, r0c5, r1c0, r1c1, r1c2, r1c3, r1c4, r1c5, r2c0, r2c1]: [char;
            CELL_COUNT] = self.into_array();
        write!(
            f,
            "+------+\n|{r0c0}{r0c1}{r0c2}{r0c3}{r0c4}{r0c5}|\n|{r1c0}{r1c1}{r1c2}{r1c3}{r1c4}{r1c5}|\n|{r2c0}{r2c1}+---+\n+--+",
        )
    }
}

impl Debug for Pretty<Board> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}

impl Pretty<Board> {
    fn into_array(self) -> [char; CELL_COUNT] {
        self.0 .0.map(|cell| cell.map(Piece::symbol).unwrap_or(' '))
    }
}

impl Display for Pretty<&Solution> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let move_count = self.0.move_count();
        writeln!(f, "SOLUTION FOUND IN {move_count} MOVES:")?;

        for &board in &self.0.boards {
            write!(f, "\n{}", board.pretty())?;
        }

        Ok(())
    }
}

impl Debug for Pretty<&Solution> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}

impl Display for Pretty<Vec<Board>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.0.len();

        writeln!(f, "Boards(len = {len}) [")?;

        for (i, board) in self.0.iter().enumerate() {
            writeln!(f, "{i}:\n{}", board.pretty())?;
        }

        write!(f, "]")
    }
}

impl Debug for Pretty<Vec<Board>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}
