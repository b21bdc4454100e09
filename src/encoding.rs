//! A board is encoded as four membership fields, one per piece kind,
//! scanned in cell order.
//!
//! The straight field has one slot per cell.
//! The diagonal field only has slots for cells that are not straight movers,
//! the jumper field only for cells that are neither, and the target field
//! only for the two cells left over (the target and the gap).
//! That gives 14, 10, 6, and 2 slots.
//!
//! Since each field's population count is known, slot 0 of every field
//! can be recovered from the others, so it is not stored.
//! The remaining 13, 9, 5, and 1 bits are packed most significant first:
//!
//! ```text
//! | straight (13) | diagonal (9) | jumper (5) | target (1) |
//! ```

use super::*;

/// Stored bits per field, in `Piece::ALL` order.
const FIELD_WIDTHS: [u32; 4] = [13, 9, 5, 1];

impl Key {
    /// Every key produced by `Board::encode` is strictly less than this.
    ///
    /// The largest straight field (movers on cells 10 through 13)
    /// is `0b1_1110_0000_0000`, which puts the top ten key bits at
    /// `0b11_1100_0000` at most. The lower fields never carry into bit 18.
    pub const LIMIT: Key = Key(0b11_1100_0001 << 18);

    /// Fails if the key is out of range or if a field has a population count
    /// that no board could produce.
    /// Keys are never patched into something they were not encoded from.
    pub fn decode(self) -> Result<Board, Error> {
        if self.0 >= Key::LIMIT.0 {
            return Err(Error::KeyOutOfRange(self.0));
        }

        let mut raw = self.0;
        let mut visible = [0u32; 4];
        for (i, width) in FIELD_WIDTHS.into_iter().enumerate().rev() {
            visible[i] = raw & ((1u32 << width) - 1);
            raw >>= width;
        }

        let mut fields = [0u32; 4];
        for (i, piece) in Piece::ALL.into_iter().enumerate() {
            fields[i] = restore_dropped_slot(visible[i], piece)?;
        }

        let mut cells = [None; CELL_COUNT];
        let mut cursors = [0u32; 4];
        for cell in cells.iter_mut() {
            for (i, piece) in Piece::ALL.into_iter().enumerate() {
                let slot = cursors[i];
                cursors[i] += 1;

                if (fields[i] >> slot) & 1 == 1 {
                    *cell = Some(piece);
                    break;
                }
            }
        }

        Ok(Board(cells))
    }

    /// Like `decode`, but falls back to `Board::default()`
    /// for keys that do not decode.
    pub fn decode_or_default(self) -> Board {
        self.decode().unwrap_or_default()
    }
}

impl Board {
    pub fn encode(&self) -> Key {
        let mut fields = [0u32; 4];
        let mut cursors = [0u32; 4];

        for &cell in &self.0 {
            for (i, piece) in Piece::ALL.into_iter().enumerate() {
                let is_member = cell == Some(piece);
                fields[i] |= (is_member as u32) << cursors[i];
                cursors[i] += 1;

                if is_member {
                    break;
                }
            }
        }

        let raw = fields
            .iter()
            .zip(FIELD_WIDTHS)
            .fold(0u32, |raw, (&field, width)| (raw << width) | (field >> 1));
        Key(raw)
    }
}

fn restore_dropped_slot(visible: u32, piece: Piece) -> Result<u32, Error> {
    let expected = piece.count() as u32;
    let field = visible << 1;
    let found = field.count_ones();

    if found == expected {
        Ok(field)
    } else if found + 1 == expected {
        Ok(field | 1)
    } else {
        Err(Error::PieceCountMismatch {
            piece,
            expected: piece.count(),
            found: found as usize,
        })
    }
}
