use super::*;

use std::num::NonZeroU32;

/// Maps each discovered key to the key it was first discovered from.
/// This doubles as the visited set.
///
/// Implementations must never overwrite an entry,
/// since that would break the shortest-path chains.
pub trait PredecessorTable {
    /// Returns `true` if `key` had not been recorded before.
    /// If it had, the existing entry is left untouched.
    fn record_if_unseen(&mut self, key: Key, parent: Key) -> bool;

    /// Returns `None` if `key` has not been recorded.
    fn predecessor_of(&self, key: Key) -> Option<Key>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A flat array with one slot per possible key.
///
/// It is allocated zeroed in one go, so the pages that are never touched
/// are never actually backed by memory.
#[derive(Debug)]
pub struct DenseTable {
    raw: Vec<Option<NonZeroU32>>,
    len: usize,
}

/// Parent keys are stored off by one, so that `None` (all zero bits)
/// can mean "unseen" even when the parent is `Key(0)`.
pub(crate) fn store_parent(parent: Key) -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(parent.0)
}

pub(crate) fn load_parent(stored: NonZeroU32) -> Key {
    Key(stored.get() - 1)
}

impl DenseTable {
    pub fn new() -> Self {
        Self {
            raw: vec![None; Key::LIMIT.0 as usize],
            len: 0,
        }
    }
}

impl Default for DenseTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys must be below `Key::LIMIT`.
impl PredecessorTable for DenseTable {
    fn record_if_unseen(&mut self, key: Key, parent: Key) -> bool {
        let slot = &mut self.raw[key.0 as usize];
        if slot.is_some() {
            return false;
        }

        *slot = Some(store_parent(parent));
        self.len += 1;
        true
    }

    fn predecessor_of(&self, key: Key) -> Option<Key> {
        self.raw.get(key.0 as usize).copied().flatten().map(load_parent)
    }

    fn len(&self) -> usize {
        self.len
    }
}
