use super::*;

use std::num::NonZeroU32;

/// A predecessor table that only allocates buckets for the keys it has seen.
///
/// Keys are split into a 12-bit root index followed by four 4-bit indices,
/// which covers every key below `Key::LIMIT`.
#[derive(Clone, Debug)]
pub struct SparseTable {
    raw: Box<[Option<Box<Bucket0>>; 1 << 12]>,
    len: usize,
}

type SparseTableNode<T> = [Option<Box<T>>; 16];

type Bucket3 = [Option<NonZeroU32>; 16];
type Bucket2 = SparseTableNode<Bucket3>;
type Bucket1 = SparseTableNode<Bucket2>;
type Bucket0 = SparseTableNode<Bucket1>;

impl SparseTable {
    pub fn empty() -> Self {
        Self {
            raw: Box::new(core::array::from_fn(|_| None)),
            len: 0,
        }
    }

    /// This will visit the entries in ascending key order.
    pub fn visit_in_key_order(&self, mut visitor: impl FnMut(Key, Key)) {
        for (i0, bucket0) in self.raw.iter().enumerate() {
            let Some(bucket0) = bucket0 else {
                continue;
            };
            let prefix = (i0 as u32) << (28 - 12);
            self.visit0(prefix, bucket0, &mut visitor);
        }
    }

    fn visit0(&self, prefix: u32, bucket0: &Bucket0, mut visitor: impl FnMut(Key, Key)) {
        for (i1, bucket1) in bucket0.iter().enumerate() {
            let Some(bucket1) = bucket1 else {
                continue;
            };
            let prefix = prefix | ((i1 as u32) << (28 - 12 - 4));
            self.visit1(prefix, bucket1, &mut visitor);
        }
    }

    fn visit1(&self, prefix: u32, bucket1: &Bucket1, mut visitor: impl FnMut(Key, Key)) {
        for (i2, bucket2) in bucket1.iter().enumerate() {
            let Some(bucket2) = bucket2 else {
                continue;
            };
            let prefix = prefix | ((i2 as u32) << (28 - 12 - 2 * 4));
            self.visit2(prefix, bucket2, &mut visitor);
        }
    }

    fn visit2(&self, prefix: u32, bucket2: &Bucket2, mut visitor: impl FnMut(Key, Key)) {
        for (i3, bucket3) in bucket2.iter().enumerate() {
            let Some(bucket3) = bucket3 else {
                continue;
            };
            let prefix = prefix | ((i3 as u32) << (28 - 12 - 3 * 4));
            self.visit3(prefix, bucket3, &mut visitor);
        }
    }

    fn visit3(&self, prefix: u32, bucket3: &Bucket3, mut visitor: impl FnMut(Key, Key)) {
        for (i4, item) in bucket3.iter().enumerate() {
            let Some(stored) = *item else {
                continue;
            };
            let key = prefix | (i4 as u32);
            visitor(Key(key), load_parent(stored));
        }
    }
}

impl Default for SparseTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Keys must be below `Key::LIMIT`.
impl PredecessorTable for SparseTable {
    fn record_if_unseen(&mut self, key: Key, parent: Key) -> bool {
        let key = key.0;
        let bucket0 = self.raw[(key >> (28 - 12)) as usize].get_or_insert_with(Default::default);
        let bucket1 = bucket0[((key >> (28 - 12 - 4)) & 0b1111) as usize]
            .get_or_insert_with(Default::default);
        let bucket2 = bucket1[((key >> (28 - 12 - 2 * 4)) & 0b1111) as usize]
            .get_or_insert_with(Default::default);
        let bucket3 = bucket2[((key >> (28 - 12 - 3 * 4)) & 0b1111) as usize]
            .get_or_insert_with(Default::default);
        let item = &mut bucket3[(key & 0b1111) as usize];

        if item.is_some() {
            return false;
        }

        *item = Some(store_parent(parent));
        self.len += 1;
        true
    }

    fn predecessor_of(&self, key: Key) -> Option<Key> {
        let key = key.0;
        let bucket0 = self.raw.get((key >> (28 - 12)) as usize)?.as_ref()?;
        let bucket1 = bucket0[((key >> (28 - 12 - 4)) & 0b1111) as usize].as_ref()?;
        let bucket2 = bucket1[((key >> (28 - 12 - 2 * 4)) & 0b1111) as usize].as_ref()?;
        let bucket3 = bucket2[((key >> (28 - 12 - 3 * 4)) & 0b1111) as usize].as_ref()?;
        bucket3[(key & 0b1111) as usize].map(load_parent)
    }

    fn len(&self) -> usize {
        self.len
    }
}
