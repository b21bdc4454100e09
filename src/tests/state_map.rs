use super::*;

use rand::Rng;

#[test]
fn sparse_table_is_consistent_with_hash_map() {
    const FUZZ_TIMES: usize = 200;

    let mut prng = deterministic_prng();

    for _ in 0..FUZZ_TIMES {
        let (table, reference) = random_sparse_table_pair(&mut prng);

        for (&key, &parent) in reference.iter() {
            assert_eq!(Some(parent), table.predecessor_of(key));
        }

        let mut cardinality = 0;
        table.visit_in_key_order(|key, parent| {
            assert_eq!(Some(parent), reference.get(&key).copied());
            cardinality += 1;
        });

        assert_eq!(cardinality, reference.len());
        assert_eq!(table.len(), reference.len());
    }
}

#[test]
fn sparse_table_visitable_in_key_order() {
    const FUZZ_TIMES: usize = 200;

    let mut prng = deterministic_prng();

    for _ in 0..FUZZ_TIMES {
        let (table, _) = random_sparse_table_pair(&mut prng);
        let visited = {
            let mut out = vec![];
            table.visit_in_key_order(|key, _| out.push(key));
            out
        };

        for i in 1..visited.len() {
            assert!(visited[i - 1] < visited[i]);
        }
    }
}

#[test]
fn first_record_wins() {
    first_record_wins_for(SparseTable::empty());
    first_record_wins_for(DenseTable::new());
}

fn first_record_wins_for(mut table: impl PredecessorTable) {
    assert!(table.is_empty());

    assert!(table.record_if_unseen(Key(42), Key(7)));
    assert!(!table.record_if_unseen(Key(42), Key(9)));
    assert_eq!(Some(Key(7)), table.predecessor_of(Key(42)));
    assert_eq!(1, table.len());
}

#[test]
fn zero_keys_are_not_mistaken_for_unseen() {
    zero_keys_are_not_mistaken_for_unseen_for(SparseTable::empty());
    zero_keys_are_not_mistaken_for_unseen_for(DenseTable::new());
}

fn zero_keys_are_not_mistaken_for_unseen_for(mut table: impl PredecessorTable) {
    assert_eq!(None, table.predecessor_of(Key(0)));

    assert!(table.record_if_unseen(Key(0), Key(0)));
    assert_eq!(Some(Key(0)), table.predecessor_of(Key(0)));
    assert!(!table.record_if_unseen(Key(0), Key(5)));

    assert!(table.record_if_unseen(Key(1), Key(0)));
    assert_eq!(Some(Key(0)), table.predecessor_of(Key(1)));
}

#[test]
fn highest_key_is_storable() {
    highest_key_is_storable_for(SparseTable::empty());
    highest_key_is_storable_for(DenseTable::new());
}

fn highest_key_is_storable_for(mut table: impl PredecessorTable) {
    let highest = Key(Key::LIMIT.0 - 1);
    assert!(table.record_if_unseen(highest, highest));
    assert_eq!(Some(highest), table.predecessor_of(highest));
}

#[test]
fn unseen_keys_have_no_predecessor() {
    let mut table = SparseTable::empty();
    table.record_if_unseen(Key(0b1010_0000), Key(3));

    // Shares every bucket with the recorded key.
    assert_eq!(None, table.predecessor_of(Key(0b1010_0001)));
    // Shares no bucket with it.
    assert_eq!(None, table.predecessor_of(Key(1 << 27)));
}

fn random_sparse_table_pair(prng: &mut XorShiftRng) -> (SparseTable, HashMap<Key, Key>) {
    let mut table = SparseTable::empty();
    let mut reference = HashMap::new();

    let count = prng.gen_range(0..1000);
    for _ in 0..count {
        let key = random_key(prng);
        let parent = random_key(prng);
        let was_unseen = table.record_if_unseen(key, parent);
        assert_eq!(was_unseen, !reference.contains_key(&key));
        reference.entry(key).or_insert(parent);
    }

    (table, reference)
}

/// Keys are drawn from a narrow range now and then,
/// so that some of them collide.
fn random_key(prng: &mut XorShiftRng) -> Key {
    if prng.gen_bool(0.25) {
        Key(prng.gen_range(0..64))
    } else {
        Key(prng.gen_range(0..Key::LIMIT.0))
    }
}
