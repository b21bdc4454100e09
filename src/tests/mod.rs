use super::*;

use std::collections::{HashMap, VecDeque};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

mod state_map;

#[test]
fn initial_board_is_correct() {
    insta::assert_snapshot!(Board::initial().pretty());
}

#[test]
fn initial_board_children_are_correct() {
    insta::assert_snapshot!(Board::initial().children().pretty());
}

#[test]
fn reference_solution_is_correct() {
    let outcome = SearchEngine::with_table(Board::initial(), GOAL, SparseTable::empty())
        .unwrap()
        .run(|_| {})
        .unwrap();
    let solution = outcome.solution().unwrap();
    insta::assert_snapshot!(solution.pretty());
}

fn deterministic_prng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0x6B6E_6967_6874_0001)
}

fn fuzz(times: usize, mut f: impl FnMut(Board)) {
    let mut prng = deterministic_prng();
    for _ in 0..times {
        f(random_board(&mut prng));
    }
}

fn random_board(prng: &mut XorShiftRng) -> Board {
    let mut cells = *Board::initial().cells();
    cells.shuffle(prng);
    Board::new(cells).unwrap()
}

/// Every board within `max_depth` moves of `initial`, with its distance,
/// found by a plain `HashMap` breadth-first search.
fn distances_within(initial: Board, max_depth: usize) -> HashMap<Board, usize> {
    let mut distances = HashMap::new();
    distances.insert(initial, 0);

    let mut queue = std::iter::once(initial).collect::<VecDeque<_>>();

    while let Some(board) = queue.pop_front() {
        let depth = distances[&board];
        if depth == max_depth {
            continue;
        }

        board.visit_children(|child| {
            if !distances.contains_key(&child) {
                distances.insert(child, depth + 1);
                queue.push_back(child);
            }
        });
    }

    distances
}

fn parse(s: &str) -> Board {
    s.parse().unwrap()
}
