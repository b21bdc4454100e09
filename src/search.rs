use super::*;

use std::collections::VecDeque;

use log::{info, trace};

/// A single breadth-first search run.
///
/// Constructing an engine seeds its table and queue with the initial board.
/// `run` consumes the engine, so each run starts from a clean table.
#[derive(Debug)]
pub struct SearchEngine<T = DenseTable> {
    table: T,
    queue: VecDeque<Key>,
    initial: Key,
    goal: Cell,
    expanded: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// Every state reachable from the initial board was expanded,
    /// and none of them satisfied the goal.
    Exhausted(SearchStats),
}

/// A shortest sequence of boards from the initial board to a goal board,
/// both included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub boards: Vec<Board>,
    pub stats: SearchStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// The number of states taken off the queue.
    pub expanded: usize,
    /// The number of distinct states recorded, including the initial one.
    pub discovered: usize,
}

/// Solves the puzzle starting at `initial`, with a dense table
/// and the target knight needing to reach `GOAL`.
pub fn solve(initial: Board) -> Result<Outcome, Error> {
    SearchEngine::new(initial).run(|_| {})
}

impl SearchEngine<DenseTable> {
    pub fn new(initial: Board) -> Self {
        SearchEngine::seeded(initial, GOAL, DenseTable::new())
    }
}

impl<T: PredecessorTable> SearchEngine<T> {
    /// Fails if `goal` is off the board or `table` already holds entries.
    pub fn with_table(initial: Board, goal: Cell, table: T) -> Result<Self, Error> {
        let goal = goal.checked()?;
        if !table.is_empty() {
            return Err(Error::TableNotEmpty(table.len()));
        }

        Ok(SearchEngine::seeded(initial, goal, table))
    }

    fn seeded(initial: Board, goal: Cell, mut table: T) -> Self {
        let initial = initial.encode();

        // The initial state is its own predecessor.
        // This marks it as seen without needing a separate sentinel.
        table.record_if_unseen(initial, initial);

        Self {
            table,
            queue: std::iter::once(initial).collect(),
            initial,
            goal,
            expanded: 0,
        }
    }

    /// Runs until the goal is reached or the queue runs dry.
    ///
    /// `on_state_expanded` is called with every key taken off the queue.
    ///
    /// Errors only come from a key that fails to decode,
    /// or from a table that loses track of a recorded key.
    pub fn run(mut self, mut on_state_expanded: impl FnMut(Key)) -> Result<Outcome, Error> {
        info!(
            "Starting search from key {} with goal cell {}.",
            self.initial.0, self.goal.0
        );

        let initial_board = self.initial.decode()?;
        if initial_board.is_solved(self.goal) {
            return Ok(Outcome::Solved(Solution {
                boards: vec![initial_board],
                stats: self.stats(),
            }));
        }

        while let Some(key) = self.queue.pop_front() {
            self.expanded += 1;
            on_state_expanded(key);

            let board = key.decode()?;
            if let Some(goal_key) = self.expand(key, board) {
                let solution = self.reconstruct(goal_key)?;
                info!(
                    "Solved in {} moves ({} states expanded, {} discovered).",
                    solution.move_count(),
                    solution.stats.expanded,
                    solution.stats.discovered
                );
                return Ok(Outcome::Solved(solution));
            }
        }

        let stats = self.stats();
        info!(
            "Search exhausted ({} states expanded, {} discovered).",
            stats.expanded, stats.discovered
        );
        Ok(Outcome::Exhausted(stats))
    }

    /// Records and enqueues every unseen child of `board`.
    /// Returns the key of the first child that satisfies the goal, if any.
    ///
    /// A child that was already seen is still checked against the goal.
    fn expand(&mut self, key: Key, board: Board) -> Option<Key> {
        let mut goal_key = None;

        board.visit_children(|child| {
            if goal_key.is_some() {
                return;
            }

            let child_key = child.encode();
            if self.table.record_if_unseen(child_key, key) {
                trace!("Discovered key {} from key {}.", child_key.0, key.0);
                self.queue.push_back(child_key);
            }

            if child.is_solved(self.goal) {
                goal_key = Some(child_key);
            }
        });

        goal_key
    }

    /// Walks the predecessor chain from `goal_key` back to the initial key.
    fn reconstruct(&self, goal_key: Key) -> Result<Solution, Error> {
        let mut boards = vec![goal_key.decode()?];

        let mut key = goal_key;
        while key != self.initial {
            let parent = self
                .table
                .predecessor_of(key)
                .ok_or(Error::BrokenPredecessorChain(key))?;
            boards.push(parent.decode()?);
            key = parent;
        }

        boards.reverse();

        Ok(Solution {
            boards,
            stats: self.stats(),
        })
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.expanded,
            discovered: self.table.len(),
        }
    }
}

impl Solution {
    pub fn move_count(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }

    pub fn initial(&self) -> Option<&Board> {
        self.boards.first()
    }

    pub fn last(&self) -> Option<&Board> {
        self.boards.last()
    }
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Exhausted(_) => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}
