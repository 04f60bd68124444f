//! `EightPuzzle`: the 3×3 sliding-tile puzzle.
//!
//! A board lists the tile at each cell in row-major order, with `0` for the
//! blank. Actions slide the blank one cell (`Up`, `Down`, `Left`, `Right`, in
//! that order, in-bounds only) and cost 1. The goal is [`SOLVED`],
//! `(0, 1, …, 8)`.

use waypoint_search::contract::SearchModel;
use waypoint_search::node::Node;

use crate::contract::WorldV1;
use crate::worlds::BoardError;

/// Row-major board, `0` = blank.
pub type Board = [u8; 9];

/// The goal board.
pub const SOLVED: Board = [0, 1, 2, 3, 4, 5, 6, 7, 8];

const WIDTH: usize = 3;

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Which estimate A* uses on this world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PuzzleHeuristic {
    /// Always 0: A* degenerates to uniform-cost search.
    #[default]
    Zero,
    /// Tiles (not the blank) outside their goal cell.
    MisplacedTiles,
    /// Sum of tile distances to their goal cells.
    Manhattan,
}

/// Search-capable eight-puzzle world.
#[derive(Debug, Clone)]
pub struct EightPuzzle {
    start: Board,
    heuristic: PuzzleHeuristic,
}

impl EightPuzzle {
    /// Create a puzzle starting from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotAPermutation`] unless `start` holds each of
    /// `0..=8` exactly once.
    pub fn new(start: Board) -> Result<Self, BoardError> {
        let mut seen = [false; 9];
        for &tile in &start {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(BoardError::NotAPermutation)?;
            if *slot {
                return Err(BoardError::NotAPermutation);
            }
            *slot = true;
        }
        Ok(Self {
            start,
            heuristic: PuzzleHeuristic::Zero,
        })
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: PuzzleHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn start(&self) -> Board {
        self.start
    }
}

fn blank(board: &Board) -> usize {
    board.iter().position(|&t| t == 0).unwrap_or(0)
}

/// Target cell of the blank after `slide`, if it stays on the board.
fn destination(blank: usize, slide: Slide) -> Option<usize> {
    let (row, col) = (blank / WIDTH, blank % WIDTH);
    match slide {
        Slide::Up if row > 0 => Some(blank - WIDTH),
        Slide::Down if row + 1 < WIDTH => Some(blank + WIDTH),
        Slide::Left if col > 0 => Some(blank - 1),
        Slide::Right if col + 1 < WIDTH => Some(blank + 1),
        _ => None,
    }
}

/// Number of tiles, blank excluded, not on their goal cell.
#[must_use]
pub fn misplaced_tiles(board: &Board) -> i64 {
    let count = board
        .iter()
        .enumerate()
        .filter(|&(cell, &tile)| tile != 0 && usize::from(tile) != cell)
        .count();
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Sum over tiles, blank excluded, of row + column distance to the goal cell.
#[must_use]
pub fn manhattan_distance(board: &Board) -> i64 {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(cell, &tile)| {
            let goal = usize::from(tile);
            let rows = (cell / WIDTH).abs_diff(goal / WIDTH);
            let cols = (cell % WIDTH).abs_diff(goal % WIDTH);
            i64::try_from(rows + cols).unwrap_or(i64::MAX)
        })
        .sum()
}

/// Solvable iff the tile permutation (blank excluded) has even inversion count.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    let tiles: Vec<u8> = board.iter().copied().filter(|&t| t != 0).collect();
    let inversions = tiles
        .iter()
        .enumerate()
        .map(|(i, a)| tiles[i + 1..].iter().filter(|b| a > b).count())
        .sum::<usize>();
    inversions % 2 == 0
}

impl SearchModel for EightPuzzle {
    type State = Board;
    type Action = Slide;

    fn legal_actions(&self, state: &Board) -> Vec<Slide> {
        let blank = blank(state);
        Slide::ALL
            .into_iter()
            .filter(|&slide| destination(blank, slide).is_some())
            .collect()
    }

    fn successor(&self, state: &Board, action: &Slide) -> Board {
        let blank = blank(state);
        let Some(target) = destination(blank, *action) else {
            panic!("slide {} is not legal with the blank at cell {blank}", action.name());
        };
        let mut next = *state;
        next.swap(blank, target);
        next
    }
}

impl WorldV1 for EightPuzzle {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "eight_puzzle"
    }

    fn initial_state(&self) -> Board {
        self.start
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == SOLVED
    }

    fn heuristic(&self, node: &Node<Board, Slide>) -> i64 {
        match self.heuristic {
            PuzzleHeuristic::Zero => 0,
            PuzzleHeuristic::MisplacedTiles => misplaced_tiles(node.state()),
            PuzzleHeuristic::Manhattan => manhattan_distance(node.state()),
        }
    }

    fn encode_state(&self, state: &Board) -> serde_json::Value {
        serde_json::json!(state)
    }

    fn encode_action(&self, action: &Slide) -> serde_json::Value {
        serde_json::json!(action.name())
    }
}
