//! `LightsOut`: the n×n toggle puzzle.
//!
//! State is a bitmask of lit cells (bit `row * size + col`). Pressing a cell
//! toggles it and its orthogonal neighbours; every cell may be pressed at
//! any time, at cost 1. Goal: all lights off.
//!
//! Presses commute and are self-inverse, so an optimal plan never presses a
//! cell twice. On 3×3 every configuration is solvable and the optimal cost is
//! the size of its unique press set.

use waypoint_search::contract::SearchModel;
use waypoint_search::node::Node;

use crate::contract::WorldV1;
use crate::worlds::BoardError;

/// Largest supported side (25 cells fit in a `u32`).
pub const MAX_SIZE: usize = 5;

/// Most cells a single press can switch off.
const MAX_TOGGLED: u32 = 5;

/// Search-capable lights-out world.
#[derive(Debug, Clone)]
pub struct LightsOut {
    size: usize,
    start: u32,
    /// Precomputed toggle mask per cell.
    masks: Vec<u32>,
}

impl LightsOut {
    /// Board of side `size` with the given cells lit.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedSize`] unless `1 <= size <= 5`, or
    /// [`BoardError::CellOutOfRange`] for a cell index `>= size * size`.
    pub fn new(size: usize, lit: &[usize]) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::UnsupportedSize { size });
        }
        let cells = size * size;
        let mut start = 0u32;
        for &cell in lit {
            if cell >= cells {
                return Err(BoardError::CellOutOfRange { cell });
            }
            start ^= 1 << cell;
        }
        let masks = (0..cells).map(|cell| toggle_mask(size, cell)).collect();
        Ok(Self { size, start, masks })
    }

    /// The board reached from all-off by pressing `presses`.
    ///
    /// # Errors
    ///
    /// Same as [`LightsOut::new`].
    pub fn from_presses(size: usize, presses: &[usize]) -> Result<Self, BoardError> {
        let mut world = Self::new(size, &[])?;
        for &cell in presses {
            let mask = world
                .masks
                .get(cell)
                .copied()
                .ok_or(BoardError::CellOutOfRange { cell })?;
            world.start ^= mask;
        }
        Ok(world)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }
}

fn toggle_mask(size: usize, cell: usize) -> u32 {
    let (row, col) = (cell / size, cell % size);
    let mut mask = 1u32 << cell;
    if row > 0 {
        mask |= 1 << (cell - size);
    }
    if row + 1 < size {
        mask |= 1 << (cell + size);
    }
    if col > 0 {
        mask |= 1 << (cell - 1);
    }
    if col + 1 < size {
        mask |= 1 << (cell + 1);
    }
    mask
}

/// `ceil(lit / 5)`: one press switches off at most five lights.
#[must_use]
pub fn lit_lower_bound(state: u32) -> i64 {
    i64::from(state.count_ones().div_ceil(MAX_TOGGLED))
}

impl SearchModel for LightsOut {
    type State = u32;
    type Action = usize;

    fn legal_actions(&self, _state: &u32) -> Vec<usize> {
        (0..self.masks.len()).collect()
    }

    fn successor(&self, state: &u32, action: &usize) -> u32 {
        state ^ self.masks[*action]
    }
}

impl WorldV1 for LightsOut {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "lights_out"
    }

    fn initial_state(&self) -> u32 {
        self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == 0
    }

    fn heuristic(&self, node: &Node<u32, usize>) -> i64 {
        lit_lower_bound(*node.state())
    }

    fn encode_state(&self, state: &u32) -> serde_json::Value {
        serde_json::json!(state)
    }

    fn encode_action(&self, action: &usize) -> serde_json::Value {
        serde_json::json!(action)
    }
}
