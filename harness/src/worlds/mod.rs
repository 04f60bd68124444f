//! Reference worlds.
//!
//! Each world implements both `SearchModel` (the engine contract) and
//! `WorldV1` (the harness contract).

pub mod eight_puzzle;
pub mod lights_out;
pub mod weighted_graph;

/// Typed failure for constructing a world from an invalid board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// An eight-puzzle board must hold each of `0..=8` exactly once.
    NotAPermutation,
    /// Board side outside the supported range.
    UnsupportedSize { size: usize },
    /// A cell index beyond the board.
    CellOutOfRange { cell: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAPermutation => write!(f, "board is not a permutation of 0..=8"),
            Self::UnsupportedSize { size } => write!(f, "unsupported board size {size}"),
            Self::CellOutOfRange { cell } => write!(f, "cell {cell} is outside the board"),
        }
    }
}

impl std::error::Error for BoardError {}
