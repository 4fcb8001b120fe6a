//! Constants for board geometry and rollout parameters.
//!
//! The board size is a runtime value chosen when a [`Game`](crate::game::Game)
//! is created; [`DEFAULT_SIZE`] is what the command line uses when no size
//! is given.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). 11x11 is the classic Hex board.
pub const DEFAULT_SIZE: usize = 11;

/// Largest board the command line accepts.
pub const MAX_SIZE: usize = 26;

/// Offsets `(drow, dcol)` to the six neighbours of a cell on a pointy-top
/// hex grid laid out as a rhombus.
///
/// Order: up, up-right, left, right, down-left, down.
pub const HEX_DELTA: [(isize, isize); 6] = [
    (-1, 0),  // up
    (-1, 1),  // up-right
    (0, -1),  // left
    (0, 1),   // right
    (1, -1),  // down-left
    (1, 0),   // down
];

// =============================================================================
// Rollout Parameters
// =============================================================================

/// Number of random rollouts played for every candidate move.
pub const N_SIMS: usize = 1000;

/// Board size used by the self-play demo.
pub const DEMO_SIZE: usize = 5;

/// Rollouts per candidate used by the self-play demo.
pub const DEMO_SIMS: usize = 200;

/// Seed used by the self-play demo so that its output is reproducible.
pub const DEMO_SEED: u64 = 2021;
