//! Constants for board sizes, heuristic weights, and AI defaults.
//!
//! The rules engine itself works on any square board. The limits here only
//! bound what the outer surfaces (CLI and GTP) accept.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest board size accepted by the CLI and GTP front end.
pub const MIN_BOARD_SIZE: usize = 7;

/// Largest board size accepted (GTP vertices stop at letter Z).
pub const MAX_BOARD_SIZE: usize = 25;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Boards at least this large get extra search candidates.
pub const LARGE_BOARD_SIZE: usize = 19;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Score per stone of material advantage.
pub const MATERIAL_WEIGHT: f64 = 10.0;

/// Penalty per stone of a group in atari.
pub const ATARI_PENALTY: f64 = 5.0;

/// Bonus per stone of a group with at least [`SAFE_LIBERTIES`] liberties.
pub const SAFE_GROUP_BONUS: f64 = 2.0;

/// Liberty count at which a group is considered safe.
pub const SAFE_LIBERTIES: usize = 3;

/// Flat bonus for a stone on the first line.
pub const EDGE_BONUS: f64 = 3.0;

/// Flat bonus for a stone in a corner (added on top of the edge bonus).
pub const CORNER_BONUS: f64 = 5.0;

// =============================================================================
// Move Ordering Weights
// =============================================================================

/// Ordering score per captured stone. Dominates every positional term.
pub const ORDER_CAPTURE: f64 = 100.0;

/// Multiplier applied to the center-proximity bonus.
pub const ORDER_CENTER: f64 = 2.0;

/// Ordering score per friendly orthogonal neighbour.
pub const ORDER_FRIENDLY: f64 = 3.0;

/// Ordering score per enemy orthogonal neighbour.
pub const ORDER_ENEMY: f64 = 1.0;

// =============================================================================
// Candidate Trimming
// =============================================================================

/// Lower bound on the candidate cap, whatever the depth.
pub const MIN_CANDIDATES: usize = 6;

/// Lower bound on candidates kept at interior nodes.
pub const MIN_INTERIOR_CANDIDATES: usize = 8;

/// Candidates removed from the cap per ply beyond the second.
pub const CANDIDATES_PER_PLY: usize = 3;

/// Extra candidates on large boards.
pub const LARGE_BOARD_CANDIDATES: usize = 2;

// =============================================================================
// AI Settings
// =============================================================================

/// Shallowest configurable search depth.
pub const MIN_DEPTH: u32 = 1;

/// Deepest configurable search depth.
pub const MAX_DEPTH: u32 = 6;

/// Default search depth.
pub const DEFAULT_DEPTH: u32 = 3;

/// Upper bound on the per-move time budget (ten minutes).
pub const MAX_TIME_MS: u64 = 600_000;

/// Default per-move time budget.
pub const DEFAULT_TIME_MS: u64 = 5_000;

/// Upper bound on the base candidate count.
pub const MAX_CANDIDATES_BASE: usize = 100;

/// Default base candidate count.
pub const DEFAULT_CANDIDATES_BASE: usize = 15;
