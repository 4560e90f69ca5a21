//! Move ordering and trimming for alpha-beta search.
//!
//! Pruning only pays off when strong moves come first, so every legal move
//! gets a cheap ordering score: captures dominate, and position breaks ties
//! among quiet moves. The list is then cut to a cap that shrinks with
//! search depth and is tighter at interior nodes than at the root.

use crate::board::{Board, Color, Point};
use crate::config::AiSettings;
use crate::constants::{
    CANDIDATES_PER_PLY, LARGE_BOARD_CANDIDATES, LARGE_BOARD_SIZE, MIN_CANDIDATES,
    MIN_INTERIOR_CANDIDATES, ORDER_CAPTURE, ORDER_CENTER, ORDER_ENEMY, ORDER_FRIENDLY,
};
use crate::eval::center_bonus;
use crate::rules::simulate_move;

/// Legal moves for `player`, best first, trimmed to the configured cap.
pub fn candidate_moves(board: &Board, player: Color, is_root: bool, settings: &AiSettings) -> Vec<Point> {
    let mut scored: Vec<(Point, f64)> = board
        .points()
        .filter_map(|pt| {
            let (_, captured) = simulate_move(board, pt, player).ok()?;
            Some((pt, order_score(board, pt, player, captured)))
        })
        .collect();

    if scored.len() > 1 {
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        let cap = candidate_limit(board.size(), settings.depth, settings.max_candidates_base, is_root);
        scored.truncate(cap);
    }
    scored.into_iter().map(|(pt, _)| pt).collect()
}

/// Ordering score of a legal move that captures `captured` stones.
///
/// Neighbour counts are taken on `board`, before the stone is placed.
pub fn order_score(board: &Board, pt: Point, player: Color, captured: usize) -> f64 {
    let mut friendly = 0;
    let mut enemy = 0;
    for n in board.neighbors(pt) {
        match board.get(n) {
            Some(c) if c == player => friendly += 1,
            Some(_) => enemy += 1,
            None => {}
        }
    }
    captured as f64 * ORDER_CAPTURE
        + center_bonus(board, pt) * ORDER_CENTER
        + friendly as f64 * ORDER_FRIENDLY
        + enemy as f64 * ORDER_ENEMY
}

/// How many candidates to keep.
///
/// `cap = clamp(base - max(0, depth - 2) * 3, 6, base)`, plus two on large
/// boards. The root keeps `cap`; interior nodes keep `max(8, cap * 3/4)`.
pub fn candidate_limit(size: usize, depth: u32, base: usize, is_root: bool) -> usize {
    let extra_plies = depth.saturating_sub(2) as usize;
    let reduced = base.saturating_sub(extra_plies * CANDIDATES_PER_PLY);
    let mut cap = reduced.max(MIN_CANDIDATES).min(base);
    if size >= LARGE_BOARD_SIZE {
        cap += LARGE_BOARD_CANDIDATES;
    }

    if is_root {
        cap
    } else {
        MIN_INTERIOR_CANDIDATES.max(cap * 3 / 4)
    }
}
