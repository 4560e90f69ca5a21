//! Static position evaluation.
//!
//! Three hand-tuned terms, each computed for `player` and mirrored with the
//! opposite sign for the opponent:
//! - material: stone count difference
//! - group safety: groups in atari are a liability, groups with three or
//!   more liberties an asset
//! - position: stones near the center, on the edge, and in corners
//!
//! Scores only compare positions against each other; they have no absolute
//! meaning and are not normalized.

use crate::board::{Board, Color, Point};
use crate::constants::{
    ATARI_PENALTY, CORNER_BONUS, EDGE_BONUS, MATERIAL_WEIGHT, SAFE_GROUP_BONUS, SAFE_LIBERTIES,
};
use crate::group::find_all_groups;

/// Score `board` from `player`'s point of view. Higher is better for `player`.
pub fn evaluate_position(board: &Board, player: Color) -> f64 {
    let opponent = player.opponent();
    material(board, player)
        + group_safety(board, player)
        - group_safety(board, opponent)
        + influence(board, player)
        - influence(board, opponent)
}

fn material(board: &Board, player: Color) -> f64 {
    let own = board.count(player) as f64;
    let theirs = board.count(player.opponent()) as f64;
    (own - theirs) * MATERIAL_WEIGHT
}

fn group_safety(board: &Board, color: Color) -> f64 {
    find_all_groups(board, color)
        .iter()
        .map(|g| {
            let size = g.len() as f64;
            match g.liberties(board) {
                1 => -size * ATARI_PENALTY,
                libs if libs >= SAFE_LIBERTIES => size * SAFE_GROUP_BONUS,
                _ => 0.0,
            }
        })
        .sum()
}

fn influence(board: &Board, color: Color) -> f64 {
    board
        .stones(color)
        .map(|pt| {
            let mut bonus = center_bonus(board, pt);
            if board.is_edge(pt) {
                bonus += EDGE_BONUS;
            }
            if board.is_corner(pt) {
                bonus += CORNER_BONUS;
            }
            bonus
        })
        .sum()
}

/// `max(0, N/3 - d/2)` where `d` is the Manhattan distance to the center.
pub fn center_bonus(board: &Board, pt: Point) -> f64 {
    let n = board.size() as f64;
    let d = board.center_distance(pt) as f64;
    (n / 3.0 - d / 2.0).max(0.0)
}
