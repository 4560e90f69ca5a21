//! Connected-component analysis: groups and liberties.
//!
//! All flood fills use an explicit stack, so a group covering the whole
//! board never deepens the call stack. Visited sets are `Vec<bool>` bitsets
//! keyed by [`Board::index`].

use crate::board::{Board, Color, Point};

/// A maximal set of same-colored stones joined by orthogonal adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: Vec<Point>,
}

impl Group {
    #[inline]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.stones.contains(&pt)
    }

    pub fn liberties(&self, board: &Board) -> usize {
        count_liberties(board, &self.stones)
    }
}

/// Collect the group containing `start`.
///
/// Returns `None` if `start` is empty or off the board.
pub fn get_group(board: &Board, start: Point) -> Option<Group> {
    let color = board.get(start)?;
    let mut visited = vec![false; board.size() * board.size()];
    let stones = flood_fill(board, start, color, &mut visited);
    Some(Group { color, stones })
}

/// Flood fill from `start` over stones of `color`, marking `visited`.
///
/// The caller guarantees `start` holds a stone of `color`.
fn flood_fill(board: &Board, start: Point, color: Color, visited: &mut [bool]) -> Vec<Point> {
    let mut stones = Vec::new();
    let mut stack = vec![start];
    visited[board.index(start)] = true;

    while let Some(pt) = stack.pop() {
        stones.push(pt);
        for n in board.neighbors(pt) {
            let ni = board.index(n);
            if !visited[ni] && board.get(n) == Some(color) {
                visited[ni] = true;
                stack.push(n);
            }
        }
    }
    stones
}

/// Count the distinct empty points orthogonally adjacent to `stones`.
///
/// A liberty shared by several stones of the group counts once.
pub fn count_liberties(board: &Board, stones: &[Point]) -> usize {
    let mut seen = vec![false; board.size() * board.size()];
    let mut libs = 0;
    for &pt in stones {
        for n in board.neighbors(pt) {
            let ni = board.index(n);
            if !seen[ni] && board.get(n).is_none() {
                seen[ni] = true;
                libs += 1;
            }
        }
    }
    libs
}

/// Partition every stone of `color` into disjoint groups.
///
/// Each stone belongs to exactly one returned group and each group is
/// reported once, in row-major order of its first stone.
pub fn find_all_groups(board: &Board, color: Color) -> Vec<Group> {
    let mut visited = vec![false; board.size() * board.size()];
    let mut groups = Vec::new();
    for pt in board.stones(color) {
        if visited[board.index(pt)] {
            continue;
        }
        let stones = flood_fill(board, pt, color, &mut visited);
        groups.push(Group { color, stones });
    }
    groups
}
