//! Go rules: legality, captures, passing, and end-of-game scoring.
//!
//! Captures are always resolved before the suicide check. A stone that fills
//! its own last liberty is legal when it removes an opposing group, because
//! that removal gives it liberties back. Scoring counts stones on the board
//! plus prisoners. There is no ko rule and no territory counting.

use std::fmt;

use thiserror::Error;

use crate::board::{Board, Color, Point};
use crate::group::get_group;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: point is off the board")]
    OutOfBounds,
    #[error("illegal move: point not empty")]
    Occupied,
    #[error("illegal move: suicide")]
    Suicide,
    #[error("illegal move: game is over")]
    GameOver,
}

/// A turn: put a stone on a point, or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Play(Point),
    Pass,
}

/// Remove every group of `color` that has no liberties.
///
/// Each stone is visited once. Groups of one color never touch each other,
/// so removing one cannot change another's liberties and the scan order does
/// not affect the result. Returns the number of stones removed.
pub fn remove_captured_groups(board: &mut Board, color: Color) -> usize {
    let mut visited = vec![false; board.size() * board.size()];
    let stones: Vec<Point> = board.stones(color).collect();
    let mut captured = 0;

    for pt in stones {
        if visited[board.index(pt)] {
            continue;
        }
        let Some(group) = get_group(board, pt) else {
            continue;
        };
        for &s in &group.stones {
            visited[board.index(s)] = true;
        }
        if group.liberties(board) == 0 {
            for &s in &group.stones {
                board.remove(s);
            }
            captured += group.len();
        }
    }
    captured
}

/// Place a stone and remove the opponent groups it leaves without liberties.
///
/// No legality check: callers pass moves already known to be legal.
/// Returns the number of stones captured.
pub fn place_and_capture(board: &mut Board, pt: Point, player: Color) -> usize {
    board.place(pt, player);
    remove_captured_groups(board, player.opponent())
}

/// Play `pt` on a copy of `board` and return the resulting board with the
/// number of stones captured.
pub fn simulate_move(board: &Board, pt: Point, player: Color) -> Result<(Board, usize), MoveError> {
    if !board.contains(pt) {
        return Err(MoveError::OutOfBounds);
    }
    if board.get(pt).is_some() {
        return Err(MoveError::Occupied);
    }

    let mut next = board.clone();
    let captured = place_and_capture(&mut next, pt, player);
    if captured == 0 {
        let libs = get_group(&next, pt).map_or(0, |g| g.liberties(&next));
        if libs == 0 {
            return Err(MoveError::Suicide);
        }
    }
    Ok((next, captured))
}

/// Check a move and report why it is illegal.
pub fn check_move(board: &Board, pt: Point, player: Color) -> Result<(), MoveError> {
    simulate_move(board, pt, player).map(|_| ())
}

pub fn is_legal_move(board: &Board, pt: Point, player: Color) -> bool {
    check_move(board, pt, player).is_ok()
}

/// Every point where `player` may legally play, in row-major order.
pub fn legal_moves(board: &Board, player: Color) -> Vec<Point> {
    board
        .points()
        .filter(|&pt| board.get(pt).is_none() && is_legal_move(board, pt, player))
        .collect()
}

/// Who won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Final score: stones on the board plus stones captured, per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub black_score: usize,
    pub white_score: usize,
    pub winner: Winner,
}

impl GameResult {
    fn new(black_score: usize, white_score: usize) -> Self {
        let winner = match black_score.cmp(&white_score) {
            std::cmp::Ordering::Greater => Winner::Black,
            std::cmp::Ordering::Less => Winner::White,
            std::cmp::Ordering::Equal => Winner::Draw,
        };
        Self {
            black_score,
            white_score,
            winner,
        }
    }
}

/// GTP `final_score` notation: `B+3`, `W+1`, or `0` for a draw.
impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Winner::Black => write!(f, "B+{}", self.black_score - self.white_score),
            Winner::White => write!(f, "W+{}", self.white_score - self.black_score),
            Winner::Draw => write!(f, "0"),
        }
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    /// Stones captured by each color, indexed by [`Color::index`].
    pub captured: [usize; 2],
    pub consecutive_passes: u32,
    pub game_over: bool,
    /// Number of turns taken, passes included.
    pub move_number: usize,
    pub last_move: Option<Move>,
}

impl GameState {
    /// An empty board with Black to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Color::Black,
            captured: [0; 2],
            consecutive_passes: 0,
            game_over: false,
            move_number: 0,
            last_move: None,
        }
    }

    /// Stones `color` has captured so far.
    #[inline]
    pub fn captures(&self, color: Color) -> usize {
        self.captured[color.index()]
    }

    /// Play a stone for `player`.
    ///
    /// On success returns the number of stones captured. On error the state
    /// is left exactly as it was.
    pub fn apply_move(&mut self, pt: Point, player: Color) -> Result<usize, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let (board, captured) = simulate_move(&self.board, pt, player)?;

        self.board = board;
        self.captured[player.index()] += captured;
        self.consecutive_passes = 0;
        self.current_player = player.opponent();
        self.move_number += 1;
        self.last_move = Some(Move::Play(pt));
        Ok(captured)
    }

    /// Pass the turn. The second consecutive pass ends the game and returns
    /// the final result. Passing after the game is over changes nothing.
    pub fn pass(&mut self) -> Option<GameResult> {
        if self.game_over {
            return Some(self.score());
        }
        self.consecutive_passes += 1;
        self.current_player = self.current_player.opponent();
        self.move_number += 1;
        self.last_move = Some(Move::Pass);

        if self.consecutive_passes >= 2 {
            Some(self.end_game())
        } else {
            None
        }
    }

    /// Mark the game finished and score it.
    pub fn end_game(&mut self) -> GameResult {
        self.game_over = true;
        self.score()
    }

    /// Score the current board without ending the game.
    pub fn score(&self) -> GameResult {
        GameResult::new(
            self.board.count(Color::Black) + self.captures(Color::Black),
            self.board.count(Color::White) + self.captures(Color::White),
        )
    }
}
