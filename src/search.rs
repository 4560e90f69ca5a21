//! Minimax and alpha-beta game-tree search with a wall-clock deadline.
//!
//! Both strategies share one recursive shape: a node scores its board with
//! the static evaluator at depth zero, when the side to move has no moves,
//! or when the deadline has passed. Otherwise it plays each move on its own
//! copy of the board and keeps the best child score for the side to move.
//!
//! - Minimax walks every legal move.
//! - Alpha-beta walks the ordered, trimmed candidates from
//!   [`candidate_moves`] and stops a node as soon as `beta <= alpha`.
//!
//! The deadline is checked on entry to every node and again before each
//! child, so a search overruns its budget by at most one static evaluation. Running out of time lowers move quality but never produces
//! an illegal move.
//!
//! ## Example
//!
//! ```
//! use go_minimax::board::{Board, Color};
//! use go_minimax::search::Searcher;
//!
//! let mut searcher = Searcher::default();
//! searcher.set_depth(2).unwrap();
//! let board = Board::new(7);
//! let best = searcher.find_best_move(&board, Color::Black);
//! assert!(best.is_some());
//! ```

use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::board::{Board, Color, Point};
use crate::candidates::candidate_moves;
use crate::config::{
    AiSettings, Algorithm, ConfigError, validate_candidates, validate_depth, validate_time_ms,
};
use crate::eval::evaluate_position;
use crate::rules::{legal_moves, place_and_capture};

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root children included.
    pub nodes_evaluated: u64,
    pub time_used_ms: u64,
    pub nodes_per_second: u64,
    /// Configured depth of the search.
    pub actual_depth: u32,
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Point>,
    /// Score of `best_move` for the searching player, or `None` if time ran
    /// out before any root move was scored.
    pub score: Option<f64>,
}

/// Per-search constants threaded through the recursion.
struct SearchContext {
    /// Player the whole tree is scored for.
    original: Color,
    deadline: Option<Instant>,
}

impl SearchContext {
    #[inline]
    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Owns the AI settings and the statistics of the last search.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    settings: AiSettings,
    stats: SearchStats,
    nodes: u64,
}

impl Searcher {
    pub fn new(settings: AiSettings) -> Self {
        Self {
            settings,
            stats: SearchStats::default(),
            nodes: 0,
        }
    }

    pub fn settings(&self) -> &AiSettings {
        &self.settings
    }

    /// Snapshot of the last search's counters.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
        self.nodes = 0;
    }

    /// Select the search strategy by name (`minimax` or `alphabeta`).
    pub fn set_algorithm(&mut self, name: &str) -> Result<(), ConfigError> {
        self.settings.algorithm = name.parse::<Algorithm>()?;
        self.reset_stats();
        Ok(())
    }

    pub fn set_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        self.settings.depth = validate_depth(depth)?;
        self.reset_stats();
        Ok(())
    }

    /// Per-move time budget in milliseconds; 0 removes the limit.
    pub fn set_max_time_ms(&mut self, ms: u64) -> Result<(), ConfigError> {
        self.settings.max_time_ms = validate_time_ms(ms)?;
        self.reset_stats();
        Ok(())
    }

    pub fn set_max_candidates_base(&mut self, base: usize) -> Result<(), ConfigError> {
        self.settings.max_candidates_base = validate_candidates(base)?;
        self.reset_stats();
        Ok(())
    }

    /// Best move for `player` within the configured time budget, or `None`
    /// if `player` has no legal move and must pass.
    pub fn find_best_move(&mut self, board: &Board, player: Color) -> Option<Point> {
        let deadline = match self.settings.max_time_ms {
            0 => None,
            ms => Instant::now().checked_add(Duration::from_millis(ms)),
        };
        self.search(board, player, deadline).best_move
    }

    /// Search with an explicit deadline (`None` = unbounded).
    pub fn search(&mut self, board: &Board, player: Color, deadline: Option<Instant>) -> SearchResult {
        self.reset_stats();
        let start = Instant::now();
        let ctx = SearchContext {
            original: player,
            deadline,
        };
        let algorithm = self.settings.algorithm;
        let child_depth = self.settings.depth.saturating_sub(1);

        let candidates = candidate_moves(board, player, true, &self.settings);
        let mut best_move = None;
        let mut best_score: Option<f64> = None;

        for &mv in &candidates {
            if ctx.expired() {
                break;
            }
            let mut child = board.clone();
            place_and_capture(&mut child, mv, player);

            let opponent = player.opponent();
            let (score, _) = match algorithm {
                Algorithm::Minimax => self.minimax(&ctx, &child, child_depth, opponent, false),
                Algorithm::AlphaBeta => self.alpha_beta(
                    &ctx,
                    &child,
                    child_depth,
                    opponent,
                    false,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                ),
            };
            trace!("root move {mv:?} scored {score}");

            if best_score.is_none_or(|best| score > best) {
                best_score = Some(score);
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            if let Some(&first) = candidates.first() {
                warn!("deadline passed before any root move was scored, playing {first:?}");
                best_move = Some(first);
            }
        }

        let elapsed = start.elapsed();
        let secs = elapsed.as_secs_f64();
        self.stats = SearchStats {
            nodes_evaluated: self.nodes,
            time_used_ms: elapsed.as_millis() as u64,
            nodes_per_second: if secs > 0.0 {
                (self.nodes as f64 / secs) as u64
            } else {
                0
            },
            actual_depth: self.settings.depth,
        };
        debug!(
            "{algorithm} depth {}: best {:?} score {:?}, {} nodes in {} ms",
            self.settings.depth, best_move, best_score, self.stats.nodes_evaluated, self.stats.time_used_ms
        );

        SearchResult {
            best_move,
            score: best_score,
        }
    }

    fn minimax(
        &mut self,
        ctx: &SearchContext,
        board: &Board,
        depth: u32,
        player: Color,
        maximizing: bool,
    ) -> (f64, Option<Point>) {
        self.nodes += 1;
        if depth == 0 || ctx.expired() {
            return (evaluate_position(board, ctx.original), None);
        }
        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return (evaluate_position(board, ctx.original), None);
        }

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for mv in moves {
            if ctx.expired() {
                return (evaluate_position(board, ctx.original), None);
            }
            let mut child = board.clone();
            place_and_capture(&mut child, mv, player);
            let (score, _) = self.minimax(ctx, &child, depth - 1, player.opponent(), !maximizing);

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(mv);
            }
        }
        (best_score, best_move)
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        ctx: &SearchContext,
        board: &Board,
        depth: u32,
        player: Color,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<Point>) {
        self.nodes += 1;
        if depth == 0 || ctx.expired() {
            return (evaluate_position(board, ctx.original), None);
        }
        let moves = candidate_moves(board, player, false, &self.settings);
        if moves.is_empty() {
            return (evaluate_position(board, ctx.original), None);
        }

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for mv in moves {
            if ctx.expired() {
                return (evaluate_position(board, ctx.original), None);
            }
            let mut child = board.clone();
            place_and_capture(&mut child, mv, player);
            let (score, _) =
                self.alpha_beta(ctx, &child, depth - 1, player.opponent(), !maximizing, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    }
}
