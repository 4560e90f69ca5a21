//! go-minimax: a Go rules engine with an adversarial search opponent.
//!
//! The crate provides the rules of Go (captures, suicide, passing, scoring)
//! and a minimax / alpha-beta engine that picks moves under a time budget.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits, heuristic weights, and AI defaults
//! - [`board`] - Board cells, points, and neighbour queries
//! - [`group`] - Group discovery and liberty counting
//! - [`rules`] - Legality, captures, game state, and scoring
//! - [`eval`] - Static position evaluation
//! - [`candidates`] - Move ordering and trimming
//! - [`config`] - AI settings and their validation
//! - [`search`] - Minimax and alpha-beta search
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use go_minimax::board::Color;
//! use go_minimax::rules::GameState;
//! use go_minimax::search::Searcher;
//!
//! // Create a new game and play a move
//! let mut game = GameState::new(9);
//! game.apply_move((4, 4), Color::Black).unwrap();
//!
//! // Ask the engine for White's reply
//! let mut searcher = Searcher::default();
//! searcher.set_depth(2).unwrap();
//! if let Some(pt) = searcher.find_best_move(&game.board, Color::White) {
//!     game.apply_move(pt, Color::White).unwrap();
//! }
//! ```

pub mod board;
pub mod candidates;
pub mod config;
pub mod constants;
pub mod eval;
pub mod group;
pub mod gtp;
pub mod rules;
pub mod search;
