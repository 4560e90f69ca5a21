//! AI configuration and its validation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{
    DEFAULT_CANDIDATES_BASE, DEFAULT_DEPTH, DEFAULT_TIME_MS, MAX_BOARD_SIZE, MAX_CANDIDATES_BASE,
    MAX_DEPTH, MAX_TIME_MS, MIN_BOARD_SIZE, MIN_CANDIDATES, MIN_DEPTH,
};

/// Rejected configuration value. The previous setting stays in effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown algorithm {0:?} (expected \"minimax\" or \"alphabeta\")")]
    UnknownAlgorithm(String),
    #[error("depth {0} out of range ({min}..={max})", min = MIN_DEPTH, max = MAX_DEPTH)]
    DepthOutOfRange(u32),
    #[error("time limit {0} ms out of range (0..={max})", max = MAX_TIME_MS)]
    TimeOutOfRange(u64),
    #[error(
        "candidate count {0} out of range ({min}..={max})",
        min = MIN_CANDIDATES,
        max = MAX_CANDIDATES_BASE
    )]
    CandidatesOutOfRange(usize),
    #[error(
        "unsupported board size {0} (odd sizes {min}..={max})",
        min = MIN_BOARD_SIZE,
        max = MAX_BOARD_SIZE
    )]
    UnsupportedBoardSize(usize),
}

/// Tree search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Exhaustive minimax over every legal move.
    Minimax,
    /// Alpha-beta over ordered, trimmed candidates.
    #[default]
    AlphaBeta,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Algorithm::AlphaBeta),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

/// Settings consumed by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiSettings {
    pub algorithm: Algorithm,
    /// Plies searched, root move included.
    pub depth: u32,
    /// Wall-clock budget per search; 0 means unbounded.
    pub max_time_ms: u64,
    /// Candidate cap before depth and board-size adjustments.
    pub max_candidates_base: usize,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            depth: DEFAULT_DEPTH,
            max_time_ms: DEFAULT_TIME_MS,
            max_candidates_base: DEFAULT_CANDIDATES_BASE,
        }
    }
}

pub fn validate_depth(depth: u32) -> Result<u32, ConfigError> {
    if (MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
        Ok(depth)
    } else {
        Err(ConfigError::DepthOutOfRange(depth))
    }
}

pub fn validate_time_ms(ms: u64) -> Result<u64, ConfigError> {
    if ms <= MAX_TIME_MS {
        Ok(ms)
    } else {
        Err(ConfigError::TimeOutOfRange(ms))
    }
}

pub fn validate_candidates(base: usize) -> Result<usize, ConfigError> {
    if (MIN_CANDIDATES..=MAX_CANDIDATES_BASE).contains(&base) {
        Ok(base)
    } else {
        Err(ConfigError::CandidatesOutOfRange(base))
    }
}

/// Board sizes offered to players: odd, from 7 up to 25 (covers 7, 9, 13, 19).
pub fn validate_board_size(size: usize) -> Result<usize, ConfigError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) && size % 2 == 1 {
        Ok(size)
    } else {
        Err(ConfigError::UnsupportedBoardSize(size))
    }
}
