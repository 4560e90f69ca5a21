//! Go Text Protocol (GTP) front end.
//!
//! Lets graphical clients such as Sabaki or GoGui play against the engine.
//! Implements the core of GTP version 2 plus a few `ai_*` extensions for
//! tuning the search from the client.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`, `list_commands`, `known_command`, `quit`
//! - `boardsize <size>` - Odd sizes from 7 to 25; clears the board
//! - `clear_board` - Reset to an empty board, Black to move
//! - `komi <value>` - Accepted and ignored (scoring counts stones plus prisoners)
//! - `play <color> <vertex>` - Play a move or `pass`
//! - `genmove <color>` - Search, play, and report a move
//! - `final_score` - Current score as `B+n`, `W+n`, or `0`
//! - `showboard` - ASCII diagram of the position
//! - `ai_algorithm <minimax|alphabeta>`, `ai_depth <n>`, `ai_time <ms>`,
//!   `ai_candidates <n>` - Change search settings
//! - `ai_stats` - Counters from the last `genmove`
//!
//! ## Example
//!
//! ```no_run
//! use go_minimax::gtp::GtpEngine;
//! let mut engine = GtpEngine::default();
//! engine.run().unwrap();
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::board::{Board, Color, Point};
use crate::config::{AiSettings, ConfigError, validate_board_size};
use crate::constants::DEFAULT_BOARD_SIZE;
use crate::rules::{GameState, Move};
use crate::search::Searcher;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "ai_algorithm",
    "ai_candidates",
    "ai_depth",
    "ai_stats",
    "ai_time",
    "boardsize",
    "clear_board",
    "final_score",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Column letters; `I` is skipped by convention.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// GTP engine state.
pub struct GtpEngine {
    state: GameState,
    searcher: Searcher,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE, AiSettings::default())
    }
}

impl GtpEngine {
    /// Engine on an empty board; `size` must be odd and within 7..=25.
    pub fn new(size: usize, settings: AiSettings) -> Result<Self, ConfigError> {
        let size = validate_board_size(size)?;
        Ok(Self::with_size(size, settings))
    }

    fn with_size(size: usize, settings: AiSettings) -> Self {
        Self {
            state: GameState::new(size),
            searcher: Searcher::new(settings),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read GTP command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            debug!("gtp <- {line}");

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (prefix, message) = match self.execute(&command, args) {
                Ok(msg) => ('=', msg),
                Err(msg) => ('?', msg),
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            debug!("gtp -> {prefix}{id_str} {message}");

            write!(output, "{prefix}{id_str} {message}\n\n").context("failed to write GTP response")?;
            output.flush().context("failed to flush GTP response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command, returning the success or failure message.
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<String, String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let cmd = arg(args, 0)?;
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "boardsize" => {
                let size = arg(args, 0)?
                    .parse::<usize>()
                    .map_err(|_| "boardsize not an integer".to_string())?;
                let size = validate_board_size(size).map_err(|e| format!("unacceptable size: {e}"))?;
                self.state = GameState::new(size);
                Ok(String::new())
            }

            "clear_board" => {
                self.state = GameState::new(self.state.board.size());
                Ok(String::new())
            }

            "komi" => {
                let komi = arg(args, 0)?
                    .parse::<f32>()
                    .map_err(|_| "komi not a float".to_string())?;
                debug!("komi {komi} ignored: scoring counts stones plus prisoners");
                Ok(String::new())
            }

            "play" => {
                let color = parse_color(arg(args, 0)?)?;
                let size = self.state.board.size();
                match parse_vertex(arg(args, 1)?, size).ok_or("invalid vertex")? {
                    Move::Pass => {
                        self.state.current_player = color;
                        self.state.pass();
                    }
                    Move::Play(pt) => {
                        self.state.apply_move(pt, color).map_err(|e| e.to_string())?;
                    }
                }
                Ok(String::new())
            }

            "genmove" => {
                let color = parse_color(arg(args, 0)?)?;
                if self.state.game_over {
                    return Ok("pass".to_string());
                }
                match self.searcher.find_best_move(&self.state.board, color) {
                    Some(pt) => {
                        self.state.apply_move(pt, color).map_err(|e| e.to_string())?;
                        Ok(format_vertex(pt, self.state.board.size()))
                    }
                    None => {
                        self.state.current_player = color;
                        self.state.pass();
                        Ok("pass".to_string())
                    }
                }
            }

            "final_score" => Ok(self.state.score().to_string()),

            "showboard" => Ok(format!("\n{}", render_board(&self.state.board))),

            "ai_algorithm" => {
                let name = arg(args, 0)?;
                self.searcher.set_algorithm(name).map_err(|e| e.to_string())?;
                Ok(String::new())
            }

            "ai_depth" => {
                let depth = arg(args, 0)?
                    .parse::<u32>()
                    .map_err(|_| "depth not an integer".to_string())?;
                self.searcher.set_depth(depth).map_err(|e| e.to_string())?;
                Ok(String::new())
            }

            "ai_time" => {
                let ms = arg(args, 0)?
                    .parse::<u64>()
                    .map_err(|_| "time not an integer".to_string())?;
                self.searcher.set_max_time_ms(ms).map_err(|e| e.to_string())?;
                Ok(String::new())
            }

            "ai_candidates" => {
                let base = arg(args, 0)?
                    .parse::<usize>()
                    .map_err(|_| "candidate count not an integer".to_string())?;
                self.searcher
                    .set_max_candidates_base(base)
                    .map_err(|e| e.to_string())?;
                Ok(String::new())
            }

            "ai_stats" => {
                let s = self.searcher.stats();
                Ok(format!(
                    "nodes {} time_ms {} nps {} depth {}",
                    s.nodes_evaluated, s.time_used_ms, s.nodes_per_second, s.actual_depth
                ))
            }

            _ => Err(format!("unknown command: {command}")),
        }
    }
}

fn arg<'a>(args: &[&'a str], i: usize) -> Result<&'a str, String> {
    args.get(i).copied().ok_or_else(|| "missing argument".to_string())
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Ok(Color::Black),
        "w" | "white" => Ok(Color::White),
        _ => Err(format!("invalid color: {s}")),
    }
}

/// Parse a GTP vertex such as `D4` or `pass` on a board of `size`.
///
/// Rows count up from the bottom edge, so `A1` is the lower-left corner.
pub fn parse_vertex(s: &str, size: usize) -> Option<Move> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Move::Pass);
    }
    let (letter, digits) = s.split_at_checked(1)?;
    let letter = letter.as_bytes()[0].to_ascii_uppercase();
    let col = COLUMNS.iter().position(|&c| c == letter)?;
    let number: usize = digits.parse().ok()?;
    if col >= size || number == 0 || number > size {
        return None;
    }
    Some(Move::Play((size - number, col)))
}

/// Format a point as a GTP vertex.
///
/// # Panics
///
/// Panics if `col` is 25 or more, past the last GTP column letter.
pub fn format_vertex((row, col): Point, size: usize) -> String {
    format!("{}{}", COLUMNS[col] as char, size - row)
}

/// Board diagram with GTP coordinates along the edges.
fn render_board(board: &Board) -> String {
    let size = board.size();
    let header: String = COLUMNS[..size]
        .iter()
        .map(|&c| format!("{} ", c as char))
        .collect();
    let mut out = format!("   {header}\n");
    for (row, line) in board.to_string().lines().enumerate() {
        out.push_str(&format!("{:>2} {line}\n", size - row));
    }
    out
}
