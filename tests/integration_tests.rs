//! Integration tests for go-minimax
//!
//! These exercise the public API end to end: rules, evaluation, and search.
//! Randomized checks use a seeded `fastrand::Rng` so failures reproduce.

use std::time::Instant;

use go_minimax::board::{Board, Color, Point};
use go_minimax::candidates::candidate_moves;
use go_minimax::eval::evaluate_position;
use go_minimax::group::{count_liberties, find_all_groups, get_group};
use go_minimax::rules::{GameState, MoveError, Winner, check_move, is_legal_move, legal_moves};
use go_minimax::search::Searcher;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

/// A game whose board is `s`, with no captures so far and Black to move.
fn game_from(s: &str) -> GameState {
    let b = board(s);
    let mut game = GameState::new(b.size());
    game.board = b;
    game
}

/// Play `n` random legal moves for alternating colors on an empty board.
fn random_position(size: usize, n: usize, rng: &mut fastrand::Rng) -> GameState {
    let mut game = GameState::new(size);
    for _ in 0..n {
        if game.game_over {
            break;
        }
        let player = game.current_player;
        match rng.choice(legal_moves(&game.board, player)) {
            Some(pt) => {
                game.apply_move(pt, player).expect("legal move must apply");
            }
            None => {
                game.pass();
            }
        }
    }
    game
}

/// Fill each point with a random stone or leave it empty, ignoring legality.
fn random_board(size: usize, rng: &mut fastrand::Rng) -> Board {
    let mut b = Board::new(size);
    let points: Vec<Point> = b.points().collect();
    for pt in points {
        match rng.u8(0..3) {
            0 => b.place(pt, Color::Black),
            1 => b.place(pt, Color::White),
            _ => {}
        }
    }
    b
}

fn searcher(algorithm: &str, depth: u32, candidates: usize) -> Searcher {
    let mut s = Searcher::default();
    s.set_algorithm(algorithm).unwrap();
    s.set_depth(depth).unwrap();
    s.set_max_time_ms(0).unwrap();
    s.set_max_candidates_base(candidates).unwrap();
    s
}

// =============================================================================
// Groups and liberties
// =============================================================================

#[test]
fn test_lone_stone_liberties() {
    let mut b = Board::new(5);
    b.place((2, 2), Color::Black);
    let g = get_group(&b, (2, 2)).unwrap();
    assert_eq!(count_liberties(&b, &g.stones), 4);
}

#[test]
fn test_liberties_match_brute_force() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let b = random_board(6, &mut rng);
        for color in [Color::Black, Color::White] {
            for g in find_all_groups(&b, color) {
                let expected = b
                    .points()
                    .filter(|&pt| b.get(pt).is_none())
                    .filter(|&pt| b.neighbors(pt).any(|n| g.contains(n)))
                    .count();
                assert_eq!(count_liberties(&b, &g.stones), expected, "board:\n{b}");
            }
        }
    }
}

#[test]
fn test_groups_partition_every_stone() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..50 {
        let b = random_board(7, &mut rng);
        for color in [Color::Black, Color::White] {
            let groups = find_all_groups(&b, color);
            let mut seen: Vec<Point> = groups.iter().flat_map(|g| g.stones.clone()).collect();
            let total = seen.len();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), total, "a stone appeared in two groups");
            assert_eq!(total, b.count(color));

            // Every group is exactly what a flood fill from any member finds.
            for g in &groups {
                let mut from_member = get_group(&b, g.stones[0]).unwrap().stones;
                let mut stones = g.stones.clone();
                from_member.sort();
                stones.sort();
                assert_eq!(from_member, stones);
            }
        }
    }
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_occupied_cells_rejected_for_both_colors() {
    let b = board(
        "X O .
         . . .
         . . .",
    );
    for pt in [(0, 0), (0, 1)] {
        for player in [Color::Black, Color::White] {
            assert!(!is_legal_move(&b, pt, player));
            assert_eq!(check_move(&b, pt, player), Err(MoveError::Occupied));
        }
    }
}

#[test]
fn test_suicide_without_capture_is_illegal() {
    let b = board(
        ". X .
         X . X
         . X .",
    );
    assert_eq!(check_move(&b, (1, 1), Color::White), Err(MoveError::Suicide));
    assert!(!legal_moves(&b, Color::White).contains(&(1, 1)));
}

#[test]
fn test_filling_last_liberty_that_captures_is_legal() {
    let mut game = game_from(
        "O X O
         X . X
         O X O",
    );
    assert!(is_legal_move(&game.board, (1, 1), Color::White));
    let captured = game.apply_move((1, 1), Color::White).unwrap();
    assert_eq!(captured, 4);
    assert_eq!(game.captures(Color::White), 4);
    assert_eq!(game.board.count(Color::Black), 0);
    assert_eq!(game.board.get((1, 1)), Some(Color::White));
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_single_stone_capture() {
    let mut game = game_from(
        ". . . . .
         . . O . .
         . O X . .
         . . O . .
         . . . . .",
    );
    let before = game.board.clone();
    let captured = game.apply_move((2, 3), Color::White).unwrap();

    assert_eq!(captured, 1);
    assert_eq!(game.captures(Color::White), 1);
    assert_eq!(game.captures(Color::Black), 0);
    for pt in before.points() {
        let expected = match pt {
            (2, 2) => None,
            (2, 3) => Some(Color::White),
            _ => before.get(pt),
        };
        assert_eq!(game.board.get(pt), expected, "cell {pt:?} changed");
    }
}

#[test]
fn test_one_move_captures_two_groups() {
    let mut game = game_from(
        "O X . X O
         . O . O .
         . . . . .
         . . . . .
         . . . . .",
    );
    assert_eq!(find_all_groups(&game.board, Color::Black).len(), 2);
    assert_eq!(game.apply_move((0, 2), Color::White), Ok(2));
    assert_eq!(game.board.count(Color::Black), 0);
    assert_eq!(game.captures(Color::White), 2);
}

#[test]
fn test_capture_counts_only_increase() {
    let mut rng = fastrand::Rng::with_seed(3);
    let mut game = GameState::new(7);
    let mut last = [0usize; 2];
    for _ in 0..150 {
        let player = game.current_player;
        match rng.choice(legal_moves(&game.board, player)) {
            Some(pt) => {
                game.apply_move(pt, player).unwrap();
            }
            None => break,
        }
        for color in [Color::Black, Color::White] {
            assert!(game.captures(color) >= last[color.index()]);
            last[color.index()] = game.captures(color);
        }
        // Every group on the board has a liberty after a completed move.
        for color in [Color::Black, Color::White] {
            for g in find_all_groups(&game.board, color) {
                assert!(g.liberties(&game.board) > 0, "dead group left:\n{}", game.board);
            }
        }
    }
}

// =============================================================================
// Board copies
// =============================================================================

#[test]
fn test_copies_do_not_alias() {
    let original = game_from(
        "X . .
         . O .
         . . .",
    );
    let mut copy = original.clone();
    copy.apply_move((2, 2), Color::Black).unwrap();
    copy.board.remove((0, 0));
    copy.captured[0] = 9;

    assert_eq!(original.board.get((0, 0)), Some(Color::Black));
    assert_eq!(original.board.get((2, 2)), None);
    assert_eq!(original.captures(Color::Black), 0);
    assert_eq!(original.move_number, 0);
}

// =============================================================================
// Passing and scoring
// =============================================================================

#[test]
fn test_two_passes_end_the_game() {
    let mut game = GameState::new(9);
    game.pass();
    assert_eq!(game.consecutive_passes, 1);
    assert!(!game.game_over);

    game.apply_move((4, 4), Color::White).unwrap();
    assert_eq!(game.consecutive_passes, 0);

    assert!(game.pass().is_none());
    let result = game.pass().expect("second pass ends the game");
    assert!(game.game_over);
    assert_eq!(result.white_score, 1);
    assert_eq!(result.winner, Winner::White);
}

#[test]
fn test_score_is_stones_plus_captures() {
    let mut game = game_from(
        ". . . . .
         . . O . .
         . O X . .
         . . O . .
         X . . . .",
    );
    game.apply_move((2, 3), Color::White).unwrap();
    let result = game.end_game();
    assert_eq!(result.black_score, 1);
    assert_eq!(result.white_score, 4 + 1);
    assert_eq!(result.winner, Winner::White);
    assert_eq!(result.to_string(), "W+4");
}

#[test]
fn test_equal_scores_are_a_draw() {
    let mut game = game_from(
        "X . .
         . . .
         . . O",
    );
    let result = game.end_game();
    assert_eq!(result.black_score, result.white_score);
    assert_eq!(result.winner, Winner::Draw);
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_evaluation_is_antisymmetric() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..20 {
        let game = random_position(9, 20, &mut rng);
        let b = evaluate_position(&game.board, Color::Black);
        let w = evaluate_position(&game.board, Color::White);
        assert!((b + w).abs() < 1e-9, "black {b}, white {w}");
        assert_eq!(b, evaluate_position(&game.board.clone(), Color::Black));
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_expired_deadline_still_returns_a_move() {
    let game = game_from(
        ". . . . .
         . X . . .
         . . O . .
         . . . . .
         . . . . .",
    );
    for alg in ["minimax", "alphabeta"] {
        let mut s = searcher(alg, 3, 15);
        let first = candidate_moves(&game.board, Color::Black, true, s.settings())[0];
        let result = s.search(&game.board, Color::Black, Some(Instant::now()));
        assert_eq!(result.best_move, Some(first), "{alg}");
    }
}

#[test]
fn test_short_budget_stops_search_on_time() {
    let budget_ms = 50;
    let mut rng = fastrand::Rng::with_seed(7);
    let game = random_position(19, 30, &mut rng);
    let player = game.current_player;
    for alg in ["minimax", "alphabeta"] {
        let mut s = searcher(alg, 6, 100);
        s.set_max_time_ms(budget_ms).unwrap();

        let pt = s.find_best_move(&game.board, player);
        let pt = pt.unwrap_or_else(|| panic!("{alg} returned no move"));
        assert!(is_legal_move(&game.board, pt, player), "{alg}");

        let used = s.stats().time_used_ms;
        assert!(used <= budget_ms + 50, "{alg} took {used} ms");
    }
}

#[test]
fn test_search_never_returns_illegal_move() {
    let mut rng = fastrand::Rng::with_seed(19);
    for _ in 0..10 {
        let game = random_position(7, 25, &mut rng);
        let player = game.current_player;
        let mut s = searcher("alphabeta", 2, 10);
        match s.find_best_move(&game.board, player) {
            Some(pt) => assert!(is_legal_move(&game.board, pt, player)),
            None => assert!(legal_moves(&game.board, player).is_empty()),
        }
    }
}

#[test]
fn test_alpha_beta_matches_minimax_score() {
    // A base of 40 keeps every move on a 5x5 board at every depth, so both
    // strategies see the same tree and must agree on its value.
    let mut rng = fastrand::Rng::with_seed(42);
    for depth in [1, 2, 3] {
        for _ in 0..3 {
            let game = random_position(5, 6, &mut rng);
            let player = game.current_player;

            let mut mm = searcher("minimax", depth, 40);
            let mut ab = searcher("alphabeta", depth, 40);
            let m = mm.search(&game.board, player, None);
            let a = ab.search(&game.board, player, None);

            assert_eq!(m.score, a.score, "depth {depth}, board:\n{}", game.board);
            assert!(ab.stats().nodes_evaluated <= mm.stats().nodes_evaluated);
        }
    }
}

#[test]
fn test_engine_captures_stone_in_atari() {
    // White's (1,1) stone has one liberty left at (2,1).
    let game = game_from(
        ". X . . . . .
         X O X . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .",
    );
    let mut s = searcher("alphabeta", 2, 15);
    assert_eq!(s.find_best_move(&game.board, Color::Black), Some((2, 1)));
}

#[test]
fn test_selfplay_game_terminates() {
    let mut s = searcher("alphabeta", 1, 8);
    let mut game = GameState::new(7);
    while !game.game_over && game.move_number < 3 * 49 {
        let player = game.current_player;
        match s.find_best_move(&game.board, player) {
            Some(pt) => {
                game.apply_move(pt, player).unwrap();
            }
            None => {
                game.pass();
            }
        }
    }
    let result = game.end_game();
    assert_eq!(
        result.black_score,
        game.board.count(Color::Black) + game.captures(Color::Black)
    );
}
