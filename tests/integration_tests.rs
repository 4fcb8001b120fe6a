//! Integration tests for hex-rollout
//!
//! These tests drive the public API the way the console does: stones go
//! through `Game`, the computer moves through `MoveEvaluator`.

use hex_rollout::board::{Color, Point};
use hex_rollout::error::HexError;
use hex_rollout::game::Game;
use hex_rollout::rollout::{best_candidate, CandidateScore, MoveEvaluator};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Build a game with the given Blue and Red stones already played.
fn setpos(size: usize, blue: &[Point], red: &[Point]) -> Game {
    let mut game = Game::new(size);
    for &p in blue {
        game.play(p, Color::Blue).unwrap();
    }
    for &p in red {
        game.play(p, Color::Red).unwrap();
    }
    game
}

fn evaluator() -> MoveEvaluator {
    MoveEvaluator::with_simulations(200)
}

// =============================================================================
// Board and connectivity properties
// =============================================================================

#[test]
fn test_open_set_shrinks_by_one_per_move() {
    let mut rng = fastrand::Rng::with_seed(99);
    let mut game = Game::new(6);
    let mut color = Color::Red;
    for expected in (0..36).rev() {
        let open = game.board().open_cells();
        let idx = open[rng.usize(..open.len())];
        game.play(game.board().point(idx), color).unwrap();
        assert_eq!(game.empty_count(), expected);
        assert!(!game.board().open_cells().contains(&idx));
        color = color.opponent();
    }
    assert!(game.board().is_full());
}

#[test]
fn test_open_set_matches_empty_cells() {
    let game = setpos(4, &[(0, 0), (3, 3)], &[(1, 2), (2, 1)]);
    let board = game.board();
    let empty: Vec<usize> = (0..16).filter(|&i| board.get_index(i).is_none()).collect();
    assert_eq!(board.open_cells(), empty.as_slice());
}

#[test]
fn test_find_is_idempotent_after_every_move() {
    let mut rng = fastrand::Rng::with_seed(1234);
    let mut game = Game::new(7);
    let mut color = Color::Blue;
    while game.empty_count() > 0 {
        let open = game.board().open_cells();
        let idx = open[rng.usize(..open.len())];
        game.play(game.board().point(idx), color).unwrap();
        let mut tracker = game.tracker().clone();
        for x in 0..49 {
            let root = tracker.find(x);
            assert_eq!(tracker.find(root), root);
        }
        color = color.opponent();
    }
}

#[test]
fn test_connect_stones_twice_keeps_roots() {
    let mut game = setpos(5, &[(2, 0), (2, 1), (1, 2), (1, 3)], &[]);
    let before: Vec<usize> = (0..25).map(|x| game.tracker().root_of(x)).collect();
    for p in [(2, 0), (2, 1), (1, 2), (1, 3)] {
        game.connect_stones(p);
    }
    let after: Vec<usize> = (0..25).map(|x| game.tracker().root_of(x)).collect();
    assert_eq!(before, after);
}

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_no_winner_on_empty_board() {
    for size in 1..12 {
        let mut game = Game::new(size);
        assert!(!game.has_won(Color::Blue));
        assert!(!game.has_won(Color::Red));
    }
}

#[test]
fn test_single_cell_board_wins_immediately() {
    let mut game = Game::new(1);
    game.play((0, 0), Color::Red).unwrap();
    assert!(game.has_won(Color::Red));
    assert!(!game.has_won(Color::Blue));
}

#[test]
fn test_two_by_two_board() {
    let mut game = setpos(2, &[(0, 0), (1, 0)], &[]);
    assert!(!game.has_won(Color::Blue));

    let mut game = setpos(2, &[(0, 0), (0, 1)], &[]);
    assert!(game.has_won(Color::Blue));
}

#[test]
fn test_long_winding_chain() {
    // A Blue path that doubles back through row 0 before reaching the right
    // edge; the chain root ends up nowhere special.
    let path = [
        (4, 0),
        (3, 0),
        (2, 1),
        (1, 1),
        (0, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (3, 3),
        (3, 4),
    ];
    let mut game = Game::new(5);
    for (i, &p) in path.iter().enumerate() {
        game.play(p, Color::Blue).unwrap();
        assert_eq!(game.has_won(Color::Blue), i == path.len() - 1, "after {p:?}");
    }
}

#[test]
fn test_chain_joined_from_both_ends() {
    let mut game = setpos(5, &[], &[(0, 2), (1, 2), (3, 1), (4, 1)]);
    assert!(!game.has_won(Color::Red));
    game.play((2, 3), Color::Red).unwrap();
    assert!(!game.has_won(Color::Red));
    // (2,1) touches (1,2) via up-right and (3,1) via down.
    game.play((2, 1), Color::Red).unwrap();
    assert!(game.has_won(Color::Red));
}

// =============================================================================
// Move evaluation
// =============================================================================

#[test]
fn test_choose_move_is_deterministic_with_seed() {
    let game = setpos(5, &[(2, 2), (1, 3)], &[(2, 1)]);
    let pick = |seed: u64| {
        let mut g = game.clone();
        let mut rng = fastrand::Rng::with_seed(seed);
        evaluator().choose_move(&mut g, Color::Red, &mut rng).unwrap()
    };
    let first = pick(17);
    for _ in 0..3 {
        assert_eq!(pick(17), first);
    }

    let scores = |seed: u64| {
        let mut rng = fastrand::Rng::with_seed(seed);
        evaluator().evaluate(&game, Color::Red, &mut rng).unwrap()
    };
    assert_eq!(scores(3), scores(3));
}

#[test]
fn test_choose_move_plays_on_the_session() {
    let mut game = setpos(4, &[(1, 1)], &[]);
    let mut rng = fastrand::Rng::with_seed(8);
    let index = evaluator().choose_move(&mut game, Color::Red, &mut rng).unwrap();
    assert_eq!(game.board().get_index(index), Some(Color::Red));
    assert_eq!(game.empty_count(), 14);
    assert!(!game.board().open_cells().contains(&index));
}

#[test]
fn test_takes_the_winning_move() {
    // Red (0,1)-(1,1) needs one more stone on the bottom row. (2,0) and
    // (2,1) both win outright; every other cell can still lose, so the tie
    // between the two winners goes to the larger index, (2,1) = 7.
    let mut game = setpos(3, &[(1, 0), (1, 2)], &[(0, 1), (1, 1)]);
    let mut rng = fastrand::Rng::with_seed(4);
    let scores = evaluator().evaluate(&game, Color::Red, &mut rng).unwrap();
    let rate = |idx: usize| scores.iter().find(|s| s.index == idx).unwrap().win_rate;
    assert_eq!(rate(6), 1.0);
    assert_eq!(rate(7), 1.0);
    assert!(rate(0) < 1.0);

    let index = evaluator().choose_move(&mut game, Color::Red, &mut rng).unwrap();
    assert_eq!(index, 7);
    assert!(game.has_won(Color::Red));
}

#[test]
fn test_tie_on_real_board_picks_largest_index() {
    // Red already spans the board, so every candidate scores 1.0.
    let game = setpos(3, &[(0, 0), (1, 0), (2, 0)], &[(0, 1), (1, 1), (2, 1)]);
    let mut rng = fastrand::Rng::with_seed(0);
    let scores = evaluator().evaluate(&game, Color::Red, &mut rng).unwrap();
    assert!(scores.iter().all(|s| s.win_rate == 1.0));
    let mut g = game.clone();
    assert_eq!(evaluator().choose_move(&mut g, Color::Red, &mut rng), Ok(8));

    // Blue already spans the board, so every candidate scores 0.0.
    let game = setpos(3, &[(1, 0), (1, 1), (1, 2)], &[(0, 0)]);
    let scores = evaluator().evaluate(&game, Color::Red, &mut rng).unwrap();
    assert!(scores.iter().all(|s| s.win_rate == 0.0));
    let mut g = game.clone();
    assert_eq!(evaluator().choose_move(&mut g, Color::Red, &mut rng), Ok(8));
}

#[test]
fn test_tie_break_on_mocked_scores() {
    let scores = vec![
        CandidateScore { win_rate: 0.25, index: 9 },
        CandidateScore { win_rate: 0.75, index: 3 },
        CandidateScore { win_rate: 0.75, index: 12 },
        CandidateScore { win_rate: 0.5, index: 20 },
    ];
    assert_eq!(best_candidate(&scores).map(|s| s.index), Some(12));
}

#[test]
fn test_choose_move_on_full_board_fails() {
    let mut game = setpos(2, &[(0, 0), (1, 1)], &[(0, 1), (1, 0)]);
    let before = game.clone();
    let mut rng = fastrand::Rng::with_seed(0);
    assert_eq!(
        evaluator().choose_move(&mut game, Color::Red, &mut rng),
        Err(HexError::BoardFull)
    );
    assert_eq!(game, before);
}

#[test]
fn test_candidate_merges_do_not_leak() {
    // Red (0,1) and (2,1) are joined only through (1,1). Trying (1,1) as a
    // candidate merges them; if that merge survived into later candidates,
    // (2,0) and (2,2) would win every rollout instead of about half.
    let game = setpos(3, &[(1, 0), (1, 2)], &[(0, 1), (2, 1)]);
    let mut rng = fastrand::Rng::with_seed(21);
    let scores = evaluator().evaluate(&game, Color::Red, &mut rng).unwrap();
    let rate = |idx: usize| scores.iter().find(|s| s.index == idx).unwrap().win_rate;
    assert_eq!(rate(4), 1.0);
    assert!(rate(6) < 0.8, "rate(6) = {}", rate(6));
    assert!(rate(8) < 0.8, "rate(8) = {}", rate(8));
    assert!(rate(6) > 0.2 && rate(8) > 0.2);
}

#[test]
fn test_self_play_reaches_a_winner() {
    let mut game = Game::new(4);
    let evaluator = MoveEvaluator::with_simulations(50);
    let mut rng = fastrand::Rng::with_seed(2021);
    let mut color = Color::Blue;
    while game.winner().is_none() {
        evaluator.choose_move(&mut game, color, &mut rng).unwrap();
        color = color.opponent();
    }
    assert!(game.has_won(Color::Blue) ^ game.has_won(Color::Red));
}
