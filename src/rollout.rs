//! Flat Monte Carlo move evaluation.
//!
//! Every empty cell is tried as the next move. For each candidate the rest
//! of the board is filled at random many times (a rollout), with the
//! remaining cells split as evenly as possible between the two colors, and
//! the fraction of filled boards that the mover wins becomes the score.
//! The candidate with the best score is played.
//!
//! No search tree is built: rollouts never look further than the one
//! candidate move, and all work happens on private copies of the game.

use std::iter;

use log::{debug, info};

use crate::board::Color;
use crate::constants::N_SIMS;
use crate::error::HexError;
use crate::game::{str_point, Game};

/// Rollout result for one candidate move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CandidateScore {
    /// Fraction of rollouts won, in `[0, 1]`.
    pub win_rate: f64,
    /// Flattened index of the candidate cell.
    pub index: usize,
}

/// Chooses moves by flat rollout evaluation.
#[derive(Clone, Debug)]
pub struct MoveEvaluator {
    n_sims: usize,
}

impl Default for MoveEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveEvaluator {
    /// Evaluator playing [`N_SIMS`] rollouts per candidate.
    pub fn new() -> Self {
        Self::with_simulations(N_SIMS)
    }

    /// Evaluator playing `n_sims` rollouts per candidate.
    pub fn with_simulations(n_sims: usize) -> Self {
        assert!(n_sims > 0, "at least one rollout per candidate is required");
        Self { n_sims }
    }

    pub fn simulations(&self) -> usize {
        self.n_sims
    }

    /// Scores every empty cell of `game` as a move for `color`, in open-set
    /// order. `game` itself is left untouched.
    pub fn evaluate(
        &self,
        game: &Game,
        color: Color,
        rng: &mut fastrand::Rng,
    ) -> Result<Vec<CandidateScore>, HexError> {
        let candidates = game.board().open_cells().to_vec();
        if candidates.is_empty() {
            return Err(HexError::BoardFull);
        }

        // The mover already owns the candidate cell, so it gets the larger
        // half of what is left.
        let remaining = candidates.len() - 1;
        let opponent_plays = remaining / 2;
        let own_plays = remaining - opponent_plays;
        let mut tokens: Vec<Color> = iter::repeat_n(color.opponent(), opponent_plays)
            .chain(iter::repeat_n(color, own_plays))
            .collect();

        let mut fixed = game.clone();
        let mut scratch = game.clone();
        let mut scores = Vec::with_capacity(candidates.len());

        for &cell in &candidates {
            fixed.tracker_mut().restore_from(game.tracker());
            fixed.board_mut().mark(cell, Some(color));
            fixed.connect_index(cell);
            scratch.board_mut().mark(cell, Some(color));

            let targets = rollout_targets(&candidates, cell);
            debug_assert_eq!(targets.len(), tokens.len());

            let mut wins = 0usize;
            for _ in 0..self.n_sims {
                if play_out(&fixed, &mut scratch, &targets, &mut tokens, color, rng) {
                    wins += 1;
                }
            }

            let score = CandidateScore {
                win_rate: wins as f64 / self.n_sims as f64,
                index: cell,
            };
            debug!(
                "candidate {} win rate {:.3}",
                str_point(game.board().point(cell)),
                score.win_rate
            );
            scores.push(score);

            fixed.board_mut().mark(cell, None);
            scratch.board_mut().mark(cell, None);
        }

        Ok(scores)
    }

    /// Picks the best move for `color`, plays it on `game` and returns its
    /// flattened index. Fails with [`HexError::BoardFull`] when no cell is
    /// empty.
    pub fn choose_move(
        &self,
        game: &mut Game,
        color: Color,
        rng: &mut fastrand::Rng,
    ) -> Result<usize, HexError> {
        let scores = self.evaluate(game, color, rng)?;
        let best = best_candidate(&scores).ok_or(HexError::BoardFull)?;
        let point = game.board().point(best.index);
        game.play(point, color)?;
        info!(
            "{color} chooses {} (win rate {:.3} over {} rollouts)",
            str_point(point),
            best.win_rate,
            self.n_sims
        );
        Ok(best.index)
    }
}

/// Highest win rate; among equal win rates the larger cell index.
pub fn best_candidate(scores: &[CandidateScore]) -> Option<CandidateScore> {
    scores.iter().copied().max_by(|a, b| {
        a.win_rate
            .total_cmp(&b.win_rate)
            .then(a.index.cmp(&b.index))
    })
}

/// Cells a rollout fills once `fixed` is taken: every candidate but `fixed`,
/// in the same order.
fn rollout_targets(candidates: &[usize], fixed: usize) -> Vec<usize> {
    candidates.iter().copied().filter(|&c| c != fixed).collect()
}

/// One random completion of the board.
///
/// `scratch` starts from `fixed`'s connectivity, receives the shuffled
/// `tokens` on `targets` one by one (each connected right away) and is
/// checked for a `color` win. The touched cells are emptied again before
/// returning; the connectivity is simply overwritten by the next rollout.
fn play_out(
    fixed: &Game,
    scratch: &mut Game,
    targets: &[usize],
    tokens: &mut [Color],
    color: Color,
    rng: &mut fastrand::Rng,
) -> bool {
    scratch.tracker_mut().restore_from(fixed.tracker());
    rng.shuffle(tokens);
    for (&idx, &token) in targets.iter().zip(tokens.iter()) {
        scratch.board_mut().mark(idx, Some(token));
        scratch.connect_index(idx);
    }
    let won = scratch.has_won(color);
    for &idx in targets {
        scratch.board_mut().mark(idx, None);
    }
    won
}
