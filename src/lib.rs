//! Hex-Rollout: a Hex engine with a flat Monte Carlo opponent.
//!
//! Two players alternately place stones on an NxN rhombus of hexagons.
//! Blue tries to join the left and right columns, Red the top and bottom
//! rows. The computer picks its move by filling the rest of the board at
//! random many times for every candidate cell and playing the candidate
//! that won most often.
//!
//! ## Modules
//!
//! - [`constants`] - Board size defaults and rollout parameters
//! - [`error`] - Error type
//! - [`board`] - Cells, neighbours and the set of empty cells
//! - [`union_find`] - Connectivity tracking with the edge-priority merge
//! - [`game`] - Game session and win detection
//! - [`rollout`] - Rollout-based move evaluation
//! - [`console`] - Interactive text game
//!
//! ## Example
//!
//! ```
//! use hex_rollout::board::Color;
//! use hex_rollout::game::Game;
//! use hex_rollout::rollout::MoveEvaluator;
//!
//! let mut game = Game::new(5);
//! game.play((2, 2), Color::Blue).unwrap();
//!
//! let evaluator = MoveEvaluator::with_simulations(50);
//! let mut rng = fastrand::Rng::with_seed(1);
//! let index = evaluator.choose_move(&mut game, Color::Red, &mut rng).unwrap();
//! assert_eq!(game.board().get_index(index), Some(Color::Red));
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod rollout;
pub mod union_find;
