//! Collaborator contract - the interfaces the harnesses drive
//!
//! The harnesses never know which Tetris engine or which autoplayer they are
//! running. They only see the traits in this crate:
//!
//! - [`TetrisGame`]: a mutable game that can step, shift, rotate, end, and
//!   report its points and a read-only view of itself
//! - [`AutoPlayer`]: the decision function asked for one [`Move`] at a time
//! - [`TetrisFactory`]: deterministic construction of both from a seed
//!
//! On top of the contract it provides the pieces every harness shares:
//!
//! - [`dispatch`]: the move-to-operation mapping
//! - [`error`]: protocol violations that abort a harness
//! - [`rng`]: the deterministic seeder used for batches of playouts
//!
//! # Example
//!
//! ```
//! use tetris_cupkit_core::{apply_move, TetrisGame};
//! use tetris_cupkit_types::Move;
//!
//! struct Ticker {
//!     ticks: u32,
//! }
//!
//! impl TetrisGame for Ticker {
//!     type View = u32;
//!
//!     fn step(&mut self) {
//!         self.ticks += 1;
//!     }
//!     fn move_left(&mut self) -> bool { false }
//!     fn move_right(&mut self) -> bool { false }
//!     fn rotate_clockwise(&mut self) -> bool { false }
//!     fn rotate_counter_clockwise(&mut self) -> bool { false }
//!     fn is_game_over(&self) -> bool { false }
//!     fn set_game_over(&mut self) {}
//!     fn points(&self) -> u64 { 0 }
//!     fn view(&self) -> u32 { self.ticks }
//! }
//!
//! let mut game = Ticker { ticks: 0 };
//! assert!(apply_move(&mut game, Move::Down));
//! assert!(!apply_move(&mut game, Move::Left));
//! assert_eq!(game.view(), 1);
//! ```

pub mod dispatch;
pub mod error;
pub mod game;
pub mod rng;

pub use tetris_cupkit_types as types;

// Re-export commonly used types for convenience
pub use dispatch::apply_move;
pub use error::ProtocolError;
pub use game::{player_fn, AutoPlayer, FnPlayer, TetrisFactory, TetrisGame, ViewOf};
pub use rng::SimpleRng;
pub use types::Move;
