//! Harnesses that drive an autoplayer against a Tetris game
//!
//! - [`ValidityHarness`]: a bounded number of moves, run inline; the first
//!   move the game rejects is a hard failure
//! - [`TimedPlayoutSupervisor`]: a full playout under a step cap and a
//!   cumulative think-time budget, each decision isolated on its own worker
//!   thread so a hung player cannot hang the supervisor
//! - [`Sampler`]: batches of seeded timed playouts with a summary
//!
//! Graceful endings are reported as a [`Termination`]; protocol violations
//! are returned as [`ProtocolError`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tetris_cupkit_harness::{SupervisorConfig, Termination, TimedPlayoutSupervisor};
//! use tetris_cupkit_harness::core::player_fn;
//! use tetris_cupkit_harness::types::Move;
//! # use tetris_cupkit_harness::core::TetrisGame;
//! # struct Drop3 { ticks: u64 }
//! # impl TetrisGame for Drop3 {
//! #     type View = u64;
//! #     fn step(&mut self) { self.ticks += 1; }
//! #     fn move_left(&mut self) -> bool { true }
//! #     fn move_right(&mut self) -> bool { true }
//! #     fn rotate_clockwise(&mut self) -> bool { true }
//! #     fn rotate_counter_clockwise(&mut self) -> bool { true }
//! #     fn is_game_over(&self) -> bool { self.ticks >= 3 }
//! #     fn set_game_over(&mut self) { self.ticks = 3; }
//! #     fn points(&self) -> u64 { self.ticks }
//! #     fn view(&self) -> u64 { self.ticks }
//! # }
//!
//! let config = SupervisorConfig::default().with_total_think_time(Duration::from_secs(5));
//! let mut supervisor = TimedPlayoutSupervisor::new(config);
//!
//! let mut game = Drop3 { ticks: 0 };
//! let result = supervisor
//!     .playout(&mut game, player_fn(|_: &u64| Some(Move::Down)))
//!     .unwrap();
//! assert_eq!(result.steps, 3);
//! assert_eq!(result.termination, Termination::GameOver);
//! ```

pub mod config;
pub mod report;
pub mod sampler;
pub mod supervisor;
pub mod validity;
pub mod worker;

pub use tetris_cupkit_core as core;
pub use tetris_cupkit_types as types;

pub use crate::core::ProtocolError;
pub use config::{SamplerConfig, SupervisorConfig, WaitPolicy};
pub use report::{PlayoutResult, Termination, ValidityReport};
pub use sampler::{SampleSummary, Sampler};
pub use supervisor::TimedPlayoutSupervisor;
pub use validity::{drive, ValidityHarness};
pub use worker::{request_decision, Decision};
