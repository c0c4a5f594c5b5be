//! Sandbox collaborators - deterministic stand-ins for a game engine and autoplayers
//!
//! The harnesses only need something that honours the [`TetrisGame`] and
//! [`AutoPlayer`] contracts. This crate provides the smallest such things,
//! with state that is easy to reason about in tests:
//!
//! - [`CorridorGame`]: a single block sliding down a walled corridor. Shifts
//!   stop at the walls, turning the block is rejected when it would not fit,
//!   and the game ends once locked blocks fill the corridor.
//! - [`CountdownGame`]: every operation succeeds; the game ends after a fixed
//!   number of steps.
//! - Players in [`players`]: seeded random legal moves, always-down,
//!   scripted, slow, and never-returning.
//! - [`SandboxFactory`]: builds a corridor game and the chosen player from a
//!   seed, for the harnesses and the `cupkit` binary.
//!
//! Equal seeds give equal games and equal seeded players, so every playout is
//! reproducible.
//!
//! [`TetrisGame`]: tetris_cupkit_core::TetrisGame
//! [`AutoPlayer`]: tetris_cupkit_core::AutoPlayer

pub mod corridor;
pub mod countdown;
pub mod factory;
pub mod players;

pub use tetris_cupkit_core as core;
pub use tetris_cupkit_types as types;

pub use corridor::{Block, CorridorGame, CorridorView};
pub use countdown::CountdownGame;
pub use factory::{PlayerKind, SandboxFactory};
pub use players::{AlwaysDown, ScriptedPlayer, SeededPlayer, SlowPlayer, StallingPlayer};
