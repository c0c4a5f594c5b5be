//! Tetris cupkit (workspace facade crate).
//!
//! Re-exports the harness crates under one name so the `cupkit` binary,
//! integration tests and benches share a single import path. The
//! implementation lives in dedicated crates under `crates/`.

pub use tetris_cupkit_core as core;
pub use tetris_cupkit_harness as harness;
pub use tetris_cupkit_sandbox as sandbox;
pub use tetris_cupkit_types as types;
