//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types passed between the harnesses and
//! the pluggable collaborators (game engine and autoplayer). Everything here is
//! plain data with no runtime dependencies, so it can be used by the harness,
//! by test doubles, and by external engines alike.
//!
//! # Moves
//!
//! An autoplayer answers every decision request with exactly one [`Move`]
//! (or with nothing, which ends the game voluntarily):
//!
//! | Move | Game operation | Counts as a step for the timed supervisor |
//! |------|----------------|-------------------------------------------|
//! | `Down` | `step()` | yes |
//! | `Left` | `move_left()` | no |
//! | `Right` | `move_right()` | no |
//! | `RotateCw` | `rotate_clockwise()` | no |
//! | `RotateCcw` | `rotate_counter_clockwise()` | no |
//!
//! # Tournament Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_STEP_LIMIT` | 5000 | Max `Down` moves per playout |
//! | `DEFAULT_TOTAL_THINK_TIME_MS` | 50000 | Cumulative think budget per playout |
//! | `DEFAULT_VALIDITY_MAX_STEPS` | 100 | Moves driven by the validity harness |
//! | `DEFAULT_PLAYOUTS` | 5 | Playouts per sampler batch |
//!
//! # Examples
//!
//! ```
//! use tetris_cupkit_types::{Move, DEFAULT_STEP_LIMIT};
//!
//! let mv: Move = "rotateCw".parse().unwrap();
//! assert_eq!(mv, Move::RotateCw);
//! assert!(!mv.counts_as_step());
//! assert!(Move::Down.counts_as_step());
//!
//! assert!("teleport".parse::<Move>().is_err());
//! assert_eq!(DEFAULT_STEP_LIMIT, 5000);
//! ```

use std::fmt;
use std::str::FromStr;

/// Maximum number of `Down` moves in one timed playout.
pub const DEFAULT_STEP_LIMIT: u64 = 5000;

/// Cumulative think-time budget for one timed playout (50 seconds).
pub const DEFAULT_TOTAL_THINK_TIME_MS: u64 = 50 * 1000;

/// Number of moves the validity harness drives per game.
pub const DEFAULT_VALIDITY_MAX_STEPS: u64 = 100;

/// Number of playouts in one sampler batch.
pub const DEFAULT_PLAYOUTS: usize = 5;

/// Seeds of the baseline validity fixtures.
pub const VALIDITY_FIXTURE_SEEDS: [u64; 2] = [6646813, 9315];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tournament_limit_defaults() {
        assert_eq!(DEFAULT_STEP_LIMIT, 5000);
        assert_eq!(DEFAULT_TOTAL_THINK_TIME_MS, 50_000);
        assert_eq!(DEFAULT_VALIDITY_MAX_STEPS, 100);
        assert_eq!(DEFAULT_PLAYOUTS, 5);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("DOWN".parse::<Move>(), Ok(Move::Down));
        assert_eq!("Left".parse::<Move>(), Ok(Move::Left));
        assert_eq!("rotateccw".parse::<Move>(), Ok(Move::RotateCcw));
        assert_eq!("ROTATE_CW".parse::<Move>(), Ok(Move::RotateCw));
        assert_eq!("ccw".parse::<Move>(), Ok(Move::RotateCcw));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" right\n".parse::<Move>(), Ok(Move::Right));
    }

    #[test]
    fn unknown_tag_keeps_input() {
        let err = "hold".parse::<Move>().unwrap_err();
        assert_eq!(err.input(), "hold");
        assert_eq!(err.to_string(), "Unknown move kind: hold");
    }

    #[test]
    fn as_str_parses_back() {
        for mv in Move::ALL {
            assert_eq!(mv.as_str().parse::<Move>(), Ok(mv));
        }
    }
}

/// A single autoplayer decision.
///
/// The set is closed: dispatch over it is an exhaustive `match`, so adding a
/// move kind is a compile-time-checked change in every harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Down,
    Left,
    Right,
    RotateCw,
    RotateCcw,
}

impl Move {
    /// Every move kind, in declaration order.
    pub const ALL: [Move; 5] = [
        Move::Down,
        Move::Left,
        Move::Right,
        Move::RotateCw,
        Move::RotateCcw,
    ];

    /// Convert to string (protocol spelling)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_cupkit_types::Move;
    ///
    /// assert_eq!(Move::Down.as_str(), "down");
    /// assert_eq!(Move::RotateCcw.as_str(), "rotateCcw");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
            Move::RotateCw => "rotateCw",
            Move::RotateCcw => "rotateCcw",
        }
    }

    /// Whether the move advances gravity and so consumes the step budget.
    pub fn counts_as_step(&self) -> bool {
        matches!(self, Move::Down)
    }

    /// Whether the game may reject the move (lateral shifts and rotations).
    pub fn can_be_rejected(&self) -> bool {
        !self.counts_as_step()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse a move tag (case-insensitive, `_`/`-` ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "down" => Ok(Move::Down),
            "left" => Ok(Move::Left),
            "right" => Ok(Move::Right),
            "rotatecw" | "cw" => Ok(Move::RotateCw),
            "rotateccw" | "ccw" => Ok(Move::RotateCcw),
            _ => Err(MoveParseError {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// An unrecognised move tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveParseError {
    input: String,
}

impl MoveParseError {
    /// The rejected tag, trimmed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown move kind: {}", self.input)
    }
}

impl std::error::Error for MoveParseError {}
