//! Sandbox autoplayers.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use crate::core::{AutoPlayer, ProtocolError, SimpleRng};
use crate::corridor::CorridorView;
use crate::types::Move;

/// Picks uniformly among the moves the corridor would accept.
#[derive(Debug, Clone)]
pub struct SeededPlayer {
    rng: SimpleRng,
}

impl SeededPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl AutoPlayer<CorridorView> for SeededPlayer {
    fn get_move(&mut self, view: &CorridorView) -> Option<Move> {
        if view.game_over {
            return None;
        }
        let legal = view.legal_moves();
        self.rng.choose(&legal).copied()
    }
}

/// Always answers `Down`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDown;

impl<V> AutoPlayer<V> for AlwaysDown {
    fn get_move(&mut self, _view: &V) -> Option<Move> {
        Some(Move::Down)
    }
}

/// Replays a fixed list of moves, then resigns.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Parse a script of move tags separated by whitespace or commas.
    ///
    /// ```
    /// use tetris_cupkit_sandbox::ScriptedPlayer;
    ///
    /// let player = ScriptedPlayer::from_script("left, left rotateCw\ndown").unwrap();
    /// assert_eq!(player.remaining(), 4);
    /// assert!(ScriptedPlayer::from_script("left hold").is_err());
    /// ```
    pub fn from_script(script: &str) -> Result<Self, ProtocolError> {
        let moves = script
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tag| !tag.is_empty())
            .map(str::parse::<Move>)
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Self { moves })
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves.into()
    }
}

impl<V> AutoPlayer<V> for ScriptedPlayer {
    fn get_move(&mut self, _view: &V) -> Option<Move> {
        self.moves.pop_front()
    }
}

/// Sleeps before every answer.
#[derive(Debug, Clone, Copy)]
pub struct SlowPlayer {
    delay: Duration,
    answer: Move,
}

impl SlowPlayer {
    pub fn new(delay: Duration, answer: Move) -> Self {
        Self { delay, answer }
    }
}

impl<V> AutoPlayer<V> for SlowPlayer {
    fn get_move(&mut self, _view: &V) -> Option<Move> {
        thread::sleep(self.delay);
        Some(self.answer)
    }
}

/// Never answers: the decision call blocks its thread forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct StallingPlayer;

impl<V> AutoPlayer<V> for StallingPlayer {
    fn get_move(&mut self, _view: &V) -> Option<Move> {
        loop {
            thread::park();
        }
    }
}
