use std::fmt;
use std::str::FromStr;

use crate::core::{AutoPlayer, ProtocolError, TetrisFactory};
use crate::corridor::{CorridorGame, CorridorView, CORRIDOR_HEIGHT, CORRIDOR_WIDTH};
use crate::players::{AlwaysDown, ScriptedPlayer, SeededPlayer, StallingPlayer};
use crate::types::Move;

/// Which sandbox player the factory builds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerKind {
    /// [`SeededPlayer`] seeded with the game seed
    #[default]
    Seeded,
    AlwaysDown,
    Stalling,
    Scripted(Vec<Move>),
}

impl PlayerKind {
    /// A scripted player from a move script, see [`ScriptedPlayer::from_script`].
    pub fn scripted(script: &str) -> Result<Self, ProtocolError> {
        Ok(PlayerKind::Scripted(ScriptedPlayer::from_script(script)?.into_moves()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Seeded => "seeded",
            PlayerKind::AlwaysDown => "down",
            PlayerKind::Stalling => "stall",
            PlayerKind::Scripted(_) => "script",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    /// Parse a player name. Scripts are built with [`PlayerKind::Scripted`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "seeded" | "random" => Ok(PlayerKind::Seeded),
            "down" | "always-down" => Ok(PlayerKind::AlwaysDown),
            "stall" | "stalling" => Ok(PlayerKind::Stalling),
            other => Err(format!("unknown sandbox player: {}", other)),
        }
    }
}

/// Builds corridor games and sandbox players.
#[derive(Debug, Clone)]
pub struct SandboxFactory {
    pub width: u8,
    pub height: u8,
    pub player: PlayerKind,
}

impl SandboxFactory {
    pub fn new(player: PlayerKind) -> Self {
        Self {
            player,
            ..Self::default()
        }
    }
}

impl Default for SandboxFactory {
    fn default() -> Self {
        Self {
            width: CORRIDOR_WIDTH,
            height: CORRIDOR_HEIGHT,
            player: PlayerKind::default(),
        }
    }
}

impl TetrisFactory for SandboxFactory {
    type Game = CorridorGame;
    type Player = Box<dyn AutoPlayer<CorridorView>>;

    fn create_game(&self, seed: u64) -> CorridorGame {
        CorridorGame::with_size(seed, self.width, self.height)
    }

    fn create_player(&self, view: &CorridorView) -> Self::Player {
        match &self.player {
            PlayerKind::Seeded => Box::new(SeededPlayer::new(view.seed)),
            PlayerKind::AlwaysDown => Box::new(AlwaysDown),
            PlayerKind::Stalling => Box::new(StallingPlayer),
            PlayerKind::Scripted(moves) => Box::new(ScriptedPlayer::new(moves.iter().copied())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TetrisGame;

    #[test]
    fn test_player_kind_from_str() {
        assert_eq!("seeded".parse(), Ok(PlayerKind::Seeded));
        assert_eq!("DOWN".parse(), Ok(PlayerKind::AlwaysDown));
        assert_eq!("stall".parse(), Ok(PlayerKind::Stalling));
        assert!("script".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_factory_is_deterministic() {
        let factory = SandboxFactory::default();
        let mut a = factory.create_game(9315);
        let mut b = factory.create_game(9315);
        a.step();
        b.step();
        assert_eq!(a.view(), b.view());

        let mut pa = factory.create_player(&a.view());
        let mut pb = factory.create_player(&b.view());
        for _ in 0..20 {
            assert_eq!(pa.get_move(&a.view()), pb.get_move(&b.view()));
        }
    }

    #[test]
    fn test_scripted_kind_from_script() {
        assert_eq!(
            PlayerKind::scripted("left,down").unwrap(),
            PlayerKind::Scripted(vec![Move::Left, Move::Down])
        );
        assert!(PlayerKind::scripted("left drop").is_err());
    }

    #[test]
    fn test_scripted_kind_replays_script() {
        let factory = SandboxFactory::new(PlayerKind::Scripted(vec![Move::Left]));
        let game = factory.create_game(1);
        let mut player = factory.create_player(&game.view());
        assert_eq!(player.get_move(&game.view()), Some(Move::Left));
        assert_eq!(player.get_move(&game.view()), None);
    }
}
