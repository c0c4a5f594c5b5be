//! Validity harness - drives a bounded number of moves and fails on the first
//! move the game rejects.
//!
//! There is no timing here: decisions run inline on the calling thread. Put an
//! outer timeout around the whole run (the test framework's) if the player
//! might not terminate.

use tracing::{debug, info};

use crate::core::{apply_move, AutoPlayer, ProtocolError, TetrisFactory, TetrisGame};
use crate::report::ValidityReport;
use crate::types::DEFAULT_VALIDITY_MAX_STEPS;

#[derive(Debug, Clone)]
pub struct ValidityHarness<F> {
    factory: F,
    max_steps: u64,
}

impl<F: TetrisFactory> ValidityHarness<F> {
    pub fn new(factory: F) -> Self {
        Self::with_max_steps(factory, DEFAULT_VALIDITY_MAX_STEPS)
    }

    pub fn with_max_steps(factory: F, max_steps: u64) -> Self {
        Self { factory, max_steps }
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Build a game and player from `seed` and drive them.
    pub fn run(&self, seed: u64) -> Result<ValidityReport, ProtocolError> {
        let mut game = self.factory.create_game(seed);
        let mut player = self.factory.create_player(&game.view());
        // Bring in the first piece.
        game.step();

        let mut report = drive(&mut game, &mut player, self.max_steps)?;
        report.seed = Some(seed);
        info!(
            seed,
            steps = report.steps,
            points = report.points,
            resigned = report.resigned,
            "validity run passed"
        );
        Ok(report)
    }

    /// Run every seed, stopping at the first failure.
    pub fn run_all(&self, seeds: &[u64]) -> Result<Vec<ValidityReport>, ProtocolError> {
        seeds.iter().map(|&seed| self.run(seed)).collect()
    }
}

/// Drive an already started game for at most `max_steps` moves.
///
/// Every applied move counts, whatever its kind. A `None` answer ends the game
/// and the run; a rejected shift or rotation is a protocol error.
pub fn drive<G, P>(
    game: &mut G,
    player: &mut P,
    max_steps: u64,
) -> Result<ValidityReport, ProtocolError>
where
    G: TetrisGame,
    P: AutoPlayer<G::View> + ?Sized,
{
    let mut steps: u64 = 0;
    let mut resigned = false;

    while !game.is_game_over() && steps < max_steps {
        match player.get_move(&game.view()) {
            None => {
                debug!(steps, "player resigned");
                game.set_game_over();
                resigned = true;
            }
            Some(mv) => {
                if !apply_move(game, mv) {
                    return Err(ProtocolError::InvalidMove {
                        mv,
                        decision: steps + 1,
                    });
                }
                steps += 1;
            }
        }
    }

    Ok(ValidityReport {
        seed: None,
        steps,
        points: game.points(),
        resigned,
        game_over: game.is_game_over(),
    })
}
