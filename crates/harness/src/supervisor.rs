//! Timed playout supervisor.
//!
//! Runs one game under two budgets: a cap on `Down` steps and a cumulative
//! think-time budget. Every decision goes through [`request_decision`], so a
//! player that hangs or crawls costs at most one wait bound and never blocks
//! the caller for good.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::SupervisorConfig;
use crate::core::{apply_move, AutoPlayer, ProtocolError, TetrisFactory, TetrisGame};
use crate::report::{millis, PlayoutResult, Termination};
use crate::worker::{request_decision, Decision};

const DIVERGING: &str =
    "single move request exceeded total timeout; AI is diverging or too slow";

#[derive(Debug, Clone, Default)]
pub struct TimedPlayoutSupervisor {
    config: SupervisorConfig,
    /// Decision requests issued over the supervisor's lifetime
    requests: u64,
    /// Workers left running after a timeout
    abandoned: u64,
}

impl TimedPlayoutSupervisor {
    pub fn new(config: SupervisorConfig) -> Self {
        Self {
            config,
            requests: 0,
            abandoned: 0,
        }
    }

    pub fn config(&self) -> &SupervisorConfig {
        &self.config
    }

    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Worker threads abandoned after missing their wait bound. Each one may
    /// still be running; none is ever reused.
    pub fn abandoned_workers(&self) -> u64 {
        self.abandoned
    }

    /// Build a game and player from `seed`, start the game, and play it out.
    pub fn playout_seeded<F: TetrisFactory>(
        &mut self,
        factory: &F,
        seed: u64,
    ) -> Result<PlayoutResult, ProtocolError> {
        let mut game = factory.create_game(seed);
        game.step();
        let player = factory.create_player(&game.view());

        let mut result = self.playout(&mut game, player)?;
        result.seed = Some(seed);
        info!(
            seed,
            points = result.points,
            steps = result.steps,
            think_ms = millis(result.think_time),
            termination = %result.termination,
            "playout finished"
        );
        Ok(result)
    }

    /// Play an already started game to the end.
    ///
    /// Graceful endings (budgets, game over, resignation, a lost worker) come
    /// back as [`Termination`] inside the result. Only a rejected move or a
    /// failed thread spawn is an error.
    pub fn playout<G, P>(
        &mut self,
        game: &mut G,
        player: P,
    ) -> Result<PlayoutResult, ProtocolError>
    where
        G: TetrisGame,
        P: AutoPlayer<G::View>,
    {
        let SupervisorConfig {
            step_limit,
            total_think_time: budget,
            wait_policy,
        } = self.config;

        let started = Instant::now();
        let mut think_time = Duration::ZERO;
        let mut steps: u64 = 0;
        let mut decisions: u64 = 0;
        let mut player = player;

        let termination = loop {
            if game.is_game_over() {
                break Termination::GameOver;
            }
            if steps >= step_limit {
                break Termination::StepLimit;
            }

            let bound = wait_policy.wait_bound(budget, think_time);
            self.requests += 1;
            decisions += 1;
            let asked = Instant::now();

            let decision = request_decision(player, game.view(), bound, self.requests)?;
            let (returned, mv) = match decision {
                Decision::Answered { player, mv } => (player, mv),
                Decision::TimedOut => {
                    self.abandoned += 1;
                    warn!(decision = decisions, bound_ms = millis(bound), "{}", DIVERGING);
                    break Termination::DecisionTimedOut;
                }
                Decision::Interrupted => {
                    warn!(decision = decisions, "{}", DIVERGING);
                    break Termination::DecisionInterrupted;
                }
            };
            player = returned;

            let spent = asked.elapsed();
            think_time += spent;
            debug!(decision = decisions, ?mv, spent_ms = millis(spent), "decision");

            if think_time >= budget {
                break Termination::ThinkBudgetExhausted;
            }

            let Some(mv) = mv else {
                game.set_game_over();
                break Termination::PlayerResigned;
            };

            if !apply_move(game, mv) {
                return Err(ProtocolError::AttemptedInvalidMove {
                    mv,
                    decision: decisions,
                });
            }
            if mv.counts_as_step() {
                steps += 1;
            }
        };

        Ok(PlayoutResult {
            seed: None,
            points: game.points(),
            steps,
            decisions,
            elapsed: started.elapsed(),
            think_time,
            termination,
        })
    }
}
