//! Playout reports.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const RULE: &str = "---------------------------------------";

/// Why a playout stopped.
///
/// Every variant is a normal ending; protocol violations are errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The game ended on its own.
    GameOver,
    /// The step cap was reached.
    StepLimit,
    /// The player answered with no move.
    PlayerResigned,
    /// Cumulative think time reached the budget.
    ThinkBudgetExhausted,
    /// A single decision missed its wait bound.
    DecisionTimedOut,
    /// The decision worker died without answering.
    DecisionInterrupted,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::GameOver => "game over",
            Termination::StepLimit => "step limit",
            Termination::PlayerResigned => "player resigned",
            Termination::ThinkBudgetExhausted => "think budget exhausted",
            Termination::DecisionTimedOut => "decision timed out",
            Termination::DecisionInterrupted => "decision interrupted",
        }
    }

    /// Whether the player ran out of time rather than the game ending.
    pub fn is_time_related(&self) -> bool {
        matches!(
            self,
            Termination::ThinkBudgetExhausted | Termination::DecisionTimedOut
        )
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one timed playout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoutResult {
    pub seed: Option<u64>,
    pub points: u64,
    /// `Down` moves applied
    pub steps: u64,
    /// Decision requests issued, including one that timed out
    pub decisions: u64,
    #[serde(with = "serde_millis", rename = "elapsed_ms")]
    pub elapsed: Duration,
    #[serde(with = "serde_millis", rename = "think_time_ms")]
    pub think_time: Duration,
    pub termination: Termination,
}

impl PlayoutResult {
    /// Average wall time per step, `None` if no step was taken.
    pub fn avg_ms_per_step(&self) -> Option<f64> {
        if self.steps == 0 {
            return None;
        }
        Some(millis(self.elapsed) / self.steps as f64)
    }
}

impl fmt::Display for PlayoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Points              {}", self.points)?;
        writeln!(f, "Steps               {}", self.steps)?;
        writeln!(f, "Elapsed time        {:.3} ms", millis(self.elapsed))?;
        writeln!(f, "Elapsed think time  {:.3} ms", millis(self.think_time))?;
        match self.avg_ms_per_step() {
            Some(avg) => writeln!(f, "AvgTime per step    {:.3} ms", avg)?,
            None => writeln!(f, "AvgTime per step    n/a")?,
        }
        writeln!(f, "Termination         {}", self.termination)?;
        if let Some(seed) = self.seed {
            write!(f, "Seed                {}", seed)?;
        }
        Ok(())
    }
}

/// Result of one validity run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityReport {
    pub seed: Option<u64>,
    /// Moves applied (every kind counts)
    pub steps: u64,
    pub points: u64,
    /// The player ended the game by answering with no move
    pub resigned: bool,
    pub game_over: bool,
}

impl fmt::Display for ValidityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seed = self
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "seed {}: {} valid moves, {} points{}",
            seed,
            self.steps,
            self.points,
            if self.resigned {
                " (player resigned)"
            } else if self.game_over {
                " (game over)"
            } else {
                ""
            }
        )
    }
}

pub(crate) fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Durations as fractional milliseconds.
pub(crate) mod serde_millis {
    use std::time::Duration;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(super::millis(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(millis.max(0.0) / 1000.0).map_err(D::Error::custom)
    }
}
