//! Harness configuration.
//!
//! Defaults are the tournament limits. `from_env` reads overrides the same way
//! for every binary and test run:
//!
//! - `CUPKIT_STEP_LIMIT`: step cap per playout (default 5000)
//! - `CUPKIT_THINK_TIME_MS`: total think budget in ms (default 50000)
//! - `CUPKIT_WAIT_POLICY`: `total` or `remaining` (default `total`)
//! - `CUPKIT_PLAYOUTS`: playouts per sampler batch (default 5)
//! - `CUPKIT_SEED`: seeder seed for the sampler (default: clock)
//!
//! Unparseable values fall back to the default.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_PLAYOUTS, DEFAULT_STEP_LIMIT, DEFAULT_TOTAL_THINK_TIME_MS};

/// How long the supervisor waits for a single decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitPolicy {
    /// Wait up to the whole think budget, however much was already spent.
    /// One slow answer may use everything that is left and then some; the
    /// cumulative check after the answer ends the playout.
    #[default]
    TotalBudget,
    /// Wait only for what is left of the budget.
    RemainingBudget,
}

impl WaitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitPolicy::TotalBudget => "total",
            WaitPolicy::RemainingBudget => "remaining",
        }
    }

    /// Upper bound for the next decision given the budget and what was spent.
    pub fn wait_bound(&self, budget: Duration, spent: Duration) -> Duration {
        match self {
            WaitPolicy::TotalBudget => budget,
            WaitPolicy::RemainingBudget => budget.saturating_sub(spent),
        }
    }
}

impl fmt::Display for WaitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" | "total_budget" => Ok(WaitPolicy::TotalBudget),
            "remaining" | "remaining_budget" => Ok(WaitPolicy::RemainingBudget),
            other => Err(format!("unknown wait policy: {}", other)),
        }
    }
}

/// Limits for one timed playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupervisorConfig {
    /// Max `Down` moves per playout
    pub step_limit: u64,
    /// Cumulative think-time budget per playout
    pub total_think_time: Duration,
    pub wait_policy: WaitPolicy,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            total_think_time: Duration::from_millis(DEFAULT_TOTAL_THINK_TIME_MS),
            wait_policy: WaitPolicy::default(),
        }
    }
}

impl SupervisorConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let step_limit = env_parse("CUPKIT_STEP_LIMIT").unwrap_or(defaults.step_limit);
        let total_think_time = env_parse::<u64>("CUPKIT_THINK_TIME_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.total_think_time);
        let wait_policy = env_parse("CUPKIT_WAIT_POLICY").unwrap_or(defaults.wait_policy);

        Self {
            step_limit,
            total_think_time,
            wait_policy,
        }
    }

    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn with_total_think_time(mut self, total_think_time: Duration) -> Self {
        self.total_think_time = total_think_time;
        self
    }

    pub fn with_wait_policy(mut self, wait_policy: WaitPolicy) -> Self {
        self.wait_policy = wait_policy;
        self
    }
}

/// Batch settings for the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub playouts: usize,
    /// Seeder seed; `None` seeds from the clock
    pub seed: Option<u64>,
    pub supervisor: SupervisorConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            playouts: DEFAULT_PLAYOUTS,
            seed: None,
            supervisor: SupervisorConfig::default(),
        }
    }
}

impl SamplerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            playouts: env_parse("CUPKIT_PLAYOUTS").unwrap_or(DEFAULT_PLAYOUTS),
            seed: env_parse("CUPKIT_SEED"),
            supervisor: SupervisorConfig::from_env(),
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}
