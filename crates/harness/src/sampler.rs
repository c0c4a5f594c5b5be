//! Batches of seeded playouts.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::config::SamplerConfig;
use crate::core::{ProtocolError, SimpleRng, TetrisFactory};
use crate::report::{millis, serde_millis, PlayoutResult};
use crate::supervisor::TimedPlayoutSupervisor;

/// Runs playouts with seeds drawn from a deterministic seeder.
///
/// One supervisor serves the whole batch; every decision still gets a fresh
/// worker, so a hang in one playout cannot stall the next.
pub struct Sampler<F> {
    factory: F,
    supervisor: TimedPlayoutSupervisor,
    seeder: SimpleRng,
    playouts: usize,
}

impl<F: TetrisFactory> Sampler<F> {
    pub fn new(factory: F, config: SamplerConfig) -> Self {
        let seeder = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };
        Self {
            factory,
            supervisor: TimedPlayoutSupervisor::new(config.supervisor),
            seeder,
            playouts: config.playouts,
        }
    }

    pub fn supervisor(&self) -> &TimedPlayoutSupervisor {
        &self.supervisor
    }

    /// Run the configured number of playouts.
    pub fn run_configured(&mut self) -> Result<SampleSummary, ProtocolError> {
        self.run(self.playouts)
    }

    /// Run `count` playouts. The first protocol error aborts the batch.
    pub fn run(&mut self, count: usize) -> Result<SampleSummary, ProtocolError> {
        let mut results = Vec::with_capacity(count);
        for index in 0..count {
            let seed = u64::from(self.seeder.next_u32());
            let result = self.supervisor.playout_seeded(&self.factory, seed)?;
            info!(index, seed, points = result.points, "sample recorded");
            results.push(result);
        }
        Ok(SampleSummary::new(results))
    }
}

/// Aggregate of a batch of playouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    pub results: Vec<PlayoutResult>,
    pub mean_points: Option<f64>,
    pub min_points: Option<u64>,
    pub max_points: Option<u64>,
    pub total_steps: u64,
    #[serde(with = "serde_millis", rename = "total_think_time_ms")]
    pub total_think_time: Duration,
}

impl SampleSummary {
    pub fn new(results: Vec<PlayoutResult>) -> Self {
        let points = results.iter().map(|r| r.points);
        let mean_points = if results.is_empty() {
            None
        } else {
            Some(points.clone().sum::<u64>() as f64 / results.len() as f64)
        };
        Self {
            mean_points,
            min_points: points.clone().min(),
            max_points: points.max(),
            total_steps: results.iter().map(|r| r.steps).sum(),
            total_think_time: results.iter().map(|r| r.think_time).sum(),
            results,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        writeln!(f, "=======================================")?;
        writeln!(f, "Playouts            {}", self.results.len())?;
        match (self.mean_points, self.min_points, self.max_points) {
            (Some(mean), Some(min), Some(max)) => {
                writeln!(f, "Points mean         {:.2}", mean)?;
                writeln!(f, "Points min/max      {} / {}", min, max)?;
            }
            _ => writeln!(f, "Points              n/a")?,
        }
        writeln!(f, "Total steps         {}", self.total_steps)?;
        write!(f, "Total think time    {:.3} ms", millis(self.total_think_time))
    }
}
