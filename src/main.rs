//! cupkit - runs sandbox autoplayers through the harnesses.
//!
//! `sample` runs seeded timed playouts and prints the summary; `validate`
//! runs the validity harness over a set of seeds and exits non-zero on the
//! first invalid move.

mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayerArgs};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_cupkit::harness::{Sampler, SamplerConfig, ValidityHarness};
use tetris_cupkit::sandbox::{PlayerKind, SandboxFactory};
use tetris_cupkit::types::VALIDITY_FIXTURE_SEEDS;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sample {
            playouts,
            seed,
            step_limit,
            think_ms,
            wait_policy,
            player,
            json,
        } => {
            let mut config = SamplerConfig::from_env();
            if let Some(playouts) = playouts {
                config.playouts = playouts;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(step_limit) = step_limit {
                config.supervisor.step_limit = step_limit;
            }
            if let Some(think_ms) = think_ms {
                config.supervisor.total_think_time = Duration::from_millis(think_ms);
            }
            if let Some(wait_policy) = wait_policy {
                config.supervisor.wait_policy = wait_policy;
            }
            run_sample(factory(&player)?, config, json)
        }
        Command::Validate {
            seeds,
            max_steps,
            player,
            json,
        } => {
            let seeds = if seeds.is_empty() {
                VALIDITY_FIXTURE_SEEDS.to_vec()
            } else {
                seeds
            };
            run_validate(factory(&player)?, &seeds, max_steps, json)
        }
    }
}

fn factory(args: &PlayerArgs) -> Result<SandboxFactory> {
    let player = match &args.script {
        Some(script) => PlayerKind::scripted(script).context("invalid --script")?,
        None => args.player.clone(),
    };
    Ok(SandboxFactory::new(player))
}

fn run_sample(factory: SandboxFactory, config: SamplerConfig, json: bool) -> Result<()> {
    info!(
        player = %factory.player,
        playouts = config.playouts,
        step_limit = config.supervisor.step_limit,
        think_ms = config.supervisor.total_think_time.as_millis() as u64,
        wait_policy = %config.supervisor.wait_policy,
        "starting sample"
    );

    let mut sampler = Sampler::new(factory, config);
    let summary = sampler.run_configured()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }

    let abandoned = sampler.supervisor().abandoned_workers();
    if abandoned > 0 {
        info!(abandoned, "decision workers left running");
    }
    Ok(())
}

fn run_validate(factory: SandboxFactory, seeds: &[u64], max_steps: u64, json: bool) -> Result<()> {
    info!(player = %factory.player, max_steps, seeds = seeds.len(), "starting validation");

    let harness = ValidityHarness::with_max_steps(factory, max_steps);
    let reports = harness.run_all(seeds).context("validity run failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report);
        }
    }
    Ok(())
}
