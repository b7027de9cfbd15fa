//! mmn — run an M/M/n queue simulation and print its metrics.
//!
//! Defaults reproduce the reference single-server example: arrival
//! probability 0.9 per tick, mean service time 0.5 ticks, 5 ticks.
//!
//! # Example
//!
//! ```bash
//! # Three servers, 1000 ticks, fixed seed, CSV time series in ./output/mmn
//! mmn -p 1.0 -m 0.67 -n 3 -t 1000 --seed 42 --output output/mmn
//!
//! # Ten independent replications
//! mmn -p 1.0 -m 0.67 -n 3 -t 1000 --replications 10
//!
//! # Configuration from JSON
//! mmn --config run.json
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mmn_core::QueueConfig;
use mmn_output::{CsvWriter, SimOutputObserver};
use mmn_sim::{SimBuilder, run_replications};

/// M/M/n queue simulator
///
/// Time-stepped simulation of a shared FIFO queue in front of n servers.
/// Reproducible when the same seed is used.
#[derive(Parser, Debug)]
#[command(name = "mmn")]
#[command(version, about, long_about = None)]
struct Args {
    /// Probability of one arrival per tick, in [0, 1]
    #[arg(short = 'p', long, default_value = "0.9")]
    arrival_probability: f64,

    /// Mean service time in ticks (> 0)
    #[arg(short = 'm', long, default_value = "0.5")]
    mean_service_time: f64,

    /// Number of servers
    #[arg(short = 'n', long, default_value = "1")]
    servers: usize,

    /// Number of ticks to simulate
    #[arg(short = 't', long, default_value = "5")]
    max_ticks: u64,

    /// Random seed. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with a full QueueConfig; overrides the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of independent replications to run
    #[arg(short = 'r', long, default_value = "1")]
    replications: usize,

    /// Directory for CSV output (single run only)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

impl Args {
    /// Reject flag combinations clap cannot express on its own.
    fn check(&self) -> Result<()> {
        if self.output.is_some() && self.replications > 1 {
            bail!(
                "--output writes a single run and cannot be combined with --replications {}",
                self.replications
            );
        }
        Ok(())
    }

    fn queue_config(&self) -> Result<QueueConfig> {
        if let Some(path) = &self.config {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let config: QueueConfig = serde_json::from_reader(file)
                .with_context(|| format!("parsing {}", path.display()))?;
            return Ok(config);
        }
        Ok(QueueConfig {
            arrival_probability: self.arrival_probability,
            mean_service_time:   self.mean_service_time,
            server_count:        self.servers,
            max_ticks:           self.max_ticks,
            seed:                self.seed.unwrap_or_else(rand::random),
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,mmn=info")),
        )
        .init();

    let args = Args::parse();
    args.check()?;
    let config = args.queue_config()?;

    info!(
        arrival_probability = config.arrival_probability,
        mean_service_time   = config.mean_service_time,
        servers             = config.server_count,
        max_ticks           = config.max_ticks,
        seed                = config.seed,
        offered_load        = config.offered_load(),
        "Starting simulation"
    );

    let t0 = Instant::now();

    if args.replications > 1 {
        let summary = run_replications(&config, args.replications)?;
        info!(
            replications = args.replications,
            elapsed_ms   = t0.elapsed().as_millis() as u64,
            "Replications complete"
        );
        println!("{}", serde_json::to_string_pretty(&summary.mean.to_map())?);
        for key in mmn_sim::Metrics::KEYS {
            if let Some(sd) = summary.std_dev(key) {
                info!(metric = key, std_dev = sd, "Across-replication spread");
            }
        }
        return Ok(());
    }

    let mut sim = SimBuilder::new(config).build()?;
    let metrics = match &args.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating CSV output in {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(writer);
            let metrics = sim.run_observed(&mut obs);
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing CSV output");
            }
            info!(dir = %dir.display(), "CSV output written");
            metrics
        }
        None => sim.run(),
    };

    let stats = sim.stats();
    info!(
        arrived    = stats.customers_arrived,
        completed  = stats.customers_completed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Simulation complete"
    );

    println!("{}", serde_json::to_string_pretty(&metrics.to_map())?);
    Ok(())
}
