//! `antfarm` — load a farm description, route the colony, print the schedule.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use af_core::SolveConfig;
use af_graph::load_farm_path;
use af_output::{CsvTurnWriter, ScheduleObserver, TextWriter};
use af_sim::{SimBuilder, SimObserver, SimReport};

#[derive(Parser)]
#[clap(author, version, about = "Route an ant colony through a farm in the fewest turns")]
struct Cli {
    /// Path to the farm description file
    farm: PathBuf,

    /// Discard candidate paths longer than this many rooms (terminals
    /// included) during path enumeration
    #[clap(long, value_name = "N")]
    max_path_rooms: Option<usize>,

    /// Also write the schedule as a turn,ant,room CSV log
    #[clap(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Only log warnings and errors
    #[clap(short, long)]
    quiet: bool,
}

/// Forwards every callback to both observers.
struct Tee<A, B>(A, B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_turn(&mut self, turn: af_core::Turn, moves: &[af_sim::AntMove]) {
        self.0.on_turn(turn, moves);
        self.1.on_turn(turn, moves);
    }
    fn on_finish(&mut self, total_turns: af_core::Turn) {
        self.0.on_finish(total_turns);
        self.1.on_finish(total_turns);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let (graph, ants) = load_farm_path(&cli.farm)
        .with_context(|| format!("failed to load {}", cli.farm.display()))?;
    info!(
        "loaded farm: {} rooms, {} tunnels, {} ants",
        graph.room_count(),
        graph.tunnel_count(),
        ants,
    );

    let config = SolveConfig {
        max_path_rooms: cli.max_path_rooms,
        ..Default::default()
    };

    let mut sim = SimBuilder::new(&graph, ants)
        .config(config)
        .build()
        .context("failed to plan a schedule")?;

    let stdout = std::io::stdout().lock();
    let mut text = ScheduleObserver::new(&graph, TextWriter::new(stdout));

    let report = match &cli.csv {
        Some(path) => {
            let writer = CsvTurnWriter::from_path(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut tee = Tee(text, ScheduleObserver::new(&graph, writer));
            let report = sim.run(&mut tee).context("simulation failed")?;
            let Tee(mut t, mut c) = tee;
            if let Some(e) = t.take_error() {
                return Err(e).context("failed to write schedule");
            }
            if let Some(e) = c.take_error() {
                return Err(e).with_context(|| format!("failed to write {}", path.display()));
            }
            report
        }
        None => {
            let report = sim.run(&mut text).context("simulation failed")?;
            if let Some(e) = text.take_error() {
                return Err(e).context("failed to write schedule");
            }
            report
        }
    };

    let SimReport { total_turns, ants_delivered } = report;
    info!("delivered {ants_delivered} ants in {total_turns}");

    Ok(())
}
