use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use bm_core::config::{BatchConfig, load_batch};
use bm_core::traits::PlacementSink;
use clap::Parser;

pub mod batch;
pub mod cli;
pub mod draw;
pub mod sink;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let target = cli.sink_target()?;

    // 3. Charger le fichier batch
    let batch = load_batch(&cli.config)?;
    let base = cli.config.parent().unwrap_or_else(|| Path::new(""));
    let pacing = cli
        .pacing_ms
        .map_or_else(|| batch.session.pacing(), Duration::from_millis);
    log::info!(
        "Session {} à {} (pacing {pacing:?})",
        batch.session.player_name,
        batch.session.player_origin
    );

    // 4. Ouvrir le sink
    let mut sink = open_sink(&target, &batch)?;

    // 5. Exécuter les config sets dans l'ordre, arrêt à la première erreur
    for &index in &cli.indices {
        let set = batch.config_set(index)?.clone().resolved_against(base);
        let placed =
            batch::run_config_set(&set, batch.session.player_origin, sink.as_mut(), pacing)
                .with_context(|| format!("Config set {index}"))?;
        log::info!("Config set {index} : {placed} blocs placés");
    }

    sink.finish()
}

/// Build the sink selected on the command line.
fn open_sink(target: &cli::SinkTarget<'_>, batch: &BatchConfig) -> Result<Box<dyn PlacementSink>> {
    let origin = batch.session.player_origin;
    Ok(match target {
        cli::SinkTarget::Console => Box::new(sink::ConsoleSink::stdout(origin)),
        cli::SinkTarget::Mcfunction(path) => Box::new(sink::McfunctionSink::create(path, origin)?),
    })
}
