use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// blockmosaic — convertit des images en blocs placés dans un monde 3D.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Numéros des config sets à exécuter, dans l'ordre (ex. `2 0 5 1`).
    #[arg(required = true)]
    pub indices: Vec<usize>,

    /// Fichier batch TOML contenant les config sets.
    #[arg(short, long, default_value = "config/batch_list.toml")]
    pub config: PathBuf,

    /// Destination des placements.
    #[arg(long, value_enum, default_value_t = SinkKind::Console)]
    pub sink: SinkKind,

    /// Fichier de sortie pour `--sink mcfunction`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Délai entre deux placements (ms). Remplace `session.pacing_ms`.
    #[arg(long)]
    pub pacing_ms: Option<u64>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Where placements are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    /// One `x y z block_id` line per placement on stdout.
    Console,
    /// `setblock` commands written to a function file.
    Mcfunction,
}

/// Sink résolu à partir de `--sink` et `--output`.
#[derive(Debug, PartialEq, Eq)]
pub enum SinkTarget<'a> {
    /// Stdout.
    Console,
    /// Function file at this path.
    Mcfunction(&'a Path),
}

impl Cli {
    /// Resolve the selected sink, checking it has what it needs.
    ///
    /// # Errors
    /// Returns an error if `--sink mcfunction` is used without `--output`.
    pub fn sink_target(&self) -> anyhow::Result<SinkTarget<'_>> {
        match (self.sink, self.output.as_deref()) {
            (SinkKind::Console, _) => Ok(SinkTarget::Console),
            (SinkKind::Mcfunction, Some(path)) => Ok(SinkTarget::Mcfunction(path)),
            (SinkKind::Mcfunction, None) => {
                anyhow::bail!("--sink mcfunction requiert --output <FICHIER>.")
            }
        }
    }
}
