//! `fe_mesh`: build one voxel chunk mesh headlessly.
//!
//! Loads a chunk configuration, applies command-line overrides, builds the
//! mesh and optionally dumps the raw vertex stream.
//!
//! ```text
//! fe_mesh --config crates/fe/config/chunk.toml --dims 32x32x8 --out chunk.bin
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fe::grid::Dimensions;
use fe::procedural::Pattern;
use fe::{telemetry, ChunkPipeline, FeConfig, FeResult, RawFileSink};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "fe_mesh", version)]
#[command(about = "Build a voxel chunk mesh and report its size")]
struct Cli {
    /// Chunk configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override chunk dimensions, e.g. 16x16x16
    #[arg(long, value_name = "XxYxZ")]
    dims: Option<Dimensions>,

    /// Override the world-space voxel scale
    #[arg(long)]
    scale: Option<f64>,

    /// Override the noise seed (noise patterns only)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the vertex stream here as little-endian f32 triples
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> FeResult<FeConfig> {
        let mut config = match &self.config {
            Some(path) => FeConfig::from_file(path)?,
            None => FeConfig::default(),
        };
        if let Some(dims) = self.dims {
            config.chunk.dimensions = dims;
        }
        if let Some(scale) = self.scale {
            config.chunk.scale = scale;
        }
        if let (Some(seed), Pattern::Noise(fill)) = (self.seed, &mut config.chunk.pattern) {
            fill.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli, config: &FeConfig) -> FeResult<()> {
    let mesh = ChunkPipeline::from_config(&config.chunk).build()?;
    let stats = mesh.stats();
    info!(
        dimensions = %mesh.grid().dimensions(),
        enabled = stats.enabled_voxels,
        vertices = stats.vertex_count,
        bytes = stats.byte_len,
        "chunk ready"
    );

    if let Some(path) = &cli.out {
        let mut sink = RawFileSink::create(path)?;
        mesh.submit(&mut sink)?;
        let bytes = sink.finish()?;
        info!(path = %path.display(), bytes, "vertex stream written");
    }

    let vertices = mesh.into_vertices();
    println!(
        "{} vertices ({} triangles, {} bytes)",
        vertices.vertex_count(),
        vertices.triangle_count(),
        vertices.as_bytes().len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fe_mesh: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init(&config.telemetry) {
        eprintln!("fe_mesh: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "chunk meshing failed");
            ExitCode::FAILURE
        }
    }
}
