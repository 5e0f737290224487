//! # Framework Engine
//!
//! Voxel chunk meshing, from configuration to renderer hand-off.
//!
//! ## Crates
//!
//! - [`grid`]: dense occupancy grid and linear-index mapping
//! - [`geometry`]: template-instancing mesher and vertex buffers
//! - [`procedural`]: seeded noise and fill patterns
//!
//! ## Example
//!
//! ```rust
//! use fe::{ChunkPipeline, CountingSink, FeConfig};
//!
//! let config = FeConfig::from_toml_str("[chunk.pattern]\nkind = \"solid\"")?;
//! let mesh = ChunkPipeline::from_config(&config.chunk).build()?;
//!
//! let mut sink = CountingSink::new();
//! mesh.submit(&mut sink)?;
//! assert_eq!(sink.total_vertices(), 16 * 16 * 16 * 36);
//! # Ok::<(), fe::FeError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod sink;
pub mod telemetry;

pub use fe_core as grid;
pub use fe_geometry as geometry;
pub use fe_procedural as procedural;

pub use config::{ChunkConfig, ConfigError, FeConfig, TelemetryConfig};
pub use error::{FeError, FeResult};
pub use pipeline::{ChunkMesh, ChunkPipeline};
pub use sink::{CountingSink, MeshSink, RawFileSink};
