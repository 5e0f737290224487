//! # Application Error Types

use std::io;

use fe_core::GridError;
use fe_geometry::MeshError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the chunk pipeline and its sinks.
#[derive(Error, Debug)]
pub enum FeError {
    /// Grid creation or addressing failed.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// Meshing failed.
    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A sink was handed a vertex count that does not match its data.
    #[error("vertex count {vertex_count} does not match {floats} floats")]
    VertexCountMismatch {
        /// Declared vertex count.
        vertex_count: usize,
        /// Number of floats supplied.
        floats: usize,
    },

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application operations.
pub type FeResult<T> = Result<T, FeError>;
