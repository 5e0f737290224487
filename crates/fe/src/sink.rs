//! # Mesh Sinks
//!
//! A [`MeshSink`] is whatever consumes a built chunk mesh: normally a GPU
//! renderer that uploads the floats verbatim and draws `vertex_count`
//! vertices as a triangle list with 3-float position attributes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fe_geometry::SCALARS_PER_VERTEX;
use tracing::debug;

use crate::error::{FeError, FeResult};

/// Consumer of flat position-only vertex data.
pub trait MeshSink {
    /// Receives one mesh. `vertices.len()` is `vertex_count * 3`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; see each sink.
    fn submit(&mut self, vertices: &[f32], vertex_count: usize) -> FeResult<()>;
}

fn check_vertex_count(vertices: &[f32], vertex_count: usize) -> FeResult<()> {
    if vertex_count.checked_mul(SCALARS_PER_VERTEX) == Some(vertices.len()) {
        Ok(())
    } else {
        Err(FeError::VertexCountMismatch {
            vertex_count,
            floats: vertices.len(),
        })
    }
}

/// Writes submitted vertices to a file as little-endian `f32`s.
///
/// Consecutive submissions are appended. Call [`RawFileSink::finish`] to
/// flush and observe write errors.
pub struct RawFileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    bytes_written: u64,
}

impl RawFileSink {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FeError::Io`] if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> FeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let writer = BufWriter::new(File::create(&path)?);
        Ok(Self {
            path,
            writer,
            bytes_written: 0,
        })
    }

    /// Destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes written so far.
    #[must_use]
    pub const fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flushes buffered data, returning the total bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`FeError::Io`] if the flush fails.
    pub fn finish(mut self) -> FeResult<u64> {
        self.writer.flush()?;
        debug!(path = %self.path.display(), bytes = self.bytes_written, "vertex dump flushed");
        Ok(self.bytes_written)
    }
}

impl MeshSink for RawFileSink {
    /// # Errors
    ///
    /// Returns [`FeError::VertexCountMismatch`] for inconsistent input and
    /// [`FeError::Io`] if writing fails.
    fn submit(&mut self, vertices: &[f32], vertex_count: usize) -> FeResult<()> {
        check_vertex_count(vertices, vertex_count)?;
        for value in vertices {
            self.writer.write_all(&value.to_le_bytes())?;
        }
        self.bytes_written += std::mem::size_of_val(vertices) as u64;
        Ok(())
    }
}

/// Records what it is given without keeping the data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountingSink {
    submissions: Vec<usize>,
}

impl CountingSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            submissions: Vec::new(),
        }
    }

    /// Vertex counts of every submission, in order.
    #[must_use]
    pub fn submissions(&self) -> &[usize] {
        &self.submissions
    }

    /// Sum of all submitted vertex counts.
    #[must_use]
    pub fn total_vertices(&self) -> usize {
        self.submissions.iter().sum()
    }
}

impl MeshSink for CountingSink {
    fn submit(&mut self, vertices: &[f32], vertex_count: usize) -> FeResult<()> {
        check_vertex_count(vertices, vertex_count)?;
        self.submissions.push(vertex_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_sink_records_submissions() {
        let mut sink = CountingSink::new();
        sink.submit(&[0.0; 9], 3).unwrap();
        sink.submit(&[], 0).unwrap();
        assert_eq!(sink.submissions(), &[3, 0]);
        assert_eq!(sink.total_vertices(), 3);
    }

    #[test]
    fn test_mismatched_count_rejected() {
        let mut sink = CountingSink::new();
        let err = sink.submit(&[0.0; 8], 3).unwrap_err();
        assert!(matches!(
            err,
            FeError::VertexCountMismatch {
                vertex_count: 3,
                floats: 8
            }
        ));
        assert!(sink.submissions().is_empty());
    }

    #[test]
    fn test_raw_file_sink_writes_little_endian() {
        let path = std::env::temp_dir().join(format!("fe_sink_{}.bin", std::process::id()));
        let mut sink = RawFileSink::create(&path).unwrap();
        sink.submit(&[1.0, 2.0, 3.0], 1).unwrap();
        assert_eq!(sink.finish().unwrap(), 12);

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&bytes[..4], &1.0_f32.to_le_bytes());
        assert_eq!(&bytes[8..], &3.0_f32.to_le_bytes());
    }
}
