//! # Framework Engine Procedural Occupancy
//!
//! Deterministic population of voxel chunks.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same pattern and seed always produce the same chunk
//! 2. **Total**: applying a pattern rewrites every cell
//! 3. **Declarative**: patterns deserialize straight from chunk configuration
//!
//! ## Example
//!
//! ```rust
//! use fe_core::{Dimensions, VoxelGrid};
//! use fe_procedural::{NoiseFill, Pattern};
//!
//! let mut grid = VoxelGrid::new(Dimensions::cube(16))?;
//! let enabled = Pattern::Noise(NoiseFill::with_seed(42)).apply(&mut grid)?;
//! assert_eq!(enabled, grid.enabled_count());
//! # Ok::<(), fe_core::GridError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod noise;
pub mod pattern;

pub use noise::{NoiseSeed, SimplexNoise3};
pub use pattern::{NoiseFill, Pattern};
