//! # Framework Engine Core
//!
//! Dense voxel occupancy for a single chunk:
//! - One contiguous buffer of `x * y * z` occupancy flags
//! - Bijective linear-index <-> coordinate mapping (x fastest, z slowest)
//! - A uniform scale carried alongside the occupancy for meshing
//!
//! ## Architecture Rules
//!
//! 1. **Single owner** - the grid owns its storage, nothing else aliases it
//! 2. **No silent clamping** - out-of-range access is an error
//! 3. **Recoverable allocation** - the caller decides whether a failed
//!    allocation is fatal
//!
//! ## Example
//!
//! ```rust
//! use fe_core::{Coordinate, Dimensions, VoxelGrid};
//!
//! let mut grid = VoxelGrid::new(Dimensions::new(4, 4, 2))?;
//! grid.set_enabled(20, true)?;
//!
//! assert_eq!(grid.index_to_coord(20)?, Coordinate::new(0, 1, 1));
//! assert!(grid.is_enabled_at(Coordinate::new(0, 1, 1))?);
//! # Ok::<(), fe_core::GridError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod dimensions;
pub mod error;
pub mod grid;
pub mod voxel;

pub use dimensions::{Coordinate, Dimensions, ParseDimensionsError};
pub use error::{GridError, GridResult};
pub use grid::{destroy, VoxelGrid};
pub use voxel::Voxel;
