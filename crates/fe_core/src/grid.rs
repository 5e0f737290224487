//! # Voxel Grid
//!
//! A dense, fixed-size occupancy grid for one chunk.
//!
//! Storage is a single contiguous buffer of `x * y * z` voxels addressed by
//! computed offsets (see [`Dimensions::linearize`]). The grid also carries the
//! uniform scale used when the chunk is meshed into world space.

use tracing::{debug, warn};

use crate::dimensions::{Coordinate, Dimensions};
use crate::error::{GridError, GridResult};
use crate::voxel::Voxel;

/// Dense occupancy grid.
///
/// # Invariants
///
/// - `voxels.len() == dimensions.volume()` for the whole lifetime of the grid
/// - `scale` is finite and strictly positive, also as `f32`
///
/// # Example
///
/// ```rust
/// use fe_core::{Dimensions, VoxelGrid};
///
/// let mut grid = VoxelGrid::new(Dimensions::cube(16))?.with_scale(0.25)?;
/// grid.set_enabled(0, true)?;
/// assert_eq!(grid.enabled_count(), 1);
/// # Ok::<(), fe_core::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    /// Grid extents, fixed at creation.
    dimensions: Dimensions,
    /// Uniform world-space multiplier.
    scale: f64,
    /// Occupancy, indexed by `Dimensions::linearize`.
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Scale of a freshly created grid.
    pub const DEFAULT_SCALE: f64 = 1.0;

    /// Creates a grid with every voxel disabled and scale 1.0.
    ///
    /// A grid with a zero extent is valid and holds no voxels.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Allocation`] if `x * y * z` overflows or the
    /// storage cannot be reserved.
    pub fn new(dimensions: Dimensions) -> GridResult<Self> {
        let len = dimensions
            .volume()
            .ok_or(GridError::Allocation { dimensions })?;

        let mut voxels = Vec::new();
        voxels
            .try_reserve_exact(len)
            .map_err(|_| GridError::Allocation { dimensions })?;
        voxels.resize(len, Voxel::DISABLED);

        debug!(
            %dimensions,
            bytes = len * std::mem::size_of::<Voxel>(),
            "allocated voxel grid"
        );

        Ok(Self {
            dimensions,
            scale: Self::DEFAULT_SCALE,
            voxels,
        })
    }

    /// Sets the scale, consuming and returning the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidScale`] if `scale` is not finite or not
    /// strictly positive.
    pub fn with_scale(mut self, scale: f64) -> GridResult<Self> {
        self.set_scale(scale)?;
        Ok(self)
    }

    /// Returns the grid extents.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the uniform world-space scale.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the uniform world-space scale.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidScale`] if `scale` fails
    /// [`VoxelGrid::is_valid_scale`]. The previous scale is kept.
    pub fn set_scale(&mut self, scale: f64) -> GridResult<()> {
        if !Self::is_valid_scale(scale) {
            return Err(GridError::InvalidScale(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// True if `scale` is finite and strictly positive both as `f64` and
    /// after narrowing to the `f32` used for vertex positions.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn is_valid_scale(scale: f64) -> bool {
        let narrowed = scale as f32;
        scale.is_finite() && scale > 0.0 && narrowed.is_finite() && narrowed > 0.0
    }

    /// Number of voxels (`x * y * z`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Returns true if the grid holds no voxels (a zero extent).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Read-only view of the occupancy storage, in linear-index order.
    #[inline]
    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Decomposes a linear index into a coordinate.
    ///
    /// X varies fastest, then Y, then Z:
    /// `x = (i % (X*Y)) % X`, `y = (i % (X*Y)) / X`, `z = i / (X*Y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index >= len()`.
    pub fn index_to_coord(&self, index: usize) -> GridResult<Coordinate> {
        self.check_index(index)?;
        Ok(self.dimensions.delinearize(index))
    }

    /// Composes a coordinate into its linear index, `x + y*X + z*X*Y`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordinateOutOfRange`] if any component is outside
    /// the grid extents.
    pub fn coord_to_index(&self, coord: Coordinate) -> GridResult<usize> {
        if !self.dimensions.contains(coord) {
            return Err(GridError::CoordinateOutOfRange {
                coord,
                dimensions: self.dimensions,
            });
        }
        Ok(self.dimensions.linearize(coord))
    }

    /// Returns true if the voxel at `index` is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn is_enabled(&self, index: usize) -> GridResult<bool> {
        self.voxels
            .get(index)
            .map(|voxel| voxel.is_enabled())
            .ok_or(GridError::IndexOutOfRange {
                index,
                len: self.voxels.len(),
            })
    }

    /// Enables or disables the voxel at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> GridResult<()> {
        let len = self.voxels.len();
        let voxel = self
            .voxels
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange { index, len })?;
        *voxel = Voxel::new(enabled);
        Ok(())
    }

    /// Returns true if the voxel at `coord` is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordinateOutOfRange`] if `coord` is outside the grid.
    pub fn is_enabled_at(&self, coord: Coordinate) -> GridResult<bool> {
        let index = self.coord_to_index(coord)?;
        self.is_enabled(index)
    }

    /// Enables or disables the voxel at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordinateOutOfRange`] if `coord` is outside the grid.
    pub fn set_enabled_at(&mut self, coord: Coordinate, enabled: bool) -> GridResult<()> {
        let index = self.coord_to_index(coord)?;
        self.set_enabled(index, enabled)
    }

    /// Number of enabled voxels.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.voxels.iter().filter(|voxel| voxel.is_enabled()).count()
    }

    /// Iterates enabled voxels as `(index, coordinate)` in ascending index order.
    pub fn iter_enabled(&self) -> impl Iterator<Item = (usize, Coordinate)> + '_ {
        let dimensions = self.dimensions;
        self.voxels
            .iter()
            .enumerate()
            .filter(|(_, voxel)| voxel.is_enabled())
            .map(move |(index, _)| (index, dimensions.delinearize(index)))
    }

    /// Sets every voxel to `enabled`.
    pub fn fill(&mut self, enabled: bool) {
        self.voxels.fill(Voxel::new(enabled));
    }

    /// Disables every voxel.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    #[inline]
    fn check_index(&self, index: usize) -> GridResult<()> {
        if index < self.voxels.len() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index,
                len: self.voxels.len(),
            })
        }
    }
}

/// Releases the grid held in `slot`.
///
/// Returns true if a grid was released. An empty slot (already destroyed, or
/// never created) is a no-op that logs a usage warning.
pub fn destroy(slot: &mut Option<VoxelGrid>) -> bool {
    match slot.take() {
        Some(grid) => {
            debug!(dimensions = %grid.dimensions, "released voxel grid");
            true
        }
        None => {
            warn!("destroy called on an empty grid slot; ignoring");
            false
        }
    }
}
