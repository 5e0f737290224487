//! Single-cell occupancy state.

/// A single voxel, packed into one byte.
///
/// Layout:
/// - Bit 0: enabled
/// - Bits 1-7: reserved, always zero
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Voxel(u8);

impl Voxel {
    const ENABLED_BIT: u8 = 0b0000_0001;

    /// Empty cell.
    pub const DISABLED: Self = Self(0);

    /// Occupied cell.
    pub const ENABLED: Self = Self(Self::ENABLED_BIT);

    /// Creates a voxel with the given occupancy.
    #[inline]
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        if enabled {
            Self::ENABLED
        } else {
            Self::DISABLED
        }
    }

    /// Returns true if the cell is occupied.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.0 & Self::ENABLED_BIT != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voxel_packing() {
        assert!(Voxel::new(true).is_enabled());
        assert!(!Voxel::new(false).is_enabled());
        assert_eq!(Voxel::default(), Voxel::DISABLED);
        assert_eq!(std::mem::size_of::<Voxel>(), 1);
    }
}
