//! # Simplex Noise
//!
//! Deterministic 3D simplex noise for populating chunk occupancy.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`NoiseSeed`], sampling produces exactly the same values on
//! any platform. The permutation table depends only on the seed.

/// Seed for deterministic noise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoiseSeed(u64);

impl NoiseSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives an independent sub-seed for `purpose`.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl Default for NoiseSeed {
    fn default() -> Self {
        Self(0xDEAD_BEEF_CAFE_BABE)
    }
}

/// The 12 cube-edge gradients.
const GRAD3: [[i8; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

/// Seeded permutation table, doubled to 512 entries.
struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    #[allow(clippy::cast_possible_truncation)]
    fn new(seed: NoiseSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates with xorshift64; a zero state would never advance.
        let mut rng_state = seed.value().max(1);
        for i in (1..256).rev() {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;

            let j = (rng_state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }

        perm.copy_within(0..256, 256);
        Self { perm }
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        usize::from(self.perm[index & 511])
    }

    #[inline]
    fn hash(&self, i: usize, j: usize, k: usize) -> usize {
        self.get(i + self.get(j + self.get(k)))
    }
}

/// 3D simplex noise generator.
///
/// Produces smooth, continuous values in `[-1, 1]`. Sampling allocates
/// nothing and is `O(1)`.
///
/// # Example
///
/// ```rust
/// use fe_procedural::{NoiseSeed, SimplexNoise3};
///
/// let noise = SimplexNoise3::new(NoiseSeed::new(42));
/// let value = noise.sample(1.6, 0.3, 0.9);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
pub struct SimplexNoise3 {
    perm_table: PermutationTable,
}

impl SimplexNoise3 {
    /// Skewing factor for the 3D simplex grid.
    const F3: f64 = 1.0 / 3.0;
    /// Unskewing factor for the 3D simplex grid.
    const G3: f64 = 1.0 / 6.0;

    /// Creates a generator from a seed.
    #[must_use]
    pub fn new(seed: NoiseSeed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Samples noise at `(x, y, z)`.
    ///
    /// Returns a value in `[-1, 1]`. Simplex vertices, such as the origin,
    /// always sample 0.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::many_single_char_names,
        clippy::similar_names
    )]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let skew = (x + y + z) * Self::F3;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);
        let k = fast_floor(z + skew);

        let unskew = (f64::from(i) + f64::from(j) + f64::from(k)) * Self::G3;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);
        let z0 = z - (f64::from(k) - unskew);

        // Offsets of the second and third corners, by simplex ordering.
        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let corner = |di: usize, dj: usize, dk: usize, n: f64| {
            (
                x0 - di as f64 + n * Self::G3,
                y0 - dj as f64 + n * Self::G3,
                z0 - dk as f64 + n * Self::G3,
            )
        };
        let c1 = corner(i1, j1, k1, 1.0);
        let c2 = corner(i2, j2, k2, 2.0);
        let c3 = corner(1, 1, 1, 3.0);

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;

        let table = &self.perm_table;
        let n0 = contribution((x0, y0, z0), table.hash(ii, jj, kk));
        let n1 = contribution(c1, table.hash(ii + i1, jj + j1, kk + k1));
        let n2 = contribution(c2, table.hash(ii + i2, jj + j2, kk + k2));
        let n3 = contribution(c3, table.hash(ii + 1, jj + 1, kk + 1));

        (32.0 * (n0 + n1 + n2 + n3)).clamp(-1.0, 1.0)
    }
}

/// Contribution of one simplex corner.
#[inline]
fn contribution((x, y, z): (f64, f64, f64), hash: usize) -> f64 {
    let t = 0.6 - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let [gx, gy, gz] = GRAD3[hash % 12];
        let t2 = t * t;
        t2 * t2 * (x * f64::from(gx) + y * f64::from(gy) + z * f64::from(gz))
    }
}

/// Floor to `i32`, saturating at the `i32` bounds.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn fast_floor(x: f64) -> i32 {
    x.floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = NoiseSeed::new(12345);
        let noise1 = SimplexNoise3::new(seed);
        let noise2 = SimplexNoise3::new(seed);

        for i in 0..100 {
            let t = f64::from(i) * 0.1;
            assert_eq!(
                noise1.sample(t, t * 1.7, t * 0.3).to_bits(),
                noise2.sample(t, t * 1.7, t * 0.3).to_bits()
            );
        }
    }

    #[test]
    fn test_different_seeds_different_fields() {
        let noise1 = SimplexNoise3::new(NoiseSeed::new(1));
        let noise2 = SimplexNoise3::new(NoiseSeed::new(2));

        let differs = (0..64).any(|i| {
            let t = f64::from(i) * 0.37 + 0.11;
            noise1.sample(t, t * 0.5, t * 0.25) != noise2.sample(t, t * 0.5, t * 0.25)
        });
        assert!(differs, "different seeds should produce different fields");
    }

    #[test]
    fn test_range() {
        let noise = SimplexNoise3::new(NoiseSeed::new(42));
        for i in 0..10_000 {
            let x = f64::from(i) * 0.1 - 500.0;
            let y = f64::from(i) * 0.13 - 650.0;
            let z = f64::from(i) * 0.07 - 100.0;
            let value = noise.sample(x, y, z);
            assert!((-1.0..=1.0).contains(&value), "{value} at ({x}, {y}, {z})");
        }
    }

    #[test]
    fn test_simplex_vertices_are_zero() {
        let noise = SimplexNoise3::new(NoiseSeed::new(7));
        for (x, y, z) in [(0.0, 0.0, 0.0), (3.0, -2.0, 5.0), (10.0, 10.0, 10.0)] {
            assert!(noise.sample(x, y, z).abs() < 1e-9);
        }
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise3::new(NoiseSeed::new(42));
        let (x, y, z) = (10.3, 4.1, 7.7);
        let delta = 0.001;

        let v = noise.sample(x, y, z);
        assert!((v - noise.sample(x + delta, y, z)).abs() < 0.05);
        assert!((v - noise.sample(x, y + delta, z)).abs() < 0.05);
        assert!((v - noise.sample(x, y, z + delta)).abs() < 0.05);
    }

    #[test]
    fn test_huge_coordinates_stay_in_range() {
        let noise = SimplexNoise3::new(NoiseSeed::new(42));
        for v in [1e10, -1e10, 1e12, -1e12, f64::from(i32::MAX), f64::from(i32::MIN)] {
            for (x, y, z) in [(v, v, v), (v, 0.5, -v), (0.25, v, 3.0)] {
                let value = noise.sample(x, y, z);
                assert!((-1.0..=1.0).contains(&value), "{value} at ({x}, {y}, {z})");
            }
        }
    }

    #[test]
    fn test_fast_floor_saturates() {
        assert_eq!(fast_floor(-0.5), -1);
        assert_eq!(fast_floor(2.0), 2);
        assert_eq!(fast_floor(1e12), i32::MAX);
        assert_eq!(fast_floor(-1e12), i32::MIN);
    }

    #[test]
    fn test_field_is_not_flat() {
        let noise = SimplexNoise3::new(NoiseSeed::default());
        let above = (0..4096)
            .map(|i| {
                let (x, y, z) = (i % 16, (i / 16) % 16, i / 256);
                noise.sample(f64::from(x) / 10.0, f64::from(y) / 10.0, f64::from(z) / 10.0)
            })
            .filter(|&v| v >= 0.16)
            .count();
        assert!(above > 0 && above < 4096, "{above} of 4096 above threshold");
    }

    #[test]
    fn test_seed_derivation() {
        let base = NoiseSeed::new(42);
        assert_ne!(base.derive(1), base.derive(2));
        assert_eq!(base.derive(1), base.derive(1));
        assert_ne!(base.derive(1), base);
        assert_ne!(NoiseSeed::new(0).derive(1).value(), 0);
    }
}
