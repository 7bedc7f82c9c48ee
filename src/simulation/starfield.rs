//! Static background stars, sampled once at startup.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::finite_or;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Half extent of the cube the stars are sampled in.
    pub radius: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 800,
            radius: 120.0,
        }
    }
}

/// A single background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: [f32; 3],
    /// Brightness in `[0.5, 1.0]`.
    pub brightness: f32,
}

/// Samples `count` stars uniformly inside the cube `[-radius, radius]^3`.
///
/// The volume is a cube rather than a sphere, so corners are denser in
/// direction space than faces. A non-finite radius falls back to the default.
pub fn generate_starfield<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Star> {
    let radius = finite_or(radius, StarfieldConfig::default().radius, "starfield radius").abs();
    (0..count)
        .map(|_| Star {
            position: [
                rng.random_range(-radius..=radius),
                rng.random_range(-radius..=radius),
                rng.random_range(-radius..=radius),
            ],
            brightness: rng.random_range(0.5..=1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_generate_small_field() {
        let mut rng = StdRng::seed_from_u64(42);
        let stars = generate_starfield(10, 50.0, &mut rng);
        assert_eq!(stars.len(), 10);
        for star in &stars {
            assert!(star.position.iter().all(|c| (-50.0..=50.0).contains(c)));
            assert!((0.5..=1.0).contains(&star.brightness));
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = generate_starfield(20, 10.0, &mut StdRng::seed_from_u64(3));
        let b = generate_starfield(20, 10.0, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_radius_uses_default() {
        for radius in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let stars = generate_starfield(25, radius, &mut StdRng::seed_from_u64(5));
            assert_eq!(stars.len(), 25);
            for star in &stars {
                assert!(star.position.iter().all(|c| (-120.0..=120.0).contains(c)));
            }
        }
    }

    #[test]
    fn test_zero_radius_collapses_to_origin() {
        let stars = generate_starfield(3, 0.0, &mut StdRng::seed_from_u64(5));
        assert!(stars.iter().all(|s| s.position == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_zero_count() {
        let stars = generate_starfield(0, 120.0, &mut StdRng::seed_from_u64(0));
        assert!(stars.is_empty());
    }
}
