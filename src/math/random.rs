//! Sampling helpers over a caller-supplied random source.
//!
//! Everything takes `&mut impl Rng` so callers can hand in a seeded
//! `SmallRng` for reproducible fields or `thread_rng` for live scenes.

use rand::Rng;

/// Uniform value in `(-width / 2, width / 2)`, centered on zero.
#[inline]
pub fn rand_center<R: Rng + ?Sized>(rng: &mut R, width: f32) -> f32 {
    width * (rng.gen::<f32>() - 0.5)
}

/// Uniform value in `[min, max)`.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.gen::<f32>()
}

/// Randomly `1.0` or `-1.0` with equal probability.
#[inline]
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.gen::<bool>() {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_rand_center_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rand_center(&mut rng, 2.0);
            assert!(v >= -1.0 && v < 1.0);
        }
    }

    #[test]
    fn test_random_between_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_between(&mut rng, 1.0, 7.0);
            assert!((1.0..7.0).contains(&v));
        }
    }

    #[test]
    fn test_seed_determinism() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(random_between(&mut a, 0.0, 1.0), random_between(&mut b, 0.0, 1.0));
        }
    }
}
