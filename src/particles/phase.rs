//! Particle phase timing.
//!
//! A particle's normalized age is recomputed from the absolute scene clock
//! on every evaluation. Nothing is integrated frame to frame, so reordering,
//! skipping, or repeating update calls cannot desynchronize the field.

/// Personal cycle duration: the base lifetime stretched by uniqueness
/// into [1x, 2x).
#[inline]
pub fn cycle_duration(lifetime: f32, uniqueness: f32) -> f32 {
    lifetime + lifetime * uniqueness
}

/// Phase offset staggering particle starts evenly across one cycle.
#[inline]
pub fn phase_offset(index: u32, count: u32, cycle: f32) -> f32 {
    index as f32 / count as f32 * cycle
}

/// Normalized age in [0, 1): where the particle sits inside its current
/// loop at the given scene time.
#[inline]
pub fn normalized_age(elapsed: f32, index: u32, count: u32, uniqueness: f32, lifetime: f32) -> f32 {
    let cycle = cycle_duration(lifetime, uniqueness);
    let time = (elapsed + phase_offset(index, count, cycle)).rem_euclid(cycle);
    let age = time / cycle;
    // rounding in rem_euclid can land exactly on one full cycle
    if age >= 1.0 {
        age - 1.0
    } else {
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_duration_band() {
        assert_eq!(cycle_duration(0.7, 0.0), 0.7);
        assert!((cycle_duration(0.7, 0.999) - 1.3993).abs() < 1e-4);
    }

    #[test]
    fn test_even_staggering() {
        // four particles, one second base cycle, sampled at t = 0.5
        assert_eq!(normalized_age(0.5, 0, 4, 0.0, 1.0), 0.5);
        assert_eq!(normalized_age(0.5, 2, 4, 0.0, 1.0), 0.0);
        assert_eq!(normalized_age(0.5, 1, 4, 0.0, 1.0), 0.75);
        assert_eq!(normalized_age(0.5, 3, 4, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_distinct_indices_get_distinct_offsets() {
        let cycle = cycle_duration(1.0, 0.0);
        let mut offsets: Vec<f32> = (0..16).map(|i| phase_offset(i, 16, cycle)).collect();
        offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
        offsets.dedup();
        assert_eq!(offsets.len(), 16);
    }

    #[test]
    fn test_age_stays_in_unit_range() {
        for step in 0..2000 {
            let elapsed = step as f32 * 0.137;
            for index in 0..7 {
                let age = normalized_age(elapsed, index, 7, 0.43, 0.7);
                assert!((0.0..1.0).contains(&age), "age {} at t={}", age, elapsed);
            }
        }
    }

    #[test]
    fn test_age_is_pure_in_elapsed() {
        let a = normalized_age(123.456, 5, 100, 0.7, 0.7);
        let b = normalized_age(123.456, 5, 100, 0.7, 0.7);
        assert_eq!(a, b);
    }
}
