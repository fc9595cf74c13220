//! Roll primitives over an injected random source.
//!
//! Every probabilistic decision in the crate reduces to one of these two
//! draws. Both consume exactly one `f64` from the generator, so a test
//! double that emits fixed words forces the minimum (all-zero word) or
//! maximum (all-one word) outcome without any rejection loop.

use rand::Rng;

/// Draws a uniform value in `[0, 1)`.
pub fn roll_unit(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>()
}

/// Draws a uniform integer in `[0, upper]` inclusive.
pub fn roll_inclusive(rng: &mut impl Rng, upper: u32) -> u32 {
    let draw = (roll_unit(rng) * (upper as f64 + 1.0)) as u32;
    draw.min(upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_unit_stays_in_half_open_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..10_000 {
            let v = roll_unit(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_roll_inclusive_covers_full_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = roll_inclusive(&mut rng, 4);
            assert!(v <= 4);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all values 0..=4 should appear");
    }

    #[test]
    fn test_roll_inclusive_zero_upper_is_always_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(roll_inclusive(&mut rng, 0), 0);
        }
    }
}
