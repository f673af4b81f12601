//! Random number sources
//!
//! The scatter layout needs a placeholder horizontal coordinate per row.
//! The source is a trait so callers (and tests) decide where the numbers
//! come from.

/// Source of uniformly distributed numbers.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Integer in `{0, 1, ..., floor(max) - 1}`, returned as f64.
    fn random_int(&mut self, max: f64) -> f64 {
        (self.next_unit() * max.floor()).floor()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn random_int(&mut self, max: f64) -> f64 {
        (**self).random_int(max)
    }
}

/// `Math.random()` from the hosting JS engine. Only meaningful on wasm32.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// SplitMix64 generator. Not cryptographically secure.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from OS (or, on wasm, `crypto.getRandomValues`) entropy.
    pub fn from_entropy() -> Result<Self, getrandom::Error> {
        let mut seed = [0u8; 8];
        getrandom::getrandom(&mut seed)?;
        Ok(Self::new(u64::from_le_bytes(seed)))
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    fn next_unit(&mut self) -> f64 {
        // Top 53 bits map exactly onto the f64 mantissa
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_random_int_floors_both_sides() {
        assert_eq!(Constant(0.0).random_int(600.0), 0.0);
        assert_eq!(Constant(0.5).random_int(600.0), 300.0);
        assert_eq!(Constant(0.999_999).random_int(600.0), 599.0);
        // floor(max) is applied before scaling
        assert_eq!(Constant(0.5).random_int(10.9), 5.0);
    }

    #[test]
    fn test_split_mix_stays_in_range() {
        let mut rng = SplitMix64::new(42);
        for _ in 0..1000 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
            let n = rng.random_int(600.0);
            assert!((0.0..600.0).contains(&n));
            assert_eq!(n, n.floor());
        }
    }

    #[test]
    fn test_split_mix_is_deterministic_per_seed() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        let xs: Vec<f64> = (0..5).map(|_| a.next_unit()).collect();
        let ys: Vec<f64> = (0..5).map(|_| b.next_unit()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_from_entropy_seeds() {
        assert!(SplitMix64::from_entropy().is_ok());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<R: RandomSource>(mut rng: R) -> f64 {
            rng.random_int(8.0)
        }

        let mut inner = Constant(0.25);
        assert_eq!(draw(&mut inner), 2.0);
    }
}
