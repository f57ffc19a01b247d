//! Mulberry32 sequence generator - Rust port
//!
//! A small, seeded, 32-bit pseudo-random stream. Every operation uses fixed
//! width wrapping arithmetic so a given seed yields the same sequence on every
//! platform. One generator is threaded through every generation stage in
//! order, which is what makes a whole level reproducible from its seed.

mod weighted;

pub use weighted::{Weighted, pick_weighted};

/// Increment applied to the state before every draw
const GOLDEN_STEP: u32 = 0x6D2B_79F5;

/// 2^32 as a float, used to map a raw draw into [0, 1)
const U32_RANGE: f64 = 4_294_967_296.0;

/// Source of uniform samples in [0, 1)
///
/// Stages that only need unit samples take this instead of the concrete
/// generator so tests can feed them scripted values.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Seeded sequence generator
#[derive(Clone)]
pub struct SequenceRng {
    /// Mixer state
    state: u32,
    /// Total number of values drawn
    draws: u64,
}

impl core::fmt::Debug for SequenceRng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SequenceRng")
            .field("state", &self.state)
            .field("draws", &self.draws)
            .finish()
    }
}

impl SequenceRng {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed,
            draws: 0,
        }
    }

    /// Total number of values drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Advance the state and mix it into the next raw value.
    fn mix_next(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_STEP);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        self.draws += 1;
        r ^ (r >> 14)
    }

    /// Next float in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.mix_next()) / U32_RANGE
    }

    /// Returns an integer in [0, n) computed as `floor(unit * n)`.
    ///
    /// Returns 0 if n is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_f64() * n as f64).floor() as usize
    }
}

impl UnitSource for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        self.next_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence_seed_1401() {
        let mut rng = SequenceRng::new(1401);
        let expected = [
            0.8287268108688295,
            0.11890863231383264,
            0.8898798592854291,
            0.31461606128141284,
        ];
        for value in expected {
            assert_eq!(rng.next_f64(), value);
        }
    }

    #[test]
    fn test_known_sequence_seed_zero() {
        let mut rng = SequenceRng::new(0);
        assert_eq!(rng.next_f64(), 0.26642920868471265);
        assert_eq!(rng.next_f64(), 0.0003297457005828619);
        assert_eq!(rng.next_f64(), 0.2232720274478197);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = SequenceRng::new(42);
        let mut rng2 = SequenceRng::new(42);

        for _ in 0..1000 {
            assert_eq!(rng1.next_f64(), rng2.next_f64());
        }
    }

    #[test]
    fn test_unit_range() {
        let mut rng = SequenceRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seed_wraps_near_max() {
        let mut rng = SequenceRng::new(u32::MAX);
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn test_below_bounds() {
        let mut rng = SequenceRng::new(99);
        for _ in 0..1000 {
            assert!(rng.below(17) < 17);
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_draw_counter() {
        let mut rng = SequenceRng::new(5);
        assert_eq!(rng.draws(), 0);
        rng.next_f64();
        rng.below(3);
        assert_eq!(rng.draws(), 2);
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.draws(), 2);
    }
}
