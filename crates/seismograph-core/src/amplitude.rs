use std::fmt;

use rand::rngs::ThreadRng;
use rand::Rng;

pub const MIN_AMPLITUDE: u32 = 1;
pub const MAX_AMPLITUDE: u32 = 1000;

/// Peak signal value of a generated earthquake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amplitude(u32);

impl Amplitude {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Amplitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draws amplitudes uniformly from `MIN_AMPLITUDE..=MAX_AMPLITUDE`.
pub struct AmplitudeGenerator<R = ThreadRng> {
    rng: R,
}

impl AmplitudeGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for AmplitudeGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AmplitudeGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_amplitude(&mut self) -> Amplitude {
        Amplitude(self.rng.random_range(MIN_AMPLITUDE..=MAX_AMPLITUDE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn amplitudes_stay_in_range() {
        let mut generator = AmplitudeGenerator::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..10_000 {
            let a = generator.next_amplitude().value();
            assert!((MIN_AMPLITUDE..=MAX_AMPLITUDE).contains(&a));
        }
    }

    #[test]
    fn both_bounds_are_reachable() {
        let mut generator = AmplitudeGenerator::with_rng(StdRng::seed_from_u64(42));
        let draws: Vec<u32> = (0..50_000).map(|_| generator.next_amplitude().value()).collect();
        assert!(draws.contains(&MIN_AMPLITUDE));
        assert!(draws.contains(&MAX_AMPLITUDE));
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = AmplitudeGenerator::with_rng(StdRng::seed_from_u64(3));
        let mut b = AmplitudeGenerator::with_rng(StdRng::seed_from_u64(3));
        for _ in 0..32 {
            assert_eq!(a.next_amplitude(), b.next_amplitude());
        }
    }

    #[test]
    fn thread_rng_generator_works() {
        let mut generator = AmplitudeGenerator::new();
        let a = generator.next_amplitude();
        assert!(a.value() >= MIN_AMPLITUDE && a.value() <= MAX_AMPLITUDE);
        assert_eq!(Amplitude::new(523).to_string(), "523");
    }
}
