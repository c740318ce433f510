use rand::Rng;

/// Uniform random "confidence" in a fixed band.
///
/// This is not a model metric. The rule-based predictors have no notion of
/// certainty; clients expect a number in this range and that is all it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticConfidence {
    pub low: f64,
    pub high: f64,
}

impl SyntheticConfidence {
    /// Crop recommendation band.
    pub const CROP: SyntheticConfidence = SyntheticConfidence::new(0.75, 0.95);
    /// Yield prediction band.
    pub const YIELD: SyntheticConfidence = SyntheticConfidence::new(0.7, 0.9);

    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.low..=self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let c = SyntheticConfidence::CROP.draw(&mut rng);
            assert!((0.75..=0.95).contains(&c), "{} out of band", c);
            let y = SyntheticConfidence::YIELD.draw(&mut rng);
            assert!((0.7..=0.9).contains(&y), "{} out of band", y);
        }
    }

    #[test]
    fn draws_are_not_constant() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = SyntheticConfidence::CROP.draw(&mut rng);
        let varied = (0..50).any(|_| SyntheticConfidence::CROP.draw(&mut rng) != first);
        assert!(varied);
    }
}
