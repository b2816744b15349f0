pub mod test_coin;

/// Source of level-promotion decisions. Injected into the skip list so
/// deterministic sequences can be supplied in tests.
pub trait CoinFlip {
    fn flip(&mut self) -> bool;
}

pub struct FairCoin {
    rng: fastrand::Rng,
}

impl FairCoin {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FairCoin {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinFlip for FairCoin {
    fn flip(&mut self) -> bool {
        self.rng.bool()
    }
}

#[cfg(test)]
mod tests {
    use super::{CoinFlip, FairCoin};

    #[test]
    fn test_seeded_coin_is_reproducible() {
        let mut first = FairCoin::with_seed(424242);
        let mut second = FairCoin::with_seed(424242);
        for _ in 0..64 {
            assert_eq!(first.flip(), second.flip());
        }
    }

    #[test]
    fn test_fair_coin_lands_on_both_sides() {
        let mut coin = FairCoin::with_seed(100);
        let flips: Vec<bool> = (0..64).map(|_| coin.flip()).collect();
        assert!(flips.iter().any(|&b| b));
        assert!(flips.iter().any(|&b| !b));
    }
}
