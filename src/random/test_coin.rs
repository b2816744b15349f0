use std::collections::VecDeque;

use super::CoinFlip;

/// Replays a fixed flip sequence, then declines every further promotion.
/// Lets tests pin the exact level each key lands on.
pub struct ScriptedCoin {
    flips: VecDeque<bool>,
}

impl ScriptedCoin {
    pub fn new(flips: Vec<bool>) -> Self {
        Self {
            flips: flips.into(),
        }
    }
}

impl CoinFlip for ScriptedCoin {
    fn flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::random::CoinFlip;

    use super::ScriptedCoin;

    #[test]
    fn test_scripted_coin_replays_then_declines() {
        let mut coin = ScriptedCoin::new(vec![true, false, true]);
        assert!(coin.flip());
        assert!(!coin.flip());
        assert!(coin.flip());
        assert!(!coin.flip());
        assert!(!coin.flip());
    }
}
