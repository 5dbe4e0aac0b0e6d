use crate::error::{LotteryError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Winning numbers of a round, kept in the order they were drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct DrawnNumbers(Vec<u32>);

impl TryFrom<Vec<u32>> for DrawnNumbers {
    type Error = LotteryError;

    fn try_from(numbers: Vec<u32>) -> Result<Self> {
        Self::from_numbers(numbers, u32::MAX)
    }
}

impl From<DrawnNumbers> for Vec<u32> {
    fn from(drawn: DrawnNumbers) -> Self {
        drawn.0
    }
}

impl DrawnNumbers {
    pub fn contains(&self, number: u32) -> bool {
        self.0.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Ascending copy for display
    pub fn sorted(&self) -> Vec<u32> {
        let mut numbers = self.0.clone();
        numbers.sort_unstable();
        numbers
    }

    /// Wrap numbers drawn elsewhere, checking they are unique and in `1..=max`
    pub fn from_numbers(numbers: Vec<u32>, max: u32) -> Result<Self> {
        for (i, &number) in numbers.iter().enumerate() {
            if number == 0 || number > max {
                return Err(LotteryError::config(format!(
                    "Drawn number {} is outside 1..={}",
                    number, max
                )));
            }
            if numbers[..i].contains(&number) {
                return Err(LotteryError::config(format!(
                    "Drawn number {} appears twice",
                    number
                )));
            }
        }
        Ok(Self(numbers))
    }
}

/// Draws unique numbers out of an injected random source
#[derive(Debug)]
pub struct RandomDrawer<R = StdRng> {
    rng: R,
}

impl RandomDrawer<StdRng> {
    /// Deterministic drawer, same seed gives the same draws
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomDrawer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `count` unique numbers in `1..=max`, resampling any repeat
    pub fn draw(&mut self, count: usize, max: u32) -> Result<DrawnNumbers> {
        if max == 0 || count as u64 > u64::from(max) {
            return Err(LotteryError::config(format!(
                "Cannot draw {} unique numbers from 1..={}",
                count, max
            )));
        }

        let mut numbers = Vec::with_capacity(count);
        while numbers.len() < count {
            let number = self.rng.gen_range(1..=max);
            if !numbers.contains(&number) {
                numbers.push(number);
            }
        }

        tracing::debug!("Drew {:?} from 1..={}", numbers, max);
        Ok(DrawnNumbers(numbers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_draw_unique_in_range() {
        let mut drawer = RandomDrawer::from_seed(7);
        for _ in 0..1000 {
            let drawn = drawer.draw(4, 20).unwrap();
            assert_eq!(drawn.len(), 4);

            let unique: HashSet<_> = drawn.as_slice().iter().collect();
            assert_eq!(unique.len(), 4);
            assert!(drawn.as_slice().iter().all(|n| (1..=20).contains(n)));
        }
    }

    #[test]
    fn test_draw_whole_range() {
        let mut drawer = RandomDrawer::from_seed(1);
        let drawn = drawer.draw(20, 20).unwrap();
        assert_eq!(drawn.sorted(), (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_draw_zero() {
        let mut drawer = RandomDrawer::from_seed(1);
        assert!(drawer.draw(0, 20).unwrap().is_empty());
    }

    #[test]
    fn test_count_above_max_is_config_error() {
        let mut drawer = RandomDrawer::from_seed(1);
        assert!(matches!(drawer.draw(5, 4), Err(LotteryError::Config(_))));
        assert!(matches!(drawer.draw(1, 0), Err(LotteryError::Config(_))));
    }

    #[test]
    fn test_from_numbers_rejects_bad_draws() {
        assert!(DrawnNumbers::from_numbers(vec![1, 2, 2], 20).is_err());
        assert!(DrawnNumbers::from_numbers(vec![0, 2], 20).is_err());
        assert!(DrawnNumbers::from_numbers(vec![21], 20).is_err());
    }

    #[test]
    fn test_deserialize_checks_numbers() {
        let drawn: DrawnNumbers = serde_json::from_str("[9, 2, 7, 4]").unwrap();
        assert_eq!(drawn.as_slice(), &[9, 2, 7, 4]);
        assert_eq!(serde_json::to_string(&drawn).unwrap(), "[9,2,7,4]");

        assert!(serde_json::from_str::<DrawnNumbers>("[1, 2, 2]").is_err());
        assert!(serde_json::from_str::<DrawnNumbers>("[0, 5]").is_err());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = RandomDrawer::from_seed(12345);
        let mut b = RandomDrawer::from_seed(12345);
        for _ in 0..50 {
            assert_eq!(a.draw(4, 20).unwrap(), b.draw(4, 20).unwrap());
        }
    }

    #[test]
    fn test_sorted_keeps_draw_order() {
        let drawn = DrawnNumbers::from_numbers(vec![9, 2, 7, 4], 20).unwrap();
        assert_eq!(drawn.sorted(), vec![2, 4, 7, 9]);
        assert_eq!(drawn.as_slice(), &[9, 2, 7, 4]);
        assert!(drawn.contains(7));
        assert!(!drawn.contains(1));
    }
}
