use crate::error::{LotteryError, Result};
use crate::scoring::PrizeTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const HIGHEST_LOTTERY_NUMBER: u32 = 20;
pub const NUMBERS_PER_TICKET: usize = 4;
pub const MAX_LOTTERY_TICKETS: usize = 5;

/// Constants a game is played with, fixed once a session is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub highest_number: u32,
    pub numbers_per_ticket: usize,
    pub max_tickets: usize,
    pub prize_table: PrizeTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            highest_number: HIGHEST_LOTTERY_NUMBER,
            numbers_per_ticket: NUMBERS_PER_TICKET,
            max_tickets: MAX_LOTTERY_TICKETS,
            prize_table: PrizeTable::default(),
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded game config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.highest_number == 0 {
            return Err(LotteryError::config("Highest number must be greater than 0"));
        }

        if self.numbers_per_ticket == 0 {
            return Err(LotteryError::config(
                "Numbers per ticket must be greater than 0",
            ));
        }

        // the drawer can never collect more unique numbers than the range holds
        if self.numbers_per_ticket as u64 > u64::from(self.highest_number) {
            return Err(LotteryError::config(format!(
                "Cannot draw {} unique numbers from 1..={}",
                self.numbers_per_ticket, self.highest_number
            )));
        }

        if self.max_tickets == 0 {
            return Err(LotteryError::config("Max tickets must be greater than 0"));
        }

        if self.prize_table.max_matches() != Some(self.numbers_per_ticket) {
            return Err(LotteryError::config(format!(
                "Prize table must have {} entries (0..={} correct guesses), found {}",
                self.numbers_per_ticket + 1,
                self.numbers_per_ticket,
                self.prize_table.len()
            )));
        }

        if !self.prize_table.is_non_decreasing() {
            return Err(LotteryError::config(
                "Prizes must not decrease as correct guesses increase",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.highest_number, 20);
        assert_eq!(config.numbers_per_ticket, 4);
        assert_eq!(config.max_tickets, 5);
    }

    #[test]
    fn test_rejects_more_numbers_than_range() {
        let config = GameConfig {
            highest_number: 3,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(LotteryError::Config(_))));
    }

    #[test]
    fn test_rejects_mismatched_prize_table() {
        let config = GameConfig {
            prize_table: PrizeTable::new(vec![0, 10, 40]),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(LotteryError::Config(_))));
    }

    #[test]
    fn test_rejects_decreasing_prize_table() {
        let config = GameConfig {
            prize_table: PrizeTable::new(vec![0, 100, 40, 100, 1000]),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(LotteryError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "highest_number": 10,
                "numbers_per_ticket": 2,
                "max_tickets": 3,
                "prize_table": [0, 5, 50]
            }}"#
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.highest_number, 10);
        assert_eq!(config.numbers_per_ticket, 2);
        assert_eq!(config.max_tickets, 3);
        assert_eq!(config.prize_table.prize_for(2), Some(50));
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"highest_number": 0, "numbers_per_ticket": 4, "max_tickets": 5, "prize_table": [0, 10, 40, 100, 1000]}}"#
        )
        .unwrap();

        assert!(GameConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(LotteryError::Io(_))));
    }
}
