use crate::config::GameConfig;
use crate::error::{LotteryError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Outcome of checking a ticket for repeated guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        reason: &'static str,
        duplicate: u32,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid { reason, duplicate } => write!(f, "{} ({})", reason, duplicate),
        }
    }
}

/// Scan guesses in order and stop at the first value seen twice
pub fn validate(guesses: &[u32]) -> ValidationResult {
    let mut seen = HashSet::with_capacity(guesses.len());
    for &guess in guesses {
        if !seen.insert(guess) {
            return ValidationResult::Invalid {
                reason: "duplicate number",
                duplicate: guess,
            };
        }
    }
    ValidationResult::Valid
}

/// Range check done where guesses are collected
pub fn check_range(ticket: usize, value: u32, max: u32) -> Result<u32> {
    if value == 0 || value > max {
        return Err(LotteryError::OutOfRangeGuess { ticket, value, max });
    }
    Ok(value)
}

/// A validated ticket, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ticket {
    guesses: Vec<u32>,
}

impl Ticket {
    /// Build the ticket at slot `index`, reporting every problem found
    pub fn new(
        index: usize,
        guesses: Vec<u32>,
        config: &GameConfig,
    ) -> std::result::Result<Self, Vec<LotteryError>> {
        let mut errors = Vec::new();

        if guesses.len() != config.numbers_per_ticket {
            errors.push(LotteryError::WrongGuessCount {
                ticket: index,
                expected: config.numbers_per_ticket,
                actual: guesses.len(),
            });
        }

        errors.extend(
            guesses
                .iter()
                .filter_map(|&g| check_range(index, g, config.highest_number).err()),
        );

        if let ValidationResult::Invalid { duplicate, .. } = validate(&guesses) {
            errors.push(LotteryError::DuplicateGuess {
                ticket: index,
                value: duplicate,
            });
        }

        if errors.is_empty() {
            Ok(Self { guesses })
        } else {
            Err(errors)
        }
    }

    pub fn guesses(&self) -> &[u32] {
        &self.guesses
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unique() {
        assert!(validate(&[1, 2, 3, 4]).is_valid());
        assert!(validate(&[]).is_valid());
    }

    #[test]
    fn test_validate_names_duplicate() {
        let result = validate(&[1, 1, 2, 3]);
        assert_eq!(
            result,
            ValidationResult::Invalid {
                reason: "duplicate number",
                duplicate: 1,
            }
        );
        assert_eq!(result.to_string(), "duplicate number (1)");
    }

    #[test]
    fn test_validate_reports_first_repeat() {
        // 5 repeats before 2 does
        let result = validate(&[2, 5, 5, 2]);
        assert!(matches!(
            result,
            ValidationResult::Invalid { duplicate: 5, .. }
        ));
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(0, 1, 20).unwrap(), 1);
        assert_eq!(check_range(0, 20, 20).unwrap(), 20);
        assert!(matches!(
            check_range(3, 0, 20),
            Err(LotteryError::OutOfRangeGuess { ticket: 3, value: 0, max: 20 })
        ));
        assert!(check_range(0, 21, 20).is_err());
    }

    #[test]
    fn test_ticket_new() {
        let config = GameConfig::default();
        let ticket = Ticket::new(0, vec![4, 8, 15, 16], &config).unwrap();
        assert_eq!(ticket.guesses(), &[4, 8, 15, 16]);
        assert_eq!(ticket.len(), 4);
    }

    #[test]
    fn test_ticket_new_collects_all_errors() {
        let config = GameConfig::default();
        let errors = Ticket::new(2, vec![1, 1, 42], &config).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(matches!(
            errors[0],
            LotteryError::WrongGuessCount { ticket: 2, expected: 4, actual: 3 }
        ));
        assert!(matches!(
            errors[1],
            LotteryError::OutOfRangeGuess { ticket: 2, value: 42, .. }
        ));
        assert!(matches!(
            errors[2],
            LotteryError::DuplicateGuess { ticket: 2, value: 1 }
        ));
    }
}
