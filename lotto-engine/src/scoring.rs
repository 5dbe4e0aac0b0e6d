use crate::drawer::DrawnNumbers;
use crate::error::{LotteryError, Result};
use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};

/// Prize by number of correct guesses, index 0 is the no-match prize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeTable(Vec<u64>);

impl Default for PrizeTable {
    fn default() -> Self {
        Self(vec![0, 10, 40, 100, 1000])
    }
}

impl PrizeTable {
    pub fn new(prizes: Vec<u64>) -> Self {
        Self(prizes)
    }

    pub fn prize_for(&self, matches: usize) -> Option<u64> {
        self.0.get(matches).copied()
    }

    /// Highest match count that has a prize
    pub fn max_matches(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_non_decreasing(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// `(matches, prize)` pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

/// Pure scoring of tickets against a draw
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    prize_table: &'a PrizeTable,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(prize_table: &'a PrizeTable) -> Self {
        Self { prize_table }
    }

    /// Guesses found in the draw, in the ticket's order
    pub fn correct_guesses(&self, ticket: &Ticket, drawn: &DrawnNumbers) -> Vec<u32> {
        ticket
            .guesses()
            .iter()
            .copied()
            .filter(|&guess| drawn.contains(guess))
            .collect()
    }

    pub fn ticket_prize(&self, ticket: &Ticket, drawn: &DrawnNumbers) -> Result<u64> {
        let matches = self.correct_guesses(ticket, drawn).len();
        self.prize_table
            .prize_for(matches)
            .ok_or(LotteryError::NoPrize { matches })
    }

    pub fn total_prize(&self, tickets: &[Ticket], drawn: &DrawnNumbers) -> Result<u64> {
        let mut total = 0u64;
        for ticket in tickets {
            total = total
                .checked_add(self.ticket_prize(ticket, drawn)?)
                .ok_or(LotteryError::PrizeOverflow)?;
        }
        Ok(total)
    }
}
