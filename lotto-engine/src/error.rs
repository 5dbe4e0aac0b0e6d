use thiserror::Error;

pub type Result<T> = std::result::Result<T, LotteryError>;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Ticket {}: duplicate number ({value})", .ticket + 1)]
    DuplicateGuess { ticket: usize, value: u32 },

    #[error("Ticket {}: number {value} is outside 1..={max}", .ticket + 1)]
    OutOfRangeGuess { ticket: usize, value: u32, max: u32 },

    #[error("Ticket {}: expected {expected} numbers, got {actual}", .ticket + 1)]
    WrongGuessCount {
        ticket: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Session is full ({max} tickets)")]
    SessionFull { max: usize },

    #[error("Too many tickets submitted: {submitted} for {slots} ticket slots")]
    TooManyTickets { submitted: usize, slots: usize },

    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("{} ticket(s) rejected", .0.len())]
    RejectedTickets(Vec<LotteryError>),

    #[error("Total prize does not fit in a u64")]
    PrizeOverflow,

    #[error("No prize configured for {matches} correct guesses")]
    NoPrize { matches: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LotteryError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Zero-based index of the ticket this error refers to, if any
    pub fn ticket_index(&self) -> Option<usize> {
        match self {
            Self::DuplicateGuess { ticket, .. }
            | Self::OutOfRangeGuess { ticket, .. }
            | Self::WrongGuessCount { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Flattens a rejected submission into its per-ticket errors
    pub fn ticket_errors(&self) -> &[LotteryError] {
        match self {
            Self::RejectedTickets(errors) => errors,
            other => std::slice::from_ref(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_messages_are_one_based() {
        let err = LotteryError::DuplicateGuess {
            ticket: 0,
            value: 7,
        };
        assert_eq!(err.to_string(), "Ticket 1: duplicate number (7)");
        assert_eq!(err.ticket_index(), Some(0));
    }

    #[test]
    fn test_rejected_tickets_flatten() {
        let err = LotteryError::RejectedTickets(vec![
            LotteryError::DuplicateGuess {
                ticket: 1,
                value: 3,
            },
            LotteryError::OutOfRangeGuess {
                ticket: 2,
                value: 25,
                max: 20,
            },
        ]);

        assert_eq!(err.to_string(), "2 ticket(s) rejected");
        let indexes: Vec<_> = err
            .ticket_errors()
            .iter()
            .filter_map(|e| e.ticket_index())
            .collect();
        assert_eq!(indexes, vec![1, 2]);
        assert_eq!(LotteryError::SessionFull { max: 5 }.ticket_errors().len(), 1);
    }
}
