//! Lottery game engine
//!
//! Players fill tickets of unique guesses, the engine draws unique winning
//! numbers and pays each ticket by how many of its guesses were drawn.

pub mod config;
pub mod drawer;
pub mod error;
pub mod game;
pub mod scoring;
pub mod ticket;

pub use config::GameConfig;
pub use drawer::{DrawnNumbers, RandomDrawer};
pub use error::{LotteryError, Result};
pub use game::{GameSession, GameState, RoundResult, TicketResult};
pub use scoring::{PrizeTable, ScoringEngine};
pub use ticket::{Ticket, ValidationResult};

/// Start a session ready for play, with one empty ticket
pub fn start_session(config: GameConfig, seed: Option<u64>) -> Result<GameSession> {
    let mut session = match seed {
        Some(seed) => GameSession::seeded(config, seed)?,
        None => GameSession::new(config)?,
    };
    session.restart();
    Ok(session)
}
