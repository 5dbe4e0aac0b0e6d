use crate::config::GameConfig;
use crate::drawer::{DrawnNumbers, RandomDrawer};
use crate::scoring::ScoringEngine;
use crate::ticket::Ticket;
use crate::{LotteryError, Result};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Round state of a lottery session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Collecting,
    Drawn,
}

#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    id: Uuid,
    config: GameConfig,
    state: GameState,
    ticket_slots: usize,
    tickets: Vec<Ticket>,
    drawn: Option<DrawnNumbers>,
    drawn_at: Option<DateTime<Utc>>,
    drawer: RandomDrawer<R>,
}

impl GameSession<StdRng> {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_drawer(config, RandomDrawer::from_entropy())
    }

    /// Session whose draws are reproducible from `seed`
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_drawer(config, RandomDrawer::from_seed(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// New session with no ticket slots yet
    pub fn with_drawer(config: GameConfig, drawer: RandomDrawer<R>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            config,
            state: GameState::Collecting,
            ticket_slots: 0,
            tickets: Vec::new(),
            drawn: None,
            drawn_at: None,
            drawer,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of ticket slots the player has opened
    pub fn ticket_count(&self) -> usize {
        self.ticket_slots
    }

    /// Tickets committed by the last successful submission
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn drawn(&self) -> Option<&DrawnNumbers> {
        self.drawn.as_ref()
    }

    pub fn is_full(&self) -> bool {
        self.ticket_slots >= self.config.max_tickets
    }

    pub fn can_add_ticket(&self) -> bool {
        matches!(self.state, GameState::Collecting) && !self.is_full()
    }

    /// Open another empty ticket slot
    pub fn add_ticket(&mut self) -> Result<usize> {
        if !matches!(self.state, GameState::Collecting) {
            return Err(LotteryError::invalid_state(
                "Numbers already drawn, restart to add tickets",
            ));
        }

        if self.is_full() {
            return Err(LotteryError::SessionFull {
                max: self.config.max_tickets,
            });
        }

        self.ticket_slots += 1;
        tracing::debug!(
            "Session {} opened ticket {}/{}",
            self.id,
            self.ticket_slots,
            self.config.max_tickets
        );

        Ok(self.ticket_slots)
    }

    /// Validate every ticket, then draw and score the round.
    ///
    /// `raw_tickets[i]` holds the guesses of ticket slot `i`. Nothing is
    /// committed unless all tickets are valid.
    pub fn submit_tickets(&mut self, raw_tickets: Vec<Vec<u32>>) -> Result<RoundResult> {
        if !matches!(self.state, GameState::Collecting) {
            return Err(LotteryError::invalid_state(
                "Tickets already submitted, restart to play again",
            ));
        }

        if raw_tickets.len() > self.ticket_slots {
            return Err(LotteryError::TooManyTickets {
                submitted: raw_tickets.len(),
                slots: self.ticket_slots,
            });
        }

        let mut tickets = Vec::with_capacity(raw_tickets.len());
        let mut errors = Vec::new();
        for (index, guesses) in raw_tickets.into_iter().enumerate() {
            match Ticket::new(index, guesses, &self.config) {
                Ok(ticket) => tickets.push(ticket),
                Err(ticket_errors) => errors.extend(ticket_errors),
            }
        }

        if !errors.is_empty() {
            tracing::warn!(
                "Session {} rejected submission with {} error(s)",
                self.id,
                errors.len()
            );
            return Err(LotteryError::RejectedTickets(errors));
        }

        let drawn = self
            .drawer
            .draw(self.config.numbers_per_ticket, self.config.highest_number)?;

        self.tickets = tickets;
        self.drawn = Some(drawn);
        self.drawn_at = Some(Utc::now());
        self.state = GameState::Drawn;

        let result = self.result()?;
        tracing::info!(
            "Session {} drew {:?}: {} ticket(s), total prize {}",
            self.id,
            result.drawn.sorted(),
            result.tickets.len(),
            result.total_prize
        );

        Ok(result)
    }

    /// Scored outcome of the drawn round
    pub fn result(&self) -> Result<RoundResult> {
        let (drawn, drawn_at) = match (&self.drawn, self.drawn_at) {
            (Some(drawn), Some(drawn_at)) => (drawn, drawn_at),
            _ => return Err(LotteryError::invalid_state("Numbers not drawn yet")),
        };

        let engine = ScoringEngine::new(&self.config.prize_table);
        let tickets = self
            .tickets
            .iter()
            .enumerate()
            .map(|(index, ticket)| -> Result<TicketResult> {
                Ok(TicketResult {
                    index,
                    guesses: ticket.guesses().to_vec(),
                    correct_guesses: engine.correct_guesses(ticket, drawn),
                    prize: engine.ticket_prize(ticket, drawn)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RoundResult {
            session_id: self.id,
            drawn: drawn.clone(),
            total_prize: engine.total_prize(&self.tickets, drawn)?,
            tickets,
            drawn_at,
        })
    }

    /// Throw the round away and start over with one empty ticket
    pub fn restart(&mut self) {
        self.id = Uuid::new_v4();
        self.state = GameState::Collecting;
        self.tickets.clear();
        self.drawn = None;
        self.drawn_at = None;
        self.ticket_slots = 1;

        tracing::info!("Session {} started", self.id);
    }
}

/// Per-ticket outcome of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResult {
    pub index: usize,
    pub guesses: Vec<u32>,
    pub correct_guesses: Vec<u32>,
    pub prize: u64,
}

/// Round outcome for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    pub session_id: Uuid,
    pub drawn: DrawnNumbers,
    pub tickets: Vec<TicketResult>,
    pub total_prize: u64,
    pub drawn_at: DateTime<Utc>,
}

impl RoundResult {
    /// Tickets with at least one correct guess
    pub fn winning_tickets(&self) -> impl Iterator<Item = &TicketResult> {
        self.tickets
            .iter()
            .filter(|t| !t.correct_guesses.is_empty())
    }
}
