mod render;

use anyhow::Context;
use dialoguer::{Confirm, Input};
use lotto_engine::{start_session, ticket, GameConfig, GameSession, LotteryError};

use render::{print_prize_table, print_rejections, print_round};

/// Guesses of one `--ticket` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketGuesses(pub Vec<u32>);

pub fn parse_ticket(arg: &str) -> Result<TicketGuesses, String> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| format!("'{}' is not a whole number", s))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(TicketGuesses)
}

/// Interactive game loop: fill tickets, draw, show results, maybe play again
pub fn play(config: GameConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let mut session = start_session(config, seed)?;

    loop {
        let mut tickets = vec![prompt_ticket(&session, 0)?];
        while session.can_add_ticket()
            && Confirm::new()
                .with_prompt("Add another ticket?")
                .default(false)
                .interact()?
        {
            session.add_ticket()?;
            tickets.push(prompt_ticket(&session, tickets.len())?);
        }

        let result = loop {
            match session.submit_tickets(tickets.clone()) {
                Ok(result) => break result,
                Err(err @ LotteryError::RejectedTickets(_)) => {
                    print_rejections(&err);
                    let mut rejected: Vec<usize> = err
                        .ticket_errors()
                        .iter()
                        .filter_map(LotteryError::ticket_index)
                        .collect();
                    rejected.dedup();

                    for index in rejected {
                        println!("Re-enter ticket {}", index + 1);
                        tickets[index] = prompt_ticket(&session, index)?;
                    }
                }
                Err(err) => return Err(err.into()),
            }
        };

        print_round(&result);

        if !Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()?
        {
            return Ok(());
        }
        session.restart();
    }
}

/// Single non-interactive round
pub fn quick(
    config: GameConfig,
    seed: Option<u64>,
    tickets: Vec<TicketGuesses>,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = start_session(config, seed)?;
    // the session opens with one slot
    for _ in 1..tickets.len() {
        session
            .add_ticket()
            .context("Too many tickets for this game")?;
    }

    let tickets = tickets.into_iter().map(|t| t.0).collect();
    let result = match session.submit_tickets(tickets) {
        Ok(result) => result,
        Err(err @ LotteryError::RejectedTickets(_)) => {
            print_rejections(&err);
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_round(&result);
    }

    Ok(())
}

pub fn show_prizes(config: &GameConfig) -> anyhow::Result<()> {
    println!(
        "Pick {} different numbers from 1 to {}, up to {} tickets per game.",
        config.numbers_per_ticket, config.highest_number, config.max_tickets
    );
    print_prize_table(&config.prize_table);
    Ok(())
}

fn prompt_ticket(session: &GameSession, index: usize) -> anyhow::Result<Vec<u32>> {
    let config = session.config();
    let max = config.highest_number;

    (1..=config.numbers_per_ticket)
        .map(|guess| {
            Input::<u32>::new()
                .with_prompt(format!("Ticket {} guess #{}", index + 1, guess))
                .validate_with(move |value: &u32| -> Result<(), String> {
                    ticket::check_range(index, *value, max)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(anyhow::Error::from)
        })
        .collect()
}
