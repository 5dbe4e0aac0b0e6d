use comfy_table::{presets::UTF8_FULL, Table};
use lotto_engine::{LotteryError, PrizeTable, RoundResult};

fn join(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_round(result: &RoundResult) {
    println!();
    println!("The Lottery Numbers are {}", join(result.drawn.as_slice()));

    for ticket in result.winning_tickets() {
        println!(
            "Ticket {} winning numbers: {}",
            ticket.index + 1,
            join(&ticket.correct_guesses)
        );
    }

    if !result.tickets.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Ticket", "Guesses", "Correct", "Prize"]);

        for ticket in &result.tickets {
            table.add_row(vec![
                (ticket.index + 1).to_string(),
                join(&ticket.guesses),
                ticket.correct_guesses.len().to_string(),
                ticket.prize.to_string(),
            ]);
        }

        println!("{}", table);
    }

    println!("You won {} ₪!", result.total_prize);
    tracing::debug!(
        "Round {} drawn at {}",
        result.session_id,
        result.drawn_at.format("%Y-%m-%d %H:%M:%S")
    );
}

/// One line per rejected ticket, e.g. `Ticket 2: duplicate number (5)`
pub fn print_rejections(err: &LotteryError) {
    for ticket_error in err.ticket_errors() {
        eprintln!("{}", ticket_error);
    }
}

pub fn print_prize_table(prize_table: &PrizeTable) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Correct guesses", "Prize (₪)"]);

    for (matches, prize) in prize_table.iter() {
        table.add_row(vec![matches.to_string(), prize.to_string()]);
    }

    println!("{}", table);
}
