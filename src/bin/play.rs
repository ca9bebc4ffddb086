//! Terminal front-end for the Deal or No Deal engine.
//!
//! This binary is a presentation collaborator: it reads choices from stdin,
//! drives the session through its public operations, and re-renders state
//! after each call. All currency formatting lives here, not in the core.

use std::io::{self, BufRead, Write};

use dond_engine::{ContainerId, GameSession, Money, Outcome, Phase};

fn main() {
    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    let mut game = match seed {
        Some(seed) => GameSession::new(seed),
        None => GameSession::from_entropy(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("=== DEAL OR NO DEAL ===");
    println!("(game seed: {})", game.seed());

    if let Err(e) = game.start() {
        eprintln!("{}", e);
        return;
    }

    loop {
        match game.phase() {
            Phase::ChoosingContainer => {
                println!("\nPick the case you will keep (1-26):");
                let Some(id) = read_case_id(&mut lines) else { return };
                if let Err(e) = game.choose_container(id) {
                    println!("{}", e);
                }
            }
            Phase::EliminatingContainers => {
                render_board(&game);
                println!(
                    "\nRound {}: open {} more case{}.",
                    game.round(),
                    game.remaining_in_batch(),
                    if game.remaining_in_batch() == 1 { "" } else { "s" }
                );
                let Some(id) = read_case_id(&mut lines) else { return };
                match game.eliminate(id) {
                    Ok(value) => println!("Case {} held {}.", id.get(), format_money(value)),
                    Err(e) => println!("{}", e),
                }
            }
            Phase::ReviewingOffer => {
                let offer = game.offer().unwrap_or_default();
                println!("\nThe banker offers {}.", format_money(offer));
                println!("Deal or no deal? (d/n)");
                let Some(line) = next_line(&mut lines) else { return };
                let accept = match line.trim() {
                    "d" | "deal" => true,
                    "n" | "no" => false,
                    _ => {
                        println!("Answer 'd' or 'n'.");
                        continue;
                    }
                };
                if let Err(e) = game.respond_to_offer(accept) {
                    println!("{}", e);
                }
            }
            Phase::Finished => {
                match game.outcome() {
                    Some(Outcome::Deal(amount)) => {
                        println!("\nDEAL! You walk away with {}.", format_money(amount));
                        if let Some(id) = game.chosen_container() {
                            if let Some(kept) = game.containers().iter().find(|c| c.id() == id) {
                                println!("Your case held {}.", format_money(kept.value()));
                            }
                        }
                    }
                    Some(Outcome::NoDeal(amount)) => {
                        println!("\nNo deal to the end! Your case held {}.", format_money(amount));
                    }
                    None => {}
                }
                println!("Play again? (y/n)");
                let Some(line) = next_line(&mut lines) else { return };
                if line.trim() != "y" {
                    return;
                }
                if let Err(e) = game.start() {
                    eprintln!("{}", e);
                    return;
                }
            }
            Phase::NotStarted => return,
        }
        let _ = io::stdout().flush();
    }
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next()?.ok()
}

fn read_case_id(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<ContainerId> {
    let line = next_line(lines)?;
    match line.trim().parse::<u8>() {
        Ok(n) => Some(ContainerId::new(n)),
        Err(_) => {
            println!("Enter a case number between 1 and 26.");
            Some(ContainerId::new(0)) // rejected by the session
        }
    }
}

/// Show the money board (eliminated values struck) and the unopened cases.
fn render_board(game: &GameSession) {
    println!("\n--- Money board ---");
    for value in game.board_values() {
        if game.eliminated_values().contains(value) {
            println!("  [ --- ] {}", format_money(*value));
        } else {
            println!("  [     ] {}", format_money(*value));
        }
    }

    let closed: Vec<String> = game
        .containers()
        .iter()
        .filter(|c| !c.is_opened())
        .map(|c| {
            if Some(c.id()) == game.chosen_container() {
                format!("[{}]", c.id().get())
            } else {
                c.id().get().to_string()
            }
        })
        .collect();
    println!("Cases in play: {}", closed.join(" "));
}

/// Format cents as a dollar amount: `$1,000,000`, or `$0.01` when there are
/// leftover cents.
fn format_money(amount: Money) -> String {
    let dollars = amount.cents() / 100;
    let cents = amount.cents() % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents == 0 {
        format!("${}", grouped)
    } else {
        format!("${}.{:02}", grouped, cents)
    }
}
