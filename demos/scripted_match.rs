//! Scripted Match
//!
//! A stand-in for the camera shell: a scripted "human" plays a predictable
//! cycle through the `GestureFeed` interface while the agent learns it.
//!
//! Key concepts:
//! - One `tick_with` call per frame
//! - Agent move committed at round start, human move read at countdown end
//! - Fumbled gestures abort the round without scoring or learning
//! - Seeded randomness for a reproducible run
//!
//! Run with: cargo run --example scripted_match

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rpsmind::core::{Move, Reading};
use rpsmind::round::{GestureFeed, TickEvent};
use rpsmind::RoundMachineBuilder;

const ROUNDS: usize = 24;

/// Plays Rock, Rock, Paper, Scissors over and over, and fumbles every
/// seventh round.
struct ScriptedHuman {
    round: usize,
    wants_round: bool,
}

impl ScriptedHuman {
    const PATTERN: [Move; 4] = [Move::Rock, Move::Rock, Move::Paper, Move::Scissors];

    fn next_round(&mut self) {
        self.round += 1;
        self.wants_round = true;
    }
}

impl GestureFeed for ScriptedHuman {
    fn current_reading(&mut self) -> Reading {
        if self.round % 7 == 6 {
            Reading::Unrecognized
        } else {
            Reading::Hand(Self::PATTERN[self.round % Self::PATTERN.len()])
        }
    }

    fn start_requested(&mut self) -> bool {
        std::mem::take(&mut self.wants_round)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        simplelog::ConfigBuilder::new()
            .set_target_level(log::LevelFilter::Off)
            .set_thread_level(log::LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("=== Scripted Match ===\n");

    let mut machine = RoundMachineBuilder::new()
        .countdown_ticks(6)
        .result_ticks(2)
        .ticks_per_count(2)
        .build(SmallRng::seed_from_u64(2024))?;

    let mut human = ScriptedHuman {
        round: 0,
        wants_round: true,
    };

    let mut played = 0;
    let mut shown: Vec<u32> = Vec::new();
    while played < ROUNDS {
        let event = machine.tick_with(&mut human);
        if let Some(digit) = machine.countdown() {
            if shown.last() != Some(&digit) {
                shown.push(digit);
            }
        }

        match event {
            TickEvent::Resolved { outcome, .. } => {
                println!("round {:>2}: countdown {shown:?} -> {outcome}", played + 1);
            }
            TickEvent::Aborted { reading } => {
                println!(
                    "round {:>2}: countdown {shown:?} -> {reading}, discarded",
                    played + 1
                );
            }
            _ => {}
        }

        if matches!(event, TickEvent::Cleared | TickEvent::Aborted { .. }) {
            played += 1;
            shown.clear();
            human.next_round();
        }
    }

    println!("\nFinal score: {}", machine.score());
    println!(
        "Memory holds {} of {} transitions",
        machine.memory().size(),
        machine.memory().capacity()
    );
    for mv in Move::ALL {
        let row = machine.memory().history_for(mv);
        let counts: Vec<String> = row.iter().map(|(next, n)| format!("{next}: {n}")).collect();
        println!("  after {mv:<8} -> {}", counts.join(", "));
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
