//! Turnstile
//!
//! This example drives a coin-operated turnstile through a keyed machine.
//!
//! Key concepts:
//! - Enum keys declared with `state_keys!`
//! - The model is owned by the caller and passed to every step
//! - A self-loop keeps the machine in place while the action still runs
//! - Transition logging through `tracing`
//!
//! Run with: RUST_LOG=trace cargo run --example turnstile

use keyed_fsm::{state_keys, StateBuilder, StateMachineBuilder};
use tracing_subscriber::EnvFilter;

state_keys! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

#[derive(Debug)]
enum Event {
    Coin,
    Push,
}

#[derive(Debug, Default)]
struct Counters {
    coins: u32,
    passes: u32,
    refused: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile Example ===\n");

    let machine = StateMachineBuilder::new("turnstile")
        .state(
            StateBuilder::new()
                .key(Turnstile::Locked)
                .name("waiting for coin")
                .action(|c: &mut Counters, event: &Event| match event {
                    Event::Coin => {
                        c.coins += 1;
                        Turnstile::Unlocked
                    }
                    Event::Push => {
                        c.refused += 1;
                        Turnstile::Locked
                    }
                }),
        )
        .and_then(|b| {
            b.state(
                StateBuilder::new()
                    .key(Turnstile::Unlocked)
                    .name("open")
                    .action(|c: &mut Counters, event: &Event| match event {
                        Event::Coin => {
                            c.coins += 1;
                            Turnstile::Unlocked
                        }
                        Event::Push => {
                            c.passes += 1;
                            Turnstile::Locked
                        }
                    }),
            )
        })
        .and_then(|b| b.build());

    let mut machine = match machine {
        Ok(machine) => machine,
        Err(err) => {
            eprintln!("failed to build turnstile: {err}");
            return;
        }
    };

    println!("{machine}");

    let mut counters = Counters::default();
    let events = [Event::Push, Event::Coin, Event::Coin, Event::Push, Event::Push];

    for event in &events {
        match machine.execute(&mut counters, event) {
            Ok(key) => println!("{event:?} -> {key}"),
            Err(err) => println!("{event:?} failed: {err}"),
        }
    }

    println!("\nCounters: {counters:?}");
    println!("Summary: {:?}", machine.summary());

    println!("\n=== Example Complete ===");
}
