//! Traffic Light Controller
//!
//! This example drives a pedestrian crossing with timeouts and events.
//!
//! Key concepts:
//! - Timed states cycling on their own
//! - A guarded event (the crossing button) cutting a phase short
//! - Trace output routed through `tracing`
//!
//! Run with: RUST_LOG=autostate=debug cargo run --example traffic_light

use autostate::engine::{Clock, Engine, ManualClock, TracingSink};
use autostate::{event_ids, state_ids, StateDef, TransitionDef};
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

state_ids! {
    enum Light {
        Red = 1,
        Green = 2,
        Yellow = 3,
    }
}

event_ids! {
    enum Input {
        CrossingButton = 1,
    }
}

#[derive(Default)]
struct Crossing {
    green_ticks: u32,
    cars_waved_through: u32,
    walk_signals: u32,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Traffic Light Controller ===\n");

    let clock = ManualClock::new(0);
    let mut sink = TracingSink::new();
    let mut engine: Engine<'_, Crossing, ManualClock, 3, 2> =
        Engine::new(Crossing::default(), clock.clone());
    engine.enable_debug(&mut sink);

    engine
        .add_state(
            StateDef::new(Light::Red.id())
                .action(|_: &mut Crossing| {})
                .on_enter(|c: &mut Crossing| c.walk_signals += 1),
        )
        .expect("red state");
    engine
        .add_state(
            StateDef::new(Light::Green.id())
                .action(|c: &mut Crossing| {
                    c.green_ticks += 1;
                    c.cars_waved_through += 2;
                })
                .on_exit(|c: &mut Crossing| c.green_ticks = 0),
        )
        .expect("green state");
    engine
        .add_state(StateDef::new(Light::Yellow.id()).action(|_: &mut Crossing| {}))
        .expect("yellow state");

    // Only cut green short once it has been on for a few ticks.
    engine
        .add_transition(
            TransitionDef::new(
                Light::Green.id(),
                Input::CrossingButton.id(),
                Light::Yellow.id(),
            )
            .when(|c: &Crossing| c.green_ticks >= 3),
        )
        .expect("button transition");

    engine.set_timeout(Light::Red.id(), Duration::from_millis(3_000), Light::Green.id());
    engine.set_timeout(Light::Green.id(), Duration::from_millis(5_000), Light::Yellow.id());
    engine.set_timeout(Light::Yellow.id(), Duration::from_millis(1_000), Light::Red.id());
    engine.set_initial_state(Light::Red.id());

    for tick in 0..40u64 {
        if tick == 14 || tick == 18 {
            let taken = engine.handle_event(Input::CrossingButton.id());
            println!("  t={:>5}ms button pressed, accepted: {taken}", tick * 500);
        }

        engine.update();

        if let Some(record) = engine.last_transition().filter(|r| r.at_ms == clock.now_ms()) {
            let name = engine
                .current_state()
                .and_then(|id| Light::try_from(id).ok())
                .map(|light| light.name())
                .unwrap_or("?");
            println!("  t={:>5}ms -> {name} ({:?})", record.at_ms, record.cause);
        }

        clock.advance(500);
    }

    let crossing = engine.into_context();
    println!();
    println!("Cars waved through: {}", crossing.cars_waved_through);
    println!("Walk signals shown: {}", crossing.walk_signals);

    println!("\n=== Example Complete ===");
}
