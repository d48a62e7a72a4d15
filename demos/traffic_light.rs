//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine described
//! entirely by configuration.
//!
//! Key concepts:
//! - Declarative state and transition rules
//! - Event-driven transitions via `trigger`
//! - Querying states by the events they handle
//!
//! Run with: cargo run --example traffic_light

use retrace::{Fsm, FsmConfig};

fn main() {
    let config = FsmConfig::builder()
        .initial("red")
        .transition("red", "change", "green")
        .transition("green", "change", "yellow")
        .transition("yellow", "change", "red")
        .build()
        .expect("initial state is set");

    let mut fsm = Fsm::new(Some(config)).expect("config supplied");

    println!("=== Traffic Light State Machine ===\n");
    println!("Declared states: {:?}", fsm.states(None));
    println!("States handling 'change': {:?}\n", fsm.states(Some("change")));

    println!("Initial state: {}", fsm.state());
    for _ in 0..4 {
        fsm.trigger("change").expect("every state handles 'change'");
        println!("  change -> {}", fsm.state());
    }

    println!("\nThe cycle repeats: red -> green -> yellow -> red -> ...");
    println!("\n=== Example Complete ===");
}
