//! Editor Mode Machine with Undo/Redo
//!
//! This example demonstrates the history side of the engine: walking back
//! through visited states, re-applying undone changes, and how any new
//! forward move discards the redo stack.
//!
//! Run with: cargo run --example editor_modes

use retrace::{Fsm, FsmConfig};

fn main() {
    let config = FsmConfig::builder()
        .initial("viewing")
        .transition("viewing", "edit", "editing")
        .transition("editing", "preview", "previewing")
        .transition("editing", "close", "viewing")
        .transition("previewing", "close", "viewing")
        .build()
        .expect("initial state is set");

    let mut fsm = Fsm::new(Some(config)).expect("config supplied");

    println!("=== Editor Modes with Undo/Redo ===\n");

    fsm.trigger("edit").expect("viewing handles 'edit'");
    fsm.trigger("preview").expect("editing handles 'preview'");
    println!("After edit, preview: {}", fsm.state());
    println!("Undo stack: {:?}", fsm.history().undo_stack());

    fsm.undo();
    fsm.undo();
    println!("\nAfter two undos: {}", fsm.state());
    println!("Redo stack: {:?}", fsm.history().redo_stack());

    fsm.redo();
    println!("\nAfter one redo: {}", fsm.state());

    // A fresh forward move throws the remaining redo entry away.
    fsm.trigger("close").expect("editing handles 'close'");
    println!("\nAfter close: {}", fsm.state());
    println!("Redo stack: {:?}", fsm.history().redo_stack());

    fsm.clear_history();
    println!("\nAfter clear_history: {} (history empty)", fsm.state());

    println!("\n=== Example Complete ===");
}
