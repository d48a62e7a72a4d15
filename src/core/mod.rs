//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - Declarative machine descriptions via [`FsmConfig`] and [`StateDefinition`]
//! - The [`Fsm`] engine with transition resolution and undo/redo
//! - The [`TransitionHistory`] stacks
//! - The [`FsmError`] taxonomy
//!
//! All operations are synchronous, in-process method calls with no I/O.

mod config;
mod error;
mod history;
mod machine;

pub use config::{FsmConfig, StateDefinition};
pub use error::FsmError;
pub use history::TransitionHistory;
pub use machine::Fsm;
