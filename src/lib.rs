//! Retrace: a declarative finite state machine engine with undo/redo history.
//!
//! A machine is described up front by an [`FsmConfig`]: a set of named
//! states, one designated initial state, and per-state event rules mapping an
//! event name to a target state. The [`Fsm`] engine tracks the current state,
//! validates requested changes against the description, resolves events
//! through the current state's rules, and keeps an undo/redo history of every
//! state change.
//!
//! # Core Concepts
//!
//! - **Configuration**: immutable machine description, supplied once at
//!   construction ([`FsmConfig`], [`StateDefinition`])
//! - **Transitions**: event-driven moves resolved through the current state's
//!   rules ([`Fsm::trigger`]), or direct jumps ([`Fsm::change_state`])
//! - **History**: undo/redo stacks of previously visited states
//!   ([`TransitionHistory`]), cleared on every new forward move
//!
//! # Example
//!
//! ```rust
//! use retrace::{Fsm, FsmConfig};
//!
//! let config = FsmConfig::builder()
//!     .initial("hungry")
//!     .transition("hungry", "eat", "full")
//!     .transition("full", "rest", "hungry")
//!     .build()
//!     .unwrap();
//!
//! let mut fsm = Fsm::new(Some(config)).unwrap();
//! fsm.trigger("eat").unwrap();
//! assert_eq!(fsm.state(), "full");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "hungry");
//!
//! // States that handle a given event, in declaration order.
//! assert_eq!(fsm.states(Some("rest")), vec!["full"]);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{Fsm, FsmConfig, FsmError, StateDefinition, TransitionHistory};
