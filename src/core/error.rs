//! Errors raised by the FSM engine.

use thiserror::Error;

/// Errors that can occur while constructing or driving an [`Fsm`](crate::Fsm).
///
/// Every variant is fatal to the single operation that raised it; the engine
/// never retries internally. `undo`/`redo` communicate unavailability through
/// their boolean result instead, since an empty history is a normal condition
/// rather than a caller mistake.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("No configuration supplied. The FSM requires a config to construct")]
    ConfigMissing,

    #[error("Unknown state '{0}'. It is not present in the configuration")]
    UnknownState(String),

    #[error("No transition for event '{event}' from state '{state}'")]
    NoSuchTransition { state: String, event: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
