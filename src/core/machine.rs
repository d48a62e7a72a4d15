//! The FSM engine: current state, transition resolution, undo/redo.

use super::config::FsmConfig;
use super::error::FsmError;
use super::history::TransitionHistory;
use std::mem;

/// A finite state machine driven by a declarative [`FsmConfig`].
///
/// The machine owns its configuration, a mutable current-state cell, and an
/// undo/redo [`TransitionHistory`]. Every operation is a synchronous method
/// call that either completes or fails immediately; the machine assumes
/// exclusive ownership by one caller and defines no internal locking.
///
/// # Example
///
/// ```rust
/// use retrace::{Fsm, FsmConfig, StateDefinition};
///
/// let config = FsmConfig::new("hungry")
///     .state("hungry", StateDefinition::new().on("eat", "full"))
///     .state("full", StateDefinition::new().on("rest", "hungry"));
///
/// let mut fsm = Fsm::new(Some(config)).unwrap();
/// assert_eq!(fsm.state(), "hungry");
///
/// fsm.trigger("eat").unwrap();
/// assert_eq!(fsm.state(), "full");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "hungry");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "full");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: FsmConfig,
    current: String,
    history: TransitionHistory,
}

impl Fsm {
    /// Create a machine from a configuration.
    ///
    /// Fails with [`FsmError::ConfigMissing`] when no configuration is
    /// supplied. On success the current state is the configured initial state
    /// and both history stacks are empty.
    ///
    /// Note that `initial` is not checked for membership in the state set and
    /// transition targets are not resolved here; validation happens entirely
    /// at usage time.
    pub fn new(config: Option<FsmConfig>) -> Result<Self, FsmError> {
        let config = config.ok_or(FsmError::ConfigMissing)?;
        let current = config.initial.clone();
        Ok(Self {
            config,
            current,
            history: TransitionHistory::new(),
        })
    }

    /// The active state name.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The configuration this machine was built from.
    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// The undo/redo history.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Go directly to `target`, bypassing transition rules.
    ///
    /// Fails with [`FsmError::UnknownState`] when `target` is not a declared
    /// state, leaving the current state and history untouched. On success the
    /// displaced state is pushed onto the undo stack, the redo stack is
    /// cleared (even when `target` equals the current state), and the new
    /// current state is returned.
    pub fn change_state(&mut self, target: &str) -> Result<&str, FsmError> {
        if !self.config.has_state(target) {
            return Err(FsmError::UnknownState(target.to_string()));
        }
        let prior = mem::replace(&mut self.current, target.to_string());
        self.history.record(prior);
        Ok(&self.current)
    }

    /// Follow the current state's transition rule for `event`.
    ///
    /// The event name must match a rule key exactly. Fails with
    /// [`FsmError::NoSuchTransition`] when the current state has no rule for
    /// `event` — including the degenerate case where the current state is
    /// itself undeclared, which happens after following a rule whose target
    /// was never defined. The resolved target is not re-validated against the
    /// state set, so such a rule silently parks the machine on a ghost state
    /// from which only `change_state`, `reset`, `clear_history`, or a history
    /// walk can recover.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let target = self
            .config
            .transition_target(&self.current, event)
            .ok_or_else(|| FsmError::NoSuchTransition {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();
        let prior = mem::replace(&mut self.current, target);
        self.history.record(prior);
        Ok(())
    }

    /// Go back to the configured initial state.
    ///
    /// Leaves both history stacks untouched: entries accumulated before the
    /// reset remain and can still be undone or redone. Use
    /// [`clear_history`](Self::clear_history) to also discard history.
    pub fn reset(&mut self) -> &str {
        self.current.clone_from(&self.config.initial);
        &self.current
    }

    /// List declared states, optionally filtered by event.
    ///
    /// With `None` (or an empty event name, which the engine treats as
    /// absent) returns every declared state in declaration order. With an
    /// event name returns the states whose rules contain that event, in the
    /// same order. Never fails; an empty result means no state qualified.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|e| !e.is_empty()) {
            None => self.config.states().collect(),
            Some(event) => self.config.states_handling(event),
        }
    }

    /// Go back to the previously visited state.
    ///
    /// Returns `false` when there is nothing to undo. Otherwise the current
    /// state is pushed onto the redo stack, the most recent undo entry
    /// becomes current, and `true` is returned.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_undo() {
            Some(prior) => {
                let displaced = mem::replace(&mut self.current, prior);
                self.history.push_redo(displaced);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone state change.
    ///
    /// Returns `false` when there is nothing to redo. A single `undo`
    /// followed by a single `redo` restores the current state and both
    /// stacks exactly.
    pub fn redo(&mut self) -> bool {
        match self.history.pop_redo() {
            Some(next) => {
                let displaced = mem::replace(&mut self.current, next);
                self.history.push_undo(displaced);
                true
            }
            None => false,
        }
    }

    /// Return to the initial state and discard all history.
    pub fn clear_history(&mut self) {
        self.current.clone_from(&self.config.initial);
        self.history.clear();
    }
}
