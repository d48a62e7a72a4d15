//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder for creating [`FsmConfig`] values
//! with minimal boilerplate. Registration order defines the configuration's
//! state order, which queries such as [`Fsm::states`](crate::Fsm::states)
//! preserve.

pub mod error;

pub use error::BuildError;

use crate::core::{FsmConfig, StateDefinition};
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// Mirrors the configuration's minimal-validation contract: `build` requires
/// an initial state to have been set but performs no cross-checking of
/// transition targets or of the initial state's membership in the state set.
///
/// # Example
///
/// ```rust
/// use retrace::FsmConfig;
///
/// let config = FsmConfig::builder()
///     .initial("hungry")
///     .transition("hungry", "eat", "full")
///     .transition("full", "rest", "hungry")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.states().collect::<Vec<_>>(), vec!["hungry", "full"]);
/// ```
pub struct ConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDefinition>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Register a state with no outgoing transitions.
    ///
    /// Registering an already-seen state is a no-op that keeps its existing
    /// rules and its original position.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Add a transition rule, registering `from` if it is unseen.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if no initial state was set.
    pub fn build(self) -> Result<FsmConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(FsmConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
