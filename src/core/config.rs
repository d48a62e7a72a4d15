//! Declarative machine description.
//!
//! A configuration names the states a machine can occupy, designates one of
//! them as the initial state, and attaches to each state the events that move
//! out of it. State order is significant: queries such as
//! [`Fsm::states`](crate::Fsm::states) report states in the order they were
//! declared, so both maps preserve insertion order.

use super::error::FsmError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-state transition rules.
///
/// Maps an event name to the target state that event moves the machine to.
/// Target names are *not* validated against the configured state set — a
/// transition may point at an undeclared state, and the engine only discovers
/// this when a later `trigger` finds no rules for the current state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name to target state name, in declaration order.
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition rule, consuming and returning the definition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::StateDefinition;
    ///
    /// let def = StateDefinition::new().on("eat", "full").on("sleep", "asleep");
    /// assert!(def.handles("eat"));
    /// assert!(!def.handles("run"));
    /// ```
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Check whether this state has a rule for `event` (exact match).
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete declarative description of a finite state machine.
///
/// Supplied once at construction and never mutated afterwards. Validation is
/// deliberately minimal: neither `initial` nor any transition target is
/// checked against `states` here — validation happens at usage time, when
/// [`Fsm::change_state`](crate::Fsm::change_state) or
/// [`Fsm::trigger`](crate::Fsm::trigger) is called.
///
/// # Example
///
/// ```rust
/// use retrace::{FsmConfig, StateDefinition};
///
/// let config = FsmConfig::new("hungry")
///     .state("hungry", StateDefinition::new().on("eat", "full"))
///     .state("full", StateDefinition::new().on("rest", "hungry"));
///
/// assert!(config.has_state("full"));
/// assert_eq!(config.transition_target("hungry", "eat"), Some("full"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FsmConfig {
    /// Name of the starting state.
    pub initial: String,

    /// State name to definition, in declaration order.
    #[serde(default)]
    pub states: IndexMap<String, StateDefinition>,
}

impl FsmConfig {
    /// Create a configuration with the given initial state and no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Start building a configuration with the fluent builder.
    pub fn builder() -> crate::builder::ConfigBuilder {
        crate::builder::ConfigBuilder::new()
    }

    /// Add a state definition, consuming and returning the configuration.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Parse a configuration from its JSON wire shape.
    ///
    /// The shape is the crate's only external data contract: an `initial`
    /// state name and a `states` object mapping state names to objects with a
    /// `transitions` map. Declaration order of the JSON keys is preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::FsmConfig;
    ///
    /// let config = FsmConfig::from_json(
    ///     r#"{
    ///         "initial": "hungry",
    ///         "states": {
    ///             "hungry": { "transitions": { "eat": "full" } },
    ///             "full": { "transitions": { "rest": "hungry" } }
    ///         }
    ///     }"#,
    /// ).unwrap();
    ///
    /// assert_eq!(config.initial, "hungry");
    /// assert_eq!(config.states().collect::<Vec<_>>(), vec!["hungry", "full"]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        serde_json::from_str(json).map_err(|e| FsmError::InvalidConfig(e.to_string()))
    }

    /// Check whether `name` is a declared state.
    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Look up the target of `event` out of `state`.
    ///
    /// Returns `None` when `state` is not declared or has no rule for
    /// `event`; the two cases are indistinguishable by design.
    pub fn transition_target(&self, state: &str, event: &str) -> Option<&str> {
        self.states
            .get(state)?
            .transitions
            .get(event)
            .map(String::as_str)
    }

    /// Iterate over all declared state names in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Collect the states that have a rule for `event`, in declaration order.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, def)| def.handles(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
