//! Undo/redo history for state changes.
//!
//! The engine keeps two stacks of previously visited state names. Every
//! successful forward move pushes the displaced state onto the undo stack and
//! empties the redo stack; `undo` and `redo` shuttle states between the two.

use serde::{Deserialize, Serialize};

/// The two history stacks of an [`Fsm`](crate::Fsm), most-recent-last.
///
/// # Example
///
/// ```rust
/// use retrace::TransitionHistory;
///
/// let mut history = TransitionHistory::new();
/// history.record("hungry".to_string());
/// assert_eq!(history.undo_stack(), ["hungry"]);
///
/// let prior = history.pop_undo().unwrap();
/// history.push_redo("full".to_string());
/// assert_eq!(prior, "hungry");
/// assert_eq!(history.redo_stack(), ["full"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHistory {
    undo: Vec<String>,
    redo: Vec<String>,
}

impl TransitionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward move that displaced `prior`.
    ///
    /// Pushes `prior` onto the undo stack and clears the redo stack. Redo
    /// entries never survive a forward move, even one that lands back on the
    /// same state.
    pub fn record(&mut self, prior: String) {
        self.undo.push(prior);
        self.redo.clear();
    }

    /// Pop the most recent undo entry, if any.
    pub fn pop_undo(&mut self) -> Option<String> {
        self.undo.pop()
    }

    /// Pop the most recent redo entry, if any.
    pub fn pop_redo(&mut self) -> Option<String> {
        self.redo.pop()
    }

    /// Push a state onto the undo stack without touching the redo stack.
    pub fn push_undo(&mut self, state: String) {
        self.undo.push(state);
    }

    /// Push a state onto the redo stack.
    pub fn push_redo(&mut self, state: String) {
        self.redo.push(state);
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// The undo stack, oldest first.
    pub fn undo_stack(&self) -> &[String] {
        &self.undo
    }

    /// The redo stack, oldest first.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }

    /// Number of states available to undo.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of states available to redo.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
