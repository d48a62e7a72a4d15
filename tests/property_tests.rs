//! Property-based tests for the FSM engine.
//!
//! These tests use proptest to verify engine invariants hold across
//! many randomly generated configurations and operation sequences.

use proptest::prelude::*;
use retrace::{Fsm, FsmConfig, StateDefinition};

const STATES: [&str; 4] = ["alpha", "beta", "gamma", "delta"];
const EVENTS: [&str; 3] = ["advance", "retreat", "rewind"];

fn state_name() -> impl Strategy<Value = String> {
    prop::sample::select(STATES.to_vec()).prop_map(str::to_string)
}

fn event_name() -> impl Strategy<Value = String> {
    prop::sample::select(EVENTS.to_vec()).prop_map(str::to_string)
}

/// A configuration declaring all of `STATES`, where every transition target
/// is itself a declared state.
fn closed_config() -> impl Strategy<Value = FsmConfig> {
    prop::collection::vec(
        prop::collection::vec((event_name(), state_name()), 0..3),
        STATES.len(),
    )
    .prop_map(|per_state| {
        let mut config = FsmConfig::new(STATES[0]);
        for (state, rules) in STATES.iter().zip(per_state) {
            let mut def = StateDefinition::new();
            for (event, target) in rules {
                def = def.on(event, target);
            }
            config = config.state(*state, def);
        }
        config
    })
}

#[derive(Clone, Debug)]
enum Op {
    Change(String),
    Trigger(String),
    Undo,
    Redo,
    Reset,
    ClearHistory,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        state_name().prop_map(Op::Change),
        event_name().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::ClearHistory),
    ]
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..20)
}

fn apply(fsm: &mut Fsm, op: &Op) {
    match op {
        Op::Change(target) => {
            let _ = fsm.change_state(target);
        }
        Op::Trigger(event) => {
            let _ = fsm.trigger(event);
        }
        Op::Undo => {
            fsm.undo();
        }
        Op::Redo => {
            fsm.redo();
        }
        Op::Reset => {
            fsm.reset();
        }
        Op::ClearHistory => fsm.clear_history(),
    }
}

proptest! {
    #[test]
    fn current_state_stays_declared(config in closed_config(), ops in ops()) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
            prop_assert!(fsm.config().has_state(fsm.state()));
        }
    }

    #[test]
    fn forward_move_clears_redo(
        config in closed_config(),
        ops in ops(),
        target in state_name(),
    ) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let new_state = fsm.change_state(&target).unwrap().to_string();

        prop_assert_eq!(new_state, target);
        prop_assert_eq!(fsm.history().redo_depth(), 0);
    }

    #[test]
    fn undo_then_redo_is_observably_a_noop(config in closed_config(), ops in ops()) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let state_before = fsm.state().to_string();
        let history_before = fsm.history().clone();

        if fsm.undo() {
            prop_assert!(fsm.redo());
        }

        prop_assert_eq!(fsm.state(), state_before);
        prop_assert_eq!(fsm.history(), &history_before);
    }

    #[test]
    fn failed_operations_do_not_mutate(config in closed_config(), ops in ops()) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let state_before = fsm.state().to_string();
        let history_before = fsm.history().clone();

        prop_assert!(fsm.change_state("undeclared").is_err());
        prop_assert!(fsm.trigger("unregistered").is_err());

        prop_assert_eq!(fsm.state(), state_before);
        prop_assert_eq!(fsm.history(), &history_before);
    }

    #[test]
    fn trigger_succeeds_iff_rule_exists(
        config in closed_config(),
        ops in ops(),
        event in event_name(),
    ) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let expected = fsm
            .config()
            .transition_target(fsm.state(), &event)
            .map(str::to_string);

        match expected {
            Some(target) => {
                prop_assert!(fsm.trigger(&event).is_ok());
                prop_assert_eq!(fsm.state(), target);
            }
            None => prop_assert!(fsm.trigger(&event).is_err()),
        }
    }

    #[test]
    fn undo_depth_counts_forward_moves(
        config in closed_config(),
        targets in prop::collection::vec(state_name(), 0..10),
    ) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for target in &targets {
            fsm.change_state(target).unwrap();
        }
        prop_assert_eq!(fsm.history().undo_depth(), targets.len());
    }

    #[test]
    fn undo_walks_back_through_visited_states(
        config in closed_config(),
        targets in prop::collection::vec(state_name(), 1..10),
    ) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        let mut visited = vec![fsm.state().to_string()];
        for target in &targets {
            fsm.change_state(target).unwrap();
            visited.push(target.clone());
        }

        while fsm.undo() {
            visited.pop();
            prop_assert_eq!(fsm.state(), visited.last().unwrap());
        }
        prop_assert_eq!(fsm.state(), &visited[0]);
    }

    #[test]
    fn states_query_preserves_declaration_order(config in closed_config(), ops in ops()) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }
        prop_assert_eq!(fsm.states(None), STATES.to_vec());
    }

    #[test]
    fn states_filter_matches_rule_presence(config in closed_config(), event in event_name()) {
        let fsm = Fsm::new(Some(config)).unwrap();
        let handling = fsm.states(Some(&event));

        for state in STATES {
            let has_rule = fsm.config().transition_target(state, &event).is_some();
            prop_assert_eq!(handling.contains(&state), has_rule);
        }
    }

    #[test]
    fn reset_never_touches_history(config in closed_config(), ops in ops()) {
        let mut fsm = Fsm::new(Some(config)).unwrap();
        for op in &ops {
            apply(&mut fsm, op);
        }

        let history_before = fsm.history().clone();
        fsm.reset();

        prop_assert_eq!(fsm.state(), STATES[0]);
        prop_assert_eq!(fsm.history(), &history_before);
    }
}
