//! Pure reducers, one per state key. Each returns its input unchanged (the
//! same `Rc` for chart states) when the action does not apply, which is what
//! keeps the store from notifying.

use std::rc::Rc;

use super::actions::{Action, StateValue};
use crate::domain::chart::ChartState;

pub fn night_reducer(action: &Action, state: bool) -> bool {
    match action {
        Action::Day => false,
        Action::Night => true,
        _ => state,
    }
}

pub fn width_reducer(action: &Action, state: f64) -> f64 {
    match action {
        Action::Width(w) => *w,
        _ => state,
    }
}

pub fn chart_reducer(action: &Action, state: &Rc<ChartState>) -> Rc<ChartState> {
    match action {
        Action::Coord(coord) => {
            if state.coord.left != coord.left || state.coord.right != coord.right {
                Rc::new(ChartState {
                    coord: *coord,
                    hidden_lines: state.hidden_lines.clone(),
                })
            } else {
                Rc::clone(state)
            }
        }
        Action::ToggleLine { line_idx, max_size } => {
            if line_idx > max_size {
                return Rc::clone(state);
            }
            let mut hidden = state.hidden_lines.clone();
            if !hidden.remove(line_idx) {
                hidden.insert(*line_idx);
            }
            if hidden.len() > *max_size {
                return Rc::clone(state);
            }
            Rc::new(ChartState {
                coord: state.coord,
                hidden_lines: hidden,
            })
        }
        _ => Rc::clone(state),
    }
}

/// Lifts the typed reducers onto [`StateValue`] slots; a value of another
/// kind passes through untouched.
pub fn reduce_night(action: &Action, value: &StateValue) -> StateValue {
    match value {
        StateValue::Night(night) => StateValue::Night(night_reducer(action, *night)),
        other => other.clone(),
    }
}

pub fn reduce_width(action: &Action, value: &StateValue) -> StateValue {
    match value {
        StateValue::Width(w) => StateValue::Width(width_reducer(action, *w)),
        other => other.clone(),
    }
}

pub fn reduce_chart(action: &Action, value: &StateValue) -> StateValue {
    match value {
        StateValue::Chart(state) => StateValue::Chart(chart_reducer(action, state)),
        other => other.clone(),
    }
}
