use derive_more::Display;
use std::rc::Rc;
use strum::IntoStaticStr;

use crate::domain::chart::{ChartState, Window};

/// Key of one slot of the application state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum StateKey {
    #[display(fmt = "{}", _0)]
    Chart(usize),
    #[display(fmt = "night")]
    Night,
    #[display(fmt = "w")]
    Width,
}

/// Every action kind with its own typed payload
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Width(f64),
    Coord(Window),
    /// `max_size` is the line count minus one: at most that many lines may
    /// be hidden, and indices above it name no line.
    ToggleLine { line_idx: usize, max_size: usize },
    Day,
    Night,
}

impl Action {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// Value held in a state slot.
///
/// Chart states are shared behind `Rc` so subscribers and reducers can hand
/// the same state back without copying the hidden set.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Chart(Rc<ChartState>),
    Night(bool),
    Width(f64),
}

impl StateValue {
    pub fn as_chart(&self) -> Option<&Rc<ChartState>> {
        match self {
            StateValue::Chart(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_night(&self) -> Option<bool> {
        match self {
            StateValue::Night(night) => Some(*night),
            _ => None,
        }
    }

    pub fn as_width(&self) -> Option<f64> {
        match self {
            StateValue::Width(w) => Some(*w),
            _ => None,
        }
    }
}
