use std::rc::Rc;

use line_chart_wasm::domain::chart::{ChartState, Window};
use line_chart_wasm::domain::state::{Action, chart_reducer, night_reducer, width_reducer};
use quickcheck_macros::quickcheck;

#[test]
fn same_coord_returns_same_state() {
    let state = Rc::new(ChartState::default());
    let next = chart_reducer(&Action::Coord(Window::new(0.9, 1.0)), &state);
    assert!(Rc::ptr_eq(&state, &next));
}

#[test]
fn coord_keeps_hidden_lines() {
    let state = Rc::new(ChartState {
        hidden_lines: [1].into_iter().collect(),
        ..ChartState::default()
    });
    let next = chart_reducer(&Action::Coord(Window::new(0.2, 0.6)), &state);
    assert_eq!(next.coord, Window::new(0.2, 0.6));
    assert_eq!(next.hidden_lines, state.hidden_lines);
}

#[test]
fn toggle_refuses_to_hide_last_line() {
    let state = Rc::new(ChartState::default());
    let hidden = chart_reducer(&Action::ToggleLine { line_idx: 0, max_size: 1 }, &state);
    assert!(hidden.is_hidden(0));

    let refused = chart_reducer(&Action::ToggleLine { line_idx: 1, max_size: 1 }, &hidden);
    assert!(Rc::ptr_eq(&hidden, &refused));

    let shown = chart_reducer(&Action::ToggleLine { line_idx: 0, max_size: 1 }, &hidden);
    assert!(shown.hidden_lines.is_empty());
}

#[test]
fn unrelated_actions_pass_through() {
    let state = Rc::new(ChartState::default());
    assert!(Rc::ptr_eq(&state, &chart_reducer(&Action::Night, &state)));
    assert!(!night_reducer(&Action::Day, true));
    assert!(night_reducer(&Action::Width(3.0), true));
    assert_eq!(width_reducer(&Action::Width(760.0), 0.0), 760.0);
    assert_eq!(width_reducer(&Action::Day, 12.0), 12.0);
}

#[quickcheck]
fn hidden_set_never_covers_every_line(toggles: Vec<u8>) -> bool {
    const LINES: usize = 4;
    let mut state = Rc::new(ChartState::default());
    for t in toggles {
        let action = Action::ToggleLine { line_idx: t as usize % LINES, max_size: LINES - 1 };
        state = chart_reducer(&action, &state);
        if state.hidden_lines.len() > LINES - 1 {
            return false;
        }
    }
    state.hidden_lines.iter().all(|&idx| idx < LINES)
}

#[test]
fn toggle_of_unknown_line_returns_same_state() {
    let state = Rc::new(ChartState::default());
    let next = chart_reducer(&Action::ToggleLine { line_idx: 7, max_size: 1 }, &state);
    assert!(Rc::ptr_eq(&state, &next));

    let hidden = chart_reducer(&Action::ToggleLine { line_idx: 1, max_size: 1 }, &next);
    assert!(hidden.is_hidden(1));
}
