use serde::Serialize;

use crate::domain::chart::{Chart, ChartState};
use crate::time_utils::{format_tick_label, tick_left_percent};

/// One-shot mark animation of a toggle button's circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonMark {
    /// Line became visible: the empty circle shrinks away
    Shrink,
    /// Line got hidden: the empty circle grows back
    Grow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonState {
    pub checked: bool,
    /// Set on the last visible line, which cannot be hidden
    pub disabled: bool,
    pub mark: Option<ButtonMark>,
}

/// Button states after `curr`, with marks for lines whose visibility flipped
/// relative to `prev`.
pub fn button_states(curr: &ChartState, prev: Option<&ChartState>, max_size: usize) -> Vec<ButtonState> {
    let full = max_size > 0 && curr.hidden_lines.len() == max_size;
    (0..=max_size)
        .map(|line| {
            let checked = !curr.is_hidden(line);
            let mark = prev
                .map(|p| !p.is_hidden(line))
                .filter(|&was_checked| was_checked != checked)
                .map(|_| if checked { ButtonMark::Shrink } else { ButtonMark::Grow });
            ButtonState { checked, disabled: checked && full, mark }
        })
        .collect()
}

pub fn night_switch_text(night: bool) -> &'static str {
    if night { "Switch to Day Mode" } else { "Switch To Night Mode" }
}

/// Text and position of one axis label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickLabel {
    pub text: String,
    pub left_percent: f64,
}

/// Labels for every tick timestamp; label `k` sits at axis index `k + 1`
pub fn tick_labels(chart: &Chart) -> Vec<TickLabel> {
    chart
        .tick_timestamps()
        .iter()
        .enumerate()
        .map(|(k, &ms)| TickLabel {
            text: format_tick_label(ms),
            left_percent: tick_left_percent(k + 1, chart.len()),
        })
        .collect()
}
