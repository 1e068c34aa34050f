use std::collections::BTreeSet;
use std::ops::Range;

use super::{Chart, ChartState, Window};
use crate::domain::animation::AnimationConfig;

/// Transform targets for one view of a chart.
///
/// `translate_x` is in percent of the plot width; data x-coordinates are
/// normalized to `[0, 1]` so `scale_x = 1 / (right - left)` zooms the window to
/// the full width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTargets {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
}

/// Sample indices covered by the fractional window, denormalized over the
/// sample count: floor on the left bound, ceil on the right, clamped to `0..len`.
pub fn window_index_range(len: usize, left: f64, right: f64) -> Range<usize> {
    let n = len as f64;
    let start = ((left * n).floor().max(0.0) as usize).min(len);
    let end = ((right * n).ceil().max(0.0) as usize).min(len);
    start.min(end)..end
}

/// Maximum over every non-hidden line, optionally restricted to an index range.
/// Returns `f64::NEG_INFINITY` when nothing is covered.
pub fn visible_max(chart: &Chart, hidden: &BTreeSet<usize>, range: Option<Range<usize>>) -> f64 {
    chart
        .lines()
        .iter()
        .enumerate()
        .filter(|(idx, _)| !hidden.contains(idx))
        .flat_map(|(_, line)| {
            let slice = match &range {
                Some(r) => &line.data[r.clone()],
                None => &line.data[..],
            };
            slice.iter().copied()
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Ratio that degrades to 1 instead of producing inf/NaN for empty or zero maxima
fn ratio(num: f64, den: f64) -> f64 {
    if !den.is_finite() || den == 0.0 {
        return 1.0;
    }
    let value = num / den;
    if value.is_finite() { value } else { 1.0 }
}

/// Computes the plot transform for `state`.
///
/// `baseline_max` is the maximum the polylines were normalized against when
/// their points were generated. The vertical scale blends the exact-window fit
/// with an epsilon-padded fit to damp rescale jitter when a spike sits right at
/// the window edge.
pub fn view_targets(chart: &Chart, state: &ChartState, baseline_max: f64, config: &AnimationConfig) -> ViewTargets {
    let Window { left, right } = state.coord;
    let hidden = &state.hidden_lines;
    let len = chart.len();

    let max_visible = visible_max(chart, hidden, None);
    let max_in_view = visible_max(chart, hidden, Some(window_index_range(len, left, right)));
    let max_epsilon_in_view = visible_max(
        chart,
        hidden,
        Some(window_index_range(len, left - config.epsilon, right + config.epsilon)),
    );

    let weight = config.exact_window_weight;
    let fit = weight * ratio(max_visible, max_in_view) + (1.0 - weight) * ratio(max_visible, max_epsilon_in_view);

    ViewTargets {
        scale_x: 1.0 / (right - left),
        scale_y: fit * ratio(baseline_max, max_visible),
        translate_x: -100.0 * left,
    }
}

/// Vertical scale of the minimap: full series, no window, only the visible set matters
pub fn minimap_scale_y(chart: &Chart, hidden: &BTreeSet<usize>, baseline_max: f64) -> f64 {
    ratio(baseline_max, visible_max(chart, hidden, None))
}

/// Normalized polyline points: `x = i / (n - 1)`, `y = v / baseline_max`
pub fn line_points(baseline_max: f64, data: &[f64]) -> Vec<(f64, f64)> {
    let last = data.len().saturating_sub(1).max(1) as f64;
    data.iter()
        .enumerate()
        .map(|(i, v)| (i as f64 / last, v / baseline_max))
        .collect()
}

/// Renders points the way an SVG `points` attribute expects them: `"x y,x y"`
pub fn points_to_string(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{} {}", x, y))
        .collect::<Vec<_>>()
        .join(",")
}
