use serde::Serialize;
use std::rc::Rc;

use super::config::AnimationConfig;
use super::set_diff::SetDiffAnimator;
use super::transition::Transition;
use crate::domain::chart::{Chart, ChartState, minimap_scale_y, visible_max};
use crate::domain::logging::LogComponent;
use crate::log_debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimapFrame {
    pub scale_y: f64,
    pub line_opacity: Vec<f64>,
}

/// Drives the minimap of one chart. The minimap always shows the full
/// series, so only a change of the hidden set moves it: the vertical baseline
/// is refitted to the visible lines and the toggled lines fade.
#[derive(Debug)]
pub struct MinimapTransitionEngine {
    chart: Rc<Chart>,
    duration: f64,
    baseline_max: f64,
    scale_y: Transition,
    lines: SetDiffAnimator,
}

impl MinimapTransitionEngine {
    pub fn new(chart: Rc<Chart>, state: &ChartState, config: &AnimationConfig, now: f64) -> Self {
        let duration = config.duration;
        let baseline_max = visible_max(&chart, &state.hidden_lines, None);
        let scale_y = minimap_scale_y(&chart, &state.hidden_lines, baseline_max);
        Self {
            lines: SetDiffAnimator::new(chart.lines().len(), &state.hidden_lines, now, duration),
            scale_y: Transition::pinned(scale_y, now, duration),
            chart,
            duration,
            baseline_max,
        }
    }

    /// Returns `false` when the push left the hidden set untouched and nothing
    /// was restarted.
    pub fn on_state(&mut self, curr: &ChartState, prev: &ChartState, now: f64) -> bool {
        if curr.hidden_lines == prev.hidden_lines {
            return false;
        }
        let elapsed = self.scale_y.elapsed(now);
        let target = minimap_scale_y(&self.chart, &curr.hidden_lines, self.baseline_max);

        self.scale_y = self.scale_y.retarget(elapsed, target, now, self.duration);
        self.lines
            .update(&prev.hidden_lines, &curr.hidden_lines, elapsed, now, self.duration);

        log_debug!(
            LogComponent::Minimap,
            "refit at {:.1}ms: scale_y {:.3}, hidden {:?}",
            elapsed,
            target,
            curr.hidden_lines
        );
        true
    }

    pub fn frame(&self, now: f64) -> MinimapFrame {
        MinimapFrame {
            scale_y: self.scale_y.sample(now),
            line_opacity: self.lines.sample(now),
        }
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.scale_y.is_settled(now) && self.lines.transitions().iter().all(|tr| tr.is_settled(now))
    }

    pub fn scale_y_transition(&self) -> &Transition {
        &self.scale_y
    }

    pub fn line_animator(&self) -> &SetDiffAnimator {
        &self.lines
    }
}
