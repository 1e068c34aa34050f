use serde::Serialize;
use std::rc::Rc;

use super::config::AnimationConfig;
use super::set_diff::SetDiffAnimator;
use super::ticks::{TickDecimation, tick_step};
use super::transition::Transition;
use crate::domain::chart::{Chart, ChartState, ViewTargets, view_targets, visible_max};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Sampled plot styles for one animation frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotFrame {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub line_opacity: Vec<f64>,
    pub ticks_translate_x: f64,
    pub ticks_width: f64,
    pub tick_opacity: Vec<f64>,
}

/// Drives the main plot of one chart.
///
/// Every animated scalar owns a [`Transition`]. All of them are restarted
/// together on each state push, so the scale-x transition doubles as the
/// chart's timeline: its elapsed time is the interruption instant at which
/// every outgoing transition is sampled.
#[derive(Debug)]
pub struct ViewportTransitionEngine {
    chart: Rc<Chart>,
    config: AnimationConfig,
    baseline_max: f64,
    axis_width: f64,
    targets: ViewTargets,
    scale_x: Transition,
    scale_y: Transition,
    translate_x: Transition,
    ticks_width: Transition,
    lines: SetDiffAnimator,
    ticks: TickDecimation,
}

impl ViewportTransitionEngine {
    /// Mounts the engine with every scalar pinned at the targets for `state`.
    ///
    /// Polylines are expected to be normalized against the maximum of the lines
    /// visible at mount time, see [`Self::baseline_max`].
    pub fn new(chart: Rc<Chart>, state: &ChartState, axis_width: f64, config: AnimationConfig, now: f64) -> Self {
        let duration = config.duration;
        let baseline_max = visible_max(&chart, &state.hidden_lines, None);
        let targets = view_targets(&chart, state, baseline_max, &config);
        let tick_count = chart.tick_timestamps().len();
        let step = tick_step(axis_width, targets.scale_x, tick_count, config.average_tick);

        Self {
            lines: SetDiffAnimator::new(chart.lines().len(), &state.hidden_lines, now, duration),
            ticks: TickDecimation::new(tick_count, step, now, duration),
            scale_x: Transition::pinned(targets.scale_x, now, duration),
            scale_y: Transition::pinned(targets.scale_y, now, duration),
            translate_x: Transition::pinned(targets.translate_x, now, duration),
            ticks_width: Transition::pinned(targets.scale_x * axis_width, now, duration),
            chart,
            config,
            baseline_max,
            axis_width,
            targets,
        }
    }

    pub fn baseline_max(&self) -> f64 {
        self.baseline_max
    }

    pub fn targets(&self) -> ViewTargets {
        self.targets
    }

    pub fn axis_width(&self) -> f64 {
        self.axis_width
    }

    pub fn tick_step(&self) -> usize {
        self.ticks.step()
    }

    /// Elapsed time of the in-flight transitions, capped at the duration
    pub fn elapsed(&self, now: f64) -> f64 {
        self.scale_x.elapsed(now)
    }

    /// Reacts to a state push: samples every in-flight transition at the
    /// interruption instant and restarts it from that live value towards the
    /// freshly computed target.
    pub fn on_state(&mut self, curr: &ChartState, prev: &ChartState, now: f64) {
        let duration = self.config.duration;
        let elapsed = self.elapsed(now);
        let targets = view_targets(&self.chart, curr, self.baseline_max, &self.config);

        self.scale_x = self.scale_x.retarget(elapsed, targets.scale_x, now, duration);
        self.scale_y = self.scale_y.retarget(elapsed, targets.scale_y, now, duration);
        self.translate_x = self.translate_x.retarget(elapsed, targets.translate_x, now, duration);
        self.ticks_width = self
            .ticks_width
            .retarget(elapsed, targets.scale_x * self.axis_width, now, duration);
        self.lines
            .update(&prev.hidden_lines, &curr.hidden_lines, elapsed, now, duration);

        let step = tick_step(
            self.axis_width,
            targets.scale_x,
            self.ticks.len(),
            self.config.average_tick,
        );
        self.ticks.retarget(step, elapsed, now, duration);

        log_debug!(
            LogComponent::Viewport,
            "retarget at {:.1}ms: scale ({:.3}, {:.3}) translate {:.2}% step {}",
            elapsed,
            targets.scale_x,
            targets.scale_y,
            targets.translate_x,
            step
        );
        self.targets = targets;
    }

    /// New measurement of the tick container; tick width and decimation follow
    /// it while the rest of the view continues towards its current targets.
    pub fn set_axis_width(&mut self, axis_width: f64, state: &ChartState, now: f64) {
        if axis_width == self.axis_width {
            return;
        }
        let first_measurement = self.axis_width <= 0.0;
        self.axis_width = axis_width;
        if !first_measurement {
            self.on_state(state, state, now);
            return;
        }

        // nothing was laid out before, so the ticks start at their targets
        let duration = self.config.duration;
        let scale_x = self.targets.scale_x;
        let step = tick_step(axis_width, scale_x, self.ticks.len(), self.config.average_tick);
        self.ticks_width = Transition::pinned(scale_x * axis_width, now, duration);
        self.ticks = TickDecimation::new(self.ticks.len(), step, now, duration);
    }

    pub fn frame(&self, now: f64) -> PlotFrame {
        let translate_x = self.translate_x.sample(now);
        PlotFrame {
            scale_x: self.scale_x.sample(now),
            scale_y: self.scale_y.sample(now),
            translate_x,
            line_opacity: self.lines.sample(now),
            ticks_translate_x: translate_x,
            ticks_width: self.ticks_width.sample(now),
            tick_opacity: self.ticks.sample(now),
        }
    }

    pub fn is_settled(&self, now: f64) -> bool {
        [&self.scale_x, &self.scale_y, &self.translate_x, &self.ticks_width]
            .into_iter()
            .chain(self.lines.transitions())
            .chain(self.ticks.transitions())
            .all(|tr| tr.is_settled(now))
    }

    /// `true` once per transition that ran to its end uncancelled
    pub fn poll_complete(&mut self, now: f64) -> bool {
        self.scale_x.poll_complete(now)
    }

    pub fn scale_x_transition(&self) -> &Transition {
        &self.scale_x
    }

    pub fn scale_y_transition(&self) -> &Transition {
        &self.scale_y
    }

    pub fn translate_x_transition(&self) -> &Transition {
        &self.translate_x
    }

    pub fn ticks_width_transition(&self) -> &Transition {
        &self.ticks_width
    }

    pub fn line_animator(&self) -> &SetDiffAnimator {
        &self.lines
    }

    pub fn tick_decimation(&self) -> &TickDecimation {
        &self.ticks
    }
}
