use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::controls::{ButtonState, TickLabel, button_states, night_switch_text, tick_labels};
use super::drag::{DragHandle, DragOrigin, TintWidths, drag};
use super::frame::{GeometrySource, RenderSurface, measure_all};
use super::throttle::Throttle;
use crate::domain::animation::{AnimationConfig, MinimapTransitionEngine, ViewportTransitionEngine};
use crate::domain::chart::{Chart, ChartState, Window, line_points, points_to_string};
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::domain::state::{
    Action, AppStore, StateKey, StateValue, reduce_chart, reduce_night, reduce_width,
};
use crate::{log_debug, log_error, log_info, log_warn};

/// Everything mounted for one chart: both engines plus the bits of
/// presentation state that only need writing when they change.
#[derive(Debug)]
struct ChartView {
    chart: Rc<Chart>,
    plot: ViewportTransitionEngine,
    minimap: MinimapTransitionEngine,
    buttons: Vec<ButtonState>,
    buttons_dirty: bool,
    controls_width: f64,
    tints: TintWidths,
    tints_dirty: bool,
    drag: Option<(DragHandle, DragOrigin)>,
    needs_measure: bool,
}

impl ChartView {
    fn on_state(&mut self, curr: &ChartState, prev: &ChartState, now: f64) {
        self.plot.on_state(curr, prev, now);
        self.minimap.on_state(curr, prev, now);
        self.buttons = button_states(curr, Some(prev), self.chart.max_hidden());
        self.buttons_dirty = true;
        // while dragging the tints follow the pointer, not the throttled state
        if self.drag.is_none() {
            self.tints = TintWidths::for_window(curr.coord, self.controls_width);
            self.tints_dirty = true;
        }
    }
}

#[derive(Debug, Default)]
struct PageState {
    night: bool,
    night_dirty: bool,
}

type SharedViews = Rc<RefCell<Vec<Rc<RefCell<ChartView>>>>>;

/// Composition root: owns the store, mounts one plot and one minimap engine
/// per chart and subscribes them to the chart's state key.
///
/// Every input method takes the current time explicitly; subscribers read it
/// from a shared cell set right before dispatching.
pub struct ChartApplication {
    config: AnimationConfig,
    store: AppStore,
    views: SharedViews,
    page: Rc<RefCell<PageState>>,
    throttles: Vec<Throttle<Window>>,
    clock: Rc<Cell<f64>>,
}

impl ChartApplication {
    pub fn new(config: AnimationConfig) -> Self {
        let mut store = AppStore::new();
        let views: SharedViews = Rc::new(RefCell::new(Vec::new()));
        let page = Rc::new(RefCell::new(PageState::default()));

        store.register_reducer(StateKey::Night, reduce_night);
        store.register_reducer(StateKey::Width, reduce_width);

        let night_page = Rc::clone(&page);
        store.subscribe(
            StateKey::Night,
            move |curr, _| {
                if let Some(night) = curr.as_night() {
                    let mut page = night_page.borrow_mut();
                    page.night = night;
                    page.night_dirty = true;
                }
            },
            false,
        );

        let width_views = Rc::clone(&views);
        store.subscribe(
            StateKey::Width,
            move |curr, _| {
                log_debug!(LogComponent::App, "width is now {:?}", curr.as_width());
                for view in width_views.borrow().iter() {
                    view.borrow_mut().needs_measure = true;
                }
            },
            false,
        );

        Self {
            config,
            store,
            views,
            page,
            throttles: Vec::new(),
            clock: Rc::new(Cell::new(0.0)),
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Publishes the page-level slots: night mode on, width from the root
    pub fn init_page(&mut self, root_width: f64, now: f64) {
        self.clock.set(now);
        self.store.publish(StateKey::Night, StateValue::Night(true));
        self.store
            .publish(StateKey::Width, StateValue::Width(root_width - self.config.width_padding));
    }

    /// Mounts `chart` with the initial view state and returns its index
    pub fn mount_chart(&mut self, chart: Chart, now: f64) -> usize {
        self.clock.set(now);
        let index = self.views.borrow().len();
        let key = StateKey::Chart(index);
        let chart = Rc::new(chart);
        let state = Rc::new(ChartState::default());

        let view = Rc::new(RefCell::new(ChartView {
            plot: ViewportTransitionEngine::new(Rc::clone(&chart), &state, 0.0, self.config.clone(), now),
            minimap: MinimapTransitionEngine::new(Rc::clone(&chart), &state, &self.config, now),
            buttons: button_states(&state, None, chart.max_hidden()),
            buttons_dirty: true,
            controls_width: 0.0,
            tints: TintWidths::default(),
            tints_dirty: false,
            drag: None,
            needs_measure: false,
            chart,
        }));
        self.views.borrow_mut().push(Rc::clone(&view));
        self.throttles.push(Throttle::new(self.config.throttle_ms));

        let mounted = Rc::clone(&view);
        self.store.subscribe(
            key,
            move |_, _| {
                mounted.borrow_mut().needs_measure = true;
                log_info!(LogComponent::App, "chart {} mounted", index);
            },
            true,
        );

        let clock = Rc::clone(&self.clock);
        self.store.subscribe(
            key,
            move |curr, prev| {
                if let (Some(curr), Some(prev)) = (curr.as_chart(), prev.and_then(StateValue::as_chart)) {
                    view.borrow_mut().on_state(curr, prev, clock.get());
                }
            },
            false,
        );

        self.store.register_reducer(key, reduce_chart);
        self.store.publish(key, StateValue::Chart(state));
        index
    }

    pub fn chart_count(&self) -> usize {
        self.views.borrow().len()
    }

    pub fn chart_state(&self, index: usize) -> Option<Rc<ChartState>> {
        self.store
            .get(&StateKey::Chart(index))
            .and_then(StateValue::as_chart)
            .cloned()
    }

    /// Runs `f` against the plot engine of chart `index`
    pub fn with_plot<R>(&self, index: usize, f: impl FnOnce(&ViewportTransitionEngine) -> R) -> Option<R> {
        let views = self.views.borrow();
        let view = views.get(index)?.borrow();
        Some(f(&view.plot))
    }

    pub fn night(&self) -> Option<bool> {
        self.store.get(&StateKey::Night).and_then(StateValue::as_night)
    }

    /// Raw dispatch at time `now`; unknown keys are ignored by the store
    pub fn dispatch(&mut self, key: StateKey, action: Action, now: f64) -> bool {
        self.clock.set(now);
        self.store.dispatch(&key, action)
    }

    /// Throttled window update from the drag handles.
    ///
    /// Returns the time at which [`Self::flush_throttled`] must run when the
    /// update was held back as a trailing call.
    pub fn set_window(&mut self, index: usize, left: f64, right: f64, now: f64) -> Result<Option<f64>, AppError> {
        let window = Window::validated(left, right)?;
        let throttle = self
            .throttles
            .get_mut(index)
            .ok_or_else(|| AppError::ValidationError(format!("no chart {}", index)))?;
        match throttle.call(now, window) {
            Some(window) => {
                self.dispatch(StateKey::Chart(index), Action::Coord(window), now);
                Ok(None)
            }
            None => Ok(throttle.deadline()),
        }
    }

    /// Runs the trailing window updates that are due and returns the next
    /// deadline still pending.
    pub fn flush_throttled(&mut self, now: f64) -> Option<f64> {
        let released: Vec<(usize, Window)> = self
            .throttles
            .iter_mut()
            .enumerate()
            .filter_map(|(index, throttle)| throttle.poll(now).map(|w| (index, w)))
            .collect();
        for (index, window) in released {
            self.dispatch(StateKey::Chart(index), Action::Coord(window), now);
        }
        self.throttles
            .iter()
            .filter_map(Throttle::deadline)
            .fold(None, |next: Option<f64>, d| Some(next.map_or(d, |n| n.min(d))))
    }

    /// Captures the drag origin of `handle`; refused until the controls
    /// have been measured.
    pub fn drag_start(&mut self, index: usize, handle: DragHandle) -> bool {
        let Some(state) = self.chart_state(index) else { return false };
        let views = self.views.borrow();
        let Some(view) = views.get(index) else { return false };
        let mut view = view.borrow_mut();
        if view.controls_width <= 0.0 {
            return false;
        }
        let origin = DragOrigin {
            controls_width: view.controls_width,
            tints: TintWidths::for_window(state.coord, view.controls_width),
        };
        view.drag = Some((handle, origin));
        true
    }

    /// Moves the active drag by `dx` pixels since pointer down. Tints are
    /// redrawn on the next frame, the window goes through the throttle.
    pub fn drag_move(&mut self, index: usize, dx: f64, now: f64) -> Result<Option<f64>, AppError> {
        let update = {
            let views = self.views.borrow();
            let view = views
                .get(index)
                .ok_or_else(|| AppError::ValidationError(format!("no chart {}", index)))?;
            let mut view = view.borrow_mut();
            let Some((handle, origin)) = view.drag else {
                return Ok(None);
            };
            let update = drag(handle, origin, dx, self.config.min_window_px);
            view.tints = update.tints;
            view.tints_dirty = true;
            update
        };
        self.set_window(index, update.coord.left, update.coord.right, now)
    }

    pub fn drag_end(&mut self, index: usize) {
        if let Some(view) = self.views.borrow().get(index) {
            view.borrow_mut().drag = None;
        }
    }

    pub fn toggle_line(&mut self, index: usize, line_idx: usize, now: f64) -> bool {
        let max_size = match self.views.borrow().get(index) {
            Some(view) => {
                let view = view.borrow();
                if line_idx >= view.chart.lines().len() {
                    log_warn!(LogComponent::App, "chart {} has no line {}", index, line_idx);
                    return false;
                }
                view.chart.max_hidden()
            }
            None => return false,
        };
        self.dispatch(StateKey::Chart(index), Action::ToggleLine { line_idx, max_size }, now)
    }

    pub fn set_night(&mut self, night: bool, now: f64) -> bool {
        let action = if night { Action::Night } else { Action::Day };
        self.dispatch(StateKey::Night, action, now)
    }

    pub fn resize(&mut self, root_width: f64, now: f64) -> bool {
        let width = root_width - self.config.width_padding;
        self.dispatch(StateKey::Width, Action::Width(width), now)
    }

    /// SVG points of one line, normalized against the baseline its plot
    /// engine was mounted with.
    pub fn line_points(&self, index: usize, line_idx: usize) -> Option<String> {
        let views = self.views.borrow();
        let view = views.get(index)?.borrow();
        let line = view.chart.lines().get(line_idx)?;
        Some(points_to_string(&line_points(view.plot.baseline_max(), &line.data)))
    }

    pub fn tick_labels(&self, index: usize) -> Vec<TickLabel> {
        self.views
            .borrow()
            .get(index)
            .map(|view| tick_labels(&view.borrow().chart))
            .unwrap_or_default()
    }

    /// One rendering frame: all pending geometry reads first, then every
    /// style write. Returns whether any chart is still animating.
    ///
    /// A chart the surface has no handles for yet is skipped, and a failed
    /// write only costs that chart its frame; its dirty styles are retried
    /// on the next one.
    pub fn run_frame(&mut self, now: f64, geometry: &dyn GeometrySource, surface: &mut dyn RenderSurface) -> bool {
        let views = self.views.borrow();
        let pending: Vec<usize> = views
            .iter()
            .enumerate()
            .filter(|(index, view)| view.borrow().needs_measure && surface.is_attached(*index))
            .map(|(index, _)| index)
            .collect();
        let measurements = measure_all(&pending, geometry);

        for m in measurements {
            let Some(state) = self.chart_state(m.chart) else { continue };
            let mut view = views[m.chart].borrow_mut();
            if let Some(width) = m.ticks_width {
                view.plot.set_axis_width(width, &state, now);
            }
            if let Some(width) = m.controls_width {
                view.controls_width = width;
                if view.drag.is_none() {
                    view.tints = TintWidths::for_window(state.coord, width);
                    view.tints_dirty = true;
                }
            }
            // not laid out yet: measured again next frame
            view.needs_measure = m.ticks_width.is_none() || m.controls_width.is_none();
        }

        let mut animating = false;
        for (index, view) in views.iter().enumerate() {
            let mut view = view.borrow_mut();
            if surface.is_attached(index) {
                if let Err(err) = write_chart(index, &mut view, surface, now) {
                    log_error!(LogComponent::App, "chart {} frame failed: {}", index, err);
                }
            }
            if view.plot.poll_complete(now) {
                log_debug!(LogComponent::App, "chart {} settled", index);
            }
            animating |= !view.plot.is_settled(now) || !view.minimap.is_settled(now);
        }

        let mut page = self.page.borrow_mut();
        if page.night_dirty {
            match surface.write_night(page.night, night_switch_text(page.night)) {
                Ok(()) => page.night_dirty = false,
                Err(err) => {
                    log_error!(LogComponent::App, "night mode write failed: {}", err);
                }
            }
        }
        animating
    }
}

fn write_chart(index: usize, view: &mut ChartView, surface: &mut dyn RenderSurface, now: f64) -> RenderingResult<()> {
    surface.write_plot(index, &view.plot.frame(now))?;
    surface.write_minimap(index, &view.minimap.frame(now))?;
    if view.tints_dirty {
        surface.write_tints(index, view.tints)?;
        view.tints_dirty = false;
    }
    if view.buttons_dirty {
        surface.write_buttons(index, &view.buttons)?;
        view.buttons_dirty = false;
    }
    Ok(())
}

impl std::fmt::Debug for ChartApplication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartApplication")
            .field("charts", &self.chart_count())
            .field("store", &self.store)
            .finish()
    }
}
