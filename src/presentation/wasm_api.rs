use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::application::{ChartApplication, DragHandle};
use crate::domain::animation::AnimationConfig;
use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, clock};
use crate::infrastructure::data::parse_charts;
use crate::infrastructure::rendering::{DomChartHandles, DomSurface, FrameStyles, MeasuredGeometry};
use crate::{log_error, log_info, log_warn};

fn to_js(err: AppError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn now() -> f64 {
    clock().now_ms()
}

/// Browser side of the application: the DOM surface plus the pending
/// animation frame, throttle timer and window listeners.
struct Runtime {
    app: RefCell<ChartApplication>,
    surface: RefCell<DomSurface>,
    frame: RefCell<Option<AnimationFrame>>,
    flush: RefCell<Option<(f64, Timeout)>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Runtime {
    fn request_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let runtime = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            runtime.frame.borrow_mut().take();
            runtime.run_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn run_frame(self: &Rc<Self>, timestamp: f64) {
        let animating = {
            let mut surface = self.surface.borrow_mut();
            let geometry = surface.geometry();
            self.app.borrow_mut().run_frame(timestamp, &geometry, &mut *surface)
        };
        if animating {
            self.request_frame();
        }
    }

    /// Arms the throttle timer for `deadline` unless an earlier one is armed
    fn schedule_flush(self: &Rc<Self>, deadline: Option<f64>) {
        let Some(deadline) = deadline else { return };
        if matches!(&*self.flush.borrow(), Some((armed, _)) if *armed <= deadline) {
            return;
        }
        let runtime = Rc::clone(self);
        let delay = (deadline - now()).max(0.0).ceil() as u32;
        let timeout = Timeout::new(delay, move || {
            runtime.flush.borrow_mut().take();
            let next = runtime.app.borrow_mut().flush_throttled(now());
            runtime.request_frame();
            runtime.schedule_flush(next);
        });
        *self.flush.borrow_mut() = Some((deadline, timeout));
    }

    fn after_input(self: &Rc<Self>, changed: bool) -> bool {
        if changed {
            self.request_frame();
        }
        changed
    }
}

/// JavaScript entry point. The host page builds the chart markup, hands the
/// element handles over and forwards pointer input; everything else runs here.
#[wasm_bindgen]
pub struct LineChartApp {
    runtime: Rc<Runtime>,
}

#[wasm_bindgen]
impl LineChartApp {
    /// `config_json` may override any animation tunable, e.g. `{"duration": 150}`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<LineChartApp, JsValue> {
        let config = match config_json {
            Some(json) => AnimationConfig::from_json(&json).map_err(to_js)?,
            None => AnimationConfig::default(),
        };
        Ok(Self {
            runtime: Rc::new(Runtime {
                app: RefCell::new(ChartApplication::new(config)),
                surface: RefCell::new(DomSurface::new()),
                frame: RefCell::new(None),
                flush: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        })
    }

    /// Publishes night mode and the page width, and binds the night switch
    #[wasm_bindgen(js_name = initPage)]
    pub fn init_page(&self, root_width: f64, switcher: Option<Element>) {
        self.runtime.surface.borrow_mut().attach_page(switcher);
        self.runtime.app.borrow_mut().init_page(root_width, now());
        self.runtime.request_frame();
    }

    /// Parses `chart_data.json` and mounts every chart; returns how many
    pub fn load(&self, json: &str) -> Result<usize, JsValue> {
        let charts = parse_charts(json).map_err(|err| {
            log_error!(LogComponent::Wasm, "chart data rejected: {}", err);
            to_js(err)
        })?;
        let now = now();
        let mut app = self.runtime.app.borrow_mut();
        for chart in charts {
            app.mount_chart(chart, now);
        }
        log_info!(LogComponent::Wasm, "{} charts mounted", app.chart_count());
        Ok(app.chart_count())
    }

    #[wasm_bindgen(js_name = chartCount)]
    pub fn chart_count(&self) -> usize {
        self.runtime.app.borrow().chart_count()
    }

    /// Binds the rendered markup of the next chart, in mount order
    #[wasm_bindgen(js_name = attachChart)]
    #[allow(clippy::too_many_arguments)]
    pub fn attach_chart(
        &self,
        plot: Element,
        minimap: Element,
        axis: Element,
        ticks: HtmlElement,
        left_tint: HtmlElement,
        right_tint: HtmlElement,
        buttons: Element,
        controls: Element,
    ) -> usize {
        let index = self.runtime.surface.borrow_mut().attach_chart(DomChartHandles {
            plot,
            minimap,
            axis,
            ticks,
            left_tint,
            right_tint,
            buttons,
            controls,
        });
        self.runtime.request_frame();
        index
    }

    /// Re-publishes the width from `root` on every window resize
    #[wasm_bindgen(js_name = watchResize)]
    pub fn watch_resize(&self, root: Element) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let runtime = Rc::clone(&self.runtime);
        let listener = EventListener::new(&window, "resize", move |_event| {
            let width = root.get_bounding_client_rect().width();
            let changed = runtime.app.borrow_mut().resize(width, now());
            runtime.after_input(changed);
        });
        self.runtime.listeners.borrow_mut().push(listener);
        Ok(())
    }

    #[wasm_bindgen(js_name = setWindow)]
    pub fn set_window(&self, index: usize, left: f64, right: f64) -> Result<(), JsValue> {
        let deadline = self.runtime.app.borrow_mut().set_window(index, left, right, now()).map_err(to_js)?;
        self.runtime.request_frame();
        self.runtime.schedule_flush(deadline);
        Ok(())
    }

    /// `handle` is one of `left_frame`, `right_frame` or `window`
    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&self, index: usize, handle: &str) -> Result<bool, JsValue> {
        let handle = DragHandle::from_str(handle)
            .map_err(|_| to_js(AppError::ValidationError(format!("unknown drag handle '{}'", handle))))?;
        let started = self.runtime.app.borrow_mut().drag_start(index, handle);
        if !started {
            log_warn!(LogComponent::Wasm, "drag on chart {} refused", index);
        }
        Ok(started)
    }

    #[wasm_bindgen(js_name = dragMove)]
    pub fn drag_move(&self, index: usize, dx: f64) -> Result<(), JsValue> {
        let deadline = self.runtime.app.borrow_mut().drag_move(index, dx, now()).map_err(to_js)?;
        self.runtime.request_frame();
        self.runtime.schedule_flush(deadline);
        Ok(())
    }

    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&self, index: usize) {
        self.runtime.app.borrow_mut().drag_end(index);
    }

    #[wasm_bindgen(js_name = toggleLine)]
    pub fn toggle_line(&self, index: usize, line_idx: usize) -> bool {
        let changed = self.runtime.app.borrow_mut().toggle_line(index, line_idx, now());
        self.runtime.after_input(changed)
    }

    #[wasm_bindgen(js_name = setNight)]
    pub fn set_night(&self, night: bool) -> bool {
        let changed = self.runtime.app.borrow_mut().set_night(night, now());
        self.runtime.after_input(changed)
    }

    #[wasm_bindgen(js_name = toggleNight)]
    pub fn toggle_night(&self) -> bool {
        let night = self.runtime.app.borrow().night().unwrap_or(true);
        self.set_night(!night)
    }

    /// SVG `points` attribute of one line
    #[wasm_bindgen(js_name = linePoints)]
    pub fn line_points(&self, index: usize, line_idx: usize) -> Option<String> {
        self.runtime.app.borrow().line_points(index, line_idx)
    }

    /// Axis labels of one chart as a JSON array of `{text, leftPercent}`
    #[wasm_bindgen(js_name = tickLabels)]
    pub fn tick_labels(&self, index: usize) -> Result<String, JsValue> {
        let labels = self.runtime.app.borrow().tick_labels(index);
        serde_json::to_string(&labels).map_err(|e| to_js(e.into()))
    }

    /// Runs one frame against host-measured geometry and returns the styles
    /// as JSON instead of writing them to the attached elements.
    #[wasm_bindgen(js_name = frameStyles)]
    pub fn frame_styles(&self, timestamp: f64, geometry_json: &str) -> Result<String, JsValue> {
        let geometry = MeasuredGeometry::from_json(geometry_json).map_err(to_js)?;
        let mut styles = FrameStyles::new();
        styles.animating = self.runtime.app.borrow_mut().run_frame(timestamp, &geometry, &mut styles);
        styles.to_json().map_err(to_js)
    }
}
