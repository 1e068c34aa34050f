use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use super::css;
use crate::application::{ButtonMark, ButtonState, GeometrySource, RenderSurface, TintWidths};
use crate::domain::animation::{MinimapFrame, PlotFrame};
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::log_warn;

fn js_error(context: &str, err: JsValue) -> AppError {
    AppError::RenderingError(format!("{}: {:?}", context, err))
}

/// Elements of one mounted chart, created by the host page
#[derive(Debug, Clone)]
pub struct DomChartHandles {
    /// Plot group; its children are the line polylines in line order
    pub plot: Element,
    /// Minimap group; same child layout as `plot`
    pub minimap: Element,
    /// Unscaled axis container, measured for the axis width
    pub axis: Element,
    /// Tick strip inside `axis`; its children are the labels in tick order
    pub ticks: HtmlElement,
    pub left_tint: HtmlElement,
    pub right_tint: HtmlElement,
    /// Button row; its children are the toggle buttons in line order
    pub buttons: Element,
    /// Minimap controls, measured for the tint widths
    pub controls: Element,
}

/// Applies frames to the live DOM and reads geometry from it
#[derive(Debug, Default)]
pub struct DomSurface {
    charts: Vec<DomChartHandles>,
    body: Option<HtmlElement>,
    switcher: Option<Element>,
}

impl DomSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the document body for the night class and `switcher` for its text
    pub fn attach_page(&mut self, switcher: Option<Element>) {
        self.body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        self.switcher = switcher;
    }

    /// Registers handles for the next mounted chart and returns its index
    pub fn attach_chart(&mut self, handles: DomChartHandles) -> usize {
        self.charts.push(handles);
        self.charts.len() - 1
    }

    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn geometry(&self) -> DomGeometry {
        DomGeometry {
            charts: self
                .charts
                .iter()
                .map(|handles| (handles.axis.clone(), handles.controls.clone()))
                .collect(),
        }
    }

    fn handles(&self, chart: usize) -> RenderingResult<&DomChartHandles> {
        self.charts
            .get(chart)
            .ok_or_else(|| AppError::RenderingError(format!("no handles attached for chart {}", chart)))
    }

    fn write_child_opacity(parent: &Element, opacity: &[f64]) -> RenderingResult<()> {
        let children = parent.children();
        for (i, value) in opacity.iter().enumerate() {
            let Some(child) = children.item(i as u32) else { break };
            child
                .set_attribute("style", &format!("opacity: {}", value))
                .map_err(|e| js_error("line opacity", e))?;
        }
        Ok(())
    }

    fn begin_mark(button: &Element, mark: ButtonMark) -> RenderingResult<()> {
        let selector = match mark {
            ButtonMark::Shrink => "[d=shrink-c]",
            ButtonMark::Grow => "[d=grow-c]",
        };
        let Some(animate) = button.query_selector(selector).map_err(|e| js_error(selector, e))? else {
            log_warn!(LogComponent::Dom, "button has no {} animation", selector);
            return Ok(());
        };
        let begin = js_sys::Reflect::get(&animate, &JsValue::from_str("beginElement"))
            .map_err(|e| js_error("beginElement", e))?;
        if let Ok(begin) = begin.dyn_into::<js_sys::Function>() {
            begin.call0(&animate).map_err(|e| js_error("beginElement", e))?;
        }
        Ok(())
    }
}

/// Measurable elements of every chart, detached from the surface so reads
/// and writes of one frame can run against the same page.
#[derive(Debug, Clone, Default)]
pub struct DomGeometry {
    charts: Vec<(Element, Element)>,
}

fn measured_width(element: &Element) -> Option<f64> {
    let width = element.get_bounding_client_rect().width();
    (width > 0.0).then_some(width)
}

impl GeometrySource for DomGeometry {
    fn ticks_width(&self, chart: usize) -> Option<f64> {
        measured_width(&self.charts.get(chart)?.0)
    }

    fn controls_width(&self, chart: usize) -> Option<f64> {
        measured_width(&self.charts.get(chart)?.1)
    }
}

impl RenderSurface for DomSurface {
    fn is_attached(&self, chart: usize) -> bool {
        chart < self.charts.len()
    }

    fn write_plot(&mut self, chart: usize, frame: &PlotFrame) -> RenderingResult<()> {
        let handles = self.handles(chart)?;
        handles
            .plot
            .set_attribute("style", &format!("transform: {}", css::plot_transform(frame)))
            .map_err(|e| js_error("plot transform", e))?;
        Self::write_child_opacity(&handles.plot, &frame.line_opacity)?;

        let style = handles.ticks.style();
        style
            .set_property("transform", &css::ticks_transform(frame))
            .map_err(|e| js_error("ticks transform", e))?;
        style
            .set_property("width", &css::ticks_width(frame))
            .map_err(|e| js_error("ticks width", e))?;
        Self::write_child_opacity(&handles.ticks, &frame.tick_opacity)
    }

    fn write_minimap(&mut self, chart: usize, frame: &MinimapFrame) -> RenderingResult<()> {
        let handles = self.handles(chart)?;
        handles
            .minimap
            .set_attribute("style", &format!("transform: {}", css::minimap_transform(frame)))
            .map_err(|e| js_error("minimap transform", e))?;
        Self::write_child_opacity(&handles.minimap, &frame.line_opacity)
    }

    fn write_tints(&mut self, chart: usize, tints: TintWidths) -> RenderingResult<()> {
        let handles = self.handles(chart)?;
        handles
            .left_tint
            .style()
            .set_property("width", &css::px(tints.left))
            .map_err(|e| js_error("left tint", e))?;
        handles
            .right_tint
            .style()
            .set_property("width", &css::px(tints.right))
            .map_err(|e| js_error("right tint", e))
    }

    fn write_buttons(&mut self, chart: usize, buttons: &[ButtonState]) -> RenderingResult<()> {
        let children = self.handles(chart)?.buttons.children();
        for (i, state) in buttons.iter().enumerate() {
            let Some(button) = children.item(i as u32) else { break };
            let classes = button.class_list();
            classes
                .toggle_with_force("disabled", state.disabled)
                .map_err(|e| js_error("button class", e))?;
            classes
                .toggle_with_force("checked", state.checked)
                .map_err(|e| js_error("button class", e))?;
            if let Some(mark) = state.mark {
                Self::begin_mark(&button, mark)?;
            }
        }
        Ok(())
    }

    fn write_night(&mut self, night: bool, switch_text: &str) -> RenderingResult<()> {
        if let Some(body) = &self.body {
            body.class_list()
                .toggle_with_force("night", night)
                .map_err(|e| js_error("night class", e))?;
        }
        if let Some(switcher) = &self.switcher {
            switcher.set_text_content(Some(switch_text));
        }
        Ok(())
    }
}
