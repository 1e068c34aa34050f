use super::controls::ButtonState;
use super::drag::TintWidths;
use crate::domain::animation::{MinimapFrame, PlotFrame};
use crate::domain::errors::RenderingResult;

/// Pixel geometry of mounted elements. Reading it may force a layout, so it
/// is only queried in the read phase of a frame.
pub trait GeometrySource {
    fn ticks_width(&self, chart: usize) -> Option<f64>;
    fn controls_width(&self, chart: usize) -> Option<f64>;
}

/// Style writes onto the handles an external templating layer created
pub trait RenderSurface {
    /// Whether the handles of `chart` exist yet
    fn is_attached(&self, _chart: usize) -> bool {
        true
    }
    fn write_plot(&mut self, chart: usize, frame: &PlotFrame) -> RenderingResult<()>;
    fn write_minimap(&mut self, chart: usize, frame: &MinimapFrame) -> RenderingResult<()>;
    fn write_tints(&mut self, chart: usize, tints: TintWidths) -> RenderingResult<()>;
    fn write_buttons(&mut self, chart: usize, buttons: &[ButtonState]) -> RenderingResult<()>;
    fn write_night(&mut self, night: bool, switch_text: &str) -> RenderingResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub chart: usize,
    pub ticks_width: Option<f64>,
    pub controls_width: Option<f64>,
}

/// Read phase: every pending chart is measured before anything is written
pub fn measure_all(pending: &[usize], geometry: &dyn GeometrySource) -> Vec<Measurement> {
    pending
        .iter()
        .map(|&chart| Measurement {
            chart,
            ticks_width: geometry.ticks_width(chart),
            controls_width: geometry.controls_width(chart),
        })
        .collect()
}
