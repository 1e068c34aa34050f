use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::css;
use crate::application::{ButtonState, GeometrySource, RenderSurface, TintWidths};
use crate::domain::animation::{MinimapFrame, PlotFrame};
use crate::domain::errors::{DataResult, RenderingResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotStyles {
    pub transform: String,
    pub line_opacity: Vec<f64>,
    pub ticks_transform: String,
    pub ticks_width: String,
    pub tick_opacity: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimapStyles {
    pub transform: String,
    pub line_opacity: Vec<f64>,
}

/// Styles of one chart written during a frame; `None` means untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimap: Option<MinimapStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tints: Option<TintWidths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<ButtonState>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NightStyles {
    pub night: bool,
    pub switch_text: String,
}

/// Render surface that records a frame's writes as plain data, for hosts
/// that apply styles themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyles {
    pub charts: BTreeMap<usize, ChartStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub night: Option<NightStyles>,
    pub animating: bool,
}

impl FrameStyles {
    pub fn new() -> Self {
        Self::default()
    }

    fn chart(&mut self, chart: usize) -> &mut ChartStyles {
        self.charts.entry(chart).or_default()
    }

    pub fn to_json(&self) -> DataResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl RenderSurface for FrameStyles {
    fn write_plot(&mut self, chart: usize, frame: &PlotFrame) -> RenderingResult<()> {
        self.chart(chart).plot = Some(PlotStyles {
            transform: css::plot_transform(frame),
            line_opacity: frame.line_opacity.clone(),
            ticks_transform: css::ticks_transform(frame),
            ticks_width: css::ticks_width(frame),
            tick_opacity: frame.tick_opacity.clone(),
        });
        Ok(())
    }

    fn write_minimap(&mut self, chart: usize, frame: &MinimapFrame) -> RenderingResult<()> {
        self.chart(chart).minimap = Some(MinimapStyles {
            transform: css::minimap_transform(frame),
            line_opacity: frame.line_opacity.clone(),
        });
        Ok(())
    }

    fn write_tints(&mut self, chart: usize, tints: TintWidths) -> RenderingResult<()> {
        self.chart(chart).tints = Some(tints);
        Ok(())
    }

    fn write_buttons(&mut self, chart: usize, buttons: &[ButtonState]) -> RenderingResult<()> {
        self.chart(chart).buttons = Some(buttons.to_vec());
        Ok(())
    }

    fn write_night(&mut self, night: bool, switch_text: &str) -> RenderingResult<()> {
        self.night = Some(NightStyles { night, switch_text: switch_text.to_string() });
        Ok(())
    }
}

/// Geometry measured by the host and handed over as data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasuredGeometry {
    pub ticks: HashMap<usize, f64>,
    pub controls: HashMap<usize, f64>,
}

impl MeasuredGeometry {
    pub fn from_json(json: &str) -> DataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GeometrySource for MeasuredGeometry {
    fn ticks_width(&self, chart: usize) -> Option<f64> {
        self.ticks.get(&chart).copied()
    }

    fn controls_width(&self, chart: usize) -> Option<f64> {
        self.controls.get(&chart).copied()
    }
}
