//! CSS values written onto the mounted elements.

use crate::domain::animation::{MinimapFrame, PlotFrame};

pub fn plot_transform(frame: &PlotFrame) -> String {
    format!(
        "scale({}, {}) translate({}%)",
        frame.scale_x, frame.scale_y, frame.translate_x
    )
}

pub fn ticks_transform(frame: &PlotFrame) -> String {
    format!("translate({}%)", frame.ticks_translate_x)
}

pub fn ticks_width(frame: &PlotFrame) -> String {
    px(frame.ticks_width)
}

pub fn minimap_transform(frame: &MinimapFrame) -> String {
    format!("scale(1, {})", frame.scale_y)
}

pub fn px(value: f64) -> String {
    format!("{}px", value)
}
