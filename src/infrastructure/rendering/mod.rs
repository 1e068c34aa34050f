pub mod css;
pub mod dom_surface;
pub mod frame_styles;

pub use dom_surface::{DomChartHandles, DomGeometry, DomSurface};
pub use frame_styles::{ChartStyles, FrameStyles, MeasuredGeometry, MinimapStyles, NightStyles, PlotStyles};
