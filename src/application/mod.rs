pub mod chart_app;
pub mod controls;
pub mod drag;
pub mod frame;
pub mod throttle;

pub use chart_app::*;
pub use controls::*;
pub use drag::*;
pub use frame::*;
pub use throttle::*;
