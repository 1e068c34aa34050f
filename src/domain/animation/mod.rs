//! Transition engines: value-typed transitions, tick decimation, hidden-set
//! fades and the per-chart plot/minimap engines built from them.

pub mod config;
pub mod minimap;
pub mod set_diff;
pub mod ticks;
pub mod transition;
pub mod viewport;

pub use config::*;
pub use minimap::*;
pub use set_diff::*;
pub use ticks::*;
pub use transition::*;
pub use viewport::*;
