//! Chart aggregate: parsed series, per-chart view state and scale math.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
