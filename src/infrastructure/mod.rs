pub mod data;
pub mod rendering;
pub mod services;
