use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::errors::AppError;

/// Value Object - fractional selection `(left, right)` of a chart's time axis
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "[{:.4}, {:.4}]", left, right)]
pub struct Window {
    pub left: f64,
    pub right: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self { left: 0.9, right: 1.0 }
    }
}

impl Window {
    /// Checked constructor for input crossing the boundary: `0 <= left < right <= 1`.
    pub fn validated(left: f64, right: f64) -> Result<Self, AppError> {
        if !(left.is_finite() && right.is_finite()) || left < 0.0 || right > 1.0 || left >= right {
            return Err(AppError::ValidationError(format!(
                "window [{}, {}] must satisfy 0 <= left < right <= 1",
                left, right
            )));
        }
        Ok(Self { left, right })
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Per-chart view state, replaced wholesale by the chart reducer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartState {
    pub coord: Window,
    pub hidden_lines: BTreeSet<usize>,
}

impl ChartState {
    pub fn is_hidden(&self, line_idx: usize) -> bool {
        self.hidden_lines.contains(&line_idx)
    }
}
