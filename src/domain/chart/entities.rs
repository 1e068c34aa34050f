use crate::domain::errors::{AppError, DataResult};

/// Domain entity - a single named series of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub color: String,
    pub name: String,
    pub data: Vec<f64>,
}

impl Line {
    pub fn new(color: impl Into<String>, name: impl Into<String>, data: Vec<f64>) -> Self {
        Self { color: color.into(), name: name.into(), data }
    }
}

/// Domain entity - a chart: several lines sharing one time axis
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    lines: Vec<Line>,
    t: Vec<f64>,
}

impl Chart {
    /// Builds a chart, rejecting data that breaks the shared-length invariant
    /// or a time axis that is not strictly increasing.
    pub fn new(lines: Vec<Line>, t: Vec<f64>) -> DataResult<Self> {
        if lines.is_empty() {
            return Err(AppError::DataError("chart has no lines".to_string()));
        }
        if let Some(line) = lines.iter().find(|line| line.data.len() != t.len()) {
            return Err(AppError::DataError(format!(
                "line '{}' has {} samples, time axis has {}",
                line.name,
                line.data.len(),
                t.len()
            )));
        }
        if t.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(AppError::DataError("time axis is not strictly increasing".to_string()));
        }
        Ok(Self { lines, t })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn t(&self) -> &[f64] {
        &self.t
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Largest hidden set a toggle may produce: one line always stays visible
    pub fn max_hidden(&self) -> usize {
        self.lines.len() - 1
    }

    /// Timestamps that receive an axis label: every sample but the first and last
    pub fn tick_timestamps(&self) -> &[f64] {
        if self.t.len() < 2 { &[] } else { &self.t[1..self.t.len() - 1] }
    }
}
