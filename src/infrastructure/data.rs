use serde::Deserialize;
use std::collections::HashMap;
use strum::AsRefStr;

use crate::domain::chart::{Chart, Line};
use crate::domain::errors::{AppError, DataResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// DTO for one column type tag of the raw chart data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColumnType {
    X,
    Line,
}

/// A column is `[id, v0, v1, ...]`: a label followed by numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColumnCell {
    Label(String),
    Number(f64),
}

/// DTO for one chart record as served in `chart_data.json`
#[derive(Debug, Deserialize)]
pub struct RawChart {
    pub columns: Vec<Vec<ColumnCell>>,
    pub types: HashMap<String, ColumnType>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub names: HashMap<String, String>,
}

fn split_column(column: &[ColumnCell]) -> DataResult<(&str, Vec<f64>)> {
    let (head, tail) = column
        .split_first()
        .ok_or_else(|| AppError::DataError("empty column".to_string()))?;
    let ColumnCell::Label(id) = head else {
        return Err(AppError::DataError("column does not start with its id".to_string()));
    };
    let values = tail
        .iter()
        .map(|cell| match cell {
            ColumnCell::Number(v) => Ok(*v),
            ColumnCell::Label(s) => Err(AppError::DataError(format!("column '{}' holds non-number '{}'", id, s))),
        })
        .collect::<DataResult<Vec<f64>>>()?;
    Ok((id.as_str(), values))
}

impl RawChart {
    /// Converts the DTO into a domain chart, keeping the column order of lines
    pub fn to_domain_chart(&self) -> DataResult<Chart> {
        let mut t = None;
        let mut lines = Vec::new();

        for column in &self.columns {
            let (id, values) = split_column(column)?;
            let column_type = self
                .types
                .get(id)
                .ok_or_else(|| AppError::DataError(format!("column '{}' has no type", id)))?;
            match column_type {
                ColumnType::X => t = Some(values),
                ColumnType::Line => {
                    let color = self
                        .colors
                        .get(id)
                        .ok_or_else(|| AppError::DataError(format!("line '{}' has no color", id)))?;
                    let name = self
                        .names
                        .get(id)
                        .ok_or_else(|| AppError::DataError(format!("line '{}' has no name", id)))?;
                    lines.push(Line::new(color.clone(), name.clone(), values));
                }
            }
        }

        let t = t.ok_or_else(|| AppError::DataError("chart has no x column".to_string()))?;
        Chart::new(lines, t)
    }
}

/// Parses the whole `chart_data.json` payload
pub fn parse_charts(json: &str) -> DataResult<Vec<Chart>> {
    let raw: Vec<RawChart> = serde_json::from_str(json)?;
    let charts = raw.iter().map(RawChart::to_domain_chart).collect::<DataResult<Vec<_>>>()?;
    log_debug!(LogComponent::Data, "parsed {} charts", charts.len());
    Ok(charts)
}
