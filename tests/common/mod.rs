#![allow(dead_code)]

use line_chart_wasm::domain::chart::{Chart, Line};

pub const DAY_MS: f64 = 86_400_000.0;

/// Daily timestamps starting 2019-03-01
pub fn days(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1_551_398_400_000.0 + i as f64 * DAY_MS).collect()
}

pub fn chart(lines: Vec<Vec<f64>>) -> Chart {
    let n = lines.first().map_or(0, Vec::len);
    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, data)| Line::new(format!("#00000{}", i), format!("y{}", i), data))
        .collect();
    Chart::new(lines, days(n)).expect("valid chart")
}

/// Two lines over 100 samples: a ramp peaking at 99 and a flat 50
pub fn ramp_and_flat() -> Chart {
    chart(vec![(0..100).map(|i| i as f64).collect(), vec![50.0; 100]])
}
