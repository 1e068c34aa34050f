use js_sys::{Date, Object, Reflect};
use wasm_bindgen::JsValue;

fn label_options() -> Object {
    let options = Object::new();
    for (key, value) in [("month", "short"), ("day", "numeric"), ("timeZone", "UTC")] {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    options
}

/// Axis label for an epoch-millisecond timestamp, e.g. `"Mar 14"`.
///
/// Short month and numeric day in `en-US`, read in UTC.
pub fn format_tick_label(timestamp_ms: f64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp_ms));
    date.to_locale_date_string("en-US", &label_options()).into()
}

/// Left offset of tick `index` (position in the full time axis) in percent
pub fn tick_left_percent(index: usize, len: usize) -> f64 {
    let last = len.saturating_sub(1).max(1) as f64;
    (index as f64 - 0.25) / last * 100.0
}
