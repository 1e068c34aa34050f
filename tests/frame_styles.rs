mod common;

use line_chart_wasm::application::ChartApplication;
use line_chart_wasm::domain::animation::AnimationConfig;
use line_chart_wasm::infrastructure::rendering::{FrameStyles, MeasuredGeometry};
use serde_json::Value;

#[test]
fn geometry_parses_with_missing_maps() {
    let geometry = MeasuredGeometry::from_json(r#"{"ticks": {"0": 400}}"#).expect("geometry");
    assert_eq!(geometry.ticks.get(&0), Some(&400.0));
    assert!(geometry.controls.is_empty());
}

#[test]
fn settled_frame_serializes_styles() {
    let mut app = ChartApplication::new(AnimationConfig::default());
    app.init_page(440.0, 0.0);
    app.mount_chart(common::ramp_and_flat(), 0.0);
    let geometry = MeasuredGeometry::from_json(r#"{"ticks": {"0": 400}, "controls": {"0": 200}}"#).expect("geometry");

    let mut styles = FrameStyles::new();
    styles.animating = app.run_frame(0.0, &geometry, &mut styles);
    let json: Value = serde_json::from_str(&styles.to_json().expect("json")).expect("valid json");

    assert_eq!(json["animating"], Value::Bool(false));
    assert_eq!(json["night"]["switchText"], "Switch to Day Mode");
    let chart = &json["charts"]["0"];
    assert_eq!(chart["minimap"]["transform"], "scale(1, 1)");
    assert_eq!(chart["plot"]["lineOpacity"], serde_json::json!([1.0, 1.0]));
    assert_eq!(chart["tints"]["right"], 0.0);
    assert_eq!(chart["buttons"].as_array().map(Vec::len), Some(2));
    assert!(chart["plot"]["transform"].as_str().is_some_and(|t| t.ends_with("translate(-90%)")));
}

#[test]
fn untouched_parts_are_omitted() {
    let mut app = ChartApplication::new(AnimationConfig::default());
    app.mount_chart(common::ramp_and_flat(), 0.0);
    let geometry = MeasuredGeometry::default();

    let mut styles = FrameStyles::new();
    app.run_frame(0.0, &geometry, &mut styles);
    let mut again = FrameStyles::new();
    app.run_frame(16.0, &geometry, &mut again);

    let json: Value = serde_json::from_str(&again.to_json().expect("json")).expect("valid json");
    assert!(json.get("night").is_none());
    assert!(json["charts"]["0"].get("buttons").is_none());
    assert!(json["charts"]["0"].get("plot").is_some());
}

#[test]
fn settled_frame_snapshot() {
    let mut app = ChartApplication::new(AnimationConfig::default());
    app.init_page(440.0, 0.0);
    app.mount_chart(common::ramp_and_flat(), 0.0);
    let geometry = MeasuredGeometry::from_json(r#"{"ticks": {"0": 400}, "controls": {"0": 200}}"#).expect("geometry");

    let mut styles = FrameStyles::new();
    app.run_frame(0.0, &geometry, &mut styles);
    let chart = &styles.charts[&0];

    insta::assert_json_snapshot!(chart.minimap, @r#"
    {
      "transform": "scale(1, 1)",
      "lineOpacity": [
        1.0,
        1.0
      ]
    }
    "#);
    insta::assert_json_snapshot!(chart.tints, @r#"
    {
      "left": 180.0,
      "right": 0.0
    }
    "#);
    insta::assert_json_snapshot!(chart.buttons, @r#"
    [
      {
        "checked": true,
        "disabled": false,
        "mark": null
      },
      {
        "checked": true,
        "disabled": false,
        "mark": null
      }
    ]
    "#);
    insta::assert_json_snapshot!(styles.night, @r#"
    {
      "night": true,
      "switchText": "Switch to Day Mode"
    }
    "#);
}
