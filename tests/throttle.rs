use line_chart_wasm::application::Throttle;

#[test]
fn leading_call_runs_immediately() {
    let mut throttle = Throttle::new(100.0);
    assert_eq!(throttle.call(0.0, 1), Some(1));
    assert!(!throttle.has_pending());
    assert_eq!(throttle.deadline(), None);
}

#[test]
fn burst_keeps_only_the_last_value() {
    let mut throttle = Throttle::new(100.0);
    throttle.call(0.0, 1);
    assert_eq!(throttle.call(10.0, 2), None);
    assert_eq!(throttle.call(20.0, 3), None);
    assert_eq!(throttle.deadline(), Some(100.0));

    assert_eq!(throttle.poll(99.0), None);
    assert_eq!(throttle.poll(100.0), Some(3));
    assert_eq!(throttle.poll(300.0), None);
}

#[test]
fn trailing_run_opens_a_new_window() {
    let mut throttle = Throttle::new(100.0);
    throttle.call(0.0, 1);
    throttle.call(50.0, 2);
    assert_eq!(throttle.poll(120.0), Some(2));
    assert_eq!(throttle.call(150.0, 3), None);
    assert_eq!(throttle.deadline(), Some(220.0));
    assert_eq!(throttle.call(230.0, 4), Some(4));
}
