use line_chart_wasm::domain::animation::{Transition, lerp};
use quickcheck_macros::quickcheck;

const DURATION: f64 = 100.0;

#[quickcheck]
fn retarget_starts_from_live_value(v0: i16, v1: i16, v2: i16, t0: u8) -> bool {
    let (v0, v1, v2) = (v0 as f64, v1 as f64, v2 as f64);
    let t0 = (t0 as f64).min(DURATION);
    let start = 1_000.0;

    let mut outgoing = Transition::new(v0, v1, start, DURATION);
    let incoming = outgoing.retarget(t0, v2, start + t0, DURATION);

    (incoming.value_at(0.0) - lerp(v0, v1, t0 / DURATION)).abs() < 1e-9
        && incoming.end_value() == v2
        && outgoing.is_cancelled()
}

#[quickcheck]
fn value_stays_between_endpoints(v0: i16, v1: i16, elapsed: i16) -> bool {
    let (lo, hi) = if v0 <= v1 { (v0, v1) } else { (v1, v0) };
    let value = Transition::new(v0 as f64, v1 as f64, 0.0, DURATION).value_at(elapsed as f64);
    value >= lo as f64 - 1e-9 && value <= hi as f64 + 1e-9
}

#[test]
fn chained_interruptions_never_jump() {
    let mut tr = Transition::new(1.0, 0.0, 0.0, DURATION);
    let mut now = 0.0;
    for (step, target) in [(30.0, 1.0), (20.0, 0.0), (70.0, 1.0)] {
        let before = tr.sample(now + step);
        now += step;
        let elapsed = tr.elapsed(now);
        tr = tr.retarget(elapsed, target, now, DURATION);
        assert!((tr.sample(now) - before).abs() < 1e-12);
    }
    assert_eq!(tr.sample(now + DURATION), 1.0);
}

#[test]
fn cancelled_transition_never_completes() {
    let mut tr = Transition::new(0.0, 1.0, 0.0, DURATION);
    tr.cancel(50.0);
    tr.cancel(80.0);
    assert_eq!(tr.sample(500.0), 0.5);
    assert!(!tr.poll_complete(500.0));
}
