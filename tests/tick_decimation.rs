use line_chart_wasm::domain::animation::{AVERAGE_TICK_PX, TickDecimation, tick_opacity, tick_step};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn zooming_in_never_increases_step(width: u16, s1: u8, s2: u8, count: u8) -> bool {
    let count = count as usize + 1;
    let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
    let step_lo = tick_step(width as f64, 1.0 + lo as f64, count, AVERAGE_TICK_PX);
    let step_hi = tick_step(width as f64, 1.0 + hi as f64, count, AVERAGE_TICK_PX);
    step_hi <= step_lo
}

#[quickcheck]
fn step_is_smallest_that_fits(width: u16, scale: u8, count: u8) -> bool {
    let count = count as usize + 1;
    let scale = 1.0 + scale as f64;
    let step = tick_step(width as f64, scale, count, AVERAGE_TICK_PX);
    let speed = width as f64 * scale / (AVERAGE_TICK_PX * count as f64);
    let fits = |s: usize| speed * s as f64 >= 1.0;
    (1..=count).contains(&step) && (step == count || fits(step)) && (step == 1 || !fits(step - 1))
}

#[test]
fn pattern_follows_step() {
    let pattern: Vec<f64> = (0..7).map(|i| tick_opacity(i, 3)).collect();
    assert_eq!(pattern, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn step_change_cross_fades_labels() {
    let mut ticks = TickDecimation::new(4, 1, 0.0, 100.0);
    assert_eq!(ticks.sample(0.0), vec![1.0; 4]);

    ticks.retarget(2, 100.0, 200.0, 100.0);
    assert_eq!(ticks.step(), 2);
    assert_eq!(ticks.sample(250.0), vec![1.0, 0.5, 1.0, 0.5]);
    assert_eq!(ticks.sample(300.0), vec![1.0, 0.0, 1.0, 0.0]);
}
