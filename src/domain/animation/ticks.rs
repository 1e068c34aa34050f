use super::transition::Transition;

/// Smallest `step >= 1` with `(width * scale_x) / (average_tick * count) * step >= 1`.
///
/// The step is capped at `count`: past that only the first label is shown
/// anyway. A zero or unmeasured width yields the cap.
pub fn tick_step(axis_width: f64, scale_x: f64, tick_count: usize, average_tick: f64) -> usize {
    if tick_count == 0 {
        return 1;
    }
    let cap = tick_count;
    let speed = (axis_width * scale_x) / (average_tick * tick_count as f64);
    if !(speed > 0.0) || !speed.is_finite() || 1.0 / speed >= cap as f64 {
        return if speed.is_infinite() { 1 } else { cap };
    }

    let mut step = ((1.0 / speed).ceil() as usize).clamp(1, cap);
    while step < cap && speed * (step as f64) < 1.0 {
        step += 1;
    }
    while step > 1 && speed * ((step - 1) as f64) >= 1.0 {
        step -= 1;
    }
    step
}

/// Label `index` is shown only on multiples of `step`
pub fn tick_opacity(index: usize, step: usize) -> f64 {
    if index % step.max(1) == 0 { 1.0 } else { 0.0 }
}

/// Opacity transitions for every axis label.
///
/// When the step changes the old and the new visibility pattern are blended
/// over one transition, so labels fade instead of popping. A label caught
/// mid-fade resumes from its live opacity.
#[derive(Debug, Clone)]
pub struct TickDecimation {
    step: usize,
    opacities: Vec<Transition>,
}

impl TickDecimation {
    pub fn new(tick_count: usize, step: usize, now: f64, duration: f64) -> Self {
        let opacities = (0..tick_count)
            .map(|i| Transition::pinned(tick_opacity(i, step), now, duration))
            .collect();
        Self { step, opacities }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.opacities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opacities.is_empty()
    }

    /// Cancels every label fade and starts the fade towards `step`'s pattern
    /// from the values sampled at `elapsed`.
    pub fn retarget(&mut self, step: usize, elapsed: f64, now: f64, duration: f64) {
        for (i, tr) in self.opacities.iter_mut().enumerate() {
            *tr = tr.retarget(elapsed, tick_opacity(i, step), now, duration);
        }
        self.step = step;
    }

    pub fn sample(&self, now: f64) -> Vec<f64> {
        self.opacities.iter().map(|tr| tr.sample(now)).collect()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.opacities
    }
}
