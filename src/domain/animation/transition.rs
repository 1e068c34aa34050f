/// Linear interpolation, `t` is not clamped
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// A fixed-duration interpolation of one scalar.
///
/// Transitions are values: the whole interpolation is a pure function of the
/// elapsed time, so superseding one only needs its live sample. Once
/// cancelled the clock stops at the cancellation instant and the transition
/// never reports completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    start_value: f64,
    end_value: f64,
    start_time: f64,
    duration: f64,
    cancelled_at: Option<f64>,
    completion_reported: bool,
}

impl Transition {
    pub fn new(start_value: f64, end_value: f64, start_time: f64, duration: f64) -> Self {
        Self {
            start_value,
            end_value,
            start_time,
            duration,
            cancelled_at: None,
            completion_reported: false,
        }
    }

    /// A transition that holds `value` for its whole duration
    pub fn pinned(value: f64, start_time: f64, duration: f64) -> Self {
        Self::new(value, value, start_time, duration)
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// `elapsed / duration` clamped to `[0, 1]`
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed: f64) -> f64 {
        lerp(self.start_value, self.end_value, self.progress(elapsed))
    }

    /// Elapsed time at `now`, frozen at the cancellation instant and capped at
    /// the duration once finished.
    pub fn elapsed(&self, now: f64) -> f64 {
        let clock = self.cancelled_at.map_or(now, |at| at.min(now));
        (clock - self.start_time).clamp(0.0, self.duration.max(0.0))
    }

    pub fn sample(&self, now: f64) -> f64 {
        self.value_at(self.elapsed(now))
    }

    /// Idempotent: the first cancellation instant is kept
    pub fn cancel(&mut self, now: f64) {
        if self.cancelled_at.is_none() {
            self.cancelled_at = Some(now);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled_at.is_some()
    }

    pub fn is_finished(&self, now: f64) -> bool {
        !self.is_cancelled() && now - self.start_time >= self.duration
    }

    /// Whether the sampled value can no longer change
    pub fn is_settled(&self, now: f64) -> bool {
        self.start_value == self.end_value || self.elapsed(now) >= self.duration
    }

    /// Returns `true` exactly once, the first time it is polled after the
    /// transition ran to its end uncancelled.
    pub fn poll_complete(&mut self, now: f64) -> bool {
        if self.completion_reported || !self.is_finished(now) {
            return false;
        }
        self.completion_reported = true;
        true
    }

    /// Supersedes `self` at elapsed time `elapsed`: cancels it and starts a new
    /// transition from the live value towards `end_value`.
    pub fn retarget(&mut self, elapsed: f64, end_value: f64, now: f64, duration: f64) -> Transition {
        let live = self.value_at(elapsed);
        self.cancel(now);
        Transition::new(live, end_value, now, duration)
    }
}
