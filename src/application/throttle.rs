/// Leading + trailing edge throttle over an explicit clock.
///
/// The first call of a burst runs immediately. Later calls inside the window
/// replace each other and the last one runs once the window closes, so the
/// final value of a burst is never lost.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    timeout: f64,
    last_run: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(timeout: f64) -> Self {
        Self { timeout, last_run: None, pending: None }
    }

    /// Returns the value when it should run now; otherwise it is kept as
    /// the trailing call and [`Self::deadline`] tells when to poll.
    pub fn call(&mut self, now: f64, value: T) -> Option<T> {
        match self.last_run {
            Some(last) if now - last < self.timeout => {
                self.pending = Some(value);
                None
            }
            _ => {
                self.pending = None;
                self.last_run = Some(now);
                Some(value)
            }
        }
    }

    /// Releases the trailing call once its window has closed
    pub fn poll(&mut self, now: f64) -> Option<T> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.last_run = Some(now);
        self.pending.take()
    }

    /// When the pending trailing call is due, if any
    pub fn deadline(&self) -> Option<f64> {
        match (&self.pending, self.last_run) {
            (Some(_), Some(last)) => Some(last + self.timeout),
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
