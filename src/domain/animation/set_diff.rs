use std::collections::BTreeSet;

use super::transition::Transition;

/// How a line's opacity moves over the next transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpacityPath {
    Fade { from: f64, to: f64 },
    Pinned(f64),
}

impl OpacityPath {
    pub fn end_value(&self) -> f64 {
        match *self {
            OpacityPath::Fade { to, .. } => to,
            OpacityPath::Pinned(v) => v,
        }
    }
}

/// `(disappearing, appearing)` between two hidden sets
pub fn hidden_diff(prev: &BTreeSet<usize>, curr: &BTreeSet<usize>) -> (BTreeSet<usize>, BTreeSet<usize>) {
    let disappearing = curr.difference(prev).copied().collect();
    let appearing = prev.difference(curr).copied().collect();
    (disappearing, appearing)
}

fn resting_opacity(hidden: &BTreeSet<usize>, line: usize) -> f64 {
    if hidden.contains(&line) { 0.0 } else { 1.0 }
}

/// Line opacity animation driven by hidden-set changes.
///
/// `appearing`/`disappearing` hold the lines whose current transition fades
/// towards 1/0. A line in either set is mid-fade, so its next path starts from
/// the live sample of that fade.
#[derive(Debug, Clone)]
pub struct SetDiffAnimator {
    appearing: BTreeSet<usize>,
    disappearing: BTreeSet<usize>,
    opacities: Vec<Transition>,
}

impl SetDiffAnimator {
    pub fn new(line_count: usize, hidden: &BTreeSet<usize>, now: f64, duration: f64) -> Self {
        let opacities = (0..line_count)
            .map(|line| Transition::pinned(resting_opacity(hidden, line), now, duration))
            .collect();
        Self {
            appearing: BTreeSet::new(),
            disappearing: BTreeSet::new(),
            opacities,
        }
    }

    pub fn appearing(&self) -> &BTreeSet<usize> {
        &self.appearing
    }

    pub fn disappearing(&self) -> &BTreeSet<usize> {
        &self.disappearing
    }

    /// Path of `line` when moving from `prev_hidden` to `curr_hidden`, with the
    /// outgoing transitions sampled at `elapsed`.
    pub fn opacity_path(
        &self,
        line: usize,
        prev_hidden: &BTreeSet<usize>,
        curr_hidden: &BTreeSet<usize>,
        elapsed: f64,
    ) -> OpacityPath {
        let to = resting_opacity(curr_hidden, line);
        let mid_fade = self.appearing.contains(&line) || self.disappearing.contains(&line);
        let from = match self.opacities.get(line) {
            Some(tr) if mid_fade => tr.value_at(elapsed),
            _ if prev_hidden.contains(&line) != curr_hidden.contains(&line) => resting_opacity(prev_hidden, line),
            _ => return OpacityPath::Pinned(to),
        };

        if from == to { OpacityPath::Pinned(to) } else { OpacityPath::Fade { from, to } }
    }

    /// Cancels all line fades and starts the paths for the new hidden set
    pub fn update(
        &mut self,
        prev_hidden: &BTreeSet<usize>,
        curr_hidden: &BTreeSet<usize>,
        elapsed: f64,
        now: f64,
        duration: f64,
    ) {
        let paths: Vec<OpacityPath> = (0..self.opacities.len())
            .map(|line| self.opacity_path(line, prev_hidden, curr_hidden, elapsed))
            .collect();

        self.appearing.clear();
        self.disappearing.clear();
        for (line, (path, tr)) in paths.into_iter().zip(self.opacities.iter_mut()).enumerate() {
            tr.cancel(now);
            *tr = match path {
                OpacityPath::Fade { from, to } => {
                    if to > from {
                        self.appearing.insert(line);
                    } else {
                        self.disappearing.insert(line);
                    }
                    Transition::new(from, to, now, duration)
                }
                OpacityPath::Pinned(value) => Transition::pinned(value, now, duration),
            };
        }
    }

    pub fn sample(&self, now: f64) -> Vec<f64> {
        self.opacities.iter().map(|tr| tr.sample(now)).collect()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.opacities
    }

    pub fn transitions_mut(&mut self) -> &mut [Transition] {
        &mut self.opacities
    }
}
