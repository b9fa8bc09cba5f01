use super::Visitor;
use crate::core::{Activity, Destination};
use std::collections::HashSet;

/// Totals gathered by [`TransitionCount`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionTally {
    /// Transitions reported.
    pub transitions: usize,
    /// Of those, how many leave the process.
    pub terminal: usize,
    /// Distinct states transitions were reported from.
    pub sources: usize,
}

/// Counts what a walk reports without keeping it.
#[derive(Clone, Debug, Default)]
pub struct TransitionCount {
    tally: TransitionTally,
    sources: HashSet<String>,
}

impl TransitionCount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for TransitionCount {
    type Output = TransitionTally;

    fn visit(&mut self, from: &str, _activity: &Activity, to: &Destination) {
        self.tally.transitions += 1;
        if to.is_terminal() {
            self.tally.terminal += 1;
        }
        if !self.sources.contains(from) {
            self.sources.insert(from.to_string());
        }
    }

    fn finish(mut self) -> Self::Output {
        self.tally.sources = self.sources.len();
        self.tally
    }
}
