use crate::core::Area;
use crate::resolver::Eligibility;
use crate::visitor::Visitor;
use std::collections::{HashSet, VecDeque};

/// FIFO expansion: a state is queued on first discovery and expanded once.
pub(super) fn walk<'a, V: Visitor>(
    area: &'a Area,
    start: &'a str,
    eligibility: &Eligibility<'_>,
    visitor: &mut V,
) -> usize {
    let mut discovered: HashSet<&'a str> = HashSet::from([start]);
    let mut pending: VecDeque<&'a str> = VecDeque::from([start]);
    let mut reported = 0;

    while let Some(state) = pending.pop_front() {
        for (_, activity) in area.departures(state) {
            if !eligibility.guards_hold(activity) {
                continue;
            }

            let destination = activity.destination();
            visitor.visit(state, activity, destination);
            reported += 1;

            if let Some(next) = destination.state_name() {
                if discovered.insert(next) {
                    pending.push_back(next);
                }
            }
        }
    }

    reported
}
