use crate::core::Area;
use crate::resolver::Eligibility;
use crate::visitor::Visitor;
use std::collections::{HashMap, HashSet};

/// A state being worked through, and how far into its departures we are.
struct Frame<'a> {
    state: &'a str,
    cursor: usize,
}

/// Descend-first expansion with an explicit stack.
///
/// Entering a state walks its eligible departures in definition order.
/// Each (activity, state) transition is reported once; reporting a
/// transition into a named state pushes that state, even if it was entered
/// before, so its not-yet-reported transitions come out next. Every push
/// follows a fresh report, which bounds the walk.
pub(super) fn walk<'a, V: Visitor>(
    area: &'a Area,
    start: &'a str,
    eligibility: &Eligibility<'_>,
    visitor: &mut V,
) -> usize {
    let mut eligible: HashMap<&'a str, Vec<usize>> = HashMap::new();
    let mut reported: HashSet<(usize, &'a str)> = HashSet::new();
    let mut stack = vec![Frame {
        state: start,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let state = frame.state;
        let departures = eligible.entry(state).or_insert_with(|| {
            area.departures(state)
                .filter(|(_, activity)| eligibility.guards_hold(activity))
                .map(|(index, _)| index)
                .collect()
        });

        let next = departures[frame.cursor..]
            .iter()
            .position(|&index| !reported.contains(&(index, state)));

        let Some(offset) = next else {
            stack.pop();
            continue;
        };

        let index = departures[frame.cursor + offset];
        frame.cursor += offset + 1;
        reported.insert((index, state));

        let activity = &area.activities()[index];
        let destination = activity.destination();
        visitor.visit(state, activity, destination);

        if let Some(target) = destination.state_name() {
            stack.push(Frame {
                state: target,
                cursor: 0,
            });
        }
    }

    reported.len()
}
