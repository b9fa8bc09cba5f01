//! Sinks for transitions discovered by a walk.
//!
//! A visitor receives every reported transition, synchronously and in
//! traversal order, then produces a result once the walk is over. It has no
//! say over the traversal itself.
//!
//! `finish` takes the visitor by value, so it runs exactly once.

mod count;
mod dot;
mod list;

pub use count::{TransitionCount, TransitionTally};
pub use dot::DotExport;
pub use list::TransitionList;

use crate::core::{Activity, Destination};

/// Receives the transitions of a walk.
pub trait Visitor {
    type Output;

    /// One transition: `from` --`activity`--> `to`.
    fn visit(&mut self, from: &str, activity: &Activity, to: &Destination);

    /// Called once after the last visit; its value is the walk's result.
    fn finish(self) -> Self::Output;
}

/// Adapts a closure into a visitor with no result.
///
/// ```rust
/// use statusflow::builder::ActivityBuilder;
/// use statusflow::core::{Activity, Destination};
/// use statusflow::visitor::{FnVisitor, Visitor};
///
/// let submit = ActivityBuilder::new("Submit").from("Draft").to("Review").build().unwrap();
///
/// let mut seen = 0;
/// let mut visitor = FnVisitor::new(|_from: &str, _activity: &Activity, _to: &Destination| {
///     seen += 1;
/// });
/// visitor.visit("Draft", &submit, submit.destination());
/// visitor.finish();
/// assert_eq!(seen, 1);
/// ```
pub struct FnVisitor<F> {
    visit: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&str, &Activity, &Destination),
{
    pub fn new(visit: F) -> Self {
        Self { visit }
    }
}

impl<F> Visitor for FnVisitor<F>
where
    F: FnMut(&str, &Activity, &Destination),
{
    type Output = ();

    fn visit(&mut self, from: &str, activity: &Activity, to: &Destination) {
        (self.visit)(from, activity, to)
    }

    fn finish(self) -> Self::Output {}
}

/// Lends a visitor to a walk; the caller keeps it and its accumulated
/// state afterwards.
impl<V: Visitor> Visitor for &mut V {
    type Output = ();

    fn visit(&mut self, from: &str, activity: &Activity, to: &Destination) {
        (**self).visit(from, activity, to)
    }

    fn finish(self) -> Self::Output {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ActivityBuilder;

    #[test]
    fn fn_visitor_forwards_every_visit() {
        let activity = ActivityBuilder::new("GO").from("A").to("B").build().unwrap();
        let mut seen = Vec::new();

        let mut visitor = FnVisitor::new(|from: &str, activity: &Activity, to: &Destination| {
            seen.push(format!("{from}:{}:{to}", activity.operation()));
        });
        visitor.visit("A", &activity, activity.destination());
        visitor.visit("A", &activity, &Destination::Terminal);
        visitor.finish();

        assert_eq!(seen, vec!["A:GO:B", "A:GO:None"]);
    }

    #[test]
    fn borrowed_visitor_keeps_state_with_caller() {
        let activity = ActivityBuilder::new("GO").from("A").to("B").build().unwrap();
        let mut list = TransitionList::new();

        {
            let borrowed = &mut list;
            borrowed.visit("A", &activity, activity.destination());
            Visitor::finish(borrowed);
        }

        assert_eq!(list.finish(), vec!["A--[GO]-->B"]);
    }
}
