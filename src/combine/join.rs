use crate::{step::Step, types::ArrivalCell};
use std::rc::Rc;

/// Combine two independently-completing computations into one that completes
/// with `combine(a, b)` once both have.
///
/// Every run of the returned step starts both branches, `lhs` before `rhs`;
/// their completion order is up to the substrate driving them. Whichever
/// branch arrives first finds the opposite slot empty and parks its result in
/// its own; the second arrival finds the opposite slot filled, takes it, and
/// completes the downstream callback. The callback therefore runs exactly
/// once, when both branches have completed, and `combine` always receives the
/// `lhs` result as its first argument regardless of arrival order.
///
/// If either branch never completes, the join never completes. Non-completion
/// propagates silently; bounding it is the caller's concern.
pub fn join<A, B, T, F>(combine: F, lhs: Step<A>, rhs: Step<B>) -> Step<T>
where
    A: 'static,
    B: 'static,
    T: 'static,
    F: Fn(A, B) -> T + 'static,
{
    let combine = Rc::new(combine);
    Step::new(move |done| {
        // Slots scoped to this run. Each is written by one branch's callback
        // and drained by the other's.
        let lhs_slot = ArrivalCell::empty();
        let rhs_slot = ArrivalCell::empty();

        lhs.start({
            let lhs_slot = Rc::clone(&lhs_slot);
            let rhs_slot = Rc::clone(&rhs_slot);
            let combine = Rc::clone(&combine);
            let done = Rc::clone(&done);
            move |a| match rhs_slot.take() {
                // Right branch still pending: park and wait for it.
                None => lhs_slot.set(Some(a)),
                // Right branch already arrived: this arrival completes the join.
                Some(b) => done(combine(a, b)),
            }
        });
        rhs.start({
            let combine = Rc::clone(&combine);
            move |b| match lhs_slot.take() {
                None => rhs_slot.set(Some(b)),
                Some(a) => done(combine(a, b)),
            }
        });
    })
}
