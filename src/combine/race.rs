use crate::{step::Step, types::SettleFlag};
use std::rc::Rc;

/// Select whichever of two computations completes first.
///
/// Every run of the returned step starts both branches, `lhs` before `rhs`.
/// The first arrival claims a flag scoped to that run and completes the
/// downstream callback; the later arrival finds the flag claimed and is
/// dropped silently. A tie within one synchronous step goes to `lhs`, whose
/// callback registers first.
///
/// The losing branch is not cancelled: it keeps running to its natural
/// completion with no observable effect. A branch that must release resources
/// when it loses has to arrange that itself.
pub fn race<T: 'static>(lhs: Step<T>, rhs: Step<T>) -> Step<T> {
    Step::new(move |done| {
        let settled = SettleFlag::unclaimed();

        lhs.start({
            let settled = Rc::clone(&settled);
            let done = Rc::clone(&done);
            move |value| {
                if settled.claim() {
                    done(value);
                }
            }
        });
        rhs.start(move |value| {
            if settled.claim() {
                done(value);
            }
        });
    })
}
