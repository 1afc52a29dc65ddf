use core::cell::Cell;
use derive_more::Deref;
use std::rc::Rc;

/// Callback receiving the result of a computation run.
///
/// Shared (`Rc`) because a combinator registers work on two branches and
/// either of them may end up being the one that completes the downstream
/// computation.
pub type Callback<T> = Rc<dyn Fn(T)>;

/// Arrival slot for one branch of a join.
///
/// Holds the branch result while the opposite branch is still pending.
/// A fresh pair is allocated for every run of a join, owned by the two
/// callbacks that run registers, and never escapes them. All access goes
/// through `Cell::take`/`Cell::set`, so each read-then-write is a single
/// logical step; the single-thread execution model rules out interleaving
/// between the two callbacks.
#[derive(Deref)]
#[repr(transparent)]
pub(crate) struct ArrivalCell<T>(Cell<Option<T>>);

impl<T> ArrivalCell<T> {
    /// Fresh empty slot, shared between the two callbacks of one run.
    pub(crate) fn empty() -> Rc<Self> {
        Rc::new(Self(Cell::new(None)))
    }
}

/// First-arrival claim flag for a race.
///
/// Allocated fresh for every run of a race and shared between that run's two
/// callbacks. Exactly one `claim` per run returns `true`.
#[derive(Debug)]
#[repr(transparent)]
pub(crate) struct SettleFlag(Cell<bool>);

impl SettleFlag {
    /// Fresh unclaimed flag, shared between the two callbacks of one run.
    pub(crate) fn unclaimed() -> Rc<Self> {
        Rc::new(Self(Cell::new(false)))
    }

    /// Claim the flag, reporting whether this call was the first to do so.
    pub(crate) fn claim(&self) -> bool {
        !self.0.replace(true)
    }
}
