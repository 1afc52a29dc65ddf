use crate::{
    combine::{join, race},
    step::Step,
    types::Callback,
};
use core::fmt;
use std::rc::Rc;

/// A computation branded as one independently-parallel branch.
///
/// Wrapping changes how a computation composes, not what it does. Two
/// `Parallel` values combine pointwise with [`zip_with`](Self::zip_with),
/// which runs both branches concurrently and merges their results, or
/// alternatively with [`or`](Self::or), which keeps whichever finishes
/// first. [`never`](Self::never) is the identity element of `or`, and
/// [`ready`](Self::ready) lifts an already-known value. Unwrap with
/// [`into_step`](Self::into_step) to hand the composed computation back to
/// sequential code, or run it directly with [`start`](Self::start).
///
/// The wrapper carries no state of its own; entering and leaving it is free.
#[must_use]
pub struct Parallel<T>(Step<T>);

impl<T> Clone for Parallel<T> {
    fn clone(&self) -> Self {
        let Self(step) = self;
        Self(step.clone())
    }
}

impl<T> fmt::Debug for Parallel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(step) = self;
        f.debug_tuple("Parallel").field(step).finish()
    }
}

impl<T: 'static> Parallel<T> {
    /// Brand an existing computation as parallel. Identity wrap.
    pub fn from_step(step: Step<T>) -> Self {
        Self(step)
    }

    /// Unwrap back to the plain computation.
    ///
    /// Ownership of the inner computation transfers to the caller.
    pub fn into_step(self) -> Step<T> {
        let Self(step) = self;
        step
    }

    /// Lift a bare callback-registration closure directly, without an
    /// intermediate [`Step`] value at the call site.
    ///
    /// The contract is the same as for [`Step::new`]: `register` must invoke
    /// the callback it is given at most once per call.
    pub fn with_callback(register: impl Fn(Callback<T>) + 'static) -> Self {
        Self(Step::new(register))
    }

    /// A branch that completes immediately with `value`, within the
    /// [`start`](Self::start) call itself.
    pub fn ready(value: T) -> Self
    where
        T: Clone,
    {
        Self(Step::ready(value))
    }

    /// The branch that never completes.
    ///
    /// Identity element of [`or`](Self::or): `x.or(Parallel::never())`
    /// behaves exactly like `x`. It never wins a race and contributes no
    /// completion, so it is never useful to run on its own.
    pub fn never() -> Self {
        Self(Step::never())
    }

    /// Transform the eventual result. Introduces no parallelism.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Parallel<U> {
        let Self(step) = self;
        let f = Rc::new(f);
        Parallel(Step::new(move |done| {
            let f = Rc::clone(&f);
            step.start(move |value| done(f(value)));
        }))
    }

    /// Run both branches concurrently and combine their results pointwise.
    ///
    /// Both branches are started before either can complete, so two
    /// independent sub-computations proceed concurrently rather than
    /// sequentially; the combined branch completes once both have. `combine`
    /// receives `self`'s result first. Delegates to [`join`].
    pub fn zip_with<U, V>(
        self,
        other: Parallel<U>,
        combine: impl Fn(T, U) -> V + 'static,
    ) -> Parallel<V>
    where
        U: 'static,
        V: 'static,
    {
        let (Self(lhs), Parallel(rhs)) = (self, other);
        Parallel(join(combine, lhs, rhs))
    }

    /// Keep whichever of two branches completes first.
    ///
    /// The loser keeps running but its result is dropped. Delegates to
    /// [`race`].
    pub fn or(self, other: Self) -> Self {
        let (Self(lhs), Self(rhs)) = (self, other);
        Self(race(lhs, rhs))
    }

    /// Unwrap and run with a terminal callback in one call.
    pub fn start(&self, done: impl Fn(T) + 'static) {
        let Self(step) = self;
        step.start(done);
    }
}
