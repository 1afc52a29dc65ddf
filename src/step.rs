use crate::types::Callback;
use derive_more::Debug;
use std::rc::Rc;

/// A deferred computation producing exactly one value per run.
///
/// A `Step` owns a callback-registration function: starting the step hands
/// that function a callback, and the underlying operation eventually invokes
/// the callback with its result. Construction only captures what to do; no
/// effect runs before [`start`](Self::start). A step is an immutable value
/// and may be started any number of times, each run being independent.
///
/// Well-behaved steps invoke their callback at most once per run. The
/// combinators in [`crate::combine`] rely on that contract; a step that
/// violates it may drive them to complete downstream more than once.
#[must_use]
#[derive(Debug)]
pub struct Step<T> {
    #[debug(skip)]
    register: Rc<dyn Fn(Callback<T>)>,
}

impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        let Self { register } = self;
        Self {
            register: Rc::clone(register),
        }
    }
}

impl<T: 'static> Step<T> {
    /// Wrap a callback-registration function as a computation.
    ///
    /// `register` is called once per run with that run's callback. It must
    /// arrange for the callback to be invoked at most once, and must not
    /// re-enter its own setup through the callback.
    pub fn new(register: impl Fn(Callback<T>) + 'static) -> Self {
        Self {
            register: Rc::new(register),
        }
    }

    /// A computation that completes immediately with `value`.
    ///
    /// The callback runs synchronously inside [`start`](Self::start), once
    /// per run. Each run hands out its own copy of the value.
    pub fn ready(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |done| done(value.clone()))
    }

    /// A computation that never completes.
    ///
    /// Registers nothing and holds no resources: racing against it never
    /// delays the other branch, and it never wins. It is the identity element
    /// of [`Parallel::or`](crate::parallel::Parallel::or) and gives no
    /// finite-time guarantee of anything.
    pub fn never() -> Self {
        Self::new(|_done| {})
    }

    /// Run the computation, handing its eventual result to `done`.
    ///
    /// Returns as soon as the underlying operation is registered; completion
    /// is signaled only through `done`. For a computation built with
    /// [`ready`](Self::ready), that happens before `start` returns.
    pub fn start(&self, done: impl Fn(T) + 'static) {
        (self.register)(Rc::new(done));
    }
}
