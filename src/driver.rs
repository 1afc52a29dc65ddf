use crate::step::Step;
use core::cell::{Cell, RefCell};
use core::cmp::{Ordering, Reverse};
use derive_more::Debug;
use std::{collections::BinaryHeap, rc::Rc};
use thiserror::Error;

/// Error returned by [`Driver::drive`] when scheduled work ran out before the
/// computation completed.
///
/// A branch that never invokes its callback propagates as silent
/// non-completion of the composite; the edge that owns the clock is the first
/// place it becomes observable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DriveError {
    /// The queue drained while the terminal callback was still pending.
    #[error("queue drained before the computation completed")]
    Stalled,
}

type Job = Box<dyn FnOnce()>;

struct Entry {
    due: u64,
    /// Submission counter breaking ties between jobs due on the same tick.
    seq: u64,
    job: Job,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        (self.due, self.seq) == (other.due, other.seq)
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

#[derive(Default)]
struct DriverState {
    queue: BinaryHeap<Reverse<Entry>>,
    now: u64,
    next_seq: u64,
}

/// Deterministic single-threaded virtual-clock scheduler.
///
/// The substrate the crate's tests and examples run on. Jobs execute in
/// `(due tick, submission order)` order, so a given program always replays
/// the same interleaving. Cloning the handle shares the clock and queue.
///
/// This is a reference substrate: it makes no claims about real time, only
/// about order.
#[must_use]
#[derive(Clone, Default, Debug)]
pub struct Driver {
    #[debug(skip)]
    state: Rc<RefCell<DriverState>>,
}

impl Driver {
    /// Fresh driver with an empty queue at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    /// Schedule `job` to run `delay` ticks from now.
    ///
    /// Jobs due on the same tick run in submission order.
    pub fn enqueue_after(&self, delay: u64, job: impl FnOnce() + 'static) {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(Reverse(Entry {
            due,
            seq,
            job: Box::new(job),
        }));
    }

    /// A computation that completes with `value` after `delay` ticks.
    ///
    /// Each run schedules its own timer, relative to the clock at the moment
    /// the run starts.
    pub fn delayed<T: Clone + 'static>(&self, delay: u64, value: T) -> Step<T> {
        let driver = self.clone();
        Step::new(move |done| {
            let value = value.clone();
            driver.enqueue_after(delay, move || done(value));
        })
    }

    /// A bare timer: completes with `()` after `delay` ticks.
    pub fn timer(&self, delay: u64) -> Step<()> {
        self.delayed(delay, ())
    }

    /// Start `step` with a terminal callback and run the queue dry.
    ///
    /// Returns the value the terminal callback observed, or
    /// [`DriveError::Stalled`] if the queue drained without it ever being
    /// invoked.
    pub fn drive<T: 'static>(&self, step: &Step<T>) -> Result<T, DriveError> {
        let outcome = Rc::new(Cell::new(None));
        step.start({
            let outcome = Rc::clone(&outcome);
            move |value| outcome.set(Some(value))
        });
        self.run_until_idle();
        outcome.take().ok_or(DriveError::Stalled)
    }

    /// Run scheduled jobs in due order until none remain.
    ///
    /// The clock jumps to each job's due tick; jobs a running job schedules
    /// join the same queue.
    pub fn run_until_idle(&self) {
        loop {
            // Pop under the borrow, run outside it: the job may re-enter the
            // driver to schedule more work or read the clock.
            let entry = {
                let mut state = self.state.borrow_mut();
                match state.queue.pop() {
                    Some(Reverse(entry)) => {
                        state.now = entry.due;
                        entry
                    }
                    None => break,
                }
            };
            (entry.job)();
        }
    }
}
