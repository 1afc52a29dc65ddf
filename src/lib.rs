//! Pairwise join/race combinators for callback-driven computations.
//!
//! This crate composes callback-driven asynchronous computations in parallel
//! on a single logical thread of control. A computation ([`step::Step`]) owns
//! a callback-registration function; nothing blocks, and suspension is
//! represented entirely by "the callback has not been invoked yet". The crate:
//! - Runs two independently-completing branches and waits for both, combining
//!   their results in branch order ([`combine::join`]).
//! - Runs two branches and keeps whichever completes first, silently dropping
//!   the later arrival ([`combine::race`]).
//! - Handles both arrival orders without deadlock, double invocation, or lost
//!   results, coordinating through completion cells scoped to a single
//!   combinator run: no locks, no atomics, no OS threads.
//!
//! Key modules:
//! - `combine`: the two primitive combinators, `join` and `race`.
//! - `step`: the `Step` computation type and its constructors (`new`,
//!   `ready`, `never`) and runner (`start`).
//! - `parallel`: the `Parallel` wrapper exposing pointwise combination
//!   (`zip_with`), first-wins selection (`or`), its identity element
//!   (`never`), lifting (`ready`), and `map`.
//! - `driver`: a deterministic virtual-clock scheduler used as the reference
//!   substrate for tests and examples.
//! - `types`: the public `Callback` alias and the crate-private completion
//!   cells.
//!
//! Quick start:
//! 1. Obtain `Step`s from your substrate (here, the bundled [`driver`]).
//! 2. Combine them with `join`/`race`, or through the `Parallel` wrapper.
//! 3. Run the result by supplying a terminal callback, or let the driver
//!    observe it for you.
//!
//! ```
//! use joinrace::{combine::join, driver::Driver};
//!
//! let driver = Driver::new();
//! let number = driver.delayed(10, 3_i32);
//! let label = driver.delayed(5, "x".to_string());
//! let both = join(|n, s| format!("{s}{n}"), number, label);
//! assert_eq!(driver.drive(&both), Ok("x3".to_string()));
//! ```
//!
//! "Parallel" here means logically concurrent, unordered completion: both
//! branches are started before either is awaited, and whichever mechanism
//! drives them may interleave their completions in either order. Computations
//! are assumed to invoke their callback at most once per run; there is no
//! error channel, no cancellation, and no timeout. A branch that never
//! completes propagates as silent non-completion, to be bounded by the
//! caller.

/// The two primitive combinators.
///
/// `join` waits for both branches and combines their results in branch
/// order; `race` keeps whichever branch completes first. Both allocate their
/// coordination state per run and start the left branch before the right.
pub mod combine;
/// Deterministic virtual-clock scheduler.
///
/// Reference substrate for tests and examples: `delayed`/`timer` build
/// computations completing after a number of ticks, `drive` runs a
/// computation to queue exhaustion and reports non-completion as
/// `DriveError::Stalled`.
pub mod driver;
/// The `Parallel` wrapper and its composition operators.
///
/// Brands a computation as an independently-parallel branch and exposes
/// `map`, `zip_with`, `or`, `never`, and `ready`, plus adapters to enter and
/// leave the wrapper.
pub mod parallel;
/// The `Step` computation type.
///
/// Defines the callback-registration computation value that everything else
/// composes: construction captures effects, `start` runs them.
pub mod step;
/// The public `Callback` alias and the crate-private completion cells used
/// by the combinators.
pub mod types;
