//! Shunt Suspend - the short-circuiting evaluator.
//!
//! A body is a computation with zero or more bind points. Each bind point
//! hands an `Either` to the evaluator: a success resumes the body with the
//! unwrapped payload, a failure ends the run with `Left` and the body is
//! never resumed again.
//!
//! # Two Surfaces
//!
//! - **Closure form** ([`run_suspending`]): the body is a closure receiving a
//!   [`Suspender`]. `cx.bind(value)?` is a bind point; the `?` operator carries
//!   the failure out, so nothing after a failing bind runs.
//! - **State-machine form** ([`drive`]): the body implements [`Suspendable`],
//!   continues as a [`Resumable`] and is stepped explicitly, one bind request
//!   at a time. [`Pipeline`] is a ready-made body for a flat sequence of steps.
//!
//! Both forms resolve binds strictly in issue order and report the terminal
//! [`DriveState`] through `tracing`.

mod drive;
mod pipeline;
mod suspender;

pub use drive::{drive, DriveState, Resumable, Resumed, Suspendable};
pub use pipeline::{Pipeline, Stages};
pub use suspender::{run_suspending, Suspended, Suspender};
