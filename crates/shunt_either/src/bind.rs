//! Bind requests: the single-step suspension protocol behind `bind`.
//!
//! An evaluator never pattern-matches on `Either` directly. It asks the value
//! for a [`BindRequest`] and steps it exactly once:
//!
//! - a success finishes immediately, handing back its payload
//!   ([`Step::Done`]), which becomes the resumption value of the body;
//! - a failure surfaces its payload before finishing ([`Step::Yielded`]),
//!   which tells the evaluator to stop.
//!
//! Keeping the classification here means the evaluator only has to
//! distinguish "finished" from "yielded".

use crate::Either;

/// Outcome of stepping a [`BindRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<F, S> {
    /// The request finished with a resumption value.
    Done(S),
    /// The request yielded a failure before finishing.
    Yielded(F),
}

/// A single-use suspension token wrapping one `Either`.
///
/// Produced by [`Either::bind_value`]. [`BindRequest::step`] consumes it, so
/// a request can never be stepped twice.
#[derive(Debug)]
#[must_use = "a bind request does nothing until it is stepped"]
pub struct BindRequest<F, S> {
    bound: Either<F, S>,
}

impl<F, S> BindRequest<F, S> {
    /// Step the request once.
    #[inline]
    pub fn step(self) -> Step<F, S> {
        match self.bound {
            Either::Left(failure) => Step::Yielded(failure),
            Either::Right(success) => Step::Done(success),
        }
    }
}

impl<F, S> Either<F, S> {
    /// Turn this value into a bind request for a suspending evaluator.
    #[inline]
    pub fn bind_value(self) -> BindRequest<F, S> {
        BindRequest { bound: self }
    }
}
