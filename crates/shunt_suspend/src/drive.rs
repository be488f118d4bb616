//! State-machine evaluation.
//!
//! A [`Suspendable`] body is started once and turns into a [`Resumable`]
//! continuation. Every transition either completes with the final output or
//! suspends, handing back the continuation together with a bind request.
//! [`drive`] steps the request once and decides:
//!
//! - `Step::Done(value)`: resume the continuation with `value`;
//! - `Step::Yielded(failure)`: drop the continuation and return `Left`.
//!
//! Continuations have no `start`, so a body cannot be restarted halfway.
//! The loop is iterative, so the number of binds in one run is not limited
//! by the call stack.

use shunt_either::{BindRequest, Either, Step};

/// State of one evaluator run.
///
/// Every run starts `Running` and ends in exactly one terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveState {
    Running,
    /// The body completed; the run yields `Right`.
    Succeeded,
    /// A bind yielded a failure; the run yields `Left`.
    Failed,
}

impl DriveState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, DriveState::Running)
    }
}

/// Result of advancing a continuation by one transition.
pub enum Resumed<C, F>
where
    C: Resumable<F>,
{
    /// The body wants `request` resolved before it continues as `C`.
    Suspended(C, BindRequest<F, C::Resume>),
    /// The body ran to the end.
    Complete(C::Output),
}

/// A suspended body waiting for the success payload of its last bind.
///
/// `resume` consumes the continuation, so one that has been dropped after a
/// failure can never run again.
pub trait Resumable<F>: Sized {
    /// Success payload type of the bind requests this body issues.
    type Resume;
    /// Final value of the body.
    type Output;

    fn resume(self, value: Self::Resume) -> Resumed<Self, F>;
}

/// A body that can be driven bind by bind.
pub trait Suspendable<F> {
    /// Final value of the body.
    type Output;
    /// What the body becomes after its first suspension.
    type Continuation: Resumable<F, Output = Self::Output>;

    /// First transition.
    fn start(self) -> Resumed<Self::Continuation, F>;
}

/// Drive `body` until it completes or a bind fails.
#[tracing::instrument(level = "debug", skip_all)]
pub fn drive<F, B>(body: B) -> Either<F, B::Output>
where
    B: Suspendable<F>,
{
    let mut state = DriveState::Running;
    let mut binds = 0_usize;
    let mut resumed = body.start();
    let result = loop {
        match resumed {
            Resumed::Complete(output) => {
                state = DriveState::Succeeded;
                break Either::Right(output);
            }
            Resumed::Suspended(continuation, request) => {
                let index = binds;
                binds += 1;
                match request.step() {
                    Step::Done(value) => {
                        tracing::trace!(index, ?state, "bind resumed");
                        resumed = continuation.resume(value);
                    }
                    Step::Yielded(failure) => {
                        // `continuation` is dropped here without being resumed.
                        tracing::debug!(index, "bind short-circuited");
                        state = DriveState::Failed;
                        break Either::Left(failure);
                    }
                }
            }
        }
    };
    tracing::debug!(binds, ?state, "drive finished");
    result
}
