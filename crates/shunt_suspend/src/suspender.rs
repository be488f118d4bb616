//! Closure-form evaluation.
//!
//! The body receives a [`Suspender`] as its resume context. Binding goes
//! through the bind-request protocol of `shunt_either`: the request is
//! stepped once, a finished request resumes the body with its payload and a
//! yielded one records the failure in the suspender and hands the body a
//! [`Suspended`] marker to propagate with `?`.
//!
//! The suspender, not the marker, owns the failure. A body that swallows the
//! marker still ends in `Left` with the first failure, and every bind after
//! it is refused without being stepped.

use std::marker::PhantomData;

use shunt_either::{Either, Step};

use crate::DriveState;

/// Invariant lifetime tying a marker to the run that created it.
type Brand<'cx> = PhantomData<fn(&'cx ()) -> &'cx ()>;

/// Marker returned by a failed bind.
///
/// Carries no payload; the failure lives in the [`Suspender`]. Only
/// [`Suspender::bind`] creates one, and the `'cx` brand keeps a marker from
/// one run out of the result of another.
#[derive(Debug)]
#[must_use = "propagate with `?` so the body stops at the failed bind"]
pub struct Suspended<'cx> {
    _brand: Brand<'cx>,
}

impl Suspended<'_> {
    fn new() -> Self {
        Suspended {
            _brand: PhantomData,
        }
    }
}

/// Resume context handed to a [`run_suspending`] body.
#[derive(Debug)]
pub struct Suspender<'cx, F> {
    binds: usize,
    state: DriveState,
    first_failure: Option<F>,
    _brand: Brand<'cx>,
}

impl<'cx, F> Suspender<'cx, F> {
    fn new() -> Self {
        Suspender {
            binds: 0,
            state: DriveState::Running,
            first_failure: None,
            _brand: PhantomData,
        }
    }

    /// Bind a value, suspending the body on it.
    ///
    /// Returns the success payload so the body can keep going. On failure the
    /// payload is converted into `F` and recorded, and [`Suspended`] is
    /// returned. Once a failure is recorded, later binds return [`Suspended`]
    /// without stepping their value.
    pub fn bind<T, G>(&mut self, value: Either<G, T>) -> Result<T, Suspended<'cx>>
    where
        G: Into<F>,
    {
        let index = self.binds;
        self.binds += 1;
        if self.state == DriveState::Failed {
            tracing::trace!(index, state = ?self.state, "bind refused after failure");
            return Err(Suspended::new());
        }
        match value.bind_value().step() {
            Step::Done(success) => {
                tracing::trace!(index, state = ?self.state, "bind resumed");
                Ok(success)
            }
            Step::Yielded(failure) => {
                tracing::debug!(index, "bind short-circuited");
                self.first_failure = Some(failure.into());
                self.state = DriveState::Failed;
                Err(Suspended::new())
            }
        }
    }

    /// Bind a `Result`, treating `Err` as the failure.
    pub fn bind_result<T, G>(&mut self, value: Result<T, G>) -> Result<T, Suspended<'cx>>
    where
        G: Into<F>,
    {
        self.bind(Either::from(value))
    }

    /// Number of binds issued so far, including failed and refused ones.
    pub fn binds(&self) -> usize {
        self.binds
    }

    /// `Running` until a bind fails, `Failed` afterwards.
    pub fn state(&self) -> DriveState {
        self.state
    }
}

/// Run a closure body to completion or to its first failed bind.
///
/// The run is `Left` of the first failure whenever any bind failed, whatever
/// the body itself returned.
///
/// ```
/// use shunt_either::Either;
/// use shunt_suspend::run_suspending;
///
/// let result: Either<&str, i32> = run_suspending(|cx| {
///     let r = cx.bind(Either::<&str, i32>::right(7))?;
///     Ok(r + 1)
/// });
/// assert_eq!(result, Either::Right(8));
///
/// let result: Either<&str, i32> = run_suspending(|cx| {
///     cx.bind(Either::<&str, i32>::left("err"))?;
///     Ok(999)
/// });
/// assert_eq!(result, Either::Left("err"));
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_suspending<F, S>(
    body: impl for<'cx> FnOnce(&mut Suspender<'cx, F>) -> Result<S, Suspended<'cx>>,
) -> Either<F, S> {
    let mut cx = Suspender::new();
    let outcome = body(&mut cx);
    let result = match (cx.first_failure.take(), outcome) {
        (Some(failure), _) => Either::Left(failure),
        (None, Ok(output)) => {
            cx.state = DriveState::Succeeded;
            Either::Right(output)
        }
        // Markers are branded per run and only minted after recording a failure.
        (None, Err(Suspended { .. })) => {
            unreachable!("`Suspended` returned without a recorded failure")
        }
    };
    tracing::debug!(binds = cx.binds, state = ?cx.state, "run finished");
    result
}
