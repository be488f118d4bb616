//! The `Either` value type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// Exactly one variant is active. Transformations consume `self` and build a
/// new value; the payload of an existing `Either` is never rewritten in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<F, S> {
    /// Failure payload.
    Left(F),
    /// Success payload.
    Right(S),
}

impl<F, S> Either<F, S> {
    /// Construct a failure.
    #[inline]
    pub fn left(value: F) -> Self {
        Either::Left(value)
    }

    /// Construct a success.
    #[inline]
    pub fn right(value: S) -> Self {
        Either::Right(value)
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Transform the success payload. `f` is never called for `Left`.
    pub fn map<S2>(self, f: impl FnOnce(S) -> S2) -> Either<F, S2> {
        match self {
            Either::Left(failure) => Either::Left(failure),
            Either::Right(success) => Either::Right(f(success)),
        }
    }

    /// Transform the failure payload. `f` is never called for `Right`.
    pub fn map_left<F2>(self, f: impl FnOnce(F) -> F2) -> Either<F2, S> {
        match self {
            Either::Left(failure) => Either::Left(f(failure)),
            Either::Right(success) => Either::Right(success),
        }
    }

    /// Chain a fallible computation onto the success payload.
    ///
    /// For `Right(v)` this returns `f(v)` as-is, so chains never nest. For
    /// `Left` the original failure is returned and `f` is never called.
    pub fn flat_map<S2>(self, f: impl FnOnce(S) -> Either<F, S2>) -> Either<F, S2> {
        match self {
            Either::Left(failure) => Either::Left(failure),
            Either::Right(success) => f(success),
        }
    }

    /// Fold both variants into one value. Exactly one callback runs.
    pub fn either<T>(self, on_left: impl FnOnce(F) -> T, on_right: impl FnOnce(S) -> T) -> T {
        match self {
            Either::Left(failure) => on_left(failure),
            Either::Right(success) => on_right(success),
        }
    }

    /// Swap the variants.
    pub fn flip(self) -> Either<S, F> {
        match self {
            Either::Left(failure) => Either::Right(failure),
            Either::Right(success) => Either::Left(success),
        }
    }

    pub fn as_ref(&self) -> Either<&F, &S> {
        match self {
            Either::Left(failure) => Either::Left(failure),
            Either::Right(success) => Either::Right(success),
        }
    }

    pub fn as_mut(&mut self) -> Either<&mut F, &mut S> {
        match self {
            Either::Left(failure) => Either::Left(failure),
            Either::Right(success) => Either::Right(success),
        }
    }

    // Accessors

    /// The failure payload, if this is `Left`.
    pub fn left_value(self) -> Option<F> {
        match self {
            Either::Left(failure) => Some(failure),
            Either::Right(_) => None,
        }
    }

    /// The success payload, if this is `Right`.
    pub fn right_value(self) -> Option<S> {
        match self {
            Either::Left(_) => None,
            Either::Right(success) => Some(success),
        }
    }

    pub fn right_or(self, default: S) -> S {
        match self {
            Either::Left(_) => default,
            Either::Right(success) => success,
        }
    }

    pub fn left_or(self, default: F) -> F {
        match self {
            Either::Left(failure) => failure,
            Either::Right(_) => default,
        }
    }

    /// The success payload, or `f` applied to the failure payload.
    pub fn right_or_else(self, f: impl FnOnce(F) -> S) -> S {
        match self {
            Either::Left(failure) => f(failure),
            Either::Right(success) => success,
        }
    }

    /// The failure payload, or `f` applied to the success payload.
    pub fn left_or_else(self, f: impl FnOnce(S) -> F) -> F {
        match self {
            Either::Left(failure) => failure,
            Either::Right(success) => f(success),
        }
    }

    pub fn right_or_default(self) -> S
    where
        S: Default,
    {
        self.right_value().unwrap_or_default()
    }

    pub fn left_or_default(self) -> F
    where
        F: Default,
    {
        self.left_value().unwrap_or_default()
    }

    /// The success payload, without a prior variant check.
    ///
    /// # Panics
    ///
    /// Panics if this is `Left`. Use [`Either::right_value`] or
    /// [`Either::right_or`] when the variant is not already known.
    #[track_caller]
    pub fn unwrap_right(self) -> S
    where
        F: std::fmt::Debug,
    {
        match self {
            Either::Left(failure) => {
                panic!("called `Either::unwrap_right()` on a `Left` value: {failure:?}")
            }
            Either::Right(success) => success,
        }
    }

    /// The failure payload, without a prior variant check.
    ///
    /// # Panics
    ///
    /// Panics if this is `Right`.
    #[track_caller]
    pub fn unwrap_left(self) -> F
    where
        S: std::fmt::Debug,
    {
        match self {
            Either::Left(failure) => failure,
            Either::Right(success) => {
                panic!("called `Either::unwrap_left()` on a `Right` value: {success:?}")
            }
        }
    }

    /// Convert into a `Result`, with `Right` as `Ok` and `Left` as `Err`.
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Either::Left(failure) => Err(failure),
            Either::Right(success) => Ok(success),
        }
    }
}

impl<T> Either<T, T> {
    /// Whichever payload is present.
    ///
    /// Only available when both payloads share a type, so the result needs no
    /// variant check and this never panics. Callers that must know which
    /// variant they had should test `is_left`/`is_right` first.
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

impl<F, S> From<Result<S, F>> for Either<F, S> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(success) => Either::Right(success),
            Err(failure) => Either::Left(failure),
        }
    }
}

impl<F, S> From<Either<F, S>> for Result<S, F> {
    fn from(either: Either<F, S>) -> Self {
        either.into_result()
    }
}
