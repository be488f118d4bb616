//! Bridging panics into `Either`.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::Either;

/// A panic captured by [`run_catching`].
///
/// Keeps the original payload so callers can recover typed values passed to
/// `std::panic::panic_any`, plus a rendered message for display.
#[derive(Debug, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct Caught {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl Caught {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Caught { message, payload }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// The payload as `T`, if that is what the callback panicked with.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

/// Run `cb`, converting a panic into `Left(Caught)`.
///
/// A normal return becomes `Right`. The panic never propagates past this
/// call. Builds with `panic = "abort"` terminate before anything can be
/// caught.
///
/// The default panic hook still reports the panic on stderr.
pub fn run_catching<S>(cb: impl FnOnce() -> S) -> Either<Caught, S> {
    match catch_unwind(AssertUnwindSafe(cb)) {
        Ok(value) => Either::Right(value),
        Err(payload) => Either::Left(Caught::from_payload(payload)),
    }
}

#[cfg(test)]
mod tests;
