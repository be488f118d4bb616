//! Flat sequences of fallible steps.
//!
//! A [`Pipeline`] threads one value through an ordered queue of steps. Each
//! step's result is bound before the next step is called, so a failing step
//! ends the run and no later step is ever invoked. This is the
//! `flat_map` chain expressed as a [`Suspendable`] body; once started it
//! continues as [`Stages`].

use std::collections::VecDeque;
use std::fmt;

use shunt_either::Either;

use crate::{drive, Resumable, Resumed, Suspendable};

type StepFn<'a, F, T> = Box<dyn FnOnce(T) -> Either<F, T> + 'a>;

pub struct Pipeline<'a, F, T> {
    seed: T,
    stages: Stages<'a, F, T>,
}

/// The remaining steps of a started [`Pipeline`].
pub struct Stages<'a, F, T> {
    steps: VecDeque<StepFn<'a, F, T>>,
}

impl<'a, F, T> Pipeline<'a, F, T> {
    pub fn new(seed: T) -> Self {
        Pipeline {
            seed,
            stages: Stages {
                steps: VecDeque::new(),
            },
        }
    }

    /// Append a step.
    #[must_use]
    pub fn then(mut self, step: impl FnOnce(T) -> Either<F, T> + 'a) -> Self {
        self.stages.steps.push_back(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Drive every step in order, stopping at the first failure.
    pub fn run(self) -> Either<F, T> {
        drive::<F, _>(self)
    }
}

impl<F, T> Stages<'_, F, T> {
    /// Steps not yet run.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn advance(mut self, value: T) -> Resumed<Self, F> {
        match self.steps.pop_front() {
            Some(step) => {
                let request = step(value).bind_value();
                Resumed::Suspended(self, request)
            }
            None => Resumed::Complete(value),
        }
    }
}

impl<'a, F, T> Suspendable<F> for Pipeline<'a, F, T> {
    type Output = T;
    type Continuation = Stages<'a, F, T>;

    fn start(self) -> Resumed<Stages<'a, F, T>, F> {
        self.stages.advance(self.seed)
    }
}

impl<F, T> Resumable<F> for Stages<'_, F, T> {
    type Resume = T;
    type Output = T;

    fn resume(self, value: T) -> Resumed<Self, F> {
        self.advance(value)
    }
}

impl<F, T: fmt::Debug> fmt::Debug for Pipeline<'_, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("seed", &self.seed)
            .field("steps", &self.len())
            .finish()
    }
}

impl<F, T> fmt::Debug for Stages<'_, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stages")
            .field("steps", &self.len())
            .finish()
    }
}
