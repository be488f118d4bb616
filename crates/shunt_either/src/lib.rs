//! Shunt Either - the value vocabulary of the shunt evaluator.
//!
//! This crate provides:
//! - `Either<F, S>`: a closed two-variant result (`Left` = failure, `Right` = success)
//! - Variant-aware transformations (`map`, `map_left`, `flat_map`) and typed accessors
//! - The bind-request protocol (`Either::bind_value`, `BindRequest`, `Step`)
//!   consumed by `shunt_suspend`
//! - Panic bridging (`run_catching`, `Caught`)
//!
//! # Variant Conventions
//!
//! `Left` always carries the failure payload and `Right` the success payload.
//! Every transformation passes the untouched variant through without invoking
//! its callback.

mod bind;
mod catching;
mod either;

pub use bind::{BindRequest, Step};
pub use catching::{run_catching, Caught};
pub use either::Either;
