//! Shunt - Either values with short-circuiting do-notation.
//!
//! Re-exports the value layer (`shunt_either`) and the evaluator
//! (`shunt_suspend`) under one roof.
//!
//! ```
//! use shunt::prelude::*;
//!
//! let total: Either<&str, i32> = run_suspending(|cx| {
//!     let a = cx.bind(Either::<&str, i32>::right(40))?;
//!     let b = cx.bind(Either::<&str, i32>::right(2))?;
//!     Ok(a + b)
//! });
//! assert_eq!(total, Either::Right(42));
//!
//! let failed: Either<&str, i32> = run_suspending(|cx| {
//!     let a = cx.bind(Either::<&str, i32>::left("no a"))?;
//!     Ok(a)
//! });
//! assert_eq!(failed, Either::Left("no a"));
//!
//! let halved = Pipeline::new(8_u32)
//!     .then(|n| if n % 2 == 0 { Either::right(n / 2) } else { Either::left("odd") })
//!     .run();
//! assert_eq!(halved, Either::Right(4));
//! ```
//!
//! # Logging
//!
//! The evaluator emits `tracing` events (`debug` per run, `trace` per bind).
//! Call [`init_tracing`] and set `RUST_LOG`, e.g. `RUST_LOG=shunt_suspend=trace`.

pub use shunt_either::{run_catching, BindRequest, Caught, Either, Step};
pub use shunt_suspend::{
    drive, run_suspending, DriveState, Pipeline, Resumable, Resumed, Stages, Suspendable,
    Suspended, Suspender,
};

/// Common imports for writing suspending bodies.
pub mod prelude {
    pub use shunt_either::{run_catching, Either};
    pub use shunt_suspend::{
        drive, run_suspending, Pipeline, Resumable, Resumed, Suspendable, Suspender,
    };
}

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
