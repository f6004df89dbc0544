//! # quickprop - property checks with composable generators
//!
//! quickprop samples values from an [`Arbitrary`] generator, feeds each one to
//! a predicate and reports the first value the predicate rejects. There is no
//! shrinking: the counter-example is reported exactly as it was sampled.
//!
//! ## Quick Start
//!
//! ```rust
//! use quickprop::{ArrayConfig, NumberConfig, arrays, numbers, quickcheck};
//!
//! let lists = arrays(numbers(NumberConfig::default()).unwrap(), ArrayConfig::default());
//! let result = quickcheck(
//!     |mut xs: Vec<f64>| {
//!         xs.sort_by(|a, b| a.total_cmp(b));
//!         xs.windows(2).all(|w| w[0] <= w[1])
//!     },
//!     lists,
//! );
//! assert!(result.is_ok());
//! ```
//!
//! Setting `QUICKPROP_TRACE=1` prints one line per trial to stderr. Use
//! [`Runner`] with an explicit [`TraceConfig`] to trace elsewhere.

extern crate self as quickprop;

pub mod arbitrary;
pub mod config;
pub mod error;
pub mod execution;
pub mod primitives;
pub mod property;
pub mod rng;
pub mod trace;

pub use arbitrary::{
    Arbitrary, BoxedArbitrary, ConstantGenerator, FnGenerator, Map, OneOfGenerator, constant,
    from_fn, one_of,
};
pub use config::{
    ALPHANUMERIC, ArrayConfig, ConfigError, NumberConfig, SYMBOLS, StringConfig, TestConfig,
    WHITESPACE,
};
pub use error::{PropertyError, TestFailure};
pub use execution::{
    Runner, quickcheck, quickcheck_async, quickcheck_async_with_iterations,
    quickcheck_with_iterations,
};
pub use primitives::*;
pub use property::{AsyncProperty, Property, PropertyOutcome};
pub use trace::{TraceBuffer, TraceConfig, TraceSink, global_trace_config, truncate_for_trace};

pub use rand::RngCore;

// Re-export derive macro from separate crate when derive feature is enabled
#[cfg(feature = "derive")]
pub use quickprop_derive::Record;
