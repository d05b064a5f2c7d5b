//! better-sum
//!
//! A type-aware, drop-in replacement for classic reduce-by-addition.
//!
//! Plain summation starts from the integer zero, which breaks types whose
//! addition does not accept a bare `0` (a 2D vector, say). This crate lets
//! a type register a default start instance once; [`sum`] then resolves the
//! start value at call time from the runtime type of the first element, so
//! callers never have to pass one and the type never has to special-case
//! zero inside its own addition.
//!
//! # Example
//!
//! ```
//! use better_sum::sum;
//!
//! let total = sum(vec![1_i64, 2, 3]).unwrap();
//! assert_eq!(total.downcast_ref::<i64>(), Some(&6));
//! ```
//!
//! To give a type its own start value, either register an instance up
//! front with [`register_start`], or override the reserved
//! [`Addable::sum_start`] hook so the first summation derives and caches
//! one lazily.

#![doc(html_root_url = "https://docs.rs/better-sum")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod fold;
pub mod registry;
pub mod value;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

pub use fold::{sum, sum_with};
pub use registry::{register_start, register_start_from, StartRegistry, SUM_STARTS};
pub use value::{add_pair, Addable, SumError, Summand};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "better-sum";
