//! Dynamically typed addable values
//!
//! This module provides [`Addable`], the object-safe addition contract the
//! summation routine folds over, together with implementations for the
//! primitive numerics that realize classic start-at-zero behavior.

pub mod addable;
pub mod error;
pub mod numeric;

pub use addable::{add_pair, Addable, Summand};
pub use error::SumError;
