//! The summation routine
//!
//! [`sum`] folds a sequence left to right. When the caller gives no start
//! value, one is resolved in three steps:
//!
//! 1. A registry hit for the first element's exact type
//! 2. The type's declared [`sum_start`] hook, cached into the registry
//! 3. Plain addition from the integer zero
//!
//! The lookup is exact-type only. A wrapper around a registered type, or
//! any other distinct type, is unregistered until it registers itself.
//!
//! [`sum_start`]: crate::value::Addable::sum_start

use std::any::Any;

use tracing::{debug, trace};

use crate::registry::SUM_STARTS;
use crate::value::{add_pair, SumError, Summand};

/// Sum `values`, resolving the start from the first element's runtime type
///
/// An empty sequence returns the integer zero immediately, without
/// consulting the registry or the addition protocol. The sequence is
/// consumed once, in order; eager containers and single-pass iterators
/// behave identically.
///
/// # Example
///
/// ```
/// use better_sum::sum;
///
/// let total = sum(vec![1.5_f64, 2.5]).unwrap();
/// assert_eq!(total.downcast_ref::<f64>(), Some(&4.0));
/// ```
pub fn sum<I>(values: I) -> Result<Summand, SumError>
where
    I: IntoIterator,
    I::Item: Into<Summand>,
{
    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        // Empty fast path: no registry lookup, no addition.
        return Ok(Box::new(0_i64));
    };
    let first: Summand = first.into();
    let type_id = first.as_any().type_id();

    // registry hit: the type already has a default; the lookup clones the
    // default out so the lock is not held while adding
    let registered = SUM_STARTS.read().get(type_id);
    if let Some(default) = registered {
        trace!("sum start for {} resolved from registry", first.type_name());
        let start = add_pair(&*default, &*first)?;
        return fold_onto(start, values);
    }

    // declared start: cache it so the next call is a registry hit
    if let Some(default) = first.sum_start() {
        debug!("caching declared sum start for {}", first.type_name());
        let seed = default.boxed_clone();
        SUM_STARTS.write().insert(type_id, default);
        let start = add_pair(&*seed, &*first)?;
        return fold_onto(start, values);
    }

    // classic summation from the integer zero
    let zero: Summand = Box::new(0_i64);
    let start = add_pair(&*zero, &*first)?;
    fold_onto(start, values)
}

/// Sum `values` onto an explicit `start`
///
/// Pure pass-through to the plain left fold: no type inspection and no
/// registry access. An empty sequence returns `start` unchanged.
pub fn sum_with<I, S>(values: I, start: S) -> Result<Summand, SumError>
where
    I: IntoIterator,
    I::Item: Into<Summand>,
    S: Into<Summand>,
{
    fold_onto(start.into(), values.into_iter())
}

/// Plain left fold through the addition protocol
fn fold_onto<I>(start: Summand, values: I) -> Result<Summand, SumError>
where
    I: Iterator,
    I::Item: Into<Summand>,
{
    let mut acc = start;
    for value in values {
        let value: Summand = value.into();
        acc = add_pair(&*acc, &*value)?;
    }
    Ok(acc)
}
