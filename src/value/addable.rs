//! The object-safe addition contract
//!
//! Values are summed as `Box<dyn Addable>` trait objects so the routine can
//! key its start-value registry on the runtime type of the first element
//! and return the integer zero for empty input. Addition itself is a
//! two-sided protocol: the left operand is asked first, then the right
//! operand's reflected hook, mirroring how operator overloading resolves a
//! binary `+` between types that only know about one side.

use std::any::Any;
use std::fmt;

use super::error::SumError;

/// A boxed addable value, the element and result type of summation
pub type Summand = Box<dyn Addable>;

/// Binary addition over dynamically typed values
///
/// Implementors only need [`as_any`](Addable::as_any),
/// [`boxed_clone`](Addable::boxed_clone) and [`try_add`](Addable::try_add);
/// the remaining methods have defaults. A type whose addition cannot accept
/// a bare zero should either be registered with
/// [`register_start`](crate::registry::register_start) or override
/// [`sum_start`](Addable::sum_start).
pub trait Addable: fmt::Debug + Send + Sync + 'static {
    /// Upcast for exact-type inspection and downcasting
    fn as_any(&self) -> &dyn Any;

    /// Copy `self` into a fresh box
    fn boxed_clone(&self) -> Summand;

    /// `self + rhs`
    ///
    /// Return `None` when `rhs` is not a type this implementation knows how
    /// to add; the protocol then consults `rhs.try_radd(self)`.
    fn try_add(&self, rhs: &dyn Addable) -> Option<Summand>;

    /// Reflected addition: `lhs + self`, consulted when `lhs` did not
    /// recognize `self`
    fn try_radd(&self, _lhs: &dyn Addable) -> Option<Summand> {
        None
    }

    /// Declared default start value for summation
    ///
    /// This is the reserved opt-in hook for lazy registration: return
    /// `Some(default)` and [`sum`](crate::fold::sum) will use
    /// `default + first` as its start the first time it meets this type,
    /// caching `default` in the registry for every later call. The hook is
    /// read at most once per type per process.
    fn sum_start(&self) -> Option<Summand> {
        None
    }

    /// Concrete type name, for error reporting
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Addable {
    /// Whether the concrete type of this value is `T`
    pub fn is<T: Addable>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete value if its type is exactly `T`
    pub fn downcast_ref<T: Addable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl<T: Addable> From<T> for Summand {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

impl Clone for Summand {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Add two values through the two-sided dispatch protocol
///
/// Tries `lhs.try_add(rhs)` first, then the reflected `rhs.try_radd(lhs)`.
/// If neither side recognizes the other, the addition fails with
/// [`SumError::IncompatibleOperands`].
pub fn add_pair(
    lhs: &dyn Addable,
    rhs: &dyn Addable,
) -> Result<Summand, SumError> {
    if let Some(out) = lhs.try_add(rhs) {
        return Ok(out);
    }
    if let Some(out) = rhs.try_radd(lhs) {
        return Ok(out);
    }
    Err(SumError::IncompatibleOperands {
        lhs: lhs.type_name(),
        rhs: rhs.type_name(),
    })
}
