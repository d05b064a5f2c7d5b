//! Per-type start value registry
//!
//! Process-wide mapping from a concrete value type to the instance
//! summation starts from when the caller gives no explicit start. Entries
//! come from explicit registration or from the first use of a type's
//! declared hook, and live for the rest of the process; the integer
//! zero entry is seeded at construction.

use std::any::TypeId;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::value::{Addable, Summand};

/// Global start value registry
///
/// Exposed for inspection and test setup; ordinary callers go through
/// [`register_start`], [`register_start_from`] or the
/// [`sum_start`](crate::value::Addable::sum_start) hook.
pub static SUM_STARTS: Lazy<RwLock<StartRegistry>> = Lazy::new(|| {
    let mut registry = StartRegistry::new();
    registry.seed_numeric_zero();
    RwLock::new(registry)
});

/// Start value registry type
#[derive(Default)]
pub struct StartRegistry {
    defaults: HashMap<TypeId, Summand>,
}

impl StartRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            defaults: HashMap::new(),
        }
    }

    /// Store `instance` as the start default for `type_id`
    ///
    /// At most one entry per type: a later insert silently replaces the
    /// earlier one.
    pub fn insert(
        &mut self,
        type_id: TypeId,
        instance: Summand,
    ) {
        self.defaults.insert(type_id, instance);
    }

    /// Clone out the default registered for `type_id`
    pub fn get(
        &self,
        type_id: TypeId,
    ) -> Option<Summand> {
        self.defaults.get(&type_id).map(|instance| instance.boxed_clone())
    }

    /// Whether `type_id` has a registered default
    pub fn contains(
        &self,
        type_id: TypeId,
    ) -> bool {
        self.defaults.contains_key(&type_id)
    }

    /// Number of registered defaults
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    /// Whether the registry holds no defaults
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    /// Seed the identity entry plain addition starts from
    fn seed_numeric_zero(&mut self) {
        self.defaults.insert(TypeId::of::<i64>(), Box::new(0_i64));
    }
}

/// Register an already-built instance as its type's start default
///
/// Does not touch the type's addition behavior, only the registry. A
/// repeat registration for the same type replaces the earlier default.
pub fn register_start<T: Addable>(instance: T) {
    debug!("registering sum start for {}", std::any::type_name::<T>());
    SUM_STARTS.write().insert(TypeId::of::<T>(), Box::new(instance));
}

/// Build and register a start default in one step
///
/// `make` runs immediately, so a failing constructor surfaces at the
/// registration site rather than at the first summation.
pub fn register_start_from<T, F>(make: F)
where
    T: Addable,
    F: FnOnce() -> T,
{
    register_start(make());
}
