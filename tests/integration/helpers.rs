//! Shared helper types for the integration tests
//!
//! The vector types are "contagious" the way graphics-library vectors tend
//! to be: adding one to any compatible value yields another vector.

use std::any::Any;

use better_sum::{Addable, Summand};

/// Immutable 2D vector whose addition only accepts other vectors.
///
/// This is the shape of type the crate exists for: `0 + Vec2` has no
/// meaning, so classic summation cannot start it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Addable for Vec2 {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn boxed_clone(&self) -> Summand {
        Box::new(*self)
    }

    fn try_add(&self, rhs: &dyn Addable) -> Option<Summand> {
        let rhs = rhs.downcast_ref::<Vec2>()?;
        Some(Box::new(Vec2::new(self.x + rhs.x, self.y + rhs.y)))
    }
}

/// Scalar wrapper that does accept a numeric zero, through its reflected
/// hook, so classic fallback summation works on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meters(pub f64);

impl Addable for Meters {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn boxed_clone(&self) -> Summand {
        Box::new(*self)
    }

    fn try_add(&self, rhs: &dyn Addable) -> Option<Summand> {
        let rhs = rhs.downcast_ref::<Meters>()?;
        Some(Box::new(Meters(self.0 + rhs.0)))
    }

    fn try_radd(&self, lhs: &dyn Addable) -> Option<Summand> {
        let n = lhs.downcast_ref::<i64>()?;
        Some(Box::new(Meters(*n as f64 + self.0)))
    }
}
