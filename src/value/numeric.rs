//! `Addable` for the primitive numerics
//!
//! `i64` is the numeric zero classic summation starts from; `f64` rides
//! along so that an integer start promotes on float sequences instead of
//! failing. Promotion is one-way: int + float and float + int both yield
//! a float.

use std::any::Any;

use super::addable::{Addable, Summand};

impl Addable for i64 {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn boxed_clone(&self) -> Summand {
        Box::new(*self)
    }

    fn try_add(&self, rhs: &dyn Addable) -> Option<Summand> {
        if let Some(n) = rhs.downcast_ref::<i64>() {
            Some(Box::new(self + n))
        } else if let Some(x) = rhs.downcast_ref::<f64>() {
            Some(Box::new(*self as f64 + x))
        } else {
            None
        }
    }

    fn try_radd(&self, lhs: &dyn Addable) -> Option<Summand> {
        // numeric addition commutes
        self.try_add(lhs)
    }
}

impl Addable for f64 {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn boxed_clone(&self) -> Summand {
        Box::new(*self)
    }

    fn try_add(&self, rhs: &dyn Addable) -> Option<Summand> {
        if let Some(x) = rhs.downcast_ref::<f64>() {
            Some(Box::new(self + x))
        } else if let Some(n) = rhs.downcast_ref::<i64>() {
            Some(Box::new(self + *n as f64))
        } else {
            None
        }
    }

    fn try_radd(&self, lhs: &dyn Addable) -> Option<Summand> {
        self.try_add(lhs)
    }
}
