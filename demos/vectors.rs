//! Summing 2D vectors without an explicit start value.
//!
//! Run with `cargo run --example vectors`.

use std::any::Any;

use better_sum::util::logger;
use better_sum::{register_start, sum, sum_with, Addable, Result, Summand};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    fn new(x: f64, y: f64) -> Self {
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

/// Polyline segment length that derives its own start lazily.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Length(f64);

impl Addable for Length {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn boxed_clone(&self) -> Summand {
        Box::new(*self)
    }

    fn try_add(&self, rhs: &dyn Addable) -> Option<Summand> {
        let rhs = rhs.downcast_ref::<Length>()?;
        Some(Box::new(Length(self.0 + rhs.0)))
    }

    fn sum_start(&self) -> Option<Summand> {
        Some(Box::new(Length(0.0)))
    }
}

fn main() -> Result<()> {
    logger::init();

    // Vec2 registers its start instance up front
    register_start(Vec2::new(0.0, 0.0));

    let displacement = sum(vec![
        Vec2::new(1.0, 2.0),
        Vec2::new(3.0, 4.0),
        Vec2::new(-1.0, 0.5),
    ])?;
    println!("displacement: {:?}", displacement);

    // Length lets its first summation derive and cache the start
    let perimeter = sum(vec![Length(3.0), Length(4.0), Length(5.0)])?;
    println!("perimeter: {:?}", perimeter);

    // an explicit start still behaves exactly like the classic form
    let offset = sum_with(vec![Vec2::new(1.0, 1.0)], Vec2::new(10.0, 10.0))?;
    println!("offset: {:?}", offset);

    Ok(())
}
