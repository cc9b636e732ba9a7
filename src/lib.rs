#![no_std]

//! Randguard - Parameter Validation Guards for RNG Entry Points
//!
//! This crate provides the guard checks that random-number-generation APIs
//! run before producing any value: stream sizes, exclusive upper bounds,
//! (origin, bound) ranges, and sub-range index/size triples. Each guard
//! either accepts its input or rejects it with an error naming the offending
//! parameter, the rejected value, and the violated constraint.
//!
//! All checks are pure functions with no I/O dependencies and no shared
//! state, safe to call concurrently from any context.

pub mod error;
pub mod validation;

pub use error::*;
pub use validation::*;
