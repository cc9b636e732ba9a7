//! Parameter validation guards for RNG entry points
//!
//! This module contains pure validation functions with no I/O dependencies.
//! Each guard is a single-shot predicate over scalar arguments: it either
//! returns `Ok(())` or rejects the input with [`GuardError::OutOfRange`].
//!
//! [`GuardError::OutOfRange`]: crate::error::GuardError::OutOfRange

pub mod bounds;
pub mod index;
pub mod range;

pub use bounds::{
    validate_stream_size, validate_upper_bound_f32, validate_upper_bound_f64,
    validate_upper_bound_i32, validate_upper_bound_i64,
};
pub use index::validate_from_index_size;
pub use range::{
    validate_range_f32, validate_range_f64, validate_range_i32, validate_range_i64,
    validate_range_u32, validate_range_u64,
};
