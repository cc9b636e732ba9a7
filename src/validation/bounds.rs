//! Stream size and upper bound validation for RNG parameters
//!
//! These guards run before any entropy is consumed or output buffer is
//! allocated. They are pure functions with no I/O.

use crate::error::{GuardError, ParamValue, Result};

/// Validate the requested length of a stream of random values
///
/// A stream size is a count of values to produce and must be non-negative.
/// Zero is a valid (empty) stream.
pub const fn validate_stream_size(size: i64) -> Result<()> {
    if size < 0 {
        return Err(GuardError::OutOfRange {
            param: "size",
            value: ParamValue::Int(size),
            constraint: "must be >= 0",
        });
    }
    Ok(())
}

/// Validate an exclusive upper bound for 32-bit integer draws
///
/// Only non-negativity is enforced here. A bound of 0 passes this guard;
/// callers decide whether 0 means "unconstrained" or must be rejected at a
/// higher layer.
pub const fn validate_upper_bound_i32(bound: i32) -> Result<()> {
    if bound < 0 {
        return Err(GuardError::OutOfRange {
            param: "bound",
            value: ParamValue::Int(bound as i64),
            constraint: "must be >= 0",
        });
    }
    Ok(())
}

/// Validate an exclusive upper bound for 64-bit integer draws
///
/// Same contract as [`validate_upper_bound_i32`]: non-negativity only,
/// 0 is accepted.
pub const fn validate_upper_bound_i64(bound: i64) -> Result<()> {
    if bound < 0 {
        return Err(GuardError::OutOfRange {
            param: "bound",
            value: ParamValue::Int(bound),
            constraint: "must be >= 0",
        });
    }
    Ok(())
}

/// Validate an exclusive upper bound for 32-bit floating-point draws
///
/// The bound must lie in `(0, f32::MAX]`. Zero and negative values fail the
/// `> 0` test, NaN fails every comparison, and positive infinity fails the
/// `<= f32::MAX` test.
pub fn validate_upper_bound_f32(bound: f32) -> Result<()> {
    if bound > 0.0 && bound <= f32::MAX {
        return Ok(());
    }
    Err(GuardError::OutOfRange {
        param: "bound",
        value: ParamValue::Float(bound as f64),
        constraint: "must be in (0, MAX]",
    })
}

/// Validate an exclusive upper bound for 64-bit floating-point draws
///
/// Same contract as [`validate_upper_bound_f32`] with `f64::MAX` as the
/// largest acceptable value.
pub fn validate_upper_bound_f64(bound: f64) -> Result<()> {
    if bound > 0.0 && bound <= f64::MAX {
        return Ok(());
    }
    Err(GuardError::OutOfRange {
        param: "bound",
        value: ParamValue::Float(bound),
        constraint: "must be in (0, MAX]",
    })
}
