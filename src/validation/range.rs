//! Range validation for RNG parameters
//!
//! A range is a pair (origin, bound) where origin is the inclusive lower
//! bound and bound is the exclusive upper bound. These guards are pure
//! functions with no I/O.

use crate::error::{GuardError, ParamValue, Result};

/// Validate a signed 32-bit range: origin must be strictly below bound
pub const fn validate_range_i32(origin: i32, bound: i32) -> Result<()> {
    if origin >= bound {
        return Err(GuardError::OutOfRange {
            param: "origin",
            value: ParamValue::Int(origin as i64),
            constraint: "must be < bound",
        });
    }
    Ok(())
}

/// Validate a signed 64-bit range: origin must be strictly below bound
pub const fn validate_range_i64(origin: i64, bound: i64) -> Result<()> {
    if origin >= bound {
        return Err(GuardError::OutOfRange {
            param: "origin",
            value: ParamValue::Int(origin),
            constraint: "must be < bound",
        });
    }
    Ok(())
}

/// Validate an unsigned 32-bit range: origin must be strictly below bound
///
/// The comparison is unsigned, so a range like (0, u32::MAX) is valid and
/// there is no negative-origin case.
pub const fn validate_range_u32(origin: u32, bound: u32) -> Result<()> {
    if origin >= bound {
        return Err(GuardError::OutOfRange {
            param: "origin",
            value: ParamValue::Uint(origin as u64),
            constraint: "must be < bound",
        });
    }
    Ok(())
}

/// Validate an unsigned 64-bit range: origin must be strictly below bound
pub const fn validate_range_u64(origin: u64, bound: u64) -> Result<()> {
    if origin >= bound {
        return Err(GuardError::OutOfRange {
            param: "origin",
            value: ParamValue::Uint(origin),
            constraint: "must be < bound",
        });
    }
    Ok(())
}

/// Validate a 32-bit floating-point range
///
/// Both operands must be finite and origin must be strictly below bound.
/// NaN and infinities are rejected regardless of ordering, so downstream
/// arithmetic on `bound - origin` can never produce NaN or an infinite
/// interval width.
pub fn validate_range_f32(origin: f32, bound: f32) -> Result<()> {
    if origin >= bound || !origin.is_finite() || !bound.is_finite() {
        return Err(GuardError::OutOfRange {
            param: "origin",
            value: ParamValue::Float(origin as f64),
            constraint: "must be finite and < bound",
        });
    }
    Ok(())
}

/// Validate a 64-bit floating-point range
///
/// Same contract as [`validate_range_f32`].
pub fn validate_range_f64(origin: f64, bound: f64) -> Result<()> {
    if origin >= bound || !origin.is_finite() || !bound.is_finite() {
        return Err(GuardError::OutOfRange {
            param: "origin",
            value: ParamValue::Float(origin),
            constraint: "must be finite and < bound",
        });
    }
    Ok(())
}
