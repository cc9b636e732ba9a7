//! Sub-range index/size validation for RNG parameters
//!
//! Validates that a sub-range `[fromIndex, fromIndex + size)` nests within
//! `[0, length)` before a generator fills a slice of an output buffer.

use crate::error::{GuardError, ParamValue, Result};

/// Validate a sub-range described by (fromIndex, size) against a length
///
/// Accepts iff `from_index >= 0`, `size >= 0`, and
/// `from_index + size <= length`. The sign check is a single bitwise OR over
/// the operands, so the both-negative case takes the same rejection path and
/// `length - from_index` is only computed once all operands are known
/// non-negative (no signed overflow).
pub const fn validate_from_index_size(from_index: i32, size: i32, length: i32) -> Result<()> {
    if (from_index | size | length) < 0 || size > length - from_index {
        return Err(GuardError::OutOfRange {
            param: "size",
            value: ParamValue::Int(size as i64),
            constraint: "range [fromIndex, fromIndex+size) out of bounds for length",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_from_index_size() {
        assert_eq!(validate_from_index_size(0, 0, 0), Ok(()));
        assert_eq!(validate_from_index_size(2, 2, 4), Ok(()));
        assert_eq!(validate_from_index_size(0, 4, 4), Ok(()));
        assert_eq!(validate_from_index_size(4, 0, 4), Ok(()));
        assert_eq!(validate_from_index_size(0, i32::MAX, i32::MAX), Ok(()));

        // [2, 5) exceeds length 4
        assert_eq!(
            validate_from_index_size(2, 3, 4),
            Err(GuardError::OutOfRange {
                param: "size",
                value: ParamValue::Int(3),
                constraint: "range [fromIndex, fromIndex+size) out of bounds for length",
            })
        );
        assert!(validate_from_index_size(5, 0, 4).is_err());
        assert!(validate_from_index_size(0, 5, 4).is_err());
    }

    #[test]
    fn test_negative_operands_rejected() {
        assert!(validate_from_index_size(-1, 2, 4).is_err());
        assert!(validate_from_index_size(2, -1, 4).is_err());
        assert!(validate_from_index_size(0, 0, -1).is_err());
        // Both negative takes the combined sign check, not sequential branches
        assert!(validate_from_index_size(-1, -1, 4).is_err());
        assert!(validate_from_index_size(i32::MIN, i32::MIN, 4).is_err());
    }

    #[test]
    fn test_extreme_operands_no_overflow() {
        // Would overflow a naive from_index + size <= length formulation
        assert!(validate_from_index_size(i32::MAX, i32::MAX, i32::MAX).is_err());
        assert!(validate_from_index_size(1, i32::MAX, i32::MAX).is_err());
        assert!(validate_from_index_size(i32::MAX, 1, i32::MAX).is_err());
        assert_eq!(validate_from_index_size(i32::MAX, 0, i32::MAX), Ok(()));
    }
}
