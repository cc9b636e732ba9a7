//! Error types for guard checks

/// A rejected parameter value, widened to 64 bits
///
/// Guards are overloaded across the scalar widths an RNG surface accepts.
/// The offending value is carried in the error through this sum type so a
/// single error kind covers every overload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParamValue {
    /// Signed integer parameter (i32 widened to i64)
    Int(i64),
    /// Unsigned integer parameter (u32 widened to u64)
    Uint(u64),
    /// Floating-point parameter (f32 widened to f64)
    Float(f64),
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Uint(value as u64)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Uint(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(value as f64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Uint(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Errors that can occur during guard checks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GuardError {
    /// A parameter fell outside its valid range
    OutOfRange {
        /// Name of the offending parameter
        param: &'static str,
        /// The rejected value
        value: ParamValue,
        /// Human-readable constraint the value violated
        constraint: &'static str,
    },
}

impl core::fmt::Display for GuardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GuardError::OutOfRange {
                param,
                value,
                constraint,
            } => {
                write!(f, "parameter '{param}' = {value} out of range: {constraint}")
            }
        }
    }
}

/// Result type for guard checks
pub type Result<T> = core::result::Result<T, GuardError>;
