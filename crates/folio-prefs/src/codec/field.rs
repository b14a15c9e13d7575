//! Per-field conversion between typed values and tree nodes.
//!
//! Reading is soft-failing: a key that is absent, of the wrong kind, or out
//! of range for the target type leaves the target untouched.

use folio_benc::{BencDict, BencValue};

use crate::types::DisplayMode;

/// A value that can be read from a single tree node.
pub(crate) trait FromBenc: Sized {
    /// Convert the node, or `None` if it has the wrong kind or shape.
    fn from_benc(value: &BencValue) -> Option<Self>;
}

/// Booleans are integers; any non-zero value is `true`.
impl FromBenc for bool {
    fn from_benc(value: &BencValue) -> Option<Self> {
        value.as_int().map(|n| n != 0)
    }
}

impl FromBenc for i32 {
    fn from_benc(value: &BencValue) -> Option<Self> {
        value.as_int().and_then(|n| i32::try_from(n).ok())
    }
}

impl FromBenc for u32 {
    fn from_benc(value: &BencValue) -> Option<Self> {
        value.as_int().and_then(|n| u32::try_from(n).ok())
    }
}

impl FromBenc for String {
    fn from_benc(value: &BencValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

/// Floats are decimal strings, see [`format_decimal`].
impl FromBenc for f32 {
    fn from_benc(value: &BencValue) -> Option<Self> {
        value.as_str().and_then(parse_decimal)
    }
}

impl FromBenc for DisplayMode {
    fn from_benc(value: &BencValue) -> Option<Self> {
        value.as_str().and_then(DisplayMode::from_name)
    }
}

/// A present value of the right kind becomes `Some`, even an empty string.
impl<T: FromBenc> FromBenc for Option<T> {
    fn from_benc(value: &BencValue) -> Option<Self> {
        T::from_benc(value).map(Some)
    }
}

/// Read `key` from `dict` into `field`.
///
/// Returns `true` if the field was updated.
pub(crate) fn read_field<T: FromBenc>(dict: &BencDict, key: &str, field: &mut T) -> bool {
    let Some(node) = dict.get(key) else {
        return false;
    };
    match T::from_benc(node) {
        Some(value) => {
            *field = value;
            true
        }
        None => {
            tracing::debug!(key, kind = %node.kind(), "ignoring malformed preference value");
            false
        }
    }
}

/// Format a float with exactly four fractional digits.
///
/// Decimal text keeps the file independent of the float's binary layout.
/// Precision beyond four digits is not preserved.
pub(crate) fn format_decimal(value: f32) -> String {
    format!("{value:.4}")
}

/// Parse decimal text written by [`format_decimal`] (or by hand).
///
/// Always uses `.` as the decimal separator. Non-finite results are rejected.
pub(crate) fn parse_decimal(text: &str) -> Option<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}

impl From<DisplayMode> for BencValue {
    fn from(mode: DisplayMode) -> Self {
        BencValue::from(mode.name())
    }
}
