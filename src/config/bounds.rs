//! Shared bound checks used by the section validators.
//!
//! Each helper reports the first violated rule as a bare message; the
//! top-level validator wraps it with the owning section's name.

use std::time::Duration;

/// `value` must be in `1..=max`.
pub(crate) fn int_range(
    field: &str,
    value: impl Into<u64>,
    max: impl Into<u64>,
    max_label: &str,
) -> Result<(), String> {
    let value = value.into();
    if value == 0 {
        return Err(format!("{field} must be at least 1"));
    }
    int_at_most(field, value, max, max_label)
}

/// `value` must be at most `max`.
pub(crate) fn int_at_most(
    field: &str,
    value: impl Into<u64>,
    max: impl Into<u64>,
    max_label: &str,
) -> Result<(), String> {
    if value.into() > max.into() {
        return Err(format!("{field} too high (max {max_label})"));
    }
    Ok(())
}

/// `value` must be positive and at most `max`.
pub(crate) fn duration_range(
    field: &str,
    value: Duration,
    max: Duration,
    max_label: &str,
) -> Result<(), String> {
    if value.is_zero() {
        return Err(format!("{field} must be positive"));
    }
    duration_at_most(field, value, max, max_label)
}

/// `value` must be at most `max`.
pub(crate) fn duration_at_most(
    field: &str,
    value: Duration,
    max: Duration,
    max_label: &str,
) -> Result<(), String> {
    if value > max {
        return Err(format!("{field} too high (max {max_label})"));
    }
    Ok(())
}

/// `value` must not be empty.
pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    Ok(())
}
