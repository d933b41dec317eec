//! Lenient field deserializers.
//!
//! The schema treats an explicit JSON `null` exactly like a missing key, and
//! integer fields accept any JSON number (truncated toward zero). These
//! helpers are wired in with `#[serde(deserialize_with = ...)]` next to a
//! matching `#[serde(default = ...)]` for the missing-key case.

use serde::{Deserialize, Deserializer};

/// `null` becomes `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A color channel: `null` means the channel default of 1.0.
pub(crate) fn channel<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(one))
}

/// An integer field that tolerates fractional JSON numbers; `null` is 0.
pub(crate) fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, truncate))
}

/// Like [`int`], but `null` means 1. Used for grid column counts.
pub(crate) fn int_or_one<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(1, truncate))
}

pub(crate) fn one() -> f64 {
    1.0
}

pub(crate) fn one_i32() -> i32 {
    1
}

// `as` saturates out-of-range values and maps NaN to 0.
fn truncate(v: f64) -> i32 {
    v.trunc() as i32
}
