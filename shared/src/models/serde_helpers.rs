//! Serde helpers for values the affiliate service may send as `null`

use serde::{Deserialize, Deserializer};

/// Deserialize a value that treats null as its default (0 for numbers)
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
