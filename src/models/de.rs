//! Shared serde helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Keeps an explicit JSON `null` distinguishable from an absent key on
/// double-optional patch fields.
///
/// The serde derive only invokes a field deserializer when the key is
/// present, so a supplied `null` lands here and becomes `Some(None)`,
/// while a missing key takes the field default of `None`. Without this,
/// both collapse to the outer `None` and a null can never clear a field.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
