//! Tri-state field used by partial updates.
//!
//! JSON has two ways of "not giving" a value: leaving the key out, or sending
//! `null`. A partial update has to tell them apart, because an omitted field
//! keeps its stored value while a `null` clears it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field in a partial update.
///
/// Use with `#[serde(default)]` on the containing struct so that a missing
/// key deserializes to [`Patch::Absent`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    /// Key was not present in the request.
    #[default]
    Absent,
    /// Key was present with an explicit `null`.
    Null,
    /// Key was present with a value.
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the caller set this field at all (null counts).
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Borrow the value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Overlay this patch onto a stored field.
    ///
    /// `Absent` keeps `current`, `Null` clears it, `Value` replaces it.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Absent => current,
            Patch::Null => None,
            Patch::Value(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present; absence is handled by the
        // container's `#[serde(default)]`.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => serializer.serialize_some(v),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}
