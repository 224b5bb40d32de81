use std::borrow::Cow;

use crate::{Reflect, ReflectRef, scalar_text};

// -----------------------------------------------------------------------------
// Map trait

/// Read-only access to a keyed collection.
///
/// Entries enumerate in the implementation's own order: insertion order for
/// [`DynamicMap`], key order for `BTreeMap`, unspecified for `HashMap`.
/// Consumers that need a stable document should build from one of the
/// order-preserving implementations.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use jw_reflect::ops::Map;
///
/// let mut ages = BTreeMap::new();
/// ages.insert("ann", 39_u32);
/// ages.insert("ben", 41_u32);
///
/// let map: &dyn Map = &ages;
/// assert_eq!(map.len(), 2);
/// ```
pub trait Map: Reflect {
    /// The number of entries.
    fn len(&self) -> usize;

    /// Whether the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An iterator over the `(key, value)` entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}

// -----------------------------------------------------------------------------
// DynamicMap

/// A keyed collection assembled at runtime, preserving insertion order.
///
/// Keys are reflected values; inserting under a key whose
/// [`scalar_text`] matches an existing key's replaces that entry's value in
/// place. Keys without a scalar text form are appended without deduplication.
///
/// # Examples
///
/// ```
/// use jw_reflect::ops::{DynamicMap, Map};
///
/// let mut lookup = DynamicMap::new();
/// lookup.insert("1".to_string(), "first".to_string());
/// lookup.insert("2".to_string(), "second".to_string());
///
/// assert_eq!(lookup.len(), 2);
/// ```
#[derive(Default)]
pub struct DynamicMap {
    entries: Vec<(Box<dyn Reflect>, Box<dyn Reflect>)>,
}

impl DynamicMap {
    /// Creates an empty `DynamicMap`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `DynamicMap` with at least the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a boxed key/value entry.
    ///
    /// Returns the replaced value when the key's textual form matched an
    /// existing entry.
    pub fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Option<Box<dyn Reflect>> {
        let slot = match scalar_text(&*key) {
            Some(text) => {
                let text = text.into_owned();
                self.entries
                    .iter()
                    .position(|(existing, _)| scalar_text(&**existing).as_deref() == Some(&*text))
            }
            None => None,
        };
        match slot {
            Some(index) => {
                let (_, old) = std::mem::replace(&mut self.entries[index], (key, value));
                Some(old)
            }
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Inserts a key/value entry.
    #[inline]
    pub fn insert<K: Reflect + 'static, V: Reflect + 'static>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<Box<dyn Reflect>> {
        self.insert_boxed(Box::new(key), Box::new(value))
    }

    /// The value whose key has the given textual form, if present.
    pub fn get(&self, key_text: &str) -> Option<&dyn Reflect> {
        self.entries
            .iter()
            .find(|(key, _)| scalar_text(&**key).as_deref() == Some(key_text))
            .map(|(_, value)| &**value)
    }
}

impl Reflect for DynamicMap {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("jw_reflect::ops::DynamicMap")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("DynamicMap")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl Map for DynamicMap {
    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(self.entries.iter().map(|(key, value)| (&**key, &**value)))
    }
}

impl<K: Reflect + 'static, V: Reflect + 'static> FromIterator<(K, V)> for DynamicMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut map = DynamicMap::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        map
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut map = DynamicMap::new();
        map.insert("2".to_string(), 2_i32);
        map.insert("1".to_string(), 1_i32);

        let keys: Vec<_> = map
            .iter()
            .map(|(key, _)| scalar_text(key).expect("string keys have text").into_owned())
            .collect();
        assert_eq!(keys, ["2", "1"]);
    }

    #[test]
    fn insert_replaces_matching_key_text() {
        let mut map = DynamicMap::new();
        map.insert("k".to_string(), 1_i32);
        let old = map.insert("k".to_string(), 2_i32);

        assert!(old.is_some());
        assert_eq!(map.len(), 1);
        assert!(map.get("k").is_some());
    }

    #[test]
    fn numeric_keys_match_by_text() {
        let mut map = DynamicMap::new();
        map.insert(1_u32, "a".to_string());
        map.insert(1_i64, "b".to_string());

        assert_eq!(map.len(), 1);
    }
}
