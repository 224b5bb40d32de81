use crate::Reflect;

// -----------------------------------------------------------------------------
// Set trait

/// Read-only access to an unordered collection.
///
/// Sets render as JSON arrays; their enumeration order is the
/// implementation's own (key order for `BTreeSet`, unspecified for
/// `HashSet`).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use jw_reflect::ops::Set;
///
/// let values: BTreeSet<u32> = [3, 1, 2].into_iter().collect();
/// let set: &dyn Set = &values;
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().count(), 3);
/// ```
pub trait Set: Reflect {
    /// The number of elements.
    fn len(&self) -> usize;

    /// Whether the set has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An iterator over the elements.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;
}
