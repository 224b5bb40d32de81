use std::borrow::Cow;

use crate::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// List trait

/// Read-only access to an ordered sequence.
///
/// [`iter`](List::iter) is the primary enumerator and is allowed to fail:
/// a value may claim to be a sequence yet be unable to produce one (a lazy
/// or proxied sequence whose backing source is gone). Consumers should fall
/// back to indexed access via [`get`](List::get) when `iter` returns `None`,
/// and treat the sequence as empty when that fails too.
///
/// # Examples
///
/// ```
/// use jw_reflect::ops::List;
///
/// let values = vec![10_i32, 20, 30];
/// let list: &dyn List = &values;
///
/// assert_eq!(list.len(), 3);
/// assert!(list.get(1).is_some());
/// assert_eq!(list.iter().map(Iterator::count), Some(3));
/// ```
pub trait List: Reflect {
    /// The number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, if in bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// The primary element enumerator, or `None` when the value cannot
    /// produce one.
    fn iter(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>>;
}

// -----------------------------------------------------------------------------
// DynamicList

/// An ordered sequence assembled at runtime.
///
/// # Examples
///
/// ```
/// use jw_reflect::ops::{DynamicList, List};
///
/// let mut tags = DynamicList::new();
/// tags.push("x".to_string());
/// tags.push("y".to_string());
///
/// assert_eq!(tags.len(), 2);
/// ```
#[derive(Default)]
pub struct DynamicList {
    elements: Vec<Box<dyn Reflect>>,
}

impl DynamicList {
    /// Creates an empty `DynamicList`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `DynamicList` with at least the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Appends a boxed element.
    #[inline]
    pub fn push_boxed(&mut self, value: Box<dyn Reflect>) {
        self.elements.push(value);
    }

    /// Appends an element.
    #[inline]
    pub fn push<T: Reflect + 'static>(&mut self, value: T) {
        self.push_boxed(Box::new(value));
    }
}

impl Reflect for DynamicList {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("jw_reflect::ops::DynamicList")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("DynamicList")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl List for DynamicList {
    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.elements.as_slice().get(index).map(|element| &**element)
    }

    fn iter(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(self.elements.as_slice().iter().map(|element| &**element)))
    }
}

impl<T: Reflect + 'static> FromIterator<T> for DynamicList {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut list = DynamicList::new();
        for element in elements {
            list.push(element);
        }
        list
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReflectKind;

    #[test]
    fn elements_keep_push_order() {
        let list: DynamicList = [1_i32, 2, 3].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list.reflect_kind(), ReflectKind::List);

        let kinds: Vec<_> = List::iter(&list)
            .expect("dynamic lists always enumerate")
            .map(|element| element.reflect_kind())
            .collect();
        assert_eq!(kinds, [ReflectKind::Number; 3]);
    }
}
