use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::ops::{List, Map, Set};
use crate::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Sequences

impl<T: Reflect> Reflect for Vec<T> {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("alloc::vec::Vec")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("Vec")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl<T: Reflect> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|element| element as &dyn Reflect)
    }

    fn iter(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(
            self.as_slice().iter().map(|element| element as &dyn Reflect),
        ))
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("array")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("array")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl<T: Reflect, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|element| element as &dyn Reflect)
    }

    fn iter(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(
            self.as_slice().iter().map(|element| element as &dyn Reflect),
        ))
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("alloc::collections::VecDeque")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("VecDeque")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl<T: Reflect> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|element| element as &dyn Reflect)
    }

    fn iter(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(
            VecDeque::iter(self).map(|element| element as &dyn Reflect),
        ))
    }
}

// -----------------------------------------------------------------------------
// Maps

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("alloc::collections::BTreeMap")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("BTreeMap")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K: Reflect, V: Reflect> Map for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)))
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("std::collections::HashMap")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("HashMap")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K: Reflect, V: Reflect, S> Map for HashMap<K, V, S> {
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(HashMap::iter(self).map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)))
    }
}

// -----------------------------------------------------------------------------
// Sets

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("alloc::collections::BTreeSet")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("BTreeSet")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Set(self)
    }
}

impl<T: Reflect> Set for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
        Box::new(BTreeSet::iter(self).map(|element| element as &dyn Reflect))
    }
}

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("std::collections::HashSet")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("HashSet")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Set(self)
    }
}

impl<T: Reflect, S> Set for HashSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
        Box::new(HashSet::iter(self).map(|element| element as &dyn Reflect))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReflectKind;

    #[test]
    fn sequence_kinds() {
        assert_eq!(vec![1_i32].reflect_kind(), ReflectKind::List);
        assert_eq!([1_i32, 2].reflect_kind(), ReflectKind::List);
        assert_eq!(VecDeque::<i32>::new().reflect_kind(), ReflectKind::List);
    }

    #[test]
    fn map_enumeration() {
        let map: BTreeMap<String, i32> = [("a".to_string(), 1), ("b".to_string(), 2)]
            .into_iter()
            .collect();
        assert_eq!(Map::len(&map), 2);
        assert_eq!(Map::iter(&map).count(), 2);
    }

    #[test]
    fn set_enumeration() {
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(Set::len(&set), 3);
        assert_eq!(Set::iter(&set).count(), 3);
    }
}
