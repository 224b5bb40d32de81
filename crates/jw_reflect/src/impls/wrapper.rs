use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crate::{IdentityKey, Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Transparent wrappers
//
// Wrappers view and emit exactly as the value they designate and forward
// identity to it, so every path to one shared value yields one identity key.

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_path(&self) -> Cow<'static, str> {
        (**self).type_path()
    }

    fn type_ident(&self) -> Cow<'static, str> {
        (**self).type_ident()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn identity(&self) -> IdentityKey {
        (**self).identity()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn type_path(&self) -> Cow<'static, str> {
        (**self).type_path()
    }

    fn type_ident(&self) -> Cow<'static, str> {
        (**self).type_ident()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn identity(&self) -> IdentityKey {
        (**self).identity()
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn type_path(&self) -> Cow<'static, str> {
        (**self).type_path()
    }

    fn type_ident(&self) -> Cow<'static, str> {
        (**self).type_ident()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn identity(&self) -> IdentityKey {
        (**self).identity()
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn type_path(&self) -> Cow<'static, str> {
        (**self).type_path()
    }

    fn type_ident(&self) -> Cow<'static, str> {
        (**self).type_ident()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn identity(&self) -> IdentityKey {
        (**self).identity()
    }
}

// -----------------------------------------------------------------------------
// Cell<Option<&T>>

/// An optional back-reference slot.
///
/// This is the building block for object graphs with cycles: nodes hold
/// `Cell<Option<&'a Node>>` links that can be wired up after construction.
/// The slot is transparent: a filled slot views and identifies as the node
/// it points to, and an empty slot is the absent value. That transparency is
/// what lets identity tracking recognize a link back to an ancestor.
///
/// ```
/// use std::cell::Cell;
/// use jw_reflect::{Reflect, ReflectKind};
///
/// let target = 42_i32;
/// let link: Cell<Option<&i32>> = Cell::new(None);
/// assert_eq!(link.reflect_kind(), ReflectKind::Unit);
///
/// link.set(Some(&target));
/// assert_eq!(link.reflect_kind(), ReflectKind::Number);
/// assert_eq!(link.identity(), target.identity());
/// ```
impl<'a, T: Reflect> Reflect for Cell<Option<&'a T>> {
    fn type_path(&self) -> Cow<'static, str> {
        match self.get() {
            Some(value) => value.type_path(),
            None => Cow::Borrowed("core::cell::Cell"),
        }
    }

    fn type_ident(&self) -> Cow<'static, str> {
        match self.get() {
            Some(value) => value.type_ident(),
            None => Cow::Borrowed("Cell"),
        }
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self.get() {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Unit,
        }
    }

    fn identity(&self) -> IdentityKey {
        match self.get() {
            Some(value) => value.identity(),
            None => IdentityKey::from_parts(
                std::ptr::from_ref(self).cast::<u8>() as usize,
                &self.type_path(),
            ),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_clones_share_identity() {
        let first = Rc::new(String::from("shared"));
        let second = Rc::clone(&first);
        assert_eq!(first.identity(), second.identity());
    }

    #[test]
    fn distinct_allocations_differ() {
        let first = Box::new(String::from("x"));
        let second = Box::new(String::from("x"));
        assert_ne!(first.identity(), second.identity());
    }

    #[test]
    fn references_forward_identity() {
        let value = String::from("v");
        let reference = &value;
        assert_eq!(reference.identity(), value.identity());
    }
}
