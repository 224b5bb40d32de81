use std::borrow::Cow;

use crate::{IdentityKey, Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Option

/// `Option` is transparent: `Some` reports the inner value's type, view, and
/// identity; `None` is the absent value.
impl<T: Reflect> Reflect for Option<T> {
    fn type_path(&self) -> Cow<'static, str> {
        match self {
            Some(value) => value.type_path(),
            None => Cow::Borrowed("core::option::Option"),
        }
    }

    fn type_ident(&self) -> Cow<'static, str> {
        match self {
            Some(value) => value.type_ident(),
            None => Cow::Borrowed("Option"),
        }
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Unit,
        }
    }

    fn identity(&self) -> IdentityKey {
        match self {
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
    use crate::ReflectKind;

    #[test]
    fn none_is_absent() {
        let value: Option<i32> = None;
        assert_eq!(value.reflect_kind(), ReflectKind::Unit);
    }

    #[test]
    fn some_is_transparent() {
        let value = Some(7_i32);
        assert_eq!(value.reflect_kind(), ReflectKind::Number);
        assert_eq!(value.type_ident(), "i32");
    }
}
