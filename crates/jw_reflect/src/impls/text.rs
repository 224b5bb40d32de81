use std::borrow::Cow;

use crate::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// char

impl Reflect for char {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("char")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("char")
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(Cow::Owned(self.to_string()))
    }
}

// -----------------------------------------------------------------------------
// str / String / Cow<str>

impl Reflect for str {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("str")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("str")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(Cow::Borrowed(self))
    }
}

impl Reflect for String {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("alloc::string::String")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("String")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(Cow::Borrowed(self.as_str()))
    }
}

impl Reflect for Cow<'_, str> {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("alloc::borrow::Cow<str>")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("Cow")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(Cow::Borrowed(self.as_ref()))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_views_are_borrowed() {
        let owned = String::from("hello");
        let ReflectRef::Text(text) = owned.reflect_ref() else {
            panic!("strings reflect as text");
        };
        assert!(matches!(text, Cow::Borrowed("hello")));
    }
}
