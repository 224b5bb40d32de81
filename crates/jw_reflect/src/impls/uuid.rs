use std::borrow::Cow;

use uuid::Uuid;

use crate::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Uuid

/// Unique identifiers are textual scalars in hyphenated form.
impl Reflect for Uuid {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("uuid::Uuid")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("Uuid")
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(Cow::Owned(self.to_string()))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_is_hyphenated_text() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let ReflectRef::Text(text) = id.reflect_ref() else {
            panic!("uuids reflect as text");
        };
        assert_eq!(text, "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }
}
