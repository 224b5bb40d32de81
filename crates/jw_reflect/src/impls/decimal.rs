use std::borrow::Cow;

use rust_decimal::Decimal;

use crate::{Number, Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Decimal

impl Reflect for Decimal {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("rust_decimal::Decimal")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("Decimal")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Number(Number::Decimal(*self))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_is_a_number() {
        let value = Decimal::new(1999, 2); // 19.99
        let ReflectRef::Number(number) = value.reflect_ref() else {
            panic!("decimals reflect as numbers");
        };
        assert_eq!(number.decimal_text().as_deref(), Some("19.99"));
    }
}
