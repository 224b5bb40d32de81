use std::borrow::Cow;

use crate::{Number, Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Unit and bool

impl Reflect for () {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("()")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("()")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Unit
    }
}

impl Reflect for bool {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Bool(*self)
    }
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_reflect_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn type_path(&self) -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn type_ident(&self) -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Number(Number::Int(*self as i128))
            }
        }
    )*};
}

macro_rules! impl_reflect_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn type_path(&self) -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn type_ident(&self) -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Number(Number::UInt(*self as u128))
            }
        }
    )*};
}

impl_reflect_signed!(i8, i16, i32, i64, i128, isize);
impl_reflect_unsigned!(u8, u16, u32, u64, u128, usize);

// -----------------------------------------------------------------------------
// Floats

impl Reflect for f32 {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("f32")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("f32")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Number(Number::Float(f64::from(*self)))
    }
}

impl Reflect for f64 {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("f64")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("f64")
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Number(Number::Float(*self))
    }
}

// -----------------------------------------------------------------------------
// Tests
