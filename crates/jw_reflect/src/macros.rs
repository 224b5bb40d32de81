// -----------------------------------------------------------------------------
// reflect_struct

/// Implements [`Reflect`](crate::Reflect) and [`Struct`](crate::ops::Struct)
/// for an existing struct by listing its fields.
///
/// Fields enumerate in the listed order; the type path is the expansion
/// site's module path plus the type name. Every listed field's type must
/// itself implement `Reflect`.
///
/// # Examples
///
/// ```
/// use jw_reflect::reflect_struct;
/// use jw_reflect::ops::Struct;
///
/// struct Customer {
///     name: String,
///     age: u32,
/// }
/// reflect_struct!(Customer { name, age });
///
/// let customer = Customer { name: "Ann".into(), age: 39 };
/// assert_eq!(customer.field_len(), 2);
/// assert_eq!(customer.name_at(1), Some("age"));
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_path(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(::std::concat!(
                    ::std::module_path!(),
                    "::",
                    ::std::stringify!($ty),
                ))
            }

            fn type_ident(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(::std::stringify!($ty))
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Struct(self)
            }
        }

        impl $crate::ops::Struct for $ty {
            fn field(&self, name: &str) -> ::std::option::Option<&dyn $crate::Reflect> {
                match name {
                    $(::std::stringify!($field) => {
                        ::std::option::Option::Some(&self.$field as &dyn $crate::Reflect)
                    })+
                    _ => ::std::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::std::option::Option<&dyn $crate::Reflect> {
                let fields = [$(&self.$field as &dyn $crate::Reflect),+];
                fields.get(index).copied()
            }

            fn name_at(&self, index: usize) -> ::std::option::Option<&str> {
                const NAMES: &[&str] = &[$(::std::stringify!($field)),+];
                NAMES.get(index).copied()
            }

            fn field_len(&self) -> usize {
                [$(::std::stringify!($field)),+].len()
            }
        }
    };
}

// -----------------------------------------------------------------------------
// reflect_enum

/// Implements [`Reflect`](crate::Reflect) and [`Enum`](crate::ops::Enum) for
/// an existing C-like enum by listing its variants.
///
/// Only unit variants are supported here; enums with payload-carrying
/// variants implement [`Enum`](crate::ops::Enum) by hand (see its
/// documentation).
///
/// # Examples
///
/// ```
/// use jw_reflect::reflect_enum;
/// use jw_reflect::ops::Enum;
///
/// enum Color { Red, Green, Blue }
/// reflect_enum!(Color { Red, Green, Blue });
///
/// assert_eq!(Color::Green.variant_name(), "Green");
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_path(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(::std::concat!(
                    ::std::module_path!(),
                    "::",
                    ::std::stringify!($ty),
                ))
            }

            fn type_ident(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(::std::stringify!($ty))
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Enum(self)
            }
        }

        impl $crate::ops::Enum for $ty {
            fn variant_name(&self) -> &str {
                match self {
                    $(Self::$variant => ::std::stringify!($variant),)+
                }
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Tests
