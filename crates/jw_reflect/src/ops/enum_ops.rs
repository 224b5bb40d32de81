use crate::Reflect;

// -----------------------------------------------------------------------------
// Enum trait

/// Read-only access to an enumeration value.
///
/// The only thing the emission layer needs from an enum is its symbolic
/// variant name; enums always render as that name, never as an underlying
/// discriminant or as an object, regardless of any payload the variant
/// carries.
///
/// For C-like enums, [`reflect_enum!`](crate::reflect_enum) generates the
/// implementation. Payload-carrying enums implement this manually with
/// `..`-patterns:
///
/// ```
/// use std::borrow::Cow;
/// use jw_reflect::{Reflect, ReflectRef};
/// use jw_reflect::ops::Enum;
///
/// enum Shape {
///     Circle(f64),
///     Rect { w: f64, h: f64 },
/// }
///
/// impl Reflect for Shape {
///     fn type_path(&self) -> Cow<'static, str> {
///         Cow::Borrowed(concat!(module_path!(), "::Shape"))
///     }
///     fn type_ident(&self) -> Cow<'static, str> {
///         Cow::Borrowed("Shape")
///     }
///     fn reflect_ref(&self) -> ReflectRef<'_> {
///         ReflectRef::Enum(self)
///     }
/// }
///
/// impl Enum for Shape {
///     fn variant_name(&self) -> &str {
///         match self {
///             Shape::Circle(..) => "Circle",
///             Shape::Rect { .. } => "Rect",
///         }
///     }
/// }
///
/// assert_eq!(Shape::Circle(1.0).variant_name(), "Circle");
/// ```
pub trait Enum: Reflect {
    /// The symbolic name of the current variant.
    fn variant_name(&self) -> &str;
}
