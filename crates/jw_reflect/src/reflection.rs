use std::borrow::Cow;
use std::fmt;

use crate::identity::IdentityKey;
use crate::number::Number;
use crate::ops::{Enum, List, Map, Set, Struct};

// -----------------------------------------------------------------------------
// ReflectKind

/// A pure enumeration of the structural kinds a reflected value can have.
///
/// Unlike [`ReflectRef`], this carries no data and is cheap to compare; use it
/// when only the shape of a value matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// An absent value: `()`, or `Option::None` seen through reflection.
    Unit,
    /// A boolean.
    Bool,
    /// Any numeric scalar, see [`Number`].
    Number,
    /// A textual scalar: strings, chars, and scalar types whose canonical
    /// JSON form is text (date/times, durations, unique identifiers).
    Text,
    /// An ordered sequence: `Vec<T>`, `[T; N]`, `VecDeque<T>`, ...
    List,
    /// An unordered collection: `HashSet<T>`, `BTreeSet<T>`, ...
    Set,
    /// A keyed collection: `HashMap<K, V>`, `BTreeMap<K, V>`, ...
    Map,
    /// A named-field aggregate.
    Struct,
    /// An enumeration variant.
    Enum,
    /// A value the reflection system cannot see into.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectKind::Unit => "unit",
            ReflectKind::Bool => "bool",
            ReflectKind::Number => "number",
            ReflectKind::Text => "text",
            ReflectKind::List => "list",
            ReflectKind::Set => "set",
            ReflectKind::Map => "map",
            ReflectKind::Struct => "struct",
            ReflectKind::Enum => "enum",
            ReflectKind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable structural view of a reflected value.
///
/// Every value exposes exactly one view. Scalars carry their data directly;
/// aggregates carry a trait object giving read-only access to their members.
///
/// # Examples
///
/// ```
/// use jw_reflect::ops::List;
/// use jw_reflect::{Reflect, ReflectRef};
///
/// let value = vec![1_i32, 2, 3];
/// let ReflectRef::List(list) = value.reflect_ref() else {
///     panic!("a Vec reflects as a list");
/// };
/// assert_eq!(list.len(), 3);
/// ```
pub enum ReflectRef<'a> {
    /// An absent value.
    Unit,
    /// A boolean with its value.
    Bool(bool),
    /// A numeric scalar.
    Number(Number),
    /// A textual scalar in its canonical form.
    Text(Cow<'a, str>),
    /// An ordered sequence.
    List(&'a dyn List),
    /// An unordered collection.
    Set(&'a dyn Set),
    /// A keyed collection.
    Map(&'a dyn Map),
    /// A named-field aggregate.
    Struct(&'a dyn Struct),
    /// An enumeration variant.
    Enum(&'a dyn Enum),
    /// A value with no usable view.
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// The data-less kind of this view.
    pub fn kind(&self) -> ReflectKind {
        match self {
            ReflectRef::Unit => ReflectKind::Unit,
            ReflectRef::Bool(_) => ReflectKind::Bool,
            ReflectRef::Number(_) => ReflectKind::Number,
            ReflectRef::Text(_) => ReflectKind::Text,
            ReflectRef::List(_) => ReflectKind::List,
            ReflectRef::Set(_) => ReflectKind::Set,
            ReflectRef::Map(_) => ReflectKind::Map,
            ReflectRef::Struct(_) => ReflectKind::Struct,
            ReflectRef::Enum(_) => ReflectKind::Enum,
            ReflectRef::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime inspection of values.
///
/// `Reflect` is deliberately read-only: it reports type names, exposes a
/// structural view, and produces an identity key. There is no mutation,
/// cloning, or downcasting surface; consumers walk values, they do not edit
/// them.
///
/// The trait has no `'static`, [`Any`](std::any::Any), or `Sync` requirement,
/// so borrowed graph nodes (for example structs holding
/// `Cell<Option<&'a Node>>` back-references) can implement it.
///
/// # Implementing
///
/// For ordinary structs and C-like enums, use the
/// [`reflect_struct!`](crate::reflect_struct) and
/// [`reflect_enum!`](crate::reflect_enum) macros. Manual implementations only
/// need [`type_path`](Reflect::type_path),
/// [`type_ident`](Reflect::type_ident), and
/// [`reflect_ref`](Reflect::reflect_ref); aggregates additionally implement
/// the matching access trait ([`Struct`], [`Map`], [`List`], [`Set`], or
/// [`Enum`]).
///
/// # Identity
///
/// [`identity`](Reflect::identity) defaults to reference identity: the
/// value's address paired with a digest of its type path. Wrapper
/// implementations (`&T`, `Box`, `Rc`, `Arc`, `Option`, `Cell<Option<&T>>`)
/// forward identity to the value they designate, so every path to a shared
/// value yields one key. An implementation must never derive identity from
/// the value's *content*: two distinct live values must never collide.
pub trait Reflect {
    /// The full path of the value's type, e.g. `my_crate::model::Customer`.
    ///
    /// Generic containers report their unparameterized path (`alloc::vec::Vec`);
    /// element types are recoverable from the elements themselves.
    fn type_path(&self) -> Cow<'static, str>;

    /// The short identifier of the value's type, e.g. `Customer`.
    fn type_ident(&self) -> Cow<'static, str>;

    /// The structural view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// The data-less kind of this value's view.
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    /// The identity key of this value, used for cycle detection.
    fn identity(&self) -> IdentityKey {
        IdentityKey::from_parts(
            std::ptr::from_ref(self).cast::<u8>() as usize,
            &self.type_path(),
        )
    }

    /// Casts this value to a reflected trait object.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }
}

impl<'a> fmt::Debug for dyn Reflect + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.type_path())
    }
}

// -----------------------------------------------------------------------------
// Scalar text

/// The textual form of a scalar value, if it has one.
///
/// Returns `Some` for text, booleans, numbers, and enum variants; `None` for
/// everything else. This is the form used for map keys when a keyed
/// collection is rendered as a JSON object.
///
/// # Examples
///
/// ```
/// use jw_reflect::scalar_text;
///
/// assert_eq!(scalar_text(&42_u32).as_deref(), Some("42"));
/// assert_eq!(scalar_text(&true).as_deref(), Some("true"));
/// assert_eq!(scalar_text(&vec![1_i32]), None);
/// ```
pub fn scalar_text(value: &dyn Reflect) -> Option<Cow<'_, str>> {
    match value.reflect_ref() {
        ReflectRef::Text(text) => Some(text),
        ReflectRef::Bool(value) => Some(Cow::Borrowed(if value { "true" } else { "false" })),
        ReflectRef::Number(number) => number.decimal_text().map(Cow::Owned),
        ReflectRef::Enum(value) => Some(Cow::Borrowed(value.variant_name())),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_of_common_values() {
        assert_eq!((&42_i32 as &dyn Reflect).reflect_kind(), ReflectKind::Number);
        assert_eq!((&"x" as &dyn Reflect).reflect_kind(), ReflectKind::Text);
        assert_eq!((&() as &dyn Reflect).reflect_kind(), ReflectKind::Unit);
        assert_eq!(
            (&vec![1_i32] as &dyn Reflect).reflect_kind(),
            ReflectKind::List
        );
    }

    #[test]
    fn scalar_text_forms() {
        assert_eq!(scalar_text(&1.5_f64).as_deref(), Some("1.5"));
        assert_eq!(scalar_text(&false).as_deref(), Some("false"));
        assert_eq!(scalar_text(&"key").as_deref(), Some("key"));
    }
}
