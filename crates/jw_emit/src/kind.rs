use std::fmt;

use jw_reflect::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// ValueKind

/// The closed set of JSON shapes a runtime value can map to.
///
/// `Undefined` is the catch-all: classification is total, and values the
/// reflection system cannot see into map there instead of failing. `Custom`
/// is never produced by [`classify`]; it is assigned by an
/// [`EmitProcessor`](crate::EmitProcessor) claiming a value for bespoke
/// emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The JSON value `null`.
    Null,
    /// The JSON value `true`.
    True,
    /// The JSON value `false`.
    False,
    /// A JSON string.
    String,
    /// A JSON number.
    Number,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
    /// A value of undetermined shape, emitted as a marker string.
    Undefined,
    /// A value claimed by a custom emitter.
    Custom,
}

impl ValueKind {
    /// Whether this kind opens a JSON container, which is what the depth and
    /// circular-reference guards apply to.
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::True => "true",
            ValueKind::False => "false",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Undefined => "undefined",
            ValueKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// Classification

/// Classifies a runtime value into the JSON shape it produces.
///
/// Pure and total: every value maps to exactly one kind, and unknown shapes
/// map to [`ValueKind::Undefined`] rather than failing. The arm order mirrors
/// the decision order of the dispatch: absent values first, then sequences
/// and keyed collections, then the scalar kinds, then aggregates.
///
/// Two details worth calling out:
///
/// - a struct with **zero** fields classifies as `Undefined`; an object with
///   no members has no JSON object shape of its own;
/// - enums classify as `String` (they always render as their symbolic variant
///   name), though the engine short-circuits them before consulting the
///   classifier.
///
/// # Examples
///
/// ```
/// use jw_emit::{ValueKind, classify};
///
/// assert_eq!(classify(&Option::<i32>::None), ValueKind::Null);
/// assert_eq!(classify(&vec![1_i32]), ValueKind::Array);
/// assert_eq!(classify(&3.5_f64), ValueKind::Number);
/// assert_eq!(classify(&"text"), ValueKind::String);
/// ```
pub fn classify(value: &dyn Reflect) -> ValueKind {
    classify_view(&value.reflect_ref())
}

/// Classifies an already-obtained structural view; see [`classify`].
pub(crate) fn classify_view(view: &ReflectRef<'_>) -> ValueKind {
    match view {
        ReflectRef::Unit => ValueKind::Null,
        ReflectRef::List(_) => ValueKind::Array,
        ReflectRef::Map(_) => ValueKind::Object,
        ReflectRef::Set(_) => ValueKind::Array,
        ReflectRef::Number(_) => ValueKind::Number,
        ReflectRef::Bool(true) => ValueKind::True,
        ReflectRef::Bool(false) => ValueKind::False,
        ReflectRef::Text(_) => ValueKind::String,
        ReflectRef::Struct(value) => {
            if value.field_len() > 0 {
                ValueKind::Object
            } else {
                ValueKind::Undefined
            }
        }
        ReflectRef::Enum(_) => ValueKind::String,
        ReflectRef::Opaque(_) => ValueKind::Undefined,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use jw_reflect::ops::DynamicStruct;
    use jw_reflect::{Reflect, ReflectRef, reflect_enum};

    use super::{ValueKind, classify};

    enum Mode {
        Fast,
        Slow,
    }
    reflect_enum!(Mode { Fast, Slow });

    struct Opaque;

    impl Reflect for Opaque {
        fn type_path(&self) -> std::borrow::Cow<'static, str> {
            std::borrow::Cow::Borrowed("kind::tests::Opaque")
        }
        fn type_ident(&self) -> std::borrow::Cow<'static, str> {
            std::borrow::Cow::Borrowed("Opaque")
        }
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque(self)
        }
    }

    #[test]
    fn scalars() {
        assert_eq!(classify(&()), ValueKind::Null);
        assert_eq!(classify(&true), ValueKind::True);
        assert_eq!(classify(&false), ValueKind::False);
        assert_eq!(classify(&1_u8), ValueKind::Number);
        assert_eq!(classify(&-1.5_f32), ValueKind::Number);
        assert_eq!(classify(&'x'), ValueKind::String);
        assert_eq!(classify(&String::from("s")), ValueKind::String);
    }

    #[test]
    fn containers() {
        assert_eq!(classify(&vec![1_i32]), ValueKind::Array);
        assert_eq!(classify(&BTreeSet::from([1_i32])), ValueKind::Array);
        assert_eq!(classify(&BTreeMap::from([("k".to_string(), 1_i32)])), ValueKind::Object);
    }

    #[test]
    fn structs_need_members() {
        let mut value = DynamicStruct::new();
        assert_eq!(classify(&value), ValueKind::Undefined);

        value.insert("a", 1_i32);
        assert_eq!(classify(&value), ValueKind::Object);
    }

    #[test]
    fn enums_classify_as_strings() {
        assert_eq!(classify(&Mode::Fast), ValueKind::String);
        assert_eq!(classify(&Mode::Slow), ValueKind::String);
    }

    #[test]
    fn opaque_values_are_undefined() {
        assert_eq!(classify(&Opaque), ValueKind::Undefined);
    }

    #[test]
    fn classification_is_stable() {
        let value = 42_u32;
        let first = classify(&value);
        let second = classify(&value);
        assert_eq!(first, second);
    }
}
