use std::borrow::Cow;
use std::collections::HashMap;

use foldhash::fast::FixedState;

use crate::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Struct trait

/// Read-only access to a named-field aggregate.
///
/// Fields are exposed in declaration order; a struct with zero fields is
/// valid and enumerates nothing.
///
/// # Examples
///
/// ```
/// use jw_reflect::ops::Struct;
/// use jw_reflect::reflect_struct;
///
/// struct Point { x: f64, y: f64 }
/// reflect_struct!(Point { x, y });
///
/// let p = Point { x: 1.0, y: 2.0 };
/// let p: &dyn Struct = &p;
///
/// assert_eq!(p.field_len(), 2);
/// assert_eq!(p.name_at(0), Some("x"));
/// assert!(p.field("y").is_some());
/// ```
pub trait Struct: Reflect {
    /// The value of the field named `name`, if it exists.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// The value of the field at `index`, in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// The name of the field at `index`, in declaration order.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// The number of fields.
    fn field_len(&self) -> usize;
}

impl<'a> IntoIterator for &'a dyn Struct {
    type Item = (&'a str, &'a dyn Reflect);
    type IntoIter = StructFieldIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Struct field iterator

/// An iterator over a struct's `(name, value)` pairs in declaration order.
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates an iterator over the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        Self { value, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.value.name_at(self.index)?;
        let field = self.value.field_at(self.index)?;
        self.index += 1;
        Some((name, field))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.value.field_len();
        (len.saturating_sub(self.index), Some(len))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// DynamicStruct

/// A named-field aggregate assembled at runtime.
///
/// Fields keep their insertion order; inserting under an existing name
/// replaces the value in place. The type path defaults to this container's
/// own and can be overridden with [`set_type_path`](DynamicStruct::set_type_path)
/// when the struct stands in for a specific type.
///
/// # Examples
///
/// ```
/// use jw_reflect::ops::{DynamicStruct, Struct};
///
/// let mut person = DynamicStruct::new();
/// person.insert("name", "Ann".to_string());
/// person.insert("age", 39_u32);
///
/// assert_eq!(person.field_len(), 2);
/// assert_eq!(person.index_of("age"), Some(1));
/// ```
#[derive(Default)]
pub struct DynamicStruct {
    type_path: Option<Cow<'static, str>>,
    fields: Vec<Box<dyn Reflect>>,
    field_names: Vec<Cow<'static, str>>,
    field_indices: HashMap<Cow<'static, str>, usize, FixedState>,
}

impl DynamicStruct {
    /// Creates an empty `DynamicStruct`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `DynamicStruct` with at least the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            type_path: None,
            fields: Vec::with_capacity(capacity),
            field_names: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity_and_hasher(capacity, FixedState::default()),
        }
    }

    /// Overrides the type path this struct reports, e.g.
    /// `"my_crate::model::Customer"`. The identifier is the last `::` segment.
    pub fn set_type_path(&mut self, type_path: impl Into<Cow<'static, str>>) {
        self.type_path = Some(type_path.into());
    }

    /// Appends a boxed value as a field, replacing any field of the same name.
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name: Cow<'static, str> = name.into();
        if let Some(&index) = self.field_indices.get(&name) {
            self.fields[index] = value;
        } else {
            self.fields.push(value);
            self.field_indices.insert(name.clone(), self.fields.len() - 1);
            self.field_names.push(name);
        }
    }

    /// Appends a value as a field, replacing any field of the same name.
    #[inline]
    pub fn insert<T: Reflect + 'static>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.insert_boxed(name, Box::new(value));
    }

    /// The index of the field named `name`, if it exists.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }
}

impl Reflect for DynamicStruct {
    fn type_path(&self) -> Cow<'static, str> {
        match &self.type_path {
            Some(path) => path.clone(),
            None => Cow::Borrowed("jw_reflect::ops::DynamicStruct"),
        }
    }

    fn type_ident(&self) -> Cow<'static, str> {
        match &self.type_path {
            Some(path) => match path.rsplit_once("::") {
                Some((_, ident)) => Cow::Owned(ident.to_owned()),
                None => path.clone(),
            },
            None => Cow::Borrowed("DynamicStruct"),
        }
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Struct(self)
    }
}

impl Struct for DynamicStruct {
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_indices.get(name).map(|&index| &*self.fields[index])
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(|field| &**field)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.field_names.get(index).map(AsRef::as_ref)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicStruct {
    fn from_iter<I: IntoIterator<Item = (N, Box<dyn Reflect>)>>(fields: I) -> Self {
        let mut value = DynamicStruct::new();
        for (name, field) in fields {
            value.insert_boxed(name, field);
        }
        value
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_insertion_order() {
        let mut value = DynamicStruct::new();
        value.insert("b", 1_i32);
        value.insert("a", 2_i32);
        value.insert("c", 3_i32);

        let names: Vec<_> = (&value as &dyn Struct).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn insert_replaces_existing_name_in_place() {
        let mut value = DynamicStruct::new();
        value.insert("a", 1_i32);
        value.insert("b", 2_i32);
        value.insert("a", 10_i32);

        assert_eq!(value.field_len(), 2);
        assert_eq!(value.index_of("a"), Some(0));
    }

    #[test]
    fn type_path_override() {
        let mut value = DynamicStruct::new();
        assert_eq!(value.type_ident(), "DynamicStruct");

        value.set_type_path("my_crate::model::Customer");
        assert_eq!(value.type_path(), "my_crate::model::Customer");
        assert_eq!(value.type_ident(), "Customer");
    }
}
