use std::borrow::Cow;

use crate::policy::{CircularRefPolicy, MaxDepthPolicy, TypeTagPolicy};

/// The depth limit in effect when [`EmitOptions::max_depth`] is zero.
pub const DEFAULT_MAX_DEPTH: usize = 64;

// -----------------------------------------------------------------------------
// NamingPolicy

/// How property names are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NamingPolicy {
    /// Names pass through unchanged.
    #[default]
    Preserve,
    /// Names convert to camel case: separators (`_`, `-`) are dropped with
    /// the following character uppercased, and the leading character is
    /// lowercased (`first_name` → `firstName`, `Name` → `name`).
    CamelCase,
}

impl NamingPolicy {
    /// Applies this policy to a name.
    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            NamingPolicy::Preserve => Cow::Borrowed(name),
            NamingPolicy::CamelCase => Cow::Owned(to_camel_case(name)),
        }
    }
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut uppercase_next = false;
    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            uppercase_next = true;
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
            uppercase_next = false;
        } else if uppercase_next {
            out.extend(ch.to_uppercase());
            uppercase_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

// -----------------------------------------------------------------------------
// EmitOptions

/// The configuration of one write call.
///
/// Options are immutable once a write begins: the engine takes them by value
/// at construction and only ever reads them, so a traversal can never observe
/// a configuration change (the write entry point borrows the emitter
/// shared).
///
/// # Examples
///
/// ```
/// use jw_emit::{CircularRefPolicy, EmitOptions, TypeTagPolicy};
///
/// let options = EmitOptions::default()
///     .with_max_depth(8)
///     .with_circular_refs(CircularRefPolicy::WriteIdentity)
///     .with_type_tags(TypeTagPolicy::ShortName);
///
/// assert_eq!(options.effective_max_depth(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct EmitOptions {
    /// Maximum container nesting depth; `0` means [`DEFAULT_MAX_DEPTH`].
    pub max_depth: usize,
    /// Handling of re-encountered values.
    pub circular_refs: CircularRefPolicy,
    /// Handling of containers beyond the depth limit.
    pub max_depth_handling: MaxDepthPolicy,
    /// Type tags on emitted objects.
    pub type_tags: TypeTagPolicy,
    /// Naming of struct member properties.
    pub property_naming: NamingPolicy,
    /// Naming of properties synthesized from map keys.
    pub key_naming: NamingPolicy,
}

impl Default for EmitOptions {
    /// Suppressing policies, camel-cased properties, preserved map keys.
    fn default() -> Self {
        Self {
            max_depth: 0,
            circular_refs: CircularRefPolicy::Suppress,
            max_depth_handling: MaxDepthPolicy::Suppress,
            type_tags: TypeTagPolicy::Suppress,
            property_naming: NamingPolicy::CamelCase,
            key_naming: NamingPolicy::Preserve,
        }
    }
}

impl EmitOptions {
    /// The depth limit in effect: [`max_depth`](Self::max_depth), or
    /// [`DEFAULT_MAX_DEPTH`] when unset.
    #[inline]
    pub fn effective_max_depth(&self) -> usize {
        if self.max_depth == 0 {
            DEFAULT_MAX_DEPTH
        } else {
            self.max_depth
        }
    }

    /// Replaces the depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replaces the circular-reference policy.
    pub fn with_circular_refs(mut self, policy: CircularRefPolicy) -> Self {
        self.circular_refs = policy;
        self
    }

    /// Replaces the max-depth policy.
    pub fn with_max_depth_handling(mut self, policy: MaxDepthPolicy) -> Self {
        self.max_depth_handling = policy;
        self
    }

    /// Replaces the type-tag policy.
    pub fn with_type_tags(mut self, policy: TypeTagPolicy) -> Self {
        self.type_tags = policy;
        self
    }

    /// Replaces the property naming policy.
    pub fn with_property_naming(mut self, policy: NamingPolicy) -> Self {
        self.property_naming = policy;
        self
    }

    /// Replaces the map-key naming policy.
    pub fn with_key_naming(mut self, policy: NamingPolicy) -> Self {
        self.key_naming = policy;
        self
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_conversion() {
        let policy = NamingPolicy::CamelCase;
        assert_eq!(policy.apply("Name"), "name");
        assert_eq!(policy.apply("first_name"), "firstName");
        assert_eq!(policy.apply("already"), "already");
        assert_eq!(policy.apply("with-dash"), "withDash");
        assert_eq!(policy.apply(""), "");
    }

    #[test]
    fn preserve_borrows() {
        let name = String::from("AsIs");
        assert!(matches!(
            NamingPolicy::Preserve.apply(&name),
            Cow::Borrowed("AsIs")
        ));
    }

    #[test]
    fn zero_depth_means_default() {
        assert_eq!(EmitOptions::default().effective_max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(EmitOptions::default().with_max_depth(3).effective_max_depth(), 3);
    }
}
