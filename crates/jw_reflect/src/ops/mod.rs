//! Read-only access traits and dynamic containers for reflected aggregates.
//!
//! ## Menu
//!
//! ### Interfaces
//!
//! Subtraits of [`Reflect`](crate::Reflect) providing per-kind access:
//!
//! - [`Struct`]: named-field aggregates (e.g. `Customer { .. }`).
//! - [`Map`]: keyed collections (e.g. `BTreeMap<K, V>`).
//! - [`List`]: ordered sequences (e.g. `Vec<T>`, `[T; N]`).
//! - [`Set`]: unordered collections (e.g. `HashSet<T>`).
//! - [`Enum`]: enumeration variants.
//!
//! ### Dynamic Types
//!
//! Containers assembled at runtime from boxed reflected values:
//!
//! - [`DynamicStruct`]: named fields in insertion order.
//! - [`DynamicMap`]: key/value entries in insertion order.
//! - [`DynamicList`]: elements in push order.
//!
//! Dynamic types view and emit exactly like their static counterparts; a
//! consumer walking a document cannot tell them apart from derived types
//! except by their type path, which can be overridden per instance.

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod list_ops;
mod map_ops;
mod set_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use enum_ops::Enum;
pub use list_ops::{DynamicList, List};
pub use map_ops::{DynamicMap, Map};
pub use set_ops::Set;
pub use struct_ops::{DynamicStruct, Struct, StructFieldIter};
