#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod identity;
mod number;
mod reflection;

pub mod impls;
pub mod ops;

mod macros;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use identity::IdentityKey;
pub use number::Number;
pub use reflection::{Reflect, ReflectKind, ReflectRef, scalar_text};
