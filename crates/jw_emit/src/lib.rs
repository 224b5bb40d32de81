#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::io;

use jw_reflect::Reflect;

// -----------------------------------------------------------------------------
// Modules

mod context;
mod engine;
mod error;
mod kind;
mod options;
mod policy;
mod processor;
mod property;
mod sink;
mod writer;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use context::TraversalContext;
pub use engine::JsonEmitter;
pub use error::EmitError;
pub use kind::{ValueKind, classify};
pub use options::{DEFAULT_MAX_DEPTH, EmitOptions, NamingPolicy};
pub use policy::{
    CircularRefPolicy, IDENTITY_PROPERTY, IDENTITY_REF_SUFFIX, MAX_DEPTH_SUFFIX, MaxDepthPolicy,
    TYPE_TAG_PROPERTY, TypeTagPolicy, UNDEFINED_MARKER,
};
pub use processor::{EmitProcessor, TypeHandlers};
pub use property::PropertyDescriptor;
pub use sink::JsonSink;
pub use writer::JsonWriter;

// -----------------------------------------------------------------------------
// Convenience entry points

/// Serializes a reflected value to a compact JSON string.
///
/// # Examples
///
/// ```
/// use jw_emit::{EmitOptions, to_string};
///
/// let json = to_string(&vec!["x".to_string(), "y".to_string()], &EmitOptions::default()).unwrap();
/// assert_eq!(json, r#"["x","y"]"#);
/// ```
pub fn to_string(value: &dyn Reflect, options: &EmitOptions) -> Result<String, EmitError> {
    let mut buffer = Vec::new();
    let mut writer = JsonWriter::new(&mut buffer);
    JsonEmitter::new(options.clone()).write(&mut writer, value)?;
    Ok(String::from_utf8(buffer).expect("the writer only emits UTF-8"))
}

/// Serializes a reflected value to an indented JSON string.
pub fn to_string_pretty(value: &dyn Reflect, options: &EmitOptions) -> Result<String, EmitError> {
    let mut buffer = Vec::new();
    let mut writer = JsonWriter::pretty(&mut buffer);
    JsonEmitter::new(options.clone()).write(&mut writer, value)?;
    Ok(String::from_utf8(buffer).expect("the writer only emits UTF-8"))
}

/// Serializes a reflected value as compact JSON into an [`io::Write`].
pub fn to_writer<W: io::Write>(
    writer: W,
    value: &dyn Reflect,
    options: &EmitOptions,
) -> Result<(), EmitError> {
    let mut sink = JsonWriter::new(writer);
    JsonEmitter::new(options.clone()).write(&mut sink, value)
}
