use std::borrow::Cow;

use jw_reflect::ops::{Enum, List, Map, Set, Struct};
use jw_reflect::{Number, Reflect, ReflectRef, scalar_text};
use tracing::{debug, trace, warn};

use crate::context::TraversalContext;
use crate::error::EmitError;
use crate::kind::{ValueKind, classify, classify_view};
use crate::options::EmitOptions;
use crate::policy::{
    CircularRefPolicy, IDENTITY_PROPERTY, IDENTITY_REF_SUFFIX, MAX_DEPTH_SUFFIX, MaxDepthPolicy,
    TYPE_TAG_PROPERTY, TypeTagPolicy, UNDEFINED_MARKER,
};
use crate::processor::EmitProcessor;
use crate::property::PropertyDescriptor;
use crate::sink::JsonSink;

// -----------------------------------------------------------------------------
// JsonEmitter

/// The recursive traversal engine.
///
/// Each [`write`](JsonEmitter::write) call creates a fresh
/// [`TraversalContext`] and descends the value depth-first, synchronously,
/// on the caller's stack. Per value, in this order:
///
/// 1. the processor may reclassify (claiming the value as custom); otherwise
///    enums short-circuit to their symbolic name, and everything else goes
///    through [`classify`];
/// 2. for objects and arrays, the depth guard compares the sink's current
///    nesting against the limit and applies [`MaxDepthPolicy`];
/// 3. for objects and arrays, the circular-reference guard looks the value's
///    identity up in the visited set and applies [`CircularRefPolicy`],
///    recording first-time values before descending;
/// 4. dispatch to the kind's emitter, which writes the pending property name
///    (if any) and then the value.
///
/// The engine is read-only over its options and processor, so one emitter
/// can serve any number of sequential writes; each write is independent.
///
/// # Examples
///
/// ```
/// use jw_emit::{EmitOptions, JsonEmitter, JsonWriter};
///
/// let emitter = JsonEmitter::new(EmitOptions::default());
/// let mut buffer = Vec::new();
/// let mut writer = JsonWriter::new(&mut buffer);
///
/// emitter.write(&mut writer, &vec![1_u8, 2, 3]).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "[1,2,3]");
/// ```
pub struct JsonEmitter<'p, P: EmitProcessor = ()> {
    options: EmitOptions,
    processor: Option<&'p P>,
}

impl JsonEmitter<'static, ()> {
    /// Creates an emitter with no processor.
    pub fn new(options: EmitOptions) -> Self {
        Self {
            options,
            processor: None,
        }
    }
}

impl Default for JsonEmitter<'static, ()> {
    fn default() -> Self {
        Self::new(EmitOptions::default())
    }
}

impl<'p, P: EmitProcessor> JsonEmitter<'p, P> {
    /// Creates an emitter with a processor consulted before classification.
    pub fn with_processor(options: EmitOptions, processor: &'p P) -> Self {
        Self {
            options,
            processor: Some(processor),
        }
    }

    /// The options this emitter writes with.
    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Writes one value as a complete JSON document.
    ///
    /// Runs to completion or fails on the first fatal condition; a failed
    /// write leaves the sink mid-document.
    pub fn write(&self, sink: &mut dyn JsonSink, value: &dyn Reflect) -> Result<(), EmitError> {
        trace!(type_path = %value.type_path(), "begin write");
        let mut context = TraversalContext::new(self.options.effective_max_depth());
        self.emit_value(sink, value, &mut context, None)
    }

    // -------------------------------------------------------------------------
    // Recursive core

    fn emit_value(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Reflect,
        context: &mut TraversalContext,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        let view = value.reflect_ref();

        // The processor comes first so an override can redirect any value,
        // including enums, away from default handling.
        let kind = match self.processor.and_then(|processor| processor.classify(value)) {
            Some(kind) => kind,
            None => {
                if let ReflectRef::Enum(value_enum) = &view {
                    return self.emit_enum(sink, *value_enum, property);
                }
                classify_view(&view)
            }
        };

        if kind.is_container() {
            // Depth guard.
            let depth = sink.depth();
            if depth > context.depth_limit() {
                match self.options.max_depth_handling {
                    MaxDepthPolicy::Suppress => {
                        debug!(depth, "depth limit exceeded, suppressing value");
                        return Ok(());
                    }
                    MaxDepthPolicy::WriteValue => {}
                    MaxDepthPolicy::WriteDepth => {
                        debug!(depth, "depth limit exceeded, writing depth marker");
                        if let Some(property) = &property {
                            let renamed = property.with_suffix(MAX_DEPTH_SUFFIX);
                            sink.property_name(renamed.name())?;
                            sink.write_string(&depth.to_string())?;
                        }
                        return Ok(());
                    }
                }
            }

            // Circular-reference guard. First-time values are recorded before
            // the descent so re-entry within this subtree is caught.
            let key = value.identity();
            if !context.record(key) {
                match self.options.circular_refs {
                    CircularRefPolicy::Suppress => {
                        debug!(type_path = %value.type_path(), "revisited value, suppressing");
                        return Ok(());
                    }
                    CircularRefPolicy::WriteValue => {}
                    CircularRefPolicy::WriteIdentity => {
                        debug!(type_path = %value.type_path(), "revisited value, writing identity marker");
                        if let Some(property) = &property {
                            let renamed = property.with_suffix(IDENTITY_REF_SUFFIX);
                            sink.property_name(renamed.name())?;
                            sink.write_string(&key.to_string())?;
                        }
                        return Ok(());
                    }
                }
            }
        }

        match kind {
            ValueKind::Null => self.emit_null(sink, property),
            ValueKind::True => self.emit_bool(sink, true, property),
            ValueKind::False => self.emit_bool(sink, false, property),
            ValueKind::String => match view {
                ReflectRef::Text(text) => self.emit_string(sink, &text, property),
                ReflectRef::Enum(value_enum) => self.emit_enum(sink, value_enum, property),
                _ => self.emit_undefined(sink, property),
            },
            ValueKind::Number => match view {
                ReflectRef::Number(number) => self.emit_number(sink, number, property),
                _ => self.emit_undefined(sink, property),
            },
            ValueKind::Array => self.emit_array(sink, value, view, context, property),
            ValueKind::Object => self.emit_object(sink, value, view, context, property),
            ValueKind::Undefined => self.emit_undefined(sink, property),
            ValueKind::Custom => match self.processor {
                Some(processor) => processor.emit_custom(sink, value, property.as_ref()),
                None => Ok(()),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Scalar emitters

    fn write_property(
        &self,
        sink: &mut dyn JsonSink,
        property: Option<&PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        if let Some(property) = property {
            sink.property_name(property.name())?;
        }
        Ok(())
    }

    /// A JSON-null value is written as `name: null` when a property context
    /// exists and as a bare `null` token at the root or inside an array.
    fn emit_null(
        &self,
        sink: &mut dyn JsonSink,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        self.write_property(sink, property.as_ref())?;
        sink.write_null()?;
        Ok(())
    }

    fn emit_bool(
        &self,
        sink: &mut dyn JsonSink,
        value: bool,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        self.write_property(sink, property.as_ref())?;
        sink.write_bool(value)?;
        Ok(())
    }

    /// The sink receives bare text content and escapes it exactly once; the
    /// engine never hands it a pre-quoted JSON string.
    fn emit_string(
        &self,
        sink: &mut dyn JsonSink,
        text: &str,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        self.write_property(sink, property.as_ref())?;
        sink.write_string(text)?;
        Ok(())
    }

    fn emit_number(
        &self,
        sink: &mut dyn JsonSink,
        number: Number,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        let text = number
            .decimal_text()
            .ok_or_else(|| EmitError::NonFiniteNumber(number.as_float().unwrap_or(f64::NAN)))?;
        self.write_property(sink, property.as_ref())?;
        sink.write_number(&text)?;
        Ok(())
    }

    /// Enums always render as the symbolic variant name, never the
    /// discriminant and never an object, payload or not.
    fn emit_enum(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Enum,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        self.write_property(sink, property.as_ref())?;
        sink.write_string(value.variant_name())?;
        Ok(())
    }

    fn emit_undefined(
        &self,
        sink: &mut dyn JsonSink,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        self.write_property(sink, property.as_ref())?;
        sink.write_string(UNDEFINED_MARKER)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Container emitters

    fn emit_array(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Reflect,
        view: ReflectRef<'_>,
        context: &mut TraversalContext,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        self.write_property(sink, property.as_ref())?;
        sink.begin_array()?;
        match view {
            ReflectRef::List(list) => self.emit_list_elements(sink, value, list, context)?,
            ReflectRef::Set(set) => {
                for element in set.iter() {
                    self.emit_value(sink, element, context, None)?;
                }
            }
            // A value claimed as an array without a sequence view has no
            // elements to offer; the array stays empty.
            _ => {}
        }
        sink.end_array()?;
        Ok(())
    }

    /// Elements come from the primary enumerator when the list can produce
    /// one; otherwise from indexed access, stopping at the first gap. When
    /// both fail the array is simply empty; extraction failures are
    /// recovered, never propagated.
    fn emit_list_elements(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Reflect,
        list: &dyn List,
        context: &mut TraversalContext,
    ) -> Result<(), EmitError> {
        match list.iter() {
            Some(elements) => {
                for element in elements {
                    self.emit_value(sink, element, context, None)?;
                }
            }
            None => {
                warn!(
                    type_path = %value.type_path(),
                    "sequence enumerator unavailable, falling back to indexed access"
                );
                for index in 0..list.len() {
                    match list.get(index) {
                        Some(element) => self.emit_value(sink, element, context, None)?,
                        None => {
                            warn!(
                                type_path = %value.type_path(),
                                index,
                                "indexed access failed, emitting the sequence as-is"
                            );
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn emit_object(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Reflect,
        view: ReflectRef<'_>,
        context: &mut TraversalContext,
        property: Option<PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        self.write_property(sink, property.as_ref())?;
        sink.begin_object()?;
        self.write_type_tag(sink, value)?;
        self.write_identity_property(sink, value)?;
        match view {
            ReflectRef::Map(map) => {
                for (key, entry) in map.iter() {
                    let key_text = match scalar_text(key) {
                        Some(text) => text,
                        None => key.type_path(),
                    };
                    let name = self.options.key_naming.apply(&key_text).into_owned();
                    let descriptor = PropertyDescriptor::new(name, classify(entry).is_container());
                    self.emit_value(sink, entry, context, Some(descriptor))?;
                }
            }
            ReflectRef::Struct(value_struct) => {
                for index in 0..value_struct.field_len() {
                    let (Some(name), Some(field)) =
                        (value_struct.name_at(index), value_struct.field_at(index))
                    else {
                        continue;
                    };
                    let name = self.options.property_naming.apply(name);
                    let descriptor = PropertyDescriptor::new(name, classify(field).is_container());
                    self.emit_value(sink, field, context, Some(descriptor))?;
                }
            }
            // A value claimed as an object without members emits empty.
            _ => {}
        }
        sink.end_object()?;
        Ok(())
    }

    /// Writes the `$Type` tag per [`TypeTagPolicy`].
    fn write_type_tag(&self, sink: &mut dyn JsonSink, value: &dyn Reflect) -> Result<(), EmitError> {
        let tag: Cow<'static, str> = match self.options.type_tags {
            TypeTagPolicy::Suppress => return Ok(()),
            TypeTagPolicy::ShortName => value.type_ident(),
            TypeTagPolicy::FullName => value.type_path(),
        };
        sink.property_name(TYPE_TAG_PROPERTY)?;
        sink.write_string(&tag)?;
        Ok(())
    }

    /// Writes the `$HashCode` property on every object while the identity
    /// circular-reference policy is active. It is written unconditionally,
    /// not only on collision, so a later reference marker always has a
    /// target.
    fn write_identity_property(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Reflect,
    ) -> Result<(), EmitError> {
        if self.options.circular_refs == CircularRefPolicy::WriteIdentity {
            sink.property_name(IDENTITY_PROPERTY)?;
            sink.write_string(&value.identity().to_string())?;
        }
        Ok(())
    }
}
