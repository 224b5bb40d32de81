use jw_reflect::Reflect;

use crate::error::EmitError;
use crate::kind::ValueKind;
use crate::property::PropertyDescriptor;
use crate::sink::JsonSink;

// -----------------------------------------------------------------------------
// EmitProcessor

/// The per-type interception point of the traversal.
///
/// A processor is consulted before default classification on every value. It
/// can reclassify a value (normally to [`ValueKind::Custom`], claiming it)
/// and it performs the emission for claimed values. The default behavior is
/// to claim nothing and, if somehow asked to emit, to produce nothing; a
/// handler that deliberately produces nothing suppresses the member
/// entirely, name included.
///
/// This is the mechanism for neutralizing types the reflection layer cannot
/// walk safely (values whose sequence enumerators are broken, foreign
/// handles) without aborting the whole document: claim the type, then emit a
/// placeholder or nothing at all.
///
/// The unit type `()` is the no-op processor.
pub trait EmitProcessor {
    /// Reclassifies a value, or `None` to use default classification.
    fn classify(&self, value: &dyn Reflect) -> Option<ValueKind> {
        let _ = value;
        None
    }

    /// Emits a value this processor claimed.
    ///
    /// `property` is the pending member name, if any; a handler that writes
    /// a value must write the name first, and a handler that writes nothing
    /// drops the member. Errors abort the write as
    /// [`EmitError::Custom`]-style fatal conditions.
    fn emit_custom(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Reflect,
        property: Option<&PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        let _ = (sink, value, property);
        Ok(())
    }
}

impl EmitProcessor for () {}

// -----------------------------------------------------------------------------
// TypeHandlers

type Predicate = Box<dyn Fn(&dyn Reflect) -> bool + Send + Sync>;
type Handler = Box<
    dyn Fn(&mut dyn JsonSink, &dyn Reflect, Option<&PropertyDescriptor<'_>>) -> Result<(), EmitError>
        + Send
        + Sync,
>;

/// A table-driven [`EmitProcessor`]: ordered `(predicate, handler)` pairs.
///
/// The first predicate matching a value claims it as [`ValueKind::Custom`]
/// and its handler performs the emission. Predicates typically match on
/// [`type_path`](Reflect::type_path) or [`type_ident`](Reflect::type_ident).
///
/// # Examples
///
/// ```
/// use jw_emit::{EmitOptions, JsonEmitter, JsonSink, JsonWriter, TypeHandlers};
/// use jw_reflect::Reflect;
///
/// let handlers = TypeHandlers::new().register(
///     |value| value.type_ident() == "String",
///     |sink, _value, property| {
///         if let Some(property) = property {
///             sink.property_name(property.name())?;
///         }
///         sink.write_string("[redacted]")?;
///         Ok(())
///     },
/// );
///
/// let emitter = JsonEmitter::with_processor(EmitOptions::default(), &handlers);
/// let mut buffer = Vec::new();
/// let mut writer = JsonWriter::new(&mut buffer);
/// emitter.write(&mut writer, &"secret".to_string()).unwrap();
///
/// assert_eq!(String::from_utf8(buffer).unwrap(), r#""[redacted]""#);
/// ```
#[derive(Default)]
pub struct TypeHandlers {
    entries: Vec<(Predicate, Handler)>,
}

impl TypeHandlers {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `(predicate, handler)` pair; earlier pairs win.
    pub fn register<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: Fn(&dyn Reflect) -> bool + Send + Sync + 'static,
        H: Fn(&mut dyn JsonSink, &dyn Reflect, Option<&PropertyDescriptor<'_>>) -> Result<(), EmitError>
            + Send
            + Sync
            + 'static,
    {
        self.entries.push((Box::new(predicate), Box::new(handler)));
        self
    }

    /// The number of registered pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EmitProcessor for TypeHandlers {
    fn classify(&self, value: &dyn Reflect) -> Option<ValueKind> {
        self.entries
            .iter()
            .any(|(predicate, _)| predicate(value))
            .then_some(ValueKind::Custom)
    }

    fn emit_custom(
        &self,
        sink: &mut dyn JsonSink,
        value: &dyn Reflect,
        property: Option<&PropertyDescriptor<'_>>,
    ) -> Result<(), EmitError> {
        for (predicate, handler) in &self.entries {
            if predicate(value) {
                return handler(sink, value, property);
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
