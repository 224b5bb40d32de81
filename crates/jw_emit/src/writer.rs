use std::io::{self, Write};

use serde_json::ser::{CharEscape, CompactFormatter, Formatter, PrettyFormatter};

use crate::sink::JsonSink;

// -----------------------------------------------------------------------------
// Frames

/// Bookkeeping for one open container: whether anything was written into it
/// (drives separators) and, for objects, whether a member name is awaiting
/// its value.
enum Frame {
    Object { has_members: bool, pending_value: bool },
    Array { has_elements: bool },
}

// -----------------------------------------------------------------------------
// JsonWriter

/// A [`JsonSink`] over any [`io::Write`].
///
/// Token layout, separators, indentation, and string escaping are delegated
/// to `serde_json`'s formatter layer, so output is byte-identical with the
/// ecosystem encoder; this type only maintains the frame stack that supplies
/// the `first`-element bookkeeping and answers [`depth`](JsonSink::depth).
///
/// Structural misuse (a value inside an object with no preceding name, a
/// close without a matching open) is reported as an [`io::Error`] rather
/// than panicking.
///
/// # Examples
///
/// ```
/// use jw_emit::{JsonSink, JsonWriter};
///
/// let mut buffer = Vec::new();
/// let mut writer = JsonWriter::new(&mut buffer);
///
/// writer.begin_object().unwrap();
/// writer.property_name("a").unwrap();
/// writer.write_number("1").unwrap();
/// writer.end_object().unwrap();
///
/// assert_eq!(String::from_utf8(buffer).unwrap(), r#"{"a":1}"#);
/// ```
pub struct JsonWriter<W: Write, F: Formatter = CompactFormatter> {
    out: W,
    fmt: F,
    frames: Vec<Frame>,
}

impl<W: Write> JsonWriter<W, CompactFormatter> {
    /// Creates a compact writer.
    pub fn new(out: W) -> Self {
        Self::with_formatter(out, CompactFormatter)
    }
}

impl<W: Write> JsonWriter<W, PrettyFormatter<'static>> {
    /// Creates a pretty writer with two-space indentation.
    pub fn pretty(out: W) -> Self {
        Self::with_formatter(out, PrettyFormatter::new())
    }
}

impl<W: Write, F: Formatter> JsonWriter<W, F> {
    /// Creates a writer with a caller-supplied formatter.
    pub fn with_formatter(out: W, fmt: F) -> Self {
        Self {
            out,
            fmt,
            frames: Vec::new(),
        }
    }

    /// Flushes the underlying output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consumes the writer, returning the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Separator bookkeeping before any value token.
    fn before_value(&mut self) -> io::Result<()> {
        match self.frames.last_mut() {
            Some(Frame::Array { has_elements }) => {
                let first = !*has_elements;
                *has_elements = true;
                self.fmt.begin_array_value(&mut self.out, first)
            }
            Some(Frame::Object { pending_value, .. }) => {
                if *pending_value {
                    Ok(())
                } else {
                    Err(io::Error::other(
                        "value inside an object with no preceding property name",
                    ))
                }
            }
            None => Ok(()),
        }
    }

    /// Separator bookkeeping after any completed value.
    fn after_value(&mut self) -> io::Result<()> {
        match self.frames.last_mut() {
            Some(Frame::Array { .. }) => self.fmt.end_array_value(&mut self.out),
            Some(Frame::Object { pending_value, .. }) => {
                *pending_value = false;
                self.fmt.end_object_value(&mut self.out)
            }
            None => Ok(()),
        }
    }

    /// Writes a quoted, escaped string through the formatter.
    fn write_escaped(&mut self, value: &str) -> io::Result<()> {
        self.fmt.begin_string(&mut self.out)?;
        let bytes = value.as_bytes();
        let mut start = 0;
        for (index, &byte) in bytes.iter().enumerate() {
            let escape = match byte {
                b'"' => CharEscape::Quote,
                b'\\' => CharEscape::ReverseSolidus,
                0x08 => CharEscape::Backspace,
                0x09 => CharEscape::Tab,
                0x0A => CharEscape::LineFeed,
                0x0C => CharEscape::FormFeed,
                0x0D => CharEscape::CarriageReturn,
                byte if byte < 0x20 => CharEscape::AsciiControl(byte),
                _ => continue,
            };
            if start < index {
                self.fmt.write_string_fragment(&mut self.out, &value[start..index])?;
            }
            self.fmt.write_char_escape(&mut self.out, escape)?;
            start = index + 1;
        }
        if start < bytes.len() {
            self.fmt.write_string_fragment(&mut self.out, &value[start..])?;
        }
        self.fmt.end_string(&mut self.out)
    }
}

impl<W: Write, F: Formatter> JsonSink for JsonWriter<W, F> {
    fn begin_object(&mut self) -> io::Result<()> {
        self.before_value()?;
        self.fmt.begin_object(&mut self.out)?;
        self.frames.push(Frame::Object {
            has_members: false,
            pending_value: false,
        });
        Ok(())
    }

    fn end_object(&mut self) -> io::Result<()> {
        match self.frames.pop() {
            Some(Frame::Object { .. }) => {}
            _ => return Err(io::Error::other("end_object without matching begin_object")),
        }
        self.fmt.end_object(&mut self.out)?;
        self.after_value()
    }

    fn begin_array(&mut self) -> io::Result<()> {
        self.before_value()?;
        self.fmt.begin_array(&mut self.out)?;
        self.frames.push(Frame::Array {
            has_elements: false,
        });
        Ok(())
    }

    fn end_array(&mut self) -> io::Result<()> {
        match self.frames.pop() {
            Some(Frame::Array { .. }) => {}
            _ => return Err(io::Error::other("end_array without matching begin_array")),
        }
        self.fmt.end_array(&mut self.out)?;
        self.after_value()
    }

    fn property_name(&mut self, name: &str) -> io::Result<()> {
        let first = match self.frames.last_mut() {
            Some(Frame::Object {
                has_members,
                pending_value,
            }) => {
                if *pending_value {
                    return Err(io::Error::other("property name while a value is pending"));
                }
                let first = !*has_members;
                *has_members = true;
                *pending_value = true;
                first
            }
            _ => return Err(io::Error::other("property name outside of an object")),
        };
        self.fmt.begin_object_key(&mut self.out, first)?;
        self.write_escaped(name)?;
        self.fmt.end_object_key(&mut self.out)?;
        self.fmt.begin_object_value(&mut self.out)
    }

    fn write_null(&mut self) -> io::Result<()> {
        self.before_value()?;
        self.fmt.write_null(&mut self.out)?;
        self.after_value()
    }

    fn write_bool(&mut self, value: bool) -> io::Result<()> {
        self.before_value()?;
        self.fmt.write_bool(&mut self.out, value)?;
        self.after_value()
    }

    fn write_string(&mut self, value: &str) -> io::Result<()> {
        self.before_value()?;
        self.write_escaped(value)?;
        self.after_value()
    }

    fn write_number(&mut self, value: &str) -> io::Result<()> {
        self.before_value()?;
        self.fmt.write_number_str(&mut self.out, value)?;
        self.after_value()
    }

    #[inline]
    fn depth(&self) -> usize {
        self.frames.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn compact<T>(drive: impl FnOnce(&mut JsonWriter<&mut Vec<u8>>) -> io::Result<T>) -> String {
        let mut buffer = Vec::new();
        let mut writer = JsonWriter::new(&mut buffer);
        drive(&mut writer).expect("writer accepts a valid token sequence");
        String::from_utf8(buffer).expect("the writer only emits UTF-8")
    }

    #[test]
    fn object_members_are_separated() {
        let json = compact(|w| {
            w.begin_object()?;
            w.property_name("a")?;
            w.write_number("1")?;
            w.property_name("b")?;
            w.write_bool(true)?;
            w.property_name("c")?;
            w.write_null()?;
            w.end_object()
        });
        assert_eq!(json, r#"{"a":1,"b":true,"c":null}"#);
    }

    #[test]
    fn nested_containers() {
        let json = compact(|w| {
            w.begin_object()?;
            w.property_name("items")?;
            w.begin_array()?;
            w.write_string("x")?;
            w.begin_object()?;
            w.property_name("ok")?;
            w.write_bool(false)?;
            w.end_object()?;
            w.end_array()?;
            w.end_object()
        });
        assert_eq!(json, r#"{"items":["x",{"ok":false}]}"#);
    }

    #[test]
    fn escaping_matches_the_ecosystem_encoder() {
        let tricky = "a\"b\\c\nd\te\u{1}";
        let json = compact(|w| w.write_string(tricky));
        assert_eq!(json, serde_json::to_string(tricky).unwrap());
    }

    #[test]
    fn depth_tracks_open_containers() {
        let mut buffer = Vec::new();
        let mut writer = JsonWriter::new(&mut buffer);
        assert_eq!(writer.depth(), 0);

        writer.begin_object().unwrap();
        writer.property_name("a").unwrap();
        writer.begin_array().unwrap();
        assert_eq!(writer.depth(), 2);

        writer.end_array().unwrap();
        writer.end_object().unwrap();
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn misuse_is_an_error_not_a_panic() {
        let mut buffer = Vec::new();
        let mut writer = JsonWriter::new(&mut buffer);

        assert!(writer.property_name("nowhere").is_err());
        assert!(writer.end_object().is_err());

        writer.begin_object().unwrap();
        assert!(writer.write_bool(true).is_err());
    }

    #[test]
    fn pretty_output_is_indented() {
        let mut buffer = Vec::new();
        let mut writer = JsonWriter::pretty(&mut buffer);
        writer.begin_object().unwrap();
        writer.property_name("a").unwrap();
        writer.write_number("1").unwrap();
        writer.end_object().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "{\n  \"a\": 1\n}");
    }
}
