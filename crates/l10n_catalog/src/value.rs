use std::io;

use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::Formatter};

use crate::plural::PluralCategory;

/// One locale's merged content: top-level translation key to raw value.
pub type LocaleMap = Map<String, Value>;

/// Shape of a locale value, decided once by looking at its structure.
#[derive(Debug, Clone, Copy)]
pub enum LocaleValue<'a> {
    /// Null, bool, number or string.
    Scalar(&'a Value),
    Plural(PluralBlock<'a>),
    /// An array, or an object without any plural field.
    Nested(&'a Value),
}

impl<'a> LocaleValue<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(fields) if is_plural_block(fields) => {
                LocaleValue::Plural(PluralBlock { fields })
            }
            Value::Object(_) | Value::Array(_) => LocaleValue::Nested(value),
            _ => LocaleValue::Scalar(value),
        }
    }
}

/// An object holding at least one plural category field.
#[derive(Debug, Clone, Copy)]
pub struct PluralBlock<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> PluralBlock<'a> {
    /// Present, non-null categories in processing order.
    pub fn forms(self) -> impl Iterator<Item = (PluralCategory, &'a Value)> + 'a {
        let fields = self.fields;
        PluralCategory::ALL.into_iter().filter_map(move |category| {
            match fields.get(category.field_name()) {
                None | Some(Value::Null) => None,
                Some(value) => Some((category, value)),
            }
        })
    }
}

pub fn is_plural_block(fields: &Map<String, Value>) -> bool {
    fields
        .keys()
        .any(|name| PluralCategory::from_field_name(name).is_some())
}

/// Canonical text of a scalar or nested value.
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => trim_trailing_newlines(text).to_string(),
        nested => trim_trailing_newlines(&to_spaced_json(nested)).to_string(),
    }
}

/// Single-line JSON with `", "` between items and `": "` after keys.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_spaced_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

pub fn trim_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}
