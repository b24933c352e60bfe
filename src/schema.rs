//! Declarative JSON body validation.
//!
//! A [`Schema`] is a fixed table of field rules checked generically against a
//! raw `serde_json::Value`, so a bad request reports every violation at once
//! instead of stopping at the first deserialization error.

use once_cell::sync::Lazy;
use serde_json::Value;

/// Primitive JSON types a field may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// A JSON integer that fits a 32-bit database column
    Integer,
}

impl FieldType {
    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
        }
    }

    /// Whether a JSON value conforms to this type.
    /// Numbers with a fractional part are not integers.
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
        }
    }

    /// Whether a type-conforming value fits the storage width.
    /// Strings have no range.
    fn in_range(self, value: &Value) -> bool {
        match self {
            FieldType::String => true,
            FieldType::Integer => value
                .as_i64()
                .map_or(false, |n| i32::try_from(n).is_ok()),
        }
    }
}

/// A single field rule
pub struct Field {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

/// Validation schema for a JSON object body
pub struct Schema {
    fields: Vec<Field>,
    allow_additional: bool,
}

impl Schema {
    pub fn new(fields: Vec<Field>, allow_additional: bool) -> Self {
        Self {
            fields,
            allow_additional,
        }
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check a body against the schema, collecting all violations.
    pub fn validate(&self, body: &Value) -> Result<(), Vec<String>> {
        let object = match body.as_object() {
            Some(object) => object,
            None => return Err(vec!["instance is not of type object".to_string()]),
        };

        let mut errors = Vec::new();

        for field in &self.fields {
            match object.get(field.name) {
                None if field.required => {
                    errors.push(format!("instance requires property \"{}\"", field.name));
                }
                None => {}
                Some(value) => {
                    if !field.field_type.matches(value) {
                        errors.push(format!(
                            "instance.{} is not of type {}",
                            field.name,
                            field.field_type.name()
                        ));
                    } else if !field.field_type.in_range(value) {
                        errors.push(format!("instance.{} is out of range", field.name));
                    }
                }
            }
        }

        if !self.allow_additional {
            for name in object.keys() {
                if self.field(name).is_none() {
                    errors.push(format!(
                        "instance is not allowed to have the additional property \"{}\"",
                        name
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Fixed schema for book create/update bodies: all fields required,
/// no additional properties.
pub fn book_schema() -> &'static Schema {
    fn required(name: &'static str, field_type: FieldType) -> Field {
        Field {
            name,
            field_type,
            required: true,
        }
    }

    static BOOK_SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new(
            vec![
                required("isbn", FieldType::String),
                required("amazon_url", FieldType::String),
                required("author", FieldType::String),
                required("language", FieldType::String),
                required("pages", FieldType::Integer),
                required("publisher", FieldType::String),
                required("title", FieldType::String),
                required("year", FieldType::Integer),
            ],
            false,
        )
    });
    &BOOK_SCHEMA
}
