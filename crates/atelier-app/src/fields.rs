// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scalar field value as seen by filtering, validation, partial updates
/// and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Empty,
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Blank values fail a required-field check.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Empty => true,
            Self::Integer(_) | Self::Number(_) | Self::Bool(_) => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Bool(true) => "true".to_owned(),
            Self::Bool(false) => "false".to_owned(),
            Self::Empty => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field {field:?}")]
    Unknown { field: String },

    #[error("field {field:?} expects a {expected} value")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

/// Conversion between a struct field and [`Value`].
pub trait FieldValue: Sized {
    const KIND: &'static str;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Option<Self>;
}

impl FieldValue for String {
    const KIND: &'static str = "text";

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(value) => Some(value),
            Value::Empty => Some(String::new()),
            _ => None,
        }
    }
}

impl FieldValue for i64 {
    const KIND: &'static str = "integer";

    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    const KIND: &'static str = "number";

    fn to_value(&self) -> Value {
        Value::Number(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(value) => Some(value),
            Value::Integer(value) => Some(value as f64),
            _ => None,
        }
    }
}

impl FieldValue for bool {
    const KIND: &'static str = "boolean";

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: &'static str = T::KIND;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Empty, FieldValue::to_value)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Empty => Some(None),
            value => T::from_value(value).map(Some),
        }
    }
}

/// Name-based access to the scalar fields of an entity.
pub trait Fields {
    const FIELD_NAMES: &'static [&'static str];

    fn field(&self, name: &str) -> Option<Value>;

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), FieldError>;
}

macro_rules! entity_fields {
    ($entity:ty { $($key:literal => $field:ident),+ $(,)? }) => {
        impl $crate::fields::Fields for $entity {
            const FIELD_NAMES: &'static [&'static str] = &[$($key),+];

            fn field(&self, name: &str) -> Option<$crate::fields::Value> {
                match name {
                    $($key => Some($crate::fields::FieldValue::to_value(&self.$field)),)+
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::fields::Value,
            ) -> Result<(), $crate::fields::FieldError> {
                match name {
                    $($key => {
                        self.$field = $crate::fields::FieldValue::from_value(value).ok_or(
                            $crate::fields::FieldError::TypeMismatch {
                                field: $key,
                                expected: $crate::fields::kind_of(&self.$field),
                            },
                        )?;
                        Ok(())
                    })+
                    _ => Err($crate::fields::FieldError::Unknown {
                        field: name.to_owned(),
                    }),
                }
            }
        }
    };
}

pub(crate) use entity_fields;

#[doc(hidden)]
pub fn kind_of<T: FieldValue>(_: &T) -> &'static str {
    T::KIND
}

#[cfg(test)]
mod tests {
    use super::{FieldError, FieldValue, Fields, Value};

    #[derive(Debug, Default)]
    struct Swatch {
        name: String,
        depth: Option<f64>,
        glossy: bool,
    }

    entity_fields!(Swatch {
        "name" => name,
        "depth" => depth,
        "glossy" => glossy,
    });

    #[test]
    fn blank_detection_covers_whitespace_and_empty() {
        assert!(Value::text("   ").is_blank());
        assert!(Value::Empty.is_blank());
        assert!(!Value::Integer(0).is_blank());
        assert!(!Value::Bool(false).is_blank());
    }

    #[test]
    fn numbers_display_without_trailing_zeroes() {
        assert_eq!(Value::Number(1200.0).display(), "1200");
        assert_eq!(Value::Number(999.99).display(), "999.99");
    }

    #[test]
    fn optional_number_accepts_integers_and_empty() {
        assert_eq!(Option::<f64>::from_value(Value::Integer(3)), Some(Some(3.0)));
        assert_eq!(Option::<f64>::from_value(Value::Empty), Some(None));
        assert_eq!(Option::<f64>::from_value(Value::text("x")), None);
    }

    #[test]
    fn macro_generates_get_and_set() {
        let mut swatch = Swatch::default();
        swatch
            .set_field("name", Value::text("Walnut"))
            .expect("set name");
        swatch
            .set_field("depth", Value::Number(1.5))
            .expect("set depth");
        assert_eq!(swatch.field("name"), Some(Value::text("Walnut")));
        assert_eq!(swatch.field("depth"), Some(Value::Number(1.5)));
        assert_eq!(swatch.field("glossy"), Some(Value::Bool(false)));
        assert_eq!(swatch.field("missing"), None);
        assert_eq!(Swatch::FIELD_NAMES, &["name", "depth", "glossy"]);
    }

    #[test]
    fn macro_rejects_wrong_type_and_unknown_field() {
        let mut swatch = Swatch::default();
        let error = swatch
            .set_field("glossy", Value::text("yes"))
            .expect_err("bool field should reject text");
        assert_eq!(
            error,
            FieldError::TypeMismatch {
                field: "glossy",
                expected: "boolean",
            }
        );
        assert!(matches!(
            swatch.set_field("shade", Value::Empty),
            Err(FieldError::Unknown { .. })
        ));
    }
}
