use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of property types understood by the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Number,
    String,
    Boolean,
    Object,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::Number => "number",
            PropertyType::String => "string",
            PropertyType::Boolean => "boolean",
            PropertyType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Runtime value held by a property.
///
/// Array values hold scalars of the property's type; a field bound to an
/// array index edits one element in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Object(serde_json::Value),
    Array(Vec<Value>),
}

impl Value {
    /// Return the number, if this is a numeric scalar.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Return the flag, if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Return the text, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Return array elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Return one array element, or `None` for scalars and bad indices.
    pub fn element(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|values| values.get(index))
    }

    /// Short kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    /// Whether this scalar can be stored in a property of type `ty`.
    pub(crate) fn fits_scalar(&self, ty: PropertyType) -> bool {
        matches!(
            (ty, self),
            (PropertyType::Number, Value::Number(_))
                | (PropertyType::String, Value::String(_))
                | (PropertyType::Boolean, Value::Boolean(_))
                | (PropertyType::Object, Value::Object(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{PropertyType, Value};

    #[test]
    fn given_array_value_when_element_requested_then_returns_scalar() {
        let value = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);

        assert_eq!(value.element(1), Some(&Value::Number(2.0)));
        assert_eq!(value.element(2), None);
        assert_eq!(Value::Number(1.0).element(0), None);
    }

    #[test]
    fn given_scalars_when_checked_against_types_then_only_matching_fit() {
        assert!(Value::Number(1.0).fits_scalar(PropertyType::Number));
        assert!(!Value::Number(1.0).fits_scalar(PropertyType::String));
        assert!(Value::Boolean(true).fits_scalar(PropertyType::Boolean));
        assert!(
            Value::Object(serde_json::json!({"a": 1}))
                .fits_scalar(PropertyType::Object)
        );
        assert!(!Value::Array(Vec::new()).fits_scalar(PropertyType::Number));
    }
}
