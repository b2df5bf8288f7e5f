use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::errors::PropertyError;
use crate::observer::{Emitter, Subscription};
use crate::schema::Schema;
use crate::value::{PropertyType, Value};

struct PropertyInner {
    key: String,
    path: String,
    ty: PropertyType,
    schema: Schema,
    value: RefCell<Value>,
    changed: Emitter<Value>,
}

/// Shared handle to a typed, observable value.
///
/// Cloning the handle is cheap; every clone refers to the same value and the
/// same set of observers.
#[derive(Clone)]
pub struct Property {
    inner: Rc<PropertyInner>,
}

/// Builder returned by the typed [`Property`] constructors.
pub struct PropertyBuilder {
    key: String,
    path: Option<String>,
    ty: PropertyType,
    schema: Schema,
    value: Value,
}

impl PropertyBuilder {
    fn new(key: impl Into<String>, ty: PropertyType, value: Value) -> Self {
        Self {
            key: key.into(),
            path: None,
            ty,
            schema: Schema::default(),
            value,
        }
    }

    /// Dotted display path used to group properties in trees.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn build(self) -> Property {
        let path = self.path.unwrap_or_else(|| self.key.clone());
        Property {
            inner: Rc::new(PropertyInner {
                key: self.key,
                path,
                ty: self.ty,
                schema: self.schema,
                value: RefCell::new(self.value),
                changed: Emitter::new(),
            }),
        }
    }
}

impl Property {
    pub fn number(key: impl Into<String>, value: f64) -> PropertyBuilder {
        PropertyBuilder::new(key, PropertyType::Number, Value::Number(value))
    }

    pub fn string(
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> PropertyBuilder {
        PropertyBuilder::new(
            key,
            PropertyType::String,
            Value::String(value.into()),
        )
    }

    pub fn boolean(key: impl Into<String>, value: bool) -> PropertyBuilder {
        PropertyBuilder::new(key, PropertyType::Boolean, Value::Boolean(value))
    }

    pub fn object(
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> PropertyBuilder {
        PropertyBuilder::new(key, PropertyType::Object, Value::Object(value))
    }

    /// Numeric vector property, e.g. a position or a color.
    pub fn number_array(
        key: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> PropertyBuilder {
        let values = values.into_iter().map(Value::Number).collect();
        PropertyBuilder::new(key, PropertyType::Number, Value::Array(values))
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn path(&self) -> &str {
        &self.inner.path
    }

    pub fn ty(&self) -> PropertyType {
        self.inner.ty
    }

    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    /// Snapshot of the current value.
    pub fn value(&self) -> Value {
        self.inner.value.borrow().clone()
    }

    /// Read the current value without cloning it.
    pub fn with_value<R>(&self, read: impl FnOnce(&Value) -> R) -> R {
        read(&self.inner.value.borrow())
    }

    /// Snapshot of one array element.
    pub fn element(&self, index: usize) -> Option<Value> {
        self.inner.value.borrow().element(index).cloned()
    }

    pub fn is_array(&self) -> bool {
        self.inner.value.borrow().is_array()
    }

    /// Number of array elements, `None` for scalar properties.
    pub fn array_len(&self) -> Option<usize> {
        self.inner.value.borrow().as_array().map(<[Value]>::len)
    }

    /// Replace the whole value and notify observers.
    pub fn set_value(&self, value: Value) -> Result<(), PropertyError> {
        self.check(&value)?;
        *self.inner.value.borrow_mut() = value;
        self.set();
        Ok(())
    }

    /// Replace one element of an array value in place and notify observers.
    pub fn set_element(
        &self,
        index: usize,
        value: Value,
    ) -> Result<(), PropertyError> {
        self.check_scalar(&value)?;
        {
            let mut current = self.inner.value.borrow_mut();
            let Value::Array(values) = &mut *current else {
                return Err(PropertyError::NotAnArray {
                    key: self.inner.key.clone(),
                });
            };
            let len = values.len();
            let Some(slot) = values.get_mut(index) else {
                return Err(PropertyError::IndexOutOfRange {
                    key: self.inner.key.clone(),
                    index,
                    len,
                });
            };
            *slot = value;
        }
        self.set();
        Ok(())
    }

    /// Commit an in-place change: notify observers with the current value.
    pub fn set(&self) {
        let snapshot = self.value();
        log::trace!("property `{}` changed", self.inner.key);
        self.inner.changed.emit(&snapshot);
    }

    /// Observe value changes until the returned handle is dropped.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Value) + 'static,
    ) -> Subscription {
        self.inner.changed.subscribe(callback)
    }

    /// Number of live value observers.
    pub fn observer_count(&self) -> usize {
        self.inner.changed.len()
    }

    /// Whether both handles refer to the same property.
    pub fn ptr_eq(&self, other: &Property) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn check(&self, value: &Value) -> Result<(), PropertyError> {
        match value {
            Value::Array(values) => {
                if !self.is_array() {
                    return Err(self.mismatch(value));
                }
                values.iter().try_for_each(|value| self.check_scalar(value))
            },
            scalar => {
                if self.is_array() {
                    return Err(self.mismatch(scalar));
                }
                self.check_scalar(scalar)
            },
        }
    }

    fn check_scalar(&self, value: &Value) -> Result<(), PropertyError> {
        if value.fits_scalar(self.inner.ty) {
            Ok(())
        } else {
            Err(self.mismatch(value))
        }
    }

    fn mismatch(&self, value: &Value) -> PropertyError {
        PropertyError::TypeMismatch {
            key: self.inner.key.clone(),
            expected: self.inner.ty,
            found: value.kind(),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("key", &self.inner.key)
            .field("path", &self.inner.path)
            .field("ty", &self.inner.ty)
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}
