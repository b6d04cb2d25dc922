//! Editable attributes bound to module parameters
//!
//! The model never owns attribute state. It asks an [`AttributeBinder`] for a
//! handle when a parameter first appears, tells it when a kept parameter's
//! descriptor changed, and releases the handle when the parameter goes away.
//! [`AttributeRegistry`] is the in-process binder.

use std::fmt;

use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::trace;
use uuid::Uuid;

use super::error::ContentError;
use crate::descriptor::ParameterDescriptor;

/// Prefix of every parameter attribute key
pub const ATTRIBUTE_PREFIX: &str = "sv_";

/// Identity of one bound attribute; stable across re-parses that keep the
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeHandle(Uuid);

impl AttributeHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AttributeHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttributeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The boundary through which the model creates and disposes attributes
pub trait AttributeBinder: Send + Sync {
    /// Create an attribute for a newly seen parameter
    fn bind(&self, parameter: &ParameterDescriptor) -> AttributeHandle;
    /// A kept parameter was re-parsed; its default value may have changed
    fn refresh(&self, handle: AttributeHandle, parameter: &ParameterDescriptor);
    /// The parameter disappeared
    fn release(&self, handle: AttributeHandle);
}

/// Integer attribute for one parameter.
///
/// An instance value of `None` means "use the module's default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterAttribute {
    key: String,
    parameter: ParameterDescriptor,
}

impl ParameterAttribute {
    pub fn for_parameter(parameter: &ParameterDescriptor) -> Self {
        Self {
            key: format!("{}{}", ATTRIBUTE_PREFIX, parameter.name()),
            parameter: parameter.clone(),
        }
    }

    /// Persistent key, e.g. `sv_WIDTH`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Name shown to the user
    pub fn display_name(&self) -> &str {
        self.parameter.name()
    }

    pub fn parameter(&self) -> &ParameterDescriptor {
        &self.parameter
    }

    pub fn default_value(&self) -> i64 {
        self.parameter.default_value()
    }

    fn refresh(&mut self, parameter: &ParameterDescriptor) {
        self.parameter = parameter.clone();
    }

    /// Parse user input. Empty, `default`, `(default)` and the current
    /// default display string all mean "no override".
    pub fn parse(&self, value: &str) -> Result<Option<i32>, ContentError> {
        let value = value.trim();
        if value.is_empty()
            || value == "default"
            || value == "(default)"
            || value == self.to_display_string(None)
        {
            return Ok(None);
        }

        let malformed = |reason: &str| ContentError::MalformedInteger {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let wide: i64 = value.parse().map_err(|_| malformed("not an integer"))?;
        if wide < i64::from(i32::MIN) {
            return Err(malformed("integer too small"));
        }
        if wide > i64::from(i32::MAX) {
            return Err(malformed("integer too large"));
        }
        Ok(i32::try_from(wide).ok())
    }

    pub fn to_display_string(&self, value: Option<i32>) -> String {
        match value {
            Some(v) => v.to_string(),
            None => format!("(default) {}", self.parameter.default_value()),
        }
    }
}

/// In-process [`AttributeBinder`] that remembers every live attribute in
/// binding order.
#[derive(Debug, Default)]
pub struct AttributeRegistry {
    attributes: Mutex<IndexMap<AttributeHandle, ParameterAttribute>>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: AttributeHandle) -> Option<ParameterAttribute> {
        self.attributes.lock().get(&handle).cloned()
    }

    pub fn contains(&self, handle: AttributeHandle) -> bool {
        self.attributes.lock().contains_key(&handle)
    }

    pub fn handles(&self) -> Vec<AttributeHandle> {
        self.attributes.lock().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.attributes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.lock().is_empty()
    }
}

impl AttributeBinder for AttributeRegistry {
    fn bind(&self, parameter: &ParameterDescriptor) -> AttributeHandle {
        let handle = AttributeHandle::new();
        let attribute = ParameterAttribute::for_parameter(parameter);
        trace!(%handle, key = attribute.key(), "bound parameter attribute");
        self.attributes.lock().insert(handle, attribute);
        handle
    }

    fn refresh(&self, handle: AttributeHandle, parameter: &ParameterDescriptor) {
        if let Some(attribute) = self.attributes.lock().get_mut(&handle) {
            attribute.refresh(parameter);
        }
    }

    fn release(&self, handle: AttributeHandle) {
        if let Some(attribute) = self.attributes.lock().shift_remove(&handle) {
            trace!(%handle, key = attribute.key(), "released parameter attribute");
        }
    }
}
