//! # ResourceEntity Trait
//!
//! The `ResourceEntity` trait is the read-only capability the inspector needs
//! from a resource instance: its class, its ordered attributes, and an
//! accessor per attribute name.
//!
//! # Accessors
//! [`ResourceEntity::get_attribute`] is the public accessor. Its provided
//! implementation returns the stored value; implementors override it to mask,
//! format or compute values. The inspector only ever reads plain attributes
//! through this method, so whatever the accessor returns is what gets shown.
//!
//! Two ways to override:
//! - a typed model implements the trait and matches on the attribute name;
//! - a dynamic [`Resource`] registers a per-instance [`Accessor`] closure.

use crate::attributes::Attributes;
use crate::class::ClassPath;
use crate::error::AccessorError;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Read-only view of a resource instance.
pub trait ResourceEntity {
    /// Fully qualified class of this instance.
    fn class_path(&self) -> ClassPath;

    /// Stored attributes in their canonical order.
    fn attributes(&self) -> &Attributes;

    /// Public accessor for `name`. Defaults to the stored value, `Null` when
    /// the attribute is absent.
    fn get_attribute(&self, name: &str) -> Result<Value, AccessorError> {
        Ok(self.attributes().get(name).cloned().unwrap_or_default())
    }
}

/// Accessor override registered on a [`Resource`].
pub type Accessor = Arc<dyn Fn(&Resource) -> Result<Value, AccessorError> + Send + Sync>;

/// Dynamically typed resource instance.
///
/// Nested resources held by association attributes are always `Resource`s.
#[derive(Clone)]
pub struct Resource {
    class: ClassPath,
    attributes: Attributes,
    accessors: HashMap<String, Accessor>,
}

impl Resource {
    pub fn new(class: impl Into<ClassPath>) -> Self {
        Self {
            class: class.into(),
            attributes: Attributes::new(),
            accessors: HashMap::new(),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name, value)
    }

    /// Class path without cloning it.
    pub fn class(&self) -> &ClassPath {
        &self.class
    }

    /// Raw stored value, bypassing any accessor.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Overrides the accessor for `name` on this instance only.
    pub fn override_accessor<F>(&mut self, name: impl Into<String>, accessor: F)
    where
        F: Fn(&Resource) -> Result<Value, AccessorError> + Send + Sync + 'static,
    {
        self.accessors.insert(name.into(), Arc::new(accessor));
    }

    pub fn has_accessor_override(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }
}

impl ResourceEntity for Resource {
    fn class_path(&self) -> ClassPath {
        self.class.clone()
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn get_attribute(&self, name: &str) -> Result<Value, AccessorError> {
        match self.accessors.get(name) {
            Some(accessor) => accessor(self),
            None => Ok(self.attributes.get(name).cloned().unwrap_or_default()),
        }
    }
}

impl Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overridden: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        overridden.sort_unstable();
        f.debug_struct("Resource")
            .field("class", &self.class.to_string())
            .field("attributes", &self.attributes)
            .field("overridden_accessors", &overridden)
            .finish()
    }
}

/// Two resources are equal when class and stored attributes match; accessor
/// overrides are not compared.
impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.attributes == other.attributes
    }
}
