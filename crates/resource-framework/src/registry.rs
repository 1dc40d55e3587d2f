//! # Class Registry
//!
//! The registry is the declaration table: every [`ResourceClass`] known to the
//! application, keyed by its [`ClassPath`]. It is assembled once with
//! [`ClassRegistry::builder`] and is immutable afterwards, so it can be shared
//! by reference (or behind an `Arc`) between any number of threads.
//!
//! The registry doubles as the namespace graph: a class's enclosing
//! namespaces are the prefixes of its path, and "is `X` defined directly in
//! `N`" is a lookup of `N::X`.

use crate::class::{AssociationDeclaration, ClassPath, ResourceClass};
use crate::error::ResourceError;
use crate::namespace::NamespaceResolver;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<ClassPath, ResourceClass>,
}

impl ClassRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn get(&self, path: &ClassPath) -> Option<&ResourceClass> {
        self.classes.get(path)
    }

    /// The registered declaration, or an implicit one for unknown classes.
    pub fn get_or_implicit(&self, path: &ClassPath) -> Cow<'_, ResourceClass> {
        match self.classes.get(path) {
            Some(class) => Cow::Borrowed(class),
            None => Cow::Owned(ResourceClass::implicit(path.clone())),
        }
    }

    pub fn contains(&self, path: &ClassPath) -> bool {
        self.classes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceClass> {
        self.classes.values()
    }

    /// See [`NamespaceResolver::find_nearby`].
    pub fn find_nearby(&self, starting: &ClassPath, short_name: &str) -> Option<&ResourceClass> {
        NamespaceResolver::new(self).find_nearby(starting, short_name)
    }

    /// Strict lookup of an association's target class.
    pub fn association_target(
        &self,
        class: &ClassPath,
        association: &str,
    ) -> Result<&ResourceClass, ResourceError> {
        let declaration = self
            .get(class)
            .and_then(|c| c.association(association))
            .ok_or_else(|| ResourceError::UnknownAssociation(format!("{class}#{association}")))?;
        self.find_nearby(class, &declaration.target_class_name)
            .ok_or_else(|| ResourceError::UnresolvedTarget {
                class: class.to_string(),
                association: association.to_string(),
                target: declaration.target_class_name.clone(),
            })
    }

    /// Every declaration whose target class cannot be found.
    pub fn unresolved_targets(&self) -> Vec<(&ClassPath, &AssociationDeclaration)> {
        self.classes
            .values()
            .flat_map(move |class| {
                class
                    .associations()
                    .iter()
                    .filter(move |decl| self.find_nearby(class.path(), &decl.target_class_name).is_none())
                    .map(move |decl| (class.path(), decl))
            })
            .collect()
    }
}

/// Collects class declarations and validates them in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    classes: Vec<ResourceClass>,
}

impl RegistryBuilder {
    pub fn register(mut self, class: ResourceClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Builds the table. Registering a class path twice is an error; dangling
    /// association targets are only logged, since callers decide whether they
    /// matter.
    pub fn build(self) -> Result<ClassRegistry, ResourceError> {
        let mut classes = BTreeMap::new();
        for class in self.classes {
            let path = class.path().clone();
            if classes.insert(path.clone(), class).is_some() {
                return Err(ResourceError::DuplicateClass(path.to_string()));
            }
        }

        let registry = ClassRegistry { classes };
        for (class, decl) in registry.unresolved_targets() {
            warn!(
                %class,
                association = %decl.name,
                target = %decl.target_class_name,
                "Association target not found"
            );
        }
        info!(classes = registry.len(), "Registry built");
        Ok(registry)
    }
}
