//! # Class Declarations
//!
//! A [`ResourceClass`] is the immutable declaration of one resource type: its
//! fully qualified [`ClassPath`], its collection and member route templates,
//! its primary key and its association declarations. Classes are built once
//! through [`ResourceClass::builder`] and then handed to a
//! [`ClassRegistry`](crate::registry::ClassRegistry).
//!
//! ```rust
//! use resource_framework::{AssociationDeclaration, ResourceClass};
//!
//! let user = ResourceClass::builder("Foo::User")
//!     .association(AssociationDeclaration::has_many("comments").class_name("Foo::Comment"))
//!     .has_one("role")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(user.collection_path().as_str(), "users");
//! assert_eq!(user.resource_path().as_str(), "users/:id");
//! ```

use crate::error::ResourceError;
use crate::inflect;
use crate::route::RouteTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display};

/// Fully qualified class name, e.g. `Foo::User`. The empty path is the global
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ClassPath {
    segments: Vec<String>,
}

impl ClassPath {
    /// Parses `Foo::User`. Empty segments (including a leading `::`) are dropped.
    pub fn parse(name: &str) -> Self {
        Self {
            segments: name
                .split("::")
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn global() -> Self {
        Self::default()
    }

    pub fn is_global(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment (`User` for `Foo::User`); empty for the global namespace.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The enclosing namespace (`Foo` for `Foo::User`, global for `User`).
    pub fn namespace(&self) -> ClassPath {
        let end = self.segments.len().saturating_sub(1);
        Self {
            segments: self.segments[..end].to_vec(),
        }
    }

    /// `Foo` joined with `Bar::Baz` gives `Foo::Bar::Baz`.
    pub fn join(&self, relative: &ClassPath) -> ClassPath {
        let mut segments = self.segments.clone();
        segments.extend(relative.segments.iter().cloned());
        Self { segments }
    }
}

impl Display for ClassPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

impl From<&str> for ClassPath {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for ClassPath {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<ClassPath> for String {
    fn from(path: ClassPath) -> Self {
        path.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    HasOne,
    HasMany,
}

impl Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationKind::HasOne => f.write_str("has_one"),
            AssociationKind::HasMany => f.write_str("has_many"),
        }
    }
}

/// One `has_one` / `has_many` declaration.
///
/// `target_class_name` defaults to the classified association name
/// (`comments` → `Comment`) and is resolved relative to the declaring class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationDeclaration {
    pub kind: AssociationKind,
    pub name: String,
    pub target_class_name: String,
}

impl AssociationDeclaration {
    pub fn new(kind: AssociationKind, name: impl Into<String>) -> Self {
        let name = name.into();
        let target_class_name = inflect::classify(&name);
        Self {
            kind,
            name,
            target_class_name,
        }
    }

    pub fn has_one(name: impl Into<String>) -> Self {
        Self::new(AssociationKind::HasOne, name)
    }

    pub fn has_many(name: impl Into<String>) -> Self {
        Self::new(AssociationKind::HasMany, name)
    }

    /// Overrides the target class name; may be qualified (`Foo::Comment`).
    pub fn class_name(mut self, target: impl Into<String>) -> Self {
        self.target_class_name = target.into();
        self
    }
}

/// Immutable declaration of a resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceClass {
    path: ClassPath,
    collection_path: RouteTemplate,
    resource_path: RouteTemplate,
    primary_key: String,
    associations: Vec<AssociationDeclaration>,
}

impl ResourceClass {
    pub fn builder(path: impl Into<ClassPath>) -> ResourceClassBuilder {
        ResourceClassBuilder::new(path.into())
    }

    /// Declaration used for classes nobody registered: default paths, primary
    /// key `id`, no associations.
    pub fn implicit(path: ClassPath) -> Self {
        let collection_path = default_collection_path(&path);
        let resource_path = collection_path.with_member_param(DEFAULT_PRIMARY_KEY);
        Self {
            path,
            collection_path,
            resource_path,
            primary_key: DEFAULT_PRIMARY_KEY.to_string(),
            associations: Vec::new(),
        }
    }

    pub fn path(&self) -> &ClassPath {
        &self.path
    }

    pub fn collection_path(&self) -> &RouteTemplate {
        &self.collection_path
    }

    pub fn resource_path(&self) -> &RouteTemplate {
        &self.resource_path
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn associations(&self) -> &[AssociationDeclaration] {
        &self.associations
    }

    pub fn association(&self, name: &str) -> Option<&AssociationDeclaration> {
        self.associations.iter().find(|decl| decl.name == name)
    }
}

const DEFAULT_PRIMARY_KEY: &str = "id";

fn default_collection_path(path: &ClassPath) -> RouteTemplate {
    RouteTemplate::parse(inflect::pluralize(&inflect::underscore(path.name())))
}

/// Builder for [`ResourceClass`].
#[derive(Debug, Clone)]
pub struct ResourceClassBuilder {
    path: ClassPath,
    collection_path: Option<RouteTemplate>,
    resource_path: Option<RouteTemplate>,
    primary_key: String,
    associations: Vec<AssociationDeclaration>,
}

impl ResourceClassBuilder {
    fn new(path: ClassPath) -> Self {
        Self {
            path,
            collection_path: None,
            resource_path: None,
            primary_key: DEFAULT_PRIMARY_KEY.to_string(),
            associations: Vec::new(),
        }
    }

    pub fn collection_path(mut self, template: impl Into<RouteTemplate>) -> Self {
        self.collection_path = Some(template.into());
        self
    }

    /// Explicit member template. A whole-segment `:id` is rewritten to the
    /// primary key.
    pub fn resource_path(mut self, template: impl Into<RouteTemplate>) -> Self {
        self.resource_path = Some(template.into());
        self
    }

    pub fn primary_key(mut self, key: impl Into<String>) -> Self {
        self.primary_key = key.into();
        self
    }

    pub fn has_one(self, name: impl Into<String>) -> Self {
        self.association(AssociationDeclaration::has_one(name))
    }

    pub fn has_many(self, name: impl Into<String>) -> Self {
        self.association(AssociationDeclaration::has_many(name))
    }

    pub fn association(mut self, declaration: AssociationDeclaration) -> Self {
        self.associations.push(declaration);
        self
    }

    /// Finishes the declaration. Fails when an association name is declared
    /// twice.
    pub fn build(self) -> Result<ResourceClass, ResourceError> {
        let mut seen = HashSet::new();
        for decl in &self.associations {
            if !seen.insert(decl.name.as_str()) {
                return Err(ResourceError::DuplicateAssociation {
                    class: self.path.to_string(),
                    association: decl.name.clone(),
                });
            }
        }

        let collection_path = self
            .collection_path
            .unwrap_or_else(|| default_collection_path(&self.path));
        let resource_path = match self.resource_path {
            Some(template) => template.rename_segment_param(DEFAULT_PRIMARY_KEY, &self.primary_key),
            None => collection_path.with_member_param(&self.primary_key),
        };

        Ok(ResourceClass {
            path: self.path,
            collection_path,
            resource_path,
            primary_key: self.primary_key,
            associations: self.associations,
        })
    }
}
