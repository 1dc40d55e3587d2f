//! # Resource Framework
//!
//! Client-side building blocks for mapping remote REST resources onto
//! in-memory objects, with a focus on **introspection**: turning an instance
//! into a readable one-line summary and finding the classes its associations
//! point at.
//!
//! ## Architecture Overview
//!
//! The crate separates *declarations* from *instances*:
//!
//! 1. **Declaration Layer** ([`ResourceClass`], [`ClassRegistry`]) - what each
//!    resource type looks like: route templates, primary key, associations.
//!    Built once, immutable afterwards.
//! 2. **Instance Layer** ([`ResourceEntity`], [`Resource`]) - the attributes of
//!    one object and its public accessors.
//! 3. **Introspection Layer** ([`Inspector`], [`PathResolver`],
//!    [`AssociationSummarizer`], [`NamespaceResolver`]) - pure functions over
//!    the two layers above.
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::{AssociationDeclaration, ClassRegistry, Inspector, Resource, ResourceClass};
//!
//! let registry = ClassRegistry::builder()
//!     .register(
//!         ResourceClass::builder("Foo::User")
//!             .association(AssociationDeclaration::has_many("comments").class_name("Foo::Comment"))
//!             .has_one("role")
//!             .build()?,
//!     )
//!     .register(
//!         ResourceClass::builder("Foo::Comment")
//!             .collection_path("projects/:project_id/comments")
//!             .build()?,
//!     )
//!     .register(ResourceClass::builder("Foo::Role").build()?)
//!     .build()?;
//!
//! let user = Resource::new("Foo::User")
//!     .with("id", 2)
//!     .with("name", "Lindsay Fünke")
//!     .with("role", Resource::new("Foo::Role").with("id", 1).with("name", "Member"))
//!     .with("comments", vec![Resource::new("Foo::Comment").with("id", 1)]);
//!
//! let inspector = Inspector::new(&registry);
//! assert_eq!(
//!     inspector.render(&user)?,
//!     "#<Foo::User(users/2) id=2 name=\"Lindsay Fünke\" role=#<Foo::Role> comments=[#<Foo::Comment>(1)]>"
//! );
//!
//! let comment = Resource::new("Foo::Comment").with("id", 1);
//! assert_eq!(
//!     inspector.render(&comment)?,
//!     "#<Foo::Comment(<unknown path, missing `project_id`>) id=1>"
//! );
//! # Ok::<(), resource_framework::ResourceError>(())
//! ```
//!
//! ## Concurrency Model
//!
//! Nothing here blocks, locks or mutates. A built [`ClassRegistry`] is plain
//! immutable data, so one registry can serve inspectors on any number of
//! threads. Rendering the same instance from several threads is fine as long
//! as nobody mutates it at the same time.
//!
//! ## Error Handling
//!
//! Unresolvable paths and unknown classes are normal outcomes
//! ([`ResolvedPath::Unresolved`], `None`). [`ResourceError`] is reserved for
//! declaration mistakes and failing accessors.

pub mod association;
pub mod attributes;
pub mod class;
pub mod entity;
pub mod error;
pub mod inflect;
pub mod inspect;
pub mod namespace;
pub mod registry;
pub mod route;
pub mod tracing;
pub mod value;

// Re-export core types for convenience
pub use association::{AssociationSummarizer, Classification};
pub use attributes::Attributes;
pub use class::{AssociationDeclaration, AssociationKind, ClassPath, ResourceClass, ResourceClassBuilder};
pub use entity::{Accessor, Resource, ResourceEntity};
pub use error::{AccessorError, ResourceError};
pub use inspect::{InspectOptions, Inspector};
pub use namespace::NamespaceResolver;
pub use registry::{ClassRegistry, RegistryBuilder};
pub use route::{PathResolver, ResolvedPath, RouteTemplate};
pub use value::Value;
