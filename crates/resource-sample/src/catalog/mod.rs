//! # Catalog
//!
//! Wires every sample declaration into one [`ClassRegistry`] and hands out
//! inspectors over it. This is the single place the sample's declaration
//! table is assembled; everything else borrows it.
//!
//! ```rust
//! use resource_sample::catalog::Catalog;
//! use resource_sample::model::User;
//!
//! let catalog = Catalog::new()?;
//! let user = User::new().with("name", "Tobias Funke");
//! assert_eq!(
//!     catalog.inspector().render(&user)?,
//!     "#<Foo::User(users) name=\"Tobias Funke\">"
//! );
//! # Ok::<(), resource_framework::ResourceError>(())
//! ```

use crate::model::{audit, comment, role, user};
use resource_framework::{ClassPath, ClassRegistry, InspectOptions, Inspector, ResourceClass, ResourceError};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Catalog {
    registry: ClassRegistry,
    options: InspectOptions,
}

impl Catalog {
    /// Registers every sample class.
    pub fn new() -> Result<Self, ResourceError> {
        Self::with_options(InspectOptions::default())
    }

    pub fn with_options(options: InspectOptions) -> Result<Self, ResourceError> {
        let mut builder = ClassRegistry::builder()
            .register(user::declaration()?)
            .register(comment::declaration()?)
            .register(role::declaration()?);
        for class in audit::declarations()? {
            builder = builder.register(class);
        }
        let registry = builder.build()?;
        info!(classes = registry.len(), "Catalog ready");
        Ok(Self { registry, options })
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn inspector(&self) -> Inspector<'_> {
        Inspector::new(&self.registry).with_options(self.options.clone())
    }

    /// Looks `short_name` up relative to the class named `from`.
    pub fn find_nearby(&self, from: &str, short_name: &str) -> Option<&ResourceClass> {
        self.registry.find_nearby(&ClassPath::parse(from), short_name)
    }
}
