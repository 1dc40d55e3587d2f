//! # Inspector
//!
//! Produces the debug representation of a resource instance:
//!
//! ```text
//! #<Foo::User(users/2) id=2 name="Lindsay Fünke" role=#<Foo::Role> comments=[#<Foo::Comment>(1)]>
//! ```
//!
//! ## Algorithm
//!
//! 1. **Path token** from [`PathResolver::request_path`]: the member path when the
//!    primary key is set and the member template resolves, else the collection
//!    path, else `` <unknown path, missing `param`> ``.
//! 2. **Attributes**: in the instance's canonical order, each read through
//!    [`ResourceEntity::get_attribute`].
//! 3. **Associations**: attributes held by a declared association are
//!    summarized by [`AssociationSummarizer`]; everything else is rendered with
//!    [`Value::inspect`](crate::Value::inspect).
//! 4. Fragments are `key=value`, joined by single spaces. With no attributes
//!    the output is `#<Class(path)>`.
//!
//! Missing path parameters never fail a render. A failing accessor does, and
//! its error is returned unchanged inside [`ResourceError::Accessor`].

use crate::association::{AssociationSummarizer, Classification};
use crate::attributes::Attributes;
use crate::entity::ResourceEntity;
use crate::error::ResourceError;
use crate::registry::ClassRegistry;
use crate::route::{PathResolver, ResolvedPath};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rendering knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// When set, strings longer than this many characters are cut and
    /// suffixed with `...`. Unset by default, so accessor output is shown in
    /// full.
    pub max_string_length: Option<usize>,
    /// Shown in place of the identifier of an unsaved has-many element.
    pub missing_id: String,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_string_length: None,
            missing_id: "nil".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Inspector<'r> {
    registry: &'r ClassRegistry,
    options: InspectOptions,
}

impl<'r> Inspector<'r> {
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self {
            registry,
            options: InspectOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InspectOptions) -> Self {
        self.options = options;
        self
    }

    pub fn render<E: ResourceEntity + ?Sized>(&self, entity: &E) -> Result<String, ResourceError> {
        self.render_scoped(entity, None)
    }

    /// Renders `entity`, letting `scope` fill path parameters the instance
    /// does not carry itself (its own attributes still win).
    #[instrument(level = "debug", skip_all, fields(class = %entity.class_path()))]
    pub fn render_scoped<E: ResourceEntity + ?Sized>(
        &self,
        entity: &E,
        scope: Option<&Attributes>,
    ) -> Result<String, ResourceError> {
        let class_path = entity.class_path();
        let class = self.registry.get_or_implicit(&class_path);
        let path = self.path_token(entity, scope);
        let summarizer = AssociationSummarizer::new(self.registry);

        let mut out = format!("#<{class_path}({path})");
        for name in entity.attributes().keys() {
            let value = entity
                .get_attribute(name)
                .map_err(|source| ResourceError::Accessor {
                    class: class_path.to_string(),
                    attribute: name.to_string(),
                    source,
                })?;
            let rendered = match summarizer.classify(&class, name) {
                Classification::Association(decl) => summarizer
                    .summarize(&class, decl, &value, &self.options)?
                    .unwrap_or_else(|| value.inspect(&self.options)),
                Classification::Plain => value.inspect(&self.options),
            };
            out.push(' ');
            out.push_str(name);
            out.push('=');
            out.push_str(&rendered);
        }
        out.push('>');

        debug!(path = %path, attributes = entity.attributes().len(), "Rendered");
        Ok(out)
    }

    /// The path token alone.
    pub fn path_token<E: ResourceEntity + ?Sized>(
        &self,
        entity: &E,
        scope: Option<&Attributes>,
    ) -> ResolvedPath {
        let class = self.registry.get_or_implicit(&entity.class_path());
        let path = PathResolver::request_path(&class, entity.attributes(), scope);
        if let ResolvedPath::Unresolved { missing } = &path {
            debug!(class = %class.path(), %missing, "Request path unresolved");
        }
        path
    }
}
