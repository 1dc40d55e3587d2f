//! # Association Summaries
//!
//! Decides whether an attribute is held by a declared association and, if so,
//! renders its value as a short placeholder instead of the nested resource's
//! attributes:
//!
//! | kind       | value                  | rendered                       |
//! |------------|------------------------|--------------------------------|
//! | `has_one`  | nested resource        | `#<Foo::Role>`                 |
//! | `has_many` | list of resources      | `[#<Foo::Comment>(1), ...]`    |
//!
//! The class name shown is the association's target class as found by
//! [`find_nearby`](crate::NamespaceResolver::find_nearby) from the declaring
//! class; when the target cannot be found the declared name is shown as-is.
//! Values of any other shape (null, scalars) are left to the caller, which
//! renders them like plain attributes.

use crate::class::{AssociationDeclaration, AssociationKind, ResourceClass};
use crate::entity::{Resource, ResourceEntity};
use crate::error::{AccessorError, ResourceError};
use crate::inspect::InspectOptions;
use crate::namespace::NamespaceResolver;
use crate::registry::ClassRegistry;
use crate::value::Value;

/// Result of [`AssociationSummarizer::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'c> {
    Plain,
    Association(&'c AssociationDeclaration),
}

impl Classification<'_> {
    pub fn kind(&self) -> Option<AssociationKind> {
        match self {
            Classification::Plain => None,
            Classification::Association(decl) => Some(decl.kind),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssociationSummarizer<'r> {
    registry: &'r ClassRegistry,
}

impl<'r> AssociationSummarizer<'r> {
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self { registry }
    }

    pub fn classify<'c>(&self, class: &'c ResourceClass, attribute: &str) -> Classification<'c> {
        match class.association(attribute) {
            Some(decl) => Classification::Association(decl),
            None => Classification::Plain,
        }
    }

    /// Fully qualified name shown in placeholders for `decl`'s target.
    pub fn target_name(&self, class: &ResourceClass, decl: &AssociationDeclaration) -> String {
        match NamespaceResolver::new(self.registry).find_nearby(class.path(), &decl.target_class_name) {
            Some(target) => target.path().to_string(),
            None => decl.target_class_name.trim_start_matches("::").to_string(),
        }
    }

    /// Placeholder for an association value, or `None` when the value does not
    /// have the shape the association kind expects.
    pub fn summarize(
        &self,
        class: &ResourceClass,
        decl: &AssociationDeclaration,
        value: &Value,
        options: &InspectOptions,
    ) -> Result<Option<String>, ResourceError> {
        match (decl.kind, value) {
            (AssociationKind::HasOne, Value::Resource(_)) => {
                Ok(Some(format!("#<{}>", self.target_name(class, decl))))
            }
            (AssociationKind::HasMany, Value::List(items)) => {
                let target = self.target_name(class, decl);
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    let part = match item {
                        Value::Resource(element) => {
                            let id = self.element_id(element, options).map_err(|source| {
                                ResourceError::Accessor {
                                    class: element.class().to_string(),
                                    attribute: self.primary_key_of(element).to_string(),
                                    source,
                                }
                            })?;
                            format!("#<{target}>({id})")
                        }
                        other => other.inspect(options),
                    };
                    parts.push(part);
                }
                Ok(Some(format!("[{}]", parts.join(", "))))
            }
            _ => Ok(None),
        }
    }

    fn primary_key_of(&self, element: &Resource) -> &'r str {
        self.registry
            .get(element.class())
            .map(ResourceClass::primary_key)
            .unwrap_or("id")
    }

    /// String ids are shown unquoted, like the path segment they would fill.
    fn element_id(&self, element: &Resource, options: &InspectOptions) -> Result<String, AccessorError> {
        let id = element.get_attribute(self.primary_key_of(element))?;
        Ok(match id {
            Value::Null => options.missing_id.clone(),
            Value::String(s) => s,
            other => other.inspect(options),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ClassRegistry {
        ClassRegistry::builder()
            .register(
                ResourceClass::builder("Foo::User")
                    .association(AssociationDeclaration::has_many("comments").class_name("Foo::Comment"))
                    .has_one("role")
                    .has_one("avatar")
                    .build()
                    .unwrap(),
            )
            .register(ResourceClass::builder("Foo::Comment").build().unwrap())
            .register(ResourceClass::builder("Foo::Role").build().unwrap())
            .build()
            .unwrap()
    }

    fn summarize(registry: &ClassRegistry, attribute: &str, value: Value) -> Option<String> {
        let user = registry.get(&"Foo::User".into()).unwrap();
        let summarizer = AssociationSummarizer::new(registry);
        let Classification::Association(decl) = summarizer.classify(user, attribute) else {
            panic!("{attribute} should be an association");
        };
        summarizer
            .summarize(user, decl, &value, &InspectOptions::default())
            .unwrap()
    }

    #[test]
    fn classifies_declared_names_only() {
        let registry = registry();
        let user = registry.get(&"Foo::User".into()).unwrap();
        let summarizer = AssociationSummarizer::new(&registry);

        assert_eq!(summarizer.classify(user, "role").kind(), Some(AssociationKind::HasOne));
        assert_eq!(summarizer.classify(user, "comments").kind(), Some(AssociationKind::HasMany));
        assert_eq!(summarizer.classify(user, "name"), Classification::Plain);
    }

    #[test]
    fn has_one_hides_nested_attributes() {
        let registry = registry();
        let role = Resource::new("Foo::Role").with("id", 1).with("name", "Member");
        assert_eq!(summarize(&registry, "role", role.into()).as_deref(), Some("#<Foo::Role>"));

        let unsaved = Resource::new("Foo::Role").with("name", "Member");
        assert_eq!(summarize(&registry, "role", unsaved.into()).as_deref(), Some("#<Foo::Role>"));
    }

    #[test]
    fn has_many_lists_identifiers_in_order() {
        let registry = registry();
        let comments = vec![
            Resource::new("Foo::Comment").with("id", 2).with("body", "second"),
            Resource::new("Foo::Comment").with("id", 1).with("body", "first"),
            Resource::new("Foo::Comment").with("body", "draft"),
        ];
        assert_eq!(
            summarize(&registry, "comments", comments.into()).as_deref(),
            Some("[#<Foo::Comment>(2), #<Foo::Comment>(1), #<Foo::Comment>(nil)]")
        );
        assert_eq!(summarize(&registry, "comments", Value::List(vec![])).as_deref(), Some("[]"));
    }

    #[test]
    fn element_ids_use_the_element_primary_key() {
        let registry = ClassRegistry::builder()
            .register(ResourceClass::builder("Team").has_many("roles").build().unwrap())
            .register(ResourceClass::builder("Role").primary_key("slug").build().unwrap())
            .build()
            .unwrap();
        let team = registry.get(&"Team".into()).unwrap();
        let summarizer = AssociationSummarizer::new(&registry);
        let Classification::Association(decl) = summarizer.classify(team, "roles") else {
            panic!("roles should be an association");
        };
        let roles = Value::from(vec![Resource::new("Role").with("id", 5).with("slug", "admin")]);
        let rendered = summarizer
            .summarize(team, decl, &roles, &InspectOptions::default())
            .unwrap();
        assert_eq!(rendered.as_deref(), Some("[#<Role>(admin)]"));
    }

    #[test]
    fn string_ids_are_shown_verbatim() {
        let registry = ClassRegistry::builder()
            .register(ResourceClass::builder("Team").has_many("roles").build().unwrap())
            .register(ResourceClass::builder("Role").primary_key("slug").build().unwrap())
            .build()
            .unwrap();
        let team = registry.get(&"Team".into()).unwrap();
        let summarizer = AssociationSummarizer::new(&registry);
        let decl = team.association("roles").unwrap();
        let roles = Value::from(vec![
            Resource::new("Role").with("slug", "site admin"),
            Resource::new("Role").with("slug", r#"say "hi""#),
            Resource::new("Role").with("slug", 7),
        ]);
        let rendered = summarizer
            .summarize(team, decl, &roles, &InspectOptions::default())
            .unwrap();
        assert_eq!(
            rendered.as_deref(),
            Some(r#"[#<Role>(site admin), #<Role>(say "hi"), #<Role>(7)]"#)
        );
    }

    #[test]
    fn unresolved_targets_show_declared_name() {
        let registry = registry();
        let avatar = Resource::new("Avatar").with("id", 3);
        assert_eq!(summarize(&registry, "avatar", avatar.into()).as_deref(), Some("#<Avatar>"));
    }

    #[test]
    fn mismatched_shapes_are_left_to_the_caller() {
        let registry = registry();
        assert_eq!(summarize(&registry, "role", Value::Null), None);
        assert_eq!(summarize(&registry, "comments", Value::from("oops")), None);
    }

    #[test]
    fn failing_element_accessor_propagates() {
        let registry = registry();
        let mut comment = Resource::new("Foo::Comment").with("id", 1);
        comment.override_accessor("id", |_| Err(AccessorError::Unreadable("id".into())));

        let user = registry.get(&"Foo::User".into()).unwrap();
        let summarizer = AssociationSummarizer::new(&registry);
        let decl = user.association("comments").unwrap();
        let err = summarizer
            .summarize(user, decl, &Value::from(vec![comment]), &InspectOptions::default())
            .unwrap_err();
        assert!(matches!(err, ResourceError::Accessor { ref attribute, .. } if attribute == "id"));
    }
}
