//! # Namespace Resolution
//!
//! Finds a class by short name relative to another class, the way a nested
//! constant reference is resolved: look in the enclosing namespace first, then
//! each outer namespace, ending with the global namespace.
//!
//! For `Foo::Bar::User` looking up `Log` the candidates are, in order:
//! `Foo::Bar::Log`, `Foo::Log`, `Log`. The first registered one wins, so a
//! closer definition shadows a farther one. The walk is bounded by the depth
//! of the starting class and always ends at the global namespace.
//!
//! Qualified names (`Admin::Role`) are joined onto each level in the same
//! way. A leading `::` (`::Log`) only looks at the global namespace.

use crate::class::{ClassPath, ResourceClass};
use crate::registry::ClassRegistry;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
pub struct NamespaceResolver<'r> {
    registry: &'r ClassRegistry,
}

impl<'r> NamespaceResolver<'r> {
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self { registry }
    }

    /// Returns the nearest class called `short_name`, or `None`.
    pub fn find_nearby(&self, starting: &ClassPath, short_name: &str) -> Option<&'r ResourceClass> {
        let relative = ClassPath::parse(short_name);
        if relative.is_global() {
            return None;
        }
        if short_name.trim_start().starts_with("::") {
            return self.registry.get(&relative);
        }

        let mut namespace = starting.namespace();
        loop {
            let candidate = namespace.join(&relative);
            trace!(from = %starting, candidate = %candidate, "Namespace lookup");
            if let Some(class) = self.registry.get(&candidate) {
                return Some(class);
            }
            if namespace.is_global() {
                return None;
            }
            namespace = namespace.namespace();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> ClassRegistry {
        names
            .iter()
            .fold(ClassRegistry::builder(), |builder, name| {
                builder.register(ResourceClass::builder(*name).build().unwrap())
            })
            .build()
            .unwrap()
    }

    fn found(registry: &ClassRegistry, from: &str, name: &str) -> Option<String> {
        NamespaceResolver::new(registry)
            .find_nearby(&ClassPath::parse(from), name)
            .map(|class| class.path().to_string())
    }

    #[test]
    fn prefers_sibling_class() {
        let registry = registry(&["Foo::User", "Foo::AccessRecord", "AccessRecord", "Log"]);
        assert_eq!(found(&registry, "Foo::User", "AccessRecord").as_deref(), Some("Foo::AccessRecord"));
    }

    #[test]
    fn falls_back_to_global() {
        let registry = registry(&["Foo::User", "AccessRecord", "Log"]);
        assert_eq!(found(&registry, "Foo::User", "Log").as_deref(), Some("Log"));
        assert_eq!(found(&registry, "AccessRecord", "Log").as_deref(), Some("Log"));
    }

    #[test]
    fn walks_every_enclosing_level() {
        let registry = registry(&["A::B::C::Start", "A::Target", "Target"]);
        assert_eq!(found(&registry, "A::B::C::Start", "Target").as_deref(), Some("A::Target"));
    }

    #[test]
    fn misses_return_none() {
        let registry = registry(&["Foo::User", "Log"]);
        assert_eq!(found(&registry, "Foo::User", "X"), None);
        assert_eq!(found(&registry, "Foo::User", ""), None);
        assert_eq!(found(&registry, "Foo::User", "::"), None);
    }

    #[test]
    fn does_not_look_inside_the_starting_class_or_deeper() {
        let registry = registry(&["Foo::User", "Foo::User::Log", "Foo::Admin::Log"]);
        assert_eq!(found(&registry, "Foo::User", "Log"), None);
    }

    #[test]
    fn resolves_qualified_names_per_level() {
        let registry = registry(&["Foo::User", "Foo::Admin::Role", "Admin::Role"]);
        assert_eq!(found(&registry, "Foo::User", "Admin::Role").as_deref(), Some("Foo::Admin::Role"));
        assert_eq!(found(&registry, "Log", "Admin::Role").as_deref(), Some("Admin::Role"));
    }

    #[test]
    fn leading_colons_restrict_to_global() {
        let registry = registry(&["Foo::User", "Foo::Log", "Log"]);
        assert_eq!(found(&registry, "Foo::User", "::Log").as_deref(), Some("Log"));
        assert_eq!(found(&registry, "Foo::User", "Log").as_deref(), Some("Foo::Log"));
    }
}
