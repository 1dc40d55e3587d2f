use resource_framework::{
    AccessorError, AssociationDeclaration, Attributes, ClassPath, ResourceClass, ResourceEntity,
    ResourceError, Value,
};

pub const CLASS_NAME: &str = "Foo::User";

/// Declaration of `Foo::User`: collection `users`, comments and a role.
pub fn declaration() -> Result<ResourceClass, ResourceError> {
    ResourceClass::builder(CLASS_NAME)
        .association(AssociationDeclaration::has_many("comments").class_name("Foo::Comment"))
        .has_one("role")
        .build()
}

/// A registered user.
///
/// # Accessors
/// `password` is never shown: its accessor always returns `"filtered"`. Every
/// other attribute reads straight from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    attributes: Attributes,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}

impl ResourceEntity for User {
    fn class_path(&self) -> ClassPath {
        ClassPath::parse(CLASS_NAME)
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn get_attribute(&self, name: &str) -> Result<Value, AccessorError> {
        match name {
            "password" => Ok(Value::from("filtered")),
            _ => Ok(self.attributes.get(name).cloned().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_accessor_masks_stored_value() {
        let user = User::new().with("name", "Tobias Funke").with("password", "Funke");
        assert_eq!(user.get_attribute("password"), Ok(Value::from("filtered")));
        assert_eq!(user.attributes().get("password"), Some(&Value::from("Funke")));
        assert_eq!(user.name(), Some("Tobias Funke"));
    }

    #[test]
    fn declaration_targets_namespaced_classes() {
        let class = declaration().unwrap();
        assert_eq!(class.collection_path().as_str(), "users");
        assert_eq!(
            class.association("comments").map(|decl| decl.target_class_name.as_str()),
            Some("Foo::Comment")
        );
        assert_eq!(
            class.association("role").map(|decl| decl.target_class_name.as_str()),
            Some("Role")
        );
    }
}
