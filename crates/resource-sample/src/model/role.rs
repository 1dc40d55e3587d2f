use resource_framework::{Resource, ResourceClass, ResourceError};

pub const CLASS_NAME: &str = "Foo::Role";

pub fn declaration() -> Result<ResourceClass, ResourceError> {
    ResourceClass::builder(CLASS_NAME).build()
}

pub fn role(id: i64, name: &str) -> Resource {
    Resource::new(CLASS_NAME).with("id", id).with("name", name)
}
