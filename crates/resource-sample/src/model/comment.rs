use resource_framework::{Resource, ResourceClass, ResourceError};

pub const CLASS_NAME: &str = "Foo::Comment";

/// Comments only exist under a project: `projects/:project_id/comments`.
pub fn declaration() -> Result<ResourceClass, ResourceError> {
    ResourceClass::builder(CLASS_NAME)
        .collection_path("projects/:project_id/comments")
        .build()
}

pub fn comment(id: i64, body: &str) -> Resource {
    Resource::new(CLASS_NAME).with("id", id).with("body", body)
}
