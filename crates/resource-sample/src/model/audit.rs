//! Classes that share short names across namespaces.
//!
//! `AccessRecord` exists both at the top level and inside `Foo`; `Log` only
//! at the top level. From inside `Foo` the nested `AccessRecord` shadows the
//! top-level one, while `Log` is still found globally.

use resource_framework::{ResourceClass, ResourceError};

pub const ACCESS_RECORD: &str = "AccessRecord";
pub const FOO_ACCESS_RECORD: &str = "Foo::AccessRecord";
pub const LOG: &str = "Log";

pub fn declarations() -> Result<Vec<ResourceClass>, ResourceError> {
    [ACCESS_RECORD, FOO_ACCESS_RECORD, LOG]
        .into_iter()
        .map(|name| ResourceClass::builder(name).build())
        .collect()
}
