//! Resource declarations and models for the sample domain.
//!
//! - [`User`] (`Foo::User`) is a typed entity with its own accessors.
//! - Comments and roles are plain [`Resource`](resource_framework::Resource)s
//!   built through the helpers in [`comment`] and [`role`].
//! - [`audit`] declares the `AccessRecord` / `Log` classes that exercise
//!   namespace lookups.

pub mod audit;
pub mod comment;
pub mod role;
pub mod user;

pub use user::User;
