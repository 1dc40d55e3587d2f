//! # Resource Sample Demo
//!
//! Builds the sample catalog and prints the inspect output for a few
//! resources in different states.
//!
//! ```bash
//! RUST_LOG=info cargo run -p resource-sample
//! RUST_LOG=debug cargo run -p resource-sample   # render spans, unresolved paths
//! ```

use resource_framework::tracing::setup_tracing;
use resource_framework::{Attributes, Resource, ResourceError};
use resource_sample::catalog::Catalog;
use resource_sample::model::comment::comment;
use resource_sample::model::role::role;
use resource_sample::model::User;
use tracing::{info, info_span};

fn main() -> Result<(), ResourceError> {
    setup_tracing();

    let catalog = Catalog::new()?;
    let inspector = catalog.inspector();

    let _span = info_span!("inspect").entered();

    let saved = User::new().with("id", 1).with("name", "Tobias Funke");
    println!("{}", inspector.render(&saved)?);

    let unsaved = User::new()
        .with("name", "Tobias Funke")
        .with("password", "Funke")
        .with("life-span", "3 years");
    println!("{}", inspector.render(&unsaved)?);

    let with_associations = User::new()
        .with("id", 2)
        .with("name", "Lindsay Fünke")
        .with("role", role(1, "Member"))
        .with("comments", vec![comment(1, "They're having a FIRESALE?").with("user_id", 2)]);
    println!("{}", inspector.render(&with_associations)?);

    let orphan = comment(1, "Hello!");
    println!("{}", inspector.render(&orphan)?);

    let scope: Attributes = [("project_id", 1)].into_iter().collect();
    println!("{}", inspector.render_scoped(&orphan, Some(&scope))?);

    let log = Resource::new("Log").with("id", 7).with("message", "signed in");
    println!("{}", inspector.render(&log)?);

    for (from, name) in [("Foo::User", "AccessRecord"), ("AccessRecord", "Log"), ("Foo::User", "X")] {
        match catalog.find_nearby(from, name) {
            Some(class) => info!(%from, %name, found = %class.path(), "Nearby class"),
            None => info!(%from, %name, "No nearby class"),
        }
    }

    Ok(())
}
