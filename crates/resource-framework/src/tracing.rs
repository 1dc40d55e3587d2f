//! # Observability & Tracing
//!
//! The framework emits `tracing` events with structured fields instead of
//! formatted strings:
//!
//! - **Registry**: `Registry built classes=3` (info), dangling association
//!   targets (warn)
//! - **Inspector**: one `render_scoped{class=Foo::User}` span per render,
//!   `Request path unresolved missing="project_id"` and `Rendered` (debug)
//! - **Lookups**: each candidate tried by the namespace walk and each missing
//!   route placeholder (trace)
//!
//! ## Usage
//!
//! ```bash
//! # Registry summary only
//! RUST_LOG=info cargo run
//!
//! # Render spans and unresolved paths
//! RUST_LOG=debug cargo run
//!
//! # Every namespace candidate
//! RUST_LOG=resource_framework=trace cargo run
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once at startup; a second call panics because a global subscriber is
/// already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
