//! # Resource Sample
//!
//! A small domain built on [`resource_framework`]: users in the `Foo`
//! namespace with comments nested under projects and a role each, plus a
//! handful of classes that share short names across namespaces.
//!
//! - **[model]**: declarations and the typed [`User`](model::User) entity.
//! - **[catalog]**: assembles the declaration table and hands out inspectors.

pub mod catalog;
pub mod model;
