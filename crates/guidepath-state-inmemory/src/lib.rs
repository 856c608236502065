//! In-memory state store implementations for the Guidepath platform
//!
//! This crate provides in-memory implementations of the catalog and
//! bookmark traits defined in the guidepath-core crate. It is primarily
//! useful for development, testing, and simple deployments where
//! persistence is not required, and it ships the seeded sample catalog
//! used throughout the workspace's tests.

pub mod repositories;
pub use repositories::{InMemoryBookmarkStore, InMemoryWorkflowCatalog};

pub mod seed;
pub use seed::sample_catalog;
