//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for storage that lives outside the database.

pub mod storage;
