//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the storage adapters the features persist through.

pub mod storage;
