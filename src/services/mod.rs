//! Service layer for business logic
//!
//! Resolver semantics live here so the GraphQL objects stay thin bindings.

mod link_service;

pub use link_service::*;
