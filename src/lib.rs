//! hackernews-api - GraphQL API for a link-sharing feed
//!
//! Serves `info`, `feed` and `post` over an in-memory link store.
//!
//! # Architecture
//! - `storage`: in-memory link store and identifier assignment
//! - `services`: resolver semantics over the store
//! - `graphql`: typed schema objects and the SDL declaration check
//! - `api`: HTTP services and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging initialization

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
