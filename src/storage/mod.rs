//! In-memory link storage

mod link_store;
pub mod models;

pub use link_store::{LinkStore, Snapshot};
pub use models::{Link, NewLink};
