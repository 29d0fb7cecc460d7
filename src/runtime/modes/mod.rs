//! Mode routing
//!
//! Only the HTTP server runs long-lived; the other CLI commands are one-shot
//! and handled directly in `main`.

pub mod server;

pub use server::run_server;
