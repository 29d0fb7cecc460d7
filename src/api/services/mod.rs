pub mod graphql;
pub mod health;
pub mod types;

pub use graphql::{GraphqlService, graphql_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use types::{ApiResponse, ErrorCode};
