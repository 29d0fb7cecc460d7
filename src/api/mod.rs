//! HTTP transport: GraphQL endpoint, health probes, middleware

pub mod middleware;
pub mod services;

use actix_web::{HttpResponse, web};

use crate::config::StaticConfig;
use services::{ApiResponse, ErrorCode, graphql_routes, health_routes};

/// Route layout resolved from configuration
#[derive(Clone, Debug)]
pub struct RouteConfig {
    pub graphql_endpoint: String,
    pub health_prefix: String,
    pub enable_graphiql: bool,
}

impl RouteConfig {
    pub fn from_config(config: &StaticConfig) -> Self {
        Self {
            graphql_endpoint: config.graphql.endpoint.clone(),
            health_prefix: config.health.prefix.clone(),
            enable_graphiql: config.graphql.enable_graphiql,
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::from_config(&StaticConfig::default())
    }
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()> {
        code: ErrorCode::NotFound,
        message: "Resource not found".to_string(),
        data: None,
    })
}

/// Register every route. Expects `LinkSchema`, `LinkService` and
/// `AppStartTime` as app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig, route: &RouteConfig) {
    cfg.service(web::scope(&route.health_prefix).service(health_routes()))
        .service(graphql_routes(&route.graphql_endpoint, route.enable_graphiql))
        .default_service(web::route().to(not_found));
}
