use actix_web::{HttpResponse, Responder, web};
use std::time::Instant;
use tracing::{debug, trace};

use super::types::{
    ApiResponse, ErrorCode, HealthChecks, HealthResponse, HealthStoreCheck,
};
use crate::services::LinkService;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// Health Service
///
/// The store lives in memory, so a request that reaches the handler can
/// always report it; the report carries the link count and next identifier.
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        service: web::Data<LinkService>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let store = service.store();
        let store_status = HealthStoreCheck {
            status: "healthy".to_string(),
            links_count: store.len(),
            next_id: store.next_id(),
        };

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

        let health_data = HealthResponse {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds,
            checks: HealthChecks {
                store: store_status,
            },
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        debug!(
            "Health check completed in {:?}, uptime: {}s",
            start_time.elapsed(),
            uptime_seconds
        );

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ApiResponse {
                code: ErrorCode::Success,
                message: "OK".to_string(),
                data: Some(health_data),
            })
    }

    // 简单的就绪检查，只返回 200 状态码
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
