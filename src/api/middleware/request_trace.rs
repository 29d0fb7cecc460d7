//! Request tracing middleware
//!
//! 为每个请求生成唯一的 UUID，注入到 tracing span 中，并记录请求耗时。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求 ID 类型，可从 request extensions 中提取
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Middleware factory
#[derive(Clone, Default)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestTraceService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();

        let request_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(RequestId(request_id.clone()));
        let http_req = req.request().clone();

        let span = info_span!(
            "request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.path(),
        );

        Box::pin(
            async move {
                let result = srv.call(req).await;
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

                // Inner errors become responses here so they carry the request id too
                let mut response = match result {
                    Ok(response) => response.map_into_left_body(),
                    Err(e) => {
                        warn!("Request failed after {:.2}ms: {}", elapsed_ms, e);
                        ServiceResponse::from_err(e, http_req).map_into_right_body()
                    }
                };

                debug!(
                    "Completed with {} in {:.2}ms",
                    response.status().as_u16(),
                    elapsed_ms
                );

                if let Ok(header_value) = HeaderValue::from_str(&request_id) {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);
                }

                Ok(response)
            }
            .instrument(span),
        )
    }
}
