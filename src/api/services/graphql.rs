use actix_web::{HttpResponse, Responder, error, web};
use async_graphql::http::GraphiQLSource;
use tracing::debug;

use crate::graphql::{FeedSnapshot, LinkSchema};
use crate::services::LinkService;

/// Request body limit for GraphQL documents
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct GraphqlService;

impl GraphqlService {
    /// Execute one GraphQL request
    ///
    /// The store snapshot is taken once here so that every `feed` selection
    /// in the document observes the same state. Validation and field errors
    /// are part of the GraphQL response body, so the status is always 200.
    pub async fn execute(
        schema: web::Data<LinkSchema>,
        service: web::Data<LinkService>,
        request: web::Json<async_graphql::Request>,
    ) -> impl Responder {
        let request = request.into_inner().data(FeedSnapshot(service.feed()));
        let operation = request.operation_name.clone();

        let response = schema.execute(request).await;
        if !response.errors.is_empty() {
            debug!(
                "GraphQL operation {:?} returned {} error(s): {}",
                operation,
                response.errors.len(),
                response
                    .errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            );
        }

        HttpResponse::Ok().json(response)
    }
}

/// JSON extractor config: malformed bodies answer with a GraphQL-shaped error list
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            let body = serde_json::json!({ "errors": [{ "message": err.to_string() }] });
            error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

/// GraphQL 路由配置
///
/// POST executes documents; GET serves the GraphiQL IDE when enabled.
pub fn graphql_routes(endpoint: &str, enable_graphiql: bool) -> actix_web::Resource {
    let resource = web::resource(endpoint)
        .app_data(json_config())
        .route(web::post().to(GraphqlService::execute));

    if !enable_graphiql {
        return resource;
    }

    let page = GraphiQLSource::build().endpoint(endpoint).finish();
    resource.route(web::get().to(move || {
        let page = page.clone();
        async move {
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(page)
        }
    }))
}
