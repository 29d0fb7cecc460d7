use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::RouteConfig;
use crate::config::StaticConfig;
use crate::graphql::{LinkSchema, SchemaDeclaration, build_schema};
use crate::services::LinkService;
use crate::storage::LinkStore;

pub struct StartupContext {
    pub store: Arc<LinkStore>,
    pub link_service: LinkService,
    pub schema: LinkSchema,
    pub route_config: RouteConfig,
}

/// 准备服务器启动的上下文
///
/// Reads the schema declaration, seeds the store, builds the executable
/// schema and checks it against the declaration. Any failure here means the
/// server must not start.
pub fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let schema_path = &config.graphql.schema_path;
    let declaration = SchemaDeclaration::load(schema_path)
        .with_context(|| format!("Failed to load schema declaration from {}", schema_path))?;

    let store = Arc::new(LinkStore::with_seed(
        config.store.id_prefix.clone(),
        config.store.seed.clone(),
    ));
    info!(
        "Link store initialized with {} seed link(s), next id {}{}",
        store.len(),
        store.id_prefix(),
        store.next_id()
    );

    let link_service = LinkService::new(store.clone());
    let schema = build_schema(link_service.clone(), &config.graphql);

    declaration
        .verify(&schema)
        .with_context(|| format!("Schema declaration {} does not match resolvers", schema_path))?;
    info!("Schema declaration verified: {}", schema_path);

    let route_config = RouteConfig::from_config(config);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        store,
        link_service,
        schema,
        route_config,
    })
}
