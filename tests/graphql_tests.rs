//! GraphQL schema tests
//!
//! Executes documents directly against the schema, without HTTP.

use std::sync::Arc;

use async_graphql::{EmptySubscription, PathSegment, Request, Schema, Variables};
use serde_json::{Value, json};

use hackernews_api::config::GraphqlConfig;
use hackernews_api::graphql::{FeedSnapshot, LinkSchema, Mutation, Query, build_schema};
use hackernews_api::services::{INFO, LinkService, PostLinkRequest};
use hackernews_api::storage::{LinkStore, NewLink};

// =============================================================================
// Test Setup
// =============================================================================

fn empty_store() -> Arc<LinkStore> {
    Arc::new(LinkStore::new("link-"))
}

fn seeded_store() -> Arc<LinkStore> {
    Arc::new(LinkStore::with_seed(
        "link-",
        vec![NewLink::new(
            "www.howtographql.com",
            "Fullstack tutorial for GraphQL",
        )],
    ))
}

fn schema_for(store: Arc<LinkStore>) -> LinkSchema {
    build_schema(LinkService::new(store), &GraphqlConfig::default())
}

async fn execute(schema: &LinkSchema, request: impl Into<Request>) -> Value {
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

// =============================================================================
// Query
// =============================================================================

#[tokio::test]
async fn test_info_returns_fixed_string() {
    let schema = schema_for(empty_store());

    let data = execute(&schema, "{ info }").await;
    assert_eq!(data, json!({ "info": INFO }));
    assert_eq!(data["info"], "This is the API of a Hackernews Clone");
}

#[tokio::test]
async fn test_info_unchanged_by_mutations() {
    let schema = schema_for(empty_store());

    let before = execute(&schema, "{ info }").await;
    execute(
        &schema,
        r#"mutation { post(url: "www.example.com", description: "test") { id } }"#,
    )
    .await;
    let after = execute(&schema, "{ info }").await;

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_feed_returns_seed() {
    let schema = schema_for(seeded_store());

    let data = execute(&schema, "{ feed { id url description } }").await;
    assert_eq!(
        data,
        json!({
            "feed": [{
                "id": "link-0",
                "url": "www.howtographql.com",
                "description": "Fullstack tutorial for GraphQL"
            }]
        })
    );
}

#[tokio::test]
async fn test_feed_projects_only_selected_fields() {
    let schema = schema_for(seeded_store());

    let data = execute(&schema, "{ feed { url } }").await;
    assert_eq!(data, json!({ "feed": [{ "url": "www.howtographql.com" }] }));
}

#[tokio::test]
async fn test_feed_on_empty_store() {
    let schema = schema_for(empty_store());

    let data = execute(&schema, "{ feed { id } }").await;
    assert_eq!(data, json!({ "feed": [] }));
}

// =============================================================================
// Mutation
// =============================================================================

#[tokio::test]
async fn test_post_then_feed() {
    let store = empty_store();
    let schema = schema_for(store.clone());

    let data = execute(
        &schema,
        r#"mutation { post(url: "www.example.com", description: "test") { id url description } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "post": { "id": "link-0", "url": "www.example.com", "description": "test" } })
    );

    let data = execute(&schema, "{ feed { id url description } }").await;
    assert_eq!(
        data,
        json!({ "feed": [{ "id": "link-0", "url": "www.example.com", "description": "test" }] })
    );
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_two_posts_in_one_document_run_in_order() {
    let schema = schema_for(empty_store());

    let data = execute(
        &schema,
        r#"mutation {
            first: post(url: "a", description: "x") { id }
            second: post(url: "b", description: "y") { id }
        }"#,
    )
    .await;

    assert_eq!(data["first"]["id"], "link-0");
    assert_eq!(data["second"]["id"], "link-1");
}

#[tokio::test]
async fn test_post_with_variables() {
    let schema = schema_for(seeded_store());

    let request = Request::new(
        "mutation Post($url: String!, $description: String!) { post(url: $url, description: $description) { id url } }",
    )
    .variables(Variables::from_json(json!({
        "url": "www.rust-lang.org",
        "description": "Rust"
    })));

    let data = execute(&schema, request).await;
    assert_eq!(data, json!({ "post": { "id": "link-1", "url": "www.rust-lang.org" } }));
}

#[tokio::test]
async fn test_feed_keeps_insertion_order() {
    let schema = schema_for(seeded_store());

    for url in ["b", "a", "c"] {
        let request = Request::new(
            "mutation($url: String!) { post(url: $url, description: \"d\") { id } }",
        )
        .variables(Variables::from_json(json!({ "url": url })));
        execute(&schema, request).await;
    }

    let data = execute(&schema, "{ feed { url } }").await;
    let urls: Vec<&str> = data["feed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, vec!["www.howtographql.com", "b", "a", "c"]);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_undeclared_field_is_rejected() {
    let schema = schema_for(seeded_store());

    let response = schema.execute("{ feed { nonexistentField } }").await;
    assert!(!response.errors.is_empty());
    assert_eq!(response.data, async_graphql::Value::Null);
}

#[tokio::test]
async fn test_rejected_mutation_does_not_touch_store() {
    let store = empty_store();
    let schema = schema_for(store.clone());

    let response = schema
        .execute(r#"mutation { post(url: "a", description: "b") { nonexistentField } }"#)
        .await;
    assert!(!response.errors.is_empty());
    assert_eq!(response.data, async_graphql::Value::Null);
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 0);
}

#[tokio::test]
async fn test_missing_required_argument_is_rejected() {
    let store = empty_store();
    let schema = schema_for(store.clone());

    let response = schema
        .execute(r#"mutation { post(url: "a") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_undeclared_argument_is_rejected() {
    let schema = schema_for(seeded_store());

    let response = schema.execute("{ feed(first: 1) { id } }").await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_null_argument_is_rejected() {
    let store = empty_store();
    let schema = schema_for(store.clone());

    let response = schema
        .execute(r#"mutation { post(url: null, description: "b") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_depth_limit() {
    let config = GraphqlConfig {
        max_depth: Some(1),
        ..GraphqlConfig::default()
    };
    let schema = build_schema(LinkService::new(seeded_store()), &config);

    assert!(schema.execute("{ info }").await.errors.is_empty());
    assert!(!schema.execute("{ feed { id } }").await.errors.is_empty());
}

// =============================================================================
// Request-scoped snapshot
// =============================================================================

#[tokio::test]
async fn test_feed_reads_pinned_snapshot() {
    let store = seeded_store();
    let service = LinkService::new(store.clone());
    let schema = build_schema(service.clone(), &GraphqlConfig::default());

    let pinned = service.feed();
    store.append(NewLink::new("later", "posted after the request started"));

    let request = Request::new("{ a: feed { id } b: feed { id } }").data(FeedSnapshot(pinned));
    let data = execute(&schema, request).await;

    assert_eq!(data["a"], json!([{ "id": "link-0" }]));
    assert_eq!(data["a"], data["b"]);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_feed_shares_links_with_store() {
    let store = seeded_store();
    let service = LinkService::new(store.clone());
    let schema = build_schema(service.clone(), &GraphqlConfig::default());

    let pinned = FeedSnapshot(service.feed());
    assert!(Arc::ptr_eq(&pinned.0[0], &store.snapshot()[0]));

    let posted = service.post(PostLinkRequest {
        url: "www.example.com".to_string(),
        description: "test".to_string(),
    });
    assert!(Arc::ptr_eq(&posted, &store.snapshot()[1]));

    let data = execute(&schema, Request::new("{ feed { id } }").data(pinned.clone())).await;
    assert_eq!(data, json!({ "feed": [{ "id": "link-0" }] }));
    assert!(Arc::ptr_eq(&pinned.0[0], &service.feed()[0]));
}

#[tokio::test]
async fn test_missing_service_is_a_field_error() {
    let schema = Schema::build(Query, Mutation, EmptySubscription).finish();

    let response = schema.execute("{ feed { id } }").await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].path,
        vec![PathSegment::Field("feed".to_string())]
    );
}
