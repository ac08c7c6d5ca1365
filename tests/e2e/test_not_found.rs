use crate::e2e::helpers;

use chrono::DateTime;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_problem_json_for_unknown_route(ctx: &TestContext) {

    let response = ctx.client.get("/orders/42").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_header("content-type", "application/problem+json");

    let body = response.assert_problem("Not Found", 404);
    assert_eq!(
        body.get("type").and_then(|v| v.as_str()),
        Some(ctx.config.problem_type("not-found").as_str())
    );
    assert_eq!(body.get("instance").and_then(|v| v.as_str()), Some("/orders/42"));
    assert_eq!(
        body.get("detail").and_then(|v| v.as_str()),
        Some("No route for GET /orders/42")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_stamp_rfc3339_timestamp(ctx: &TestContext) {

    let response = ctx.client.get("/missing").await.unwrap();
    let body = response.assert_problem("Not Found", 404);

    let timestamp = body.get("timestamp").and_then(|v| v.as_str()).unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_request_id_in_extra(ctx: &TestContext) {

    let response = ctx.client.get("/missing").await.unwrap();

    let request_id = response
        .header("x-request-id")
        .cloned()
        .expect("Missing x-request-id header");
    let body = response.assert_problem("Not Found", 404);

    assert_eq!(body.get("extra"), Some(&json!({ "request_id": request_id })));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_name_method_in_detail(ctx: &TestContext) {

    let response = ctx
        .client
        .post("/orders", &json!({ "sku": "abc" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.assert_problem("Not Found", 404);
    assert_eq!(
        body.get("detail").and_then(|v| v.as_str()),
        Some("No route for POST /orders")
    );

    let response = ctx.client.delete("/orders/7").await.unwrap();
    let body = response.assert_problem("Not Found", 404);
    assert_eq!(
        body.get("detail").and_then(|v| v.as_str()),
        Some("No route for DELETE /orders/7")
    );
}
