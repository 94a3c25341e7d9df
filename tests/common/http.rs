#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response, StatusCode},
    Router,
};
use std::time::Duration;
use tokio::time::timeout;
use tower::ServiceExt;

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn read_json_response(res: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("failed to parse response json")
}

/// GET `uri` on `app` and return the status with the decoded body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let res = timeout(Duration::from_secs(5), app.oneshot(get_request(uri)))
        .await
        .expect("request timed out")
        .expect("request failed");
    let status = res.status();
    (status, read_json_response(res).await)
}
