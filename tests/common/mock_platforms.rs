#![allow(dead_code)]

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

use super::TEST_TOKEN;

/// Local stand-in for the GrabCAD, Printables and Thingiverse APIs.
///
/// Ids select the upstream behavior, so tests never need external network.
pub struct MockPlatformServer {
    pub base_url: String,
    _task: JoinHandle<()>,
}

async fn grabcad_model(Path(id): Path<String>) -> impl IntoResponse {
    match id.as_str() {
        "arduino-uno-r3-1" => Json(json!({
            "id": 1,
            "name": "Arduino Uno R3",
            "likes_count": 1586,
            "downloads_count": 71486,
            "comments_count": 174
        }))
        .into_response(),
        "model-that-should-not-exist-123" => {
            (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response()
        }
        // Whitespace ids resolve to an empty listing upstream.
        "  " => Json(json!({"results": []})).into_response(),
        "badschema" => Json(json!({"likes_count": "lots"})).into_response(),
        "notjson" => (StatusCode::OK, "<!DOCTYPE html><p>maintenance</p>").into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "").into_response(),
        "slow" => {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            Json(json!({"likes_count": 1})).into_response()
        }
        _ => Json(json!({"likes_count": 0, "downloads_count": 0, "comments_count": 0}))
            .into_response(),
    }
}

async fn printables_graphql(Json(body): Json<Value>) -> impl IntoResponse {
    let query = body["query"].as_str().unwrap_or("");
    if !query.contains("print(id: $id)") || !query.contains("ratingAvg") {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": [{"message": "bad query"}]})))
            .into_response();
    }

    let id = body["variables"]["id"].as_str().unwrap_or("");
    let payload = match id {
        "3161" => json!({"data": {"print": {
            "ratingAvg": "4.96",
            "ratingCount": 750,
            "shareCount": 12,
            "likesCount": 2774,
            "makesCount": 2149,
            "downloadCount": 42439,
            "displayCount": 71458,
            "collectionsCount": 1443,
            "commentCount": 2333,
            "remixCount": 56
        }}}),
        "unrated" => json!({"data": {"print": {
            "ratingAvg": "0",
            "ratingCount": 0,
            "likesCount": 3
        }}}),
        "missing" => json!({"data": {"print": null}}),
        "broken" => json!({"data": null, "errors": [{"message": "Print is not available"}]}),
        _ => json!({"data": {"print": {"likesCount": 1}}}),
    };
    Json(payload).into_response()
}

async fn thingiverse_thing(headers: HeaderMap, Path(thing): Path<String>) -> impl IntoResponse {
    let expected = format!("Bearer {}", TEST_TOKEN);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response();
    }

    match thing.as_str() {
        "3161" => Json(json!({
            "id": 3161,
            "url": "https://api.thingiverse.com/things/3161",
            "like_count": 33139,
            "collect_count": 47333,
            "comment_count": 404,
            "download_count": 349490,
            "view_count": 619467,
            "remix_count": 112,
            "make_count": 1338
        }))
        .into_response(),
        "model-that-should-not-exist-123" => {
            (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"}))).into_response()
        }
        "  " => Json(json!({"error": "Invalid thing"})).into_response(),
        "limited" => (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response(),
        _ => Json(json!({"like_count": 1})).into_response(),
    }
}

impl MockPlatformServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr: SocketAddr = listener
            .local_addr()
            .expect("failed to get mock server addr");
        let base_url = format!("http://{}", addr);

        let app = Router::new()
            .route("/community/api/v1/models/:id", get(grabcad_model))
            .route("/graphql/", post(printables_graphql))
            .route("/things/:thing", get(thingiverse_thing));

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("mock server failed");
        });

        Self {
            base_url,
            _task: task,
        }
    }
}
