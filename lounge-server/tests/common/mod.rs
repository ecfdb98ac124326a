#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use lounge_server::{Config, ServerState, build_router};

pub fn app() -> Router {
    let assets = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");
    let config = Config::with_overrides(assets, 0);
    let state = ServerState::initialize(&config).expect("templates compile");
    build_router(state)
}

pub async fn send(request: Request<Body>) -> Response<Body> {
    app().oneshot(request).await.expect("infallible router")
}

pub async fn get(uri: &str) -> Response<Body> {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(uri: &str, body: &str) -> Response<Body> {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_json(uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
