//! Shared helpers for router integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use marquee_core::FavoritesStore;
use marquee_search::{MediaProvider, MediaSearchService};
use marquee_web::{AppState, build_router};
use tower::ServiceExt;

pub const IMAGE_BASE: &str = "https://images.test/w500";

pub fn state_with(provider: Arc<dyn MediaProvider>, favorites: Arc<FavoritesStore>) -> AppState {
    AppState::new(MediaSearchService::new(provider), favorites, IMAGE_BASE)
}

pub fn router(state: AppState) -> Router {
    build_router(state, Path::new("static"))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn ok_text(response: Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}
