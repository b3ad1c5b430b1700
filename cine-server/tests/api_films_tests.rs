//! Integration tests for the catalog proxy route
mod common;

use crate::common::{
    body_json, create_test_app_state, create_test_app_state_with_catalog, get_request,
    register_user,
};

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cine_server::routes::build_router;

#[tokio::test]
async fn test_films_requires_auth() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app.oneshot(get_request("/api/films", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "unauthorized" })
    );
}

#[tokio::test]
async fn test_films_without_api_key_is_tmdb_key_missing() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "u@test.com", "secret1").await;

    let response = app
        .oneshot(get_request("/api/films?q=alien", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["error"], "tmdb_key_missing");
}

#[tokio::test]
async fn test_films_search_proxies_upstream_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "alien"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                {
                    "id": 348,
                    "title": "Alien",
                    "overview": "A commercial crew is awakened...",
                    "poster_path": "/alien.jpg",
                    "release_date": "1979-05-25",
                    "vote_average": 8.1
                }
            ],
            "total_pages": 3,
            "total_results": 55
        })))
        .mount(&server)
        .await;

    let state = create_test_app_state_with_catalog(&server.uri()).await;
    let app = build_router(state.clone());
    let token = register_user(&app, "u@test.com", "secret1").await;

    let response = app
        .oneshot(get_request("/api/films?q=alien", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["total"], 55);
    assert_eq!(body["items"][0]["tmdbId"], 348);
    assert_eq!(body["items"][0]["title"], "Alien");
    assert_eq!(
        body["items"][0]["poster"],
        "https://image.tmdb.org/t/p/w500/alien.jpg"
    );
}

#[tokio::test]
async fn test_films_without_query_lists_popular() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "results": [],
            "total_pages": 10,
            "total_results": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = create_test_app_state_with_catalog(&server.uri()).await;
    let app = build_router(state.clone());
    let token = register_user(&app, "u@test.com", "secret1").await;

    let response = app
        .oneshot(get_request("/api/films?page=2", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_films_upstream_failure_is_external_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let state = create_test_app_state_with_catalog(&server.uri()).await;
    let app = build_router(state.clone());
    let token = register_user(&app, "u@test.com", "secret1").await;

    let response = app
        .oneshot(get_request("/api/films", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["error"], "external_api_error");
}
