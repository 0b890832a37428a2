//! 헬스체크, CORS, 정적 프론트엔드 서빙 통합 테스트

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{api_app, body_bytes, body_json, get, seeded_db, unreachable_pool};
use movie_hero_api::routes::AppState;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_database_up() {
    let db = seeded_db(&[]).await;
    let response = get(api_app(db.pool.clone()), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "up");
}

#[tokio::test]
async fn health_stays_200_when_database_is_down() {
    let response = get(api_app(unreachable_pool()), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "down");
}

#[tokio::test]
async fn unknown_route_without_frontend_returns_404() {
    let response = get(api_app(unreachable_pool()), "/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let db = seeded_db(&[("Inception", "Cobb")]).await;
    let response = api_app(db.pool.clone())
        .oneshot(
            Request::builder()
                .uri("/data")
                .header("Origin", "http://localhost:8080")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("missing Access-Control-Allow-Origin header")
        .to_str()
        .expect("header is not ASCII");
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn frontend_is_served_next_to_api() {
    let db = seeded_db(&[("Inception", "Cobb")]).await;

    let dist = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(dist.path().join("index.html"), "<h1>movie heroes</h1>")
        .expect("failed to write index.html");
    std::fs::write(dist.path().join("app.js"), "console.log('hi');")
        .expect("failed to write app.js");

    let app = movie_hero_api::app(AppState { pool: db.pool.clone() }, dist.path());

    // 정적 파일
    let response = get(app.clone(), "/app.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"console.log('hi');");

    // 없는 경로는 index.html (SPA)
    let response = get(app.clone(), "/movies/inception").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<h1>movie heroes</h1>");

    // API 라우트가 우선
    let response = get(app, "/data").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["hero"], "Cobb");
}
