//! 통합 테스트 공용 헬퍼
//!
//! 테스트마다 임시 디렉토리에 SQLite 파일을 만들어 서로 격리합니다.

#![allow(dead_code)]

use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use movie_hero_api::routes::AppState;
use serde_json::Value;
use sqlx::AnyPool;
use tempfile::TempDir;
use tower::ServiceExt;

/// 임시 SQLite 데이터베이스. `_dir`이 drop되면 파일도 지워집니다.
pub struct TestDb {
    pub pool: AnyPool,
    _dir: TempDir,
}

/// 빈 SQLite 파일에 연결된 풀 (테이블 없음)
pub fn empty_db() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
    let pool = movie_hero_api::db::connect_lazy(&url).expect("failed to build pool");

    TestDb { pool, _dir: dir }
}

/// `movie_hero` 테이블을 만들고 주어진 행을 넣은 데이터베이스
pub async fn seeded_db(rows: &[(&str, &str)]) -> TestDb {
    let db = empty_db();

    sqlx::query("CREATE TABLE movie_hero (movie TEXT NOT NULL, hero TEXT NOT NULL)")
        .execute(&db.pool)
        .await
        .expect("failed to create movie_hero");

    for (movie, hero) in rows {
        sqlx::query("INSERT INTO movie_hero (movie, hero) VALUES (?, ?)")
            .bind(*movie)
            .bind(*hero)
            .execute(&db.pool)
            .await
            .expect("failed to insert row");
    }

    db
}

/// 존재하지 않는 디렉토리의 파일을 읽기 전용으로 여는 풀.
/// 첫 쿼리에서 연결이 실패합니다.
pub fn unreachable_pool() -> AnyPool {
    movie_hero_api::db::connect_lazy("sqlite:///nonexistent-movie-hero-dir/movies.db?mode=ro")
        .expect("failed to build pool")
}

/// 프론트엔드 디렉토리 없이 API만 서빙하는 앱
pub fn api_app(pool: AnyPool) -> Router {
    movie_hero_api::app(AppState { pool }, Path::new("/nonexistent-frontend-dist"))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    )
    .await
    .expect("request failed")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}
