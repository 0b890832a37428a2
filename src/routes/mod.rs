//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `data`: 영화-히어로 목록 조회 (`GET /data`)
//! - `health`: 서버 상태 확인 (`GET /health`)

pub mod data;
pub mod health;

pub use data::*;
pub use health::*;

use axum::{routing::get, Router};
use sqlx::AnyPool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// AnyPool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 풀
    pub pool: AnyPool,
}

/// API 라우트를 만듭니다.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/data", get(get_data))
        .route("/health", get(health_check))
}
