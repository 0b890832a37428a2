//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok", "database": "up" | "down" }`
//!
//! 컨테이너 오케스트레이터의 헬스체크용입니다.
//! 프로세스가 살아 있으면 항상 200을 반환하고,
//! 데이터베이스 연결 상태는 `database` 필드로 알려 줍니다.

use crate::{db, routes::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /health` — 서버와 데이터베이스 상태를 확인합니다.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = if db::ping(&state.pool).await {
        "up"
    } else {
        "down"
    };

    Json(json!({
        "status": "ok",
        "database": database
    }))
}
