//! # 데이터 조회 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET /data` → `{ "data": [ { "movie": ..., "hero": ... }, ... ] }`
//!
//! 실패 시 `AppError`가 `{ "error": ... }` 응답(405)으로 변환됩니다.

use crate::{db, error::AppError, routes::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /data` — `movie_hero` 테이블 전체를 JSON으로 반환합니다.
///
/// 파라미터가 없고 읽기만 하므로 같은 데이터에 대해 몇 번을 호출해도 결과가 같습니다.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let rows = db::list_movie_heroes(&state.pool).await?;
    tracing::debug!(count = rows.len(), "Fetched movie_hero rows");

    Ok(Json(json!({ "data": rows })))
}
