//! # 에러 처리 모듈
//!
//! 요청 처리 중 발생할 수 있는 에러 타입을 정의합니다.
//! 이 서비스가 하는 일은 고정된 조회 쿼리 하나뿐이므로 에러 종류도 하나입니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 쿼리 실패(QueryFailure)
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 요청 처리 중 발생할 수 있는 에러
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 조회 쿼리 실패 (연결 끊김, 인증 실패, 테이블 없음, 잘못된 쿼리 등)
    ///
    /// #[from]: sqlx::Error → AppError::QueryFailure 자동 변환.
    /// sqlx 함수 결과에 `?`만 붙이면 됩니다.
    #[error("{0}")]
    QueryFailure(#[from] sqlx::Error),
}

impl AppError {
    /// 클라이언트에 돌려줄 HTTP 상태 코드
    ///
    /// 쿼리 실패는 405(Method Not Allowed)로 응답합니다. 프론트엔드가 이 값을 기대합니다.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::QueryFailure(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 `{ "error": "<드라이버 에러 메시지>" }` 응답으로 변환합니다.
    ///
    /// 드라이버 에러 내용을 가공하지 않고 그대로 내려보냅니다.
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(status = status.as_u16(), "Query failed: {}", self);

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
