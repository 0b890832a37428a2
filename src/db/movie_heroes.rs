//! # 영화-히어로 조회 쿼리 모듈
//!
//! ## 테이블 구조
//! - `movie_hero`: (movie, hero) 두 컬럼. 시드 스크립트가 만들고 채웁니다.

use crate::error::AppError;
use crate::models::MovieHero;
use sqlx::AnyPool;

/// 모든 (movie, hero) 쌍을 조회합니다.
///
/// `ORDER BY`를 붙이지 않으므로 순서는 데이터베이스가 돌려주는 그대로입니다.
/// 테이블이 없거나 연결에 실패하면 `AppError::QueryFailure`가 됩니다.
pub async fn list_movie_heroes(pool: &AnyPool) -> Result<Vec<MovieHero>, AppError> {
    let rows = sqlx::query_as::<_, MovieHero>("SELECT movie, hero FROM movie_hero")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
