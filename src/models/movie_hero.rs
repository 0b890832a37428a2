//! # 영화-히어로 모델 정의
//!
//! `movie_hero` 테이블 한 행을 표현하는 구조체입니다.

use serde::{Deserialize, Serialize};

/// 영화 제목과 등장 히어로(캐릭터) 이름의 쌍
///
/// 행은 데이터베이스 최초 기동 시 시드 스크립트(`db/init.sql`)로 한 번 만들어지고,
/// 이 서비스는 읽기만 합니다.
///
/// # derive 매크로 설명
/// - `Serialize`: API 응답 시 `{ "movie": ..., "hero": ... }` JSON으로 변환
/// - `Deserialize`: 테스트에서 응답 본문을 다시 구조체로 읽을 때 사용
/// - `sqlx::FromRow`: SQL 결과 행의 `movie`, `hero` 컬럼을 필드에 자동 매핑
/// - `PartialEq, Eq, Hash, Ord`: 순서 없는 집합 비교(테스트)에 사용
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct MovieHero {
    /// 영화 제목 (예: "Inception")
    pub movie: String,
    /// 히어로/캐릭터 이름 (예: "Cobb")
    pub hero: String,
}

impl MovieHero {
    pub fn new(movie: impl Into<String>, hero: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            hero: hero.into(),
        }
    }
}
