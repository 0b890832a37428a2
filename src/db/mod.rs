//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출합니다.
//!
//! 접속 문자열의 스킴으로 드라이버를 고르는 sqlx `Any` 드라이버를 사용합니다.
//! 컨테이너 환경에서는 `postgres://...`, 로컬/테스트에서는 `sqlite:...`가 들어옵니다.
//!
//! 각 하위 모듈:
//! - `movie_heroes`: `movie_hero` 테이블 조회 쿼리

pub mod movie_heroes;

pub use movie_heroes::*;

use sqlx::any::{AnyConnectOptions, AnyPoolOptions};
use sqlx::AnyPool;
use std::str::FromStr;

/// 이 빌드에 포함된 드라이버가 처리하는 URL 스킴
const SUPPORTED_SCHEMES: &[&str] = &["postgres", "postgresql", "sqlite"];

/// 연결 풀을 만듭니다. 실제 연결은 첫 쿼리 때 맺습니다.
///
/// 데이터베이스 컨테이너가 아직 초기화 중이어도 서버는 뜰 수 있고,
/// 그동안 들어온 요청은 쿼리 실패(405)로 응답합니다.
/// 풀 크기와 수명은 sqlx 기본값을 그대로 씁니다.
///
/// # 에러
/// 접속 문자열을 해석할 수 없거나 스킴에 맞는 드라이버가 없으면
/// (`mysql://`, `postgress://` 같은 오타 등) `sqlx::Error::Configuration`을 반환합니다.
/// 이 검사는 연결 없이 이루어지므로 서버 기동 시점에 바로 실패합니다.
pub fn connect_lazy(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    // Any 드라이버가 postgres/sqlite 구현을 찾을 수 있도록 등록 (여러 번 호출해도 안전)
    sqlx::any::install_default_drivers();

    // 문자열 → URL 파싱. 형식이 틀리면 여기서 에러
    let options = AnyConnectOptions::from_str(database_url)?;

    // connect_lazy는 드라이버를 첫 연결 때 찾으므로 스킴을 미리 확인합니다.
    let scheme = options.database_url.scheme();
    if !SUPPORTED_SCHEMES.contains(&scheme) {
        return Err(sqlx::Error::Configuration(
            format!("no driver found for URL scheme {scheme:?}").into(),
        ));
    }

    // 풀 옵션은 기본값 그대로. 이미 파싱한 옵션을 넘겨 두 번 파싱하지 않습니다.
    Ok(AnyPoolOptions::new().connect_lazy_with(options))
}

/// `SELECT 1`로 데이터베이스에 닿을 수 있는지 확인합니다.
pub async fn ping(pool: &AnyPool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            false
        }
    }
}
