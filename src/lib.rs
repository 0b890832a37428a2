//! # 영화-히어로 조회 API
//!
//! 관계형 데이터베이스의 `movie_hero` 테이블을 읽어 JSON으로 돌려주는 작은 백엔드입니다.
//! 실행 파일(`main.rs`)과 통합 테스트(`tests/`)가 같은 라우터를 쓰도록
//! 라우터 조립을 이 라이브러리에 둡니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use axum::Router;
use routes::AppState;
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// 전체 애플리케이션 라우터를 만듭니다.
///
/// - API 라우트(`/data`, `/health`)
/// - `frontend_dir`이 존재하면 나머지 경로는 프론트엔드 정적 파일로 서빙
///   (찾을 수 없는 경로는 `index.html`로 돌려보내는 SPA 방식)
/// - CORS 전체 허용, HTTP 요청/응답 로깅
pub fn app(state: AppState, frontend_dir: &Path) -> Router {
    // with_state(): Router<AppState> → Router<()>. 이후 레이어와 fallback은 상태를 몰라도 됩니다.
    let api = routes::api_routes().with_state(state);

    // 프론트엔드 컨테이너가 다른 출처에서 API를 호출하므로 모두 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // if-else가 표현식이므로 결과 Router를 바로 변수에 담습니다.
    let router = if frontend_dir.is_dir() {
        tracing::info!("Serving frontend static files from {}", frontend_dir.display());

        // ServeDir: 디렉토리의 파일을 HTTP로 서빙
        // fallback(): 파일이 없으면 index.html을 200으로 반환 (클라이언트 라우팅 지원)
        let serve_dir =
            ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")));

        // API 라우트에 매칭되지 않는 요청만 정적 파일 서비스로 넘어갑니다.
        api.fallback_service(serve_dir)
    } else {
        tracing::warn!(
            "Frontend directory {} not found, serving API only",
            frontend_dir.display()
        );
        api
    };

    // .layer(): 미들웨어 추가. 나중에 추가한 레이어가 바깥쪽에서 먼저 요청을 받습니다.
    router.layer(cors).layer(TraceLayer::new_for_http())
}
