//! # 영화-히어로 API 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 데이터베이스 연결 풀 생성 (지연 연결)
//! 4. 라우터 조립
//! 5. HTTP 서버 시작, 종료 시그널을 받으면 graceful shutdown

use anyhow::{Context, Result};
use movie_hero_api::{config::Config, db, routes::AppState};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다. (컨테이너에서는 보통 없음)
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅 초기화 ──
    // RUST_LOG가 없으면 이 크레이트, tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_hero_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env().context("DATABASE_URL must be set")?;
    tracing::info!("Starting movie-hero API on {}:{}", config.host, config.port);

    // ── 4단계: 연결 풀 생성 ──
    // 지연 연결이므로 데이터베이스가 아직 준비되지 않았어도 여기서는 실패하지 않습니다.
    // 기동 순서는 오케스트레이션(compose)이 맞춥니다.
    // 단, 접속 문자열의 스킴이 잘못되었으면(`mysql://` 등) `?`로 에러가 전파되어
    // 프로세스가 바로 종료됩니다.
    let pool = db::connect_lazy(&config.database_url)?;

    // ── 5단계: 라우터 조립 ──
    // AppState: 모든 핸들러가 공유하는 상태. AnyPool은 내부적으로 Arc를 쓰므로
    // clone해도 연결이 복제되지 않고 같은 풀을 가리킵니다.
    // 종료 후 close()를 부르기 위해 원본 pool은 여기 남겨 둡니다.
    let state = AppState { pool: pool.clone() };
    // Path::new(): String을 파일 경로 타입(&Path)으로 빌려 씁니다. (복사 없음)
    let app = movie_hero_api::app(state, Path::new(&config.frontend_dir));

    // ── 6단계: 서버 시작 ──
    let addr = config.bind_addr();
    // TcpListener::bind(): 지정된 주소에서 연결 수신 대기 시작 (포트가 사용 중이면 에러)
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // with_graceful_shutdown(): shutdown_signal() future가 완료되면
    // 새 연결을 더 받지 않고, 처리 중인 요청이 끝날 때까지 기다린 뒤 반환합니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 처리 중이던 요청이 모두 끝난 뒤 풀을 닫습니다.
    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Ctrl-C(SIGINT) 또는 SIGTERM을 기다립니다.
///
/// `docker stop`은 SIGTERM을 보내므로 둘 다 처리해야 컨테이너가 바로 내려갑니다.
async fn shutdown_signal() {
    // async 블록은 바로 실행되지 않는 future입니다. 아래 select!에서 함께 기다립니다.
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            // 핸들러 등록 실패 시 이 갈래는 영원히 대기 → SIGTERM 쪽만 종료를 결정
            std::future::pending::<()>().await;
        }
    };

    // #[cfg(unix)]: 유닉스 계열에서만 컴파일되는 코드. SIGTERM은 윈도우에 없습니다.
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // tokio::select!: 여러 future 중 먼저 끝나는 쪽을 택하고 나머지는 버립니다.
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
