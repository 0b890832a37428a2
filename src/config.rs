//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! 컨테이너 환경에서는 compose 파일이, 로컬에서는 `.env` 파일이 값을 넣어 줍니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: 데이터베이스 접속 문자열 (필수, 예: `postgres://...`, `sqlite:...`)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//! - `FRONTEND_DIR`: 빌드된 프론트엔드 정적 파일 디렉토리

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 바뀌지 않습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 데이터베이스 접속 문자열. 스킴(`postgres://`, `sqlite:`)으로 드라이버가 결정됩니다.
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
    /// 프론트엔드 정적 파일 디렉토리 (기본값: "frontend/dist")
    pub frontend_dir: String,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    ///
    /// # 에러
    /// `DATABASE_URL`이 없으면 `VarError::NotPresent`를 반환합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        // env::var()는 Result를 반환하므로 .ok()로 Option으로 바꿔 넘깁니다.
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로 설정을 만듭니다.
    ///
    /// `from_env`는 이 함수에 `std::env::var`를 넘길 뿐이고,
    /// 테스트에서는 전역 환경변수를 건드리지 않고 클로저로 값을 주입합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            // 필수: 없으면 에러
            // ok_or(): None이면 지정한 에러로 바꾸고, `?`로 즉시 반환
            database_url: lookup("DATABASE_URL").ok_or(env::VarError::NotPresent)?,
            // 선택 항목: 없으면 기본값. 0.0.0.0은 컨테이너 밖에서 접근하기 위해 필요합니다.
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            // 파싱 실패 시 기본값 3000 사용
            // and_then(): Some일 때만 파싱을 시도하고, 실패하면 None이 됩니다.
            // parse()의 대상 타입(u16)은 필드 타입에서 추론됩니다.
            port: lookup("PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(3000),
            frontend_dir: lookup("FRONTEND_DIR").unwrap_or_else(|| "frontend/dist".to_string()),
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
