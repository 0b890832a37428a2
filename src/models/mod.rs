//! # 데이터 모델 모듈
//!
//! - `movie_hero`: 영화-히어로 레코드
//!
//! `pub use`로 재공개하여 `crate::models::MovieHero`처럼 짧게 접근합니다.

pub mod movie_hero;

pub use movie_hero::*;
