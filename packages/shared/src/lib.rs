//! # TodoApp 共有ユーティリティ
//!
//! このクレートは、TodoApp
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - API サーバーから依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は API 側の責務）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, ProblemType};
pub use health::{
   CheckStatus,
   HealthResponse,
   ReadinessChecks,
   ReadinessResponse,
   ReadinessStatus,
};
