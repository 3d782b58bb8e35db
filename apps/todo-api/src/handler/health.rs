//! # ヘルスチェックハンドラ
//!
//! Todo API の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! - `GET /health` - liveness（プロセスが応答できるか）
//! - `GET /health/ready` - readiness（データベースに到達できるか）
//!
//! レスポンス型は [`todoapp_shared::HealthResponse`] /
//! [`todoapp_shared::ReadinessResponse`] を参照。

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use todoapp_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// Readiness Check の共有状態
pub struct ReadinessState {
   pub pool: PgPool,
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check エンドポイント
///
/// データベースに `SELECT 1` を発行し、失敗した場合は `503 Service Unavailable` を返す。
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let database = match todoapp_infra::db::ping(&state.pool).await {
      Ok(()) => CheckStatus::Ok,
      Err(e) => {
         tracing::warn!(error = %e, "データベースの疎通確認に失敗しました");
         CheckStatus::Error
      }
   };

   let response = ReadinessResponse::from_database(database);
   let status = if response.is_ready() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (status, Json(response))
}
