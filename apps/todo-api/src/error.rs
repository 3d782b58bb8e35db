//! # Todo API エラー定義
//!
//! Todo API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは [`ErrorResponse`]（RFC 9457 Problem Details）。
//! 5xx の detail は固定文言とし、原因はログにのみ出力する。

use axum::{
   Json,
   extract::rejection::{JsonRejection, PathRejection, QueryRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todoapp_shared::{ErrorResponse, ProblemType};

/// Todo API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 不正なリクエスト（JSON 解析失敗、ID の型不一致、ID 未指定）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// ルートは存在するがメソッドが許可されていない
   #[error("許可されていないメソッドです: {0}")]
   MethodNotAllowed(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] todoapp_infra::InfraError),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let body = match &self {
         ApiError::NotFound(msg) => ErrorResponse::new(ProblemType::NotFound, msg.clone()),
         ApiError::BadRequest(msg) => ErrorResponse::new(ProblemType::BadRequest, msg.clone()),
         ApiError::MethodNotAllowed(msg) => {
            ErrorResponse::new(ProblemType::MethodNotAllowed, msg.clone())
         }
         ApiError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
            ErrorResponse::internal_error()
         }
      };

      let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      (status, Json(body)).into_response()
   }
}

// --- axum 抽出エラーの変換 ---
//
// 抽出に失敗したリクエストは全て 400 として扱う。

impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}

impl From<PathRejection> for ApiError {
   fn from(rejection: PathRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}

impl From<QueryRejection> for ApiError {
   fn from(rejection: QueryRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}

#[cfg(test)]
mod tests {
   use axum::body::Body;
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use todoapp_infra::InfraError;

   use super::*;

   async fn response_body(response: axum::http::Response<Body>) -> ErrorResponse {
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&bytes).unwrap()
   }

   #[rstest]
   #[case(ApiError::NotFound("Todo が見つかりません".to_string()), StatusCode::NOT_FOUND)]
   #[case(ApiError::BadRequest("id is required".to_string()), StatusCode::BAD_REQUEST)]
   #[case(ApiError::MethodNotAllowed("PATCH".to_string()), StatusCode::METHOD_NOT_ALLOWED)]
   #[tokio::test]
   async fn test_エラー種別に応じたステータスコードを返す(
      #[case] error: ApiError,
      #[case] expected: StatusCode,
   ) {
      let response = error.into_response();

      assert_eq!(response.status(), expected);
      let body = response_body(response).await;
      assert_eq!(body.status, expected.as_u16());
   }

   #[tokio::test]
   async fn test_databaseエラーは内部情報を含まない500を返す() {
      let error = ApiError::from(InfraError::unexpected("connection reset by peer"));

      let response = error.into_response();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
      let body = response_body(response).await;
      assert_eq!(body, ErrorResponse::internal_error());
   }

   #[tokio::test]
   async fn test_not_foundはdetailにメッセージを含む() {
      let response = ApiError::NotFound("Todo が見つかりません".to_string()).into_response();

      let body = response_body(response).await;
      assert_eq!(body.detail, "Todo が見つかりません");
      assert_eq!(body.error_type, "https://todoapp.example.com/errors/not-found");
   }
}
