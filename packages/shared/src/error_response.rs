//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! Todo API が返す問題種別は [`ProblemType`] の 4 種類に限られる。
//! `type` URI・`title`・`status` は種別から一意に決まり、呼び出し側が
//! 指定するのは `detail` のみ。
//!
//! axum の `IntoResponse` 変換は API クレートで行う。

use serde::{Deserialize, Serialize};

const ERROR_TYPE_BASE: &str = "https://todoapp.example.com/errors";

/// 内部エラー時の detail（原因はログにのみ出す）
const INTERNAL_ERROR_DETAIL: &str = "内部エラーが発生しました";

/// Todo API が返す問題種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemType {
   BadRequest,
   NotFound,
   MethodNotAllowed,
   InternalError,
}

impl ProblemType {
   /// HTTP ステータスコード
   pub fn status(self) -> u16 {
      match self {
         Self::BadRequest => 400,
         Self::NotFound => 404,
         Self::MethodNotAllowed => 405,
         Self::InternalError => 500,
      }
   }

   fn slug(self) -> &'static str {
      match self {
         Self::BadRequest => "bad-request",
         Self::NotFound => "not-found",
         Self::MethodNotAllowed => "method-not-allowed",
         Self::InternalError => "internal-error",
      }
   }

   fn title(self) -> &'static str {
      match self {
         Self::BadRequest => "Bad Request",
         Self::NotFound => "Not Found",
         Self::MethodNotAllowed => "Method Not Allowed",
         Self::InternalError => "Internal Server Error",
      }
   }
}

/// エラーレスポンスボディ
///
/// ```
/// use todoapp_shared::{ErrorResponse, ProblemType};
///
/// let body = ErrorResponse::new(ProblemType::NotFound, "Todo が見つかりません: 3");
/// assert_eq!(body.status, 404);
/// assert_eq!(body.error_type, "https://todoapp.example.com/errors/not-found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   pub fn new(problem: ProblemType, detail: impl Into<String>) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{}", problem.slug()),
         title:      problem.title().to_string(),
         status:     problem.status(),
         detail:     detail.into(),
      }
   }

   /// 500 Internal Server Error（detail は固定）
   pub fn internal_error() -> Self {
      Self::new(ProblemType::InternalError, INTERNAL_ERROR_DETAIL)
   }
}
