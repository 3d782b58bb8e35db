//! # ヘルスチェックのレスポンス型
//!
//! `GET /health` と `GET /health/ready` のボディ。
//! readiness の依存先はデータベースのみ。

use serde::{Deserialize, Serialize};

/// `GET /health` のボディ
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
   pub status:  String,
   pub version: String,
}

impl HealthResponse {
   pub fn healthy(version: impl Into<String>) -> Self {
      Self {
         status:  "healthy".to_string(),
         version: version.into(),
      }
   }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
   Ok,
   Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
   Ready,
   NotReady,
}

/// 依存先ごとのチェック結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessChecks {
   pub database: CheckStatus,
}

/// `GET /health/ready` のボディ
///
/// ```json
/// { "status": "not_ready", "checks": { "database": "error" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResponse {
   pub status: ReadinessStatus,
   pub checks: ReadinessChecks,
}

impl ReadinessResponse {
   /// データベースの疎通結果から全体のステータスを決める
   pub fn from_database(database: CheckStatus) -> Self {
      let status = match database {
         CheckStatus::Ok => ReadinessStatus::Ready,
         CheckStatus::Error => ReadinessStatus::NotReady,
      };
      Self {
         status,
         checks: ReadinessChecks { database },
      }
   }

   pub fn is_ready(&self) -> bool {
      self.status == ReadinessStatus::Ready
   }
}
