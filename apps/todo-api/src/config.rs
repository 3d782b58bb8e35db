//! # Todo API 設定
//!
//! 環境変数から Todo API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `TODO_API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `TODO_API_PORT` | No | `8080` | ポート番号 |
//! | `DATABASE_URL` | **Yes** | - | PostgreSQL 接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | `10` | 接続プールの最大接続数 |
//! | `CORS_ALLOWED_ORIGIN` | No | `http://localhost:3000` | CORS で許可するオリジン（1 つ） |

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   /// 環境変数の値が不正
   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// Todo API サーバーの設定
#[derive(Debug, Clone)]
pub struct TodoApiConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// データベース接続 URL
   pub database_url: String,
   /// 接続プールの最大接続数
   pub database_max_connections: u32,
   /// CORS で許可するオリジン
   pub cors_allowed_origin: HeaderValue,
}

impl TodoApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の変数参照関数から設定を読み込む
   ///
   /// プロセス環境を汚さずにテストできるよう、参照方法を外から渡す。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port = match lookup("TODO_API_PORT") {
         Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name: "TODO_API_PORT",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
         Some(value) => match value.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
               return Err(ConfigError::Invalid {
                  name: "DATABASE_MAX_CONNECTIONS",
                  value,
               });
            }
         },
         None => DEFAULT_MAX_CONNECTIONS,
      };

      let origin =
         lookup("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string());
      let cors_allowed_origin =
         HeaderValue::from_str(&origin).map_err(|_| ConfigError::Invalid {
            name:  "CORS_ALLOWED_ORIGIN",
            value: origin.clone(),
         })?;

      Ok(Self {
         host: lookup("TODO_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
         database_max_connections,
         cors_allowed_origin,
      })
   }
}
