//! # Todo API
//!
//! Todo の CRUD を提供する HTTP API サーバー。
//!
//! ## レイヤー構成
//!
//! ```text
//! handler（HTTP 入出力） → usecase（アプリケーションロジック） → infra（PostgreSQL）
//! ```
//!
//! - [`app`]: ルーターとミドルウェアの組み立て
//! - [`config`]: 環境変数からの設定読み込み
//! - [`error`]: API エラーと HTTP レスポンスへの変換
//! - [`handler`]: axum ハンドラ
//! - [`usecase`]: ユースケース

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
