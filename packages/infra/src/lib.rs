//! # TodoApp インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトとその PostgreSQL 実装を提供する。
//! API 層はトレイト（`Arc<dyn TodoRepository>`）にのみ依存し、
//! 具体的な実装は起動時に注入する。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//! - `mock` - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use todoapp_infra::{db, repository::{PostgresTodoRepository, TodoRepository}};
//!
//! let pool = db::create_pool("postgres://localhost/todo_app", 10).await?;
//! let repo: Arc<dyn TodoRepository> = Arc::new(PostgresTodoRepository::new(pool));
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
