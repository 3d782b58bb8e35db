//! # リポジトリ実装
//!
//! 永続化操作のトレイトと PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: API 層はトレイトオブジェクト経由でリポジトリを受け取る
//! - **1 操作 1 ステートメント**: トランザクションや JOIN は使わない
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
