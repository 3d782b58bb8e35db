//! # TodoApp ドメイン層
//!
//! Todo 管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`todo::TodoId`],
//!   [`todo::TodoContent`]）
//! - **時刻の注入**: タイムスタンプは [`clock::Clock`] 経由で取得し、
//!   テストで固定時刻を使えるようにする
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use todoapp_domain::todo::{TodoContent, TodoId};
//!
//! let content = TodoContent::new("牛乳を買う", "2 リットル", false);
//! let id = TodoId::from_i64(1);
//!
//! assert_eq!(content.title(), "牛乳を買う");
//! assert_eq!(id.as_i64(), 1);
//! ```

pub mod clock;
pub mod todo;
