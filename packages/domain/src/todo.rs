//! # Todo（タスク）
//!
//! ユーザーが管理する単一のタスクを表現する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Todo`] | Todo | タイトル・説明・完了フラグ・タイムスタンプを持つタスク |
//! | [`TodoId`] | Todo ID | DB が採番する整数 ID |
//! | [`TodoContent`] | Todo の内容 | 作成・更新リクエストで指定される可変部分 |
//!
//! ## 設計方針
//!
//! - **ID は DB 採番**: `BIGSERIAL` で払い出すため、挿入前の Todo は存在しない。
//!   挿入前の状態は [`TodoContent`] と作成日時で表現する
//! - **タイムスタンプ**: 作成時は `created_at == updated_at`。
//!   更新時は `updated_at` のみ進める
//! - **不変更新**: 更新は新しいインスタンスを返す（`with_content`）

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Todo ID
///
/// データベースが挿入時に採番する。一度割り当てられたら変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
   /// 既存の整数値から Todo ID を作成する
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

/// Todo の内容（値オブジェクト）
///
/// 作成・更新リクエストで上書きされるフィールドの集合。
/// 型変換以外の検証は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoContent {
   title:       String,
   description: String,
   completed:   bool,
}

impl TodoContent {
   pub fn new(title: impl Into<String>, description: impl Into<String>, completed: bool) -> Self {
      Self {
         title: title.into(),
         description: description.into(),
         completed,
      }
   }

   pub fn title(&self) -> &str {
      &self.title
   }

   pub fn description(&self) -> &str {
      &self.description
   }

   pub fn completed(&self) -> bool {
      self.completed
   }
}

/// Todo エンティティ
///
/// # 不変条件
///
/// - `id` は挿入後に変更されない
/// - `updated_at >= created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
   id:         TodoId,
   content:    TodoContent,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl Todo {
   /// 採番済みの ID と内容から新規作成直後の Todo を組み立てる
   ///
   /// `created_at` と `updated_at` は同じ時刻になる。
   pub fn new(id: TodoId, content: TodoContent, now: DateTime<Utc>) -> Self {
      Self {
         id,
         content,
         created_at: now,
         updated_at: now,
      }
   }

   /// 既存のデータから Todo を復元する（データベースから取得時）
   pub fn from_db(
      id: TodoId,
      title: String,
      description: String,
      completed: bool,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         content: TodoContent {
            title,
            description,
            completed,
         },
         created_at,
         updated_at,
      }
   }

   // Getter メソッド

   pub fn id(&self) -> TodoId {
      self.id
   }

   pub fn content(&self) -> &TodoContent {
      &self.content
   }

   pub fn title(&self) -> &str {
      self.content.title()
   }

   pub fn description(&self) -> &str {
      self.content.description()
   }

   pub fn completed(&self) -> bool {
      self.content.completed()
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }

   // 不変更新メソッド

   /// 内容を上書きし、`updated_at` を進める
   ///
   /// `now` が `created_at` より前の場合は `created_at` に揃える。
   pub fn with_content(self, content: TodoContent, now: DateTime<Utc>) -> Self {
      Self {
         content,
         updated_at: now.max(self.created_at),
         ..self
      }
   }
}
