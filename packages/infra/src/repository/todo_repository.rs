//! # TodoRepository
//!
//! `todos` テーブルへの CRUD を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **各操作は単一の SQL**: 読み取りは `SELECT`、書き込みは `RETURNING` で
//!   書き込み後の行をそのまま返す
//! - **「該当行なし」を明示**: `update` は `Option`、`delete` は `bool` で返し、
//!   存在しない ID を成功扱いにしない
//! - **並び順は保証しない**: 一覧は `ORDER BY` を付けない

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use todoapp_domain::todo::{Todo, TodoContent, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
   /// 全件を取得する（順序は保証しない）
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

   /// ID で Todo を検索する
   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

   /// Todo を挿入し、採番された ID を含む行を返す
   ///
   /// `created_at` と `updated_at` はどちらも `now` になる。
   async fn insert(&self, content: &TodoContent, now: DateTime<Utc>) -> Result<Todo, InfraError>;

   /// タイトル・説明・完了フラグを上書きし、`updated_at` を `now` に更新する
   ///
   /// 該当行がない場合は `None` を返す。
   async fn update(
      &self,
      id: TodoId,
      content: &TodoContent,
      now: DateTime<Utc>,
   ) -> Result<Option<Todo>, InfraError>;

   /// Todo を削除する
   ///
   /// 行を削除した場合は `true`、該当行がない場合は `false` を返す。
   async fn delete(&self, id: TodoId) -> Result<bool, InfraError>;
}

/// `todos` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
   id:          i64,
   title:       String,
   description: String,
   completed:   bool,
   created_at:  DateTime<Utc>,
   updated_at:  DateTime<Utc>,
}

impl From<TodoRow> for Todo {
   fn from(row: TodoRow) -> Self {
      Todo::from_db(
         TodoId::from_i64(row.id),
         row.title,
         row.description,
         row.completed,
         row.created_at,
         row.updated_at,
      )
   }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
   pool: PgPool,
}

impl PostgresTodoRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      let rows = sqlx::query_as::<_, TodoRow>(
         r#"
            SELECT id, title, description, completed, created_at, updated_at
            FROM todos
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(Todo::from).collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      let row = sqlx::query_as::<_, TodoRow>(
         r#"
            SELECT id, title, description, completed, created_at, updated_at
            FROM todos
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(Todo::from))
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn insert(&self, content: &TodoContent, now: DateTime<Utc>) -> Result<Todo, InfraError> {
      let row = sqlx::query_as::<_, TodoRow>(
         r#"
            INSERT INTO todos (title, description, completed, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, title, description, completed, created_at, updated_at
            "#,
      )
      .bind(content.title())
      .bind(content.description())
      .bind(content.completed())
      .bind(now)
      .fetch_one(&self.pool)
      .await?;

      Ok(row.into())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn update(
      &self,
      id: TodoId,
      content: &TodoContent,
      now: DateTime<Utc>,
   ) -> Result<Option<Todo>, InfraError> {
      // updated_at が created_at を下回らないよう GREATEST で揃える
      let row = sqlx::query_as::<_, TodoRow>(
         r#"
            UPDATE todos
            SET title = $2, description = $3, completed = $4,
                updated_at = GREATEST(created_at, $5)
            WHERE id = $1
            RETURNING id, title, description, completed, created_at, updated_at
            "#,
      )
      .bind(id.as_i64())
      .bind(content.title())
      .bind(content.description())
      .bind(content.completed())
      .bind(now)
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(Todo::from))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }
}
