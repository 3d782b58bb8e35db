//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todoapp-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use todoapp_domain::todo::{Todo, TodoContent, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

#[derive(Default)]
struct MockState {
   todos:   Vec<Todo>,
   next_id: i64,
}

/// `todos` テーブルを模したインメモリリポジトリ
///
/// ID は 1 から順に採番する（`BIGSERIAL` と同じ）。
/// `failing()` で作成したインスタンスは全操作でエラーを返す。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
   state:   Arc<Mutex<MockState>>,
   failing: bool,
}

impl MockTodoRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 全操作で `InfraError` を返すリポジトリを作成する
   pub fn failing() -> Self {
      Self {
         failing: true,
         ..Self::default()
      }
   }

   /// 保存済みの Todo 件数
   pub fn len(&self) -> usize {
      self.lock().todos.len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }

   fn lock(&self) -> MutexGuard<'_, MockState> {
      self.state.lock().unwrap_or_else(|e| e.into_inner())
   }

   fn check_available(&self) -> Result<(), InfraError> {
      if self.failing {
         return Err(InfraError::unexpected("モックリポジトリの障害"));
      }
      Ok(())
   }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      self.check_available()?;
      Ok(self.lock().todos.clone())
   }

   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      self.check_available()?;
      Ok(self.lock().todos.iter().find(|t| t.id() == id).cloned())
   }

   async fn insert(&self, content: &TodoContent, now: DateTime<Utc>) -> Result<Todo, InfraError> {
      self.check_available()?;
      let mut state = self.lock();
      state.next_id += 1;
      let todo = Todo::new(TodoId::from_i64(state.next_id), content.clone(), now);
      state.todos.push(todo.clone());
      Ok(todo)
   }

   async fn update(
      &self,
      id: TodoId,
      content: &TodoContent,
      now: DateTime<Utc>,
   ) -> Result<Option<Todo>, InfraError> {
      self.check_available()?;
      let mut state = self.lock();
      let Some(slot) = state.todos.iter_mut().find(|t| t.id() == id) else {
         return Ok(None);
      };
      let updated = slot.clone().with_content(content.clone(), now);
      *slot = updated.clone();
      Ok(Some(updated))
   }

   async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
      self.check_available()?;
      let mut state = self.lock();
      let before = state.todos.len();
      state.todos.retain(|t| t.id() != id);
      Ok(state.todos.len() < before)
   }
}
