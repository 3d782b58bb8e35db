//! Todo 管理ユースケース

use std::sync::Arc;

use todoapp_domain::{
   clock::Clock,
   todo::{Todo, TodoContent, TodoId},
};
use todoapp_infra::repository::TodoRepository;

use crate::error::ApiError;

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
   todo_repository: Arc<dyn TodoRepository>,
   clock:           Arc<dyn Clock>,
}

impl TodoUseCaseImpl {
   pub fn new(todo_repository: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         todo_repository,
         clock,
      }
   }

   /// 全 Todo を取得する
   pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
      let todos = self.todo_repository.find_all().await?;
      Ok(todos)
   }

   /// ID を指定して Todo を取得する
   pub async fn get_todo(&self, id: TodoId) -> Result<Todo, ApiError> {
      self
         .todo_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| todo_not_found(id))
   }

   /// Todo を作成する
   ///
   /// ID は DB が採番し、作成日時と更新日時は現在時刻になる。
   pub async fn create_todo(&self, content: TodoContent) -> Result<Todo, ApiError> {
      let now = self.clock.now();
      let todo = self.todo_repository.insert(&content, now).await?;

      tracing::info!(todo_id = %todo.id(), "Todo を作成しました");
      Ok(todo)
   }

   /// Todo の内容を上書きする
   ///
   /// `created_at` は変更せず、`updated_at` のみ現在時刻に進める。
   pub async fn update_todo(&self, id: TodoId, content: TodoContent) -> Result<Todo, ApiError> {
      let now = self.clock.now();
      let todo = self
         .todo_repository
         .update(id, &content, now)
         .await?
         .ok_or_else(|| todo_not_found(id))?;

      tracing::info!(todo_id = %id, "Todo を更新しました");
      Ok(todo)
   }

   /// Todo を削除する
   pub async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
      if !self.todo_repository.delete(id).await? {
         return Err(todo_not_found(id));
      }

      tracing::info!(todo_id = %id, "Todo を削除しました");
      Ok(())
   }
}

fn todo_not_found(id: TodoId) -> ApiError {
   ApiError::NotFound(format!("Todo が見つかりません: {id}"))
}

#[cfg(test)]
mod tests {
   use chrono::{DateTime, Duration, Utc};
   use pretty_assertions::assert_eq;
   use todoapp_domain::clock::SteppingClock;
   use todoapp_infra::mock::MockTodoRepository;

   use super::*;

   fn start() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   fn create_sut(repo: &MockTodoRepository) -> TodoUseCaseImpl {
      TodoUseCaseImpl::new(
         Arc::new(repo.clone()),
         Arc::new(SteppingClock::new(start(), Duration::seconds(1))),
      )
   }

   #[tokio::test]
   async fn test_create_todoで作成日時と更新日時が同じになる() {
      // Given
      let repo = MockTodoRepository::new();
      let sut = create_sut(&repo);

      // When
      let todo = sut
         .create_todo(TodoContent::new("牛乳を買う", "2 本", false))
         .await
         .unwrap();

      // Then
      assert_eq!(todo.id().as_i64(), 1);
      assert_eq!(todo.title(), "牛乳を買う");
      assert_eq!(todo.created_at(), start());
      assert_eq!(todo.updated_at(), todo.created_at());
      assert_eq!(repo.len(), 1);
   }

   #[tokio::test]
   async fn test_update_todoで内容とupdated_atのみ変わる() {
      // Given
      let repo = MockTodoRepository::new();
      let sut = create_sut(&repo);
      let created = sut.create_todo(TodoContent::default()).await.unwrap();

      // When
      let updated = sut
         .update_todo(created.id(), TodoContent::new("更新後", "説明", true))
         .await
         .unwrap();

      // Then
      assert_eq!(updated.id(), created.id());
      assert_eq!(updated.content(), &TodoContent::new("更新後", "説明", true));
      assert_eq!(updated.created_at(), created.created_at());
      assert!(updated.updated_at() > created.updated_at());
   }

   #[tokio::test]
   async fn test_get_todoで存在しないidはnot_foundを返す() {
      let repo = MockTodoRepository::new();
      let sut = create_sut(&repo);

      let result = sut.get_todo(TodoId::from_i64(42)).await;

      assert!(matches!(result, Err(ApiError::NotFound(_))));
   }

   #[tokio::test]
   async fn test_update_todoで存在しないidはnot_foundを返し何も作成しない() {
      let repo = MockTodoRepository::new();
      let sut = create_sut(&repo);

      let result = sut
         .update_todo(TodoId::from_i64(42), TodoContent::default())
         .await;

      assert!(matches!(result, Err(ApiError::NotFound(_))));
      assert!(repo.is_empty());
   }

   #[tokio::test]
   async fn test_delete_todo後はget_todoがnot_foundになる() {
      // Given
      let repo = MockTodoRepository::new();
      let sut = create_sut(&repo);
      let todo = sut.create_todo(TodoContent::default()).await.unwrap();

      // When
      sut.delete_todo(todo.id()).await.unwrap();

      // Then
      assert!(matches!(
         sut.get_todo(todo.id()).await,
         Err(ApiError::NotFound(_))
      ));
      assert!(matches!(
         sut.delete_todo(todo.id()).await,
         Err(ApiError::NotFound(_))
      ));
   }

   #[tokio::test]
   async fn test_list_todosで作成済みの全件を返す() {
      let repo = MockTodoRepository::new();
      let sut = create_sut(&repo);
      sut.create_todo(TodoContent::new("a", "", false)).await.unwrap();
      sut.create_todo(TodoContent::new("b", "", true)).await.unwrap();

      let todos = sut.list_todos().await.unwrap();

      assert_eq!(todos.len(), 2);
   }

   #[tokio::test]
   async fn test_リポジトリ障害はdatabaseエラーになる() {
      let repo = MockTodoRepository::failing();
      let sut = create_sut(&repo);

      let result = sut.list_todos().await;

      assert!(matches!(result, Err(ApiError::Database(_))));
   }
}
