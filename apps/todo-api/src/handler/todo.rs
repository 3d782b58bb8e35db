//! # Todo ハンドラ
//!
//! Todo の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /todos` - Todo 一覧（`?id=<n>` 指定時は単一取得）
//! - `GET /todos/{id}` - Todo 取得
//! - `POST /todos` - Todo 作成
//! - `PUT /todos/{id}` / `PUT /todos?id=<n>` - Todo 更新
//! - `DELETE /todos/{id}` / `DELETE /todos?id=<n>` - Todo 削除
//!
//! 一覧はエンベロープで包まず、JSON 配列をそのまま返す。

use std::sync::Arc;

use axum::{
   Json,
   extract::{
      Path,
      Query,
      State,
      rejection::{JsonRejection, PathRejection, QueryRejection},
   },
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use todoapp_domain::todo::{Todo, TodoContent, TodoId};

use crate::{error::ApiError, usecase::TodoUseCaseImpl};

/// Todo API の共有状態
pub struct TodoState {
   pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ID クエリパラメータ（`?id=<n>`）
#[derive(Debug, Deserialize)]
pub struct TodoIdQuery {
   pub id: Option<i64>,
}

/// Todo 作成・更新リクエスト
///
/// 省略されたフィールドは空文字列 / `false` として扱う。
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
   #[serde(default)]
   pub title:       String,
   #[serde(default)]
   pub description: String,
   #[serde(default)]
   pub completed:   bool,
}

impl From<TodoRequest> for TodoContent {
   fn from(req: TodoRequest) -> Self {
      TodoContent::new(req.title, req.description, req.completed)
   }
}

/// Todo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
   pub id:          i64,
   pub title:       String,
   pub description: String,
   pub completed:   bool,
   pub created_at:  String,
   pub updated_at:  String,
}

impl From<&Todo> for TodoDto {
   fn from(todo: &Todo) -> Self {
      Self {
         id:          todo.id().as_i64(),
         title:       todo.title().to_string(),
         description: todo.description().to_string(),
         completed:   todo.completed(),
         created_at:  todo.created_at().to_rfc3339(),
         updated_at:  todo.updated_at().to_rfc3339(),
      }
   }
}

/// `?id=` が無いリクエストを 400 にする
fn require_id(query: TodoIdQuery) -> Result<TodoId, ApiError> {
   query
      .id
      .map(TodoId::from_i64)
      .ok_or_else(|| ApiError::BadRequest("id is required".to_string()))
}

// --- ハンドラ ---

/// GET /todos
///
/// `?id=<n>` が指定されていれば単一の Todo を、なければ全件を配列で返す。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
   State(state): State<Arc<TodoState>>,
   query: Result<Query<TodoIdQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
   let Query(query) = query?;

   if let Some(id) = query.id {
      let todo = state.usecase.get_todo(TodoId::from_i64(id)).await?;
      return Ok(Json(TodoDto::from(&todo)).into_response());
   }

   let todos = state.usecase.list_todos().await?;
   let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();

   Ok((StatusCode::OK, Json(items)).into_response())
}

/// GET /todos/{id}
#[tracing::instrument(skip_all)]
pub async fn get_todo(
   State(state): State<Arc<TodoState>>,
   id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Path(id) = id?;

   let todo = state.usecase.get_todo(TodoId::from_i64(id)).await?;

   Ok(Json(TodoDto::from(&todo)))
}

/// POST /todos
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含む Todo
/// - `400 Bad Request`: JSON として解析できない
#[tracing::instrument(skip_all)]
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(req) = payload?;

   let todo = state.usecase.create_todo(req.into()).await?;

   Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// PUT /todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `400 Bad Request`: ID が整数でない、JSON として解析できない
/// - `404 Not Found`: Todo が存在しない
#[tracing::instrument(skip_all)]
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   id: Result<Path<i64>, PathRejection>,
   payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Path(id) = id?;
   let Json(req) = payload?;

   let todo = state
      .usecase
      .update_todo(TodoId::from_i64(id), req.into())
      .await?;

   Ok(Json(TodoDto::from(&todo)))
}

/// PUT /todos?id=<n>
#[tracing::instrument(skip_all)]
pub async fn update_todo_by_query(
   State(state): State<Arc<TodoState>>,
   query: Result<Query<TodoIdQuery>, QueryRejection>,
   payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Query(query) = query?;
   let id = require_id(query)?;
   let Json(req) = payload?;

   let todo = state.usecase.update_todo(id, req.into()).await?;

   Ok(Json(TodoDto::from(&todo)))
}

/// DELETE /todos/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `400 Bad Request`: ID が整数でない
/// - `404 Not Found`: Todo が存在しない
#[tracing::instrument(skip_all)]
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Path(id) = id?;

   state.usecase.delete_todo(TodoId::from_i64(id)).await?;

   Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todos?id=<n>
#[tracing::instrument(skip_all)]
pub async fn delete_todo_by_query(
   State(state): State<Arc<TodoState>>,
   query: Result<Query<TodoIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Query(query) = query?;
   let id = require_id(query)?;

   state.usecase.delete_todo(id).await?;

   Ok(StatusCode::NO_CONTENT)
}
