//! # アプリケーション構築
//!
//! ルーターとミドルウェアの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ## ミドルウェアの適用順序（外側から）
//!
//! 1. `SetRequestIdLayer`: UUID v7 の Request ID を付与（クライアント提供値があれば優先）
//! 2. `TraceLayer`: Request ID を含むリクエストスパンを生成
//! 3. `PropagateRequestIdLayer`: レスポンスヘッダーに `x-request-id` をコピー
//! 4. `CorsLayer`: 許可オリジン 1 つに対する CORS 応答
//!
//! 未定義のパスとメソッドも [`ApiError`] を通して JSON で応答する。

use std::sync::Arc;

use axum::{
   Router,
   http::{HeaderValue, Method, Uri},
   routing::get,
};
use todoapp_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   cors::{Any, CorsLayer},
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   error::ApiError,
   handler::{
      ReadinessState,
      TodoState,
      create_todo,
      delete_todo,
      delete_todo_by_query,
      get_todo,
      health_check,
      list_todos,
      readiness_check,
      update_todo,
      update_todo_by_query,
   },
};

/// 許可オリジンを 1 つだけ持つ CORS レイヤーを作成する
///
/// メソッドは GET / POST / PUT / DELETE、リクエストヘッダーは任意。
/// `Origin` が一致したリクエストにだけ `access-control-allow-origin` を返す。
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
   CorsLayer::new()
      .allow_origin([allowed_origin])
      .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
      .allow_headers(Any)
}

/// Todo API のルーターを構築する
pub fn build_router(
   todo_state: Arc<TodoState>,
   readiness_state: Arc<ReadinessState>,
   allowed_origin: HeaderValue,
) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/health/ready", get(readiness_check))
      .with_state(readiness_state)
      .route(
         "/todos",
         get(list_todos)
            .post(create_todo)
            .put(update_todo_by_query)
            .delete(delete_todo_by_query),
      )
      .route(
         "/todos/{id}",
         get(get_todo).put(update_todo).delete(delete_todo),
      )
      .with_state(todo_state)
      .fallback(route_not_found)
      .method_not_allowed_fallback(method_not_allowed)
      .layer(cors_layer(allowed_origin))
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

async fn route_not_found(uri: Uri) -> ApiError {
   ApiError::NotFound(format!("ルートが見つかりません: {uri}"))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
   ApiError::MethodNotAllowed(format!("{method} {uri}"))
}
