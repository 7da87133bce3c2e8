//! # Notification Service エラー定義
//!
//! HTTP 層で発生するエラーと、HTTP レスポンスへの変換を定義する。
//! 通知の送信失敗はここには現れない（ディスパッチ内でログ出力して握りつぶす）。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use batchnotify_shared::{ErrorResponse, event_log::error as error_ctx};
use thiserror::Error;

/// Notification Service で発生するエラー
#[derive(Debug, Error)]
pub enum AppError {
    /// 未対応の操作名
    #[error("未対応の操作です: {0}")]
    UnsupportedOperation(String),

    /// 操作に対するリクエスト本文が不正
    #[error("リクエストが不正です: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::UnsupportedOperation(operation) => {
                tracing::error!(
                    error.category = error_ctx::category::REQUEST,
                    error.kind = error_ctx::kind::UNSUPPORTED_OPERATION,
                    operation = %operation,
                    "未対応の操作を受信しました"
                );
                ErrorResponse::new(
                    "unsupported-operation",
                    "Unsupported Operation",
                    400,
                    self.to_string(),
                )
            }
            AppError::InvalidRequest(_) => {
                tracing::warn!(error = %self, "リクエストの解析に失敗しました");
                ErrorResponse::bad_request(self.to_string())
            }
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
