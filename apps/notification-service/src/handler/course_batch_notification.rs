//! # コースバッチ通知ハンドラ
//!
//! 操作名とバッチ変更イベントを受け取り、通知をディスパッチする。
//!
//! ## エンドポイント
//!
//! ```text
//! POST /internal/course-batch-notifications
//! ```
//!
//! ## リクエスト例
//!
//! ```json
//! {
//!   "operation": "courseBatchNotification",
//!   "request": {
//!     "courseBatch": { "batchId": "b1", "courseId": "c1", "name": "春期", "enrollmentType": "open" },
//!     "userId": "u1",
//!     "operationType": "add"
//!   }
//! }
//! ```
//!
//! 個々の送信失敗はレスポンスに影響しない。結果は集計値として `202 Accepted` で返す。

use std::{str::FromStr, sync::Arc};

use axum::{Json, extract::State, http::StatusCode};
use batchnotify_domain::course_batch::BatchChangeEvent;
use serde::Deserialize;

use crate::{
    error::AppError,
    usecase::{CourseBatchNotificationService, DispatchSummary},
};

/// 受け付ける操作名
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum Operation {
    /// コースバッチ変更に伴う通知
    CourseBatchNotification,
}

/// 操作リクエスト
///
/// `request` の形は操作ごとに異なるため、操作名を確認してから解釈する。
#[derive(Debug, Deserialize)]
pub struct OperationRequest {
    pub operation: String,
    pub request:   serde_json::Value,
}

/// 通知ハンドラの共有状態
pub struct NotificationState {
    pub service: CourseBatchNotificationService,
}

/// コースバッチ通知を受け付ける
pub async fn dispatch_notification(
    State(state): State<Arc<NotificationState>>,
    Json(body): Json<OperationRequest>,
) -> Result<(StatusCode, Json<DispatchSummary>), AppError> {
    let operation = Operation::from_str(&body.operation)
        .map_err(|_| AppError::UnsupportedOperation(body.operation.clone()))?;
    tracing::info!(%operation, "操作を受信しました");

    let event: BatchChangeEvent = match operation {
        Operation::CourseBatchNotification => serde_json::from_value(body.request)
            .map_err(|e| AppError::InvalidRequest(e.to_string()))?,
    };

    let summary = state.service.dispatch(&event).await;

    Ok((StatusCode::ACCEPTED, Json(summary)))
}
