//! Noop 通知送信実装
//!
//! 通知を実際に送信せず、ログ出力のみ行う。
//! ローカル開発や通知無効化時に使用する。

use async_trait::async_trait;
use batchnotify_domain::notification::{NotificationError, NotificationPayload};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send(&self, payload: &NotificationPayload) -> Result<(), NotificationError> {
        let template: &str = payload.email_template_type.into();
        tracing::info!(
            recipients = ?payload.recipient_user_ids,
            template,
            course_id = %payload.course_id,
            "Noop: 通知送信をスキップ"
        );
        Ok(())
    }
}
