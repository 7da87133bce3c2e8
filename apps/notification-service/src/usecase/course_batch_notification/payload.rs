//! # ペイロード組み立て
//!
//! バッチ・コンテンツメタデータ・固定設定から受信者 1 名分の
//! [`NotificationPayload`] を組み立てる。I/O を持たない純粋関数。

use batchnotify_domain::{
    course_batch::CourseBatch,
    notification::{
        BODY_PLACEHOLDER,
        ContentMetadata,
        NotificationPayload,
        NotificationSubject,
        NotificationTemplate,
        course_batch_url,
    },
    user::UserId,
};

use crate::config::NotificationSettings;

/// 受信者 1 名分のペイロードを組み立てる
///
/// 同じ入力からは常に同じペイロードを返す。
pub fn build_payload(
    recipient: &UserId,
    batch: &CourseBatch,
    metadata: &ContentMetadata,
    subject: NotificationSubject,
    template: NotificationTemplate,
    settings: &NotificationSettings,
) -> NotificationPayload {
    NotificationPayload {
        subject,
        email_template_type: template,
        body: BODY_PLACEHOLDER.to_string(),
        org_name: batch.org_name.clone(),
        course_logo_url: metadata.app_icon.clone(),
        start_date: batch.start_date.clone(),
        end_date: batch.end_date.clone(),
        course_id: batch.course_id.clone(),
        batch_name: batch.name.clone(),
        course_name: metadata.name.clone(),
        course_batch_url: course_batch_url(&settings.base_url, &batch.course_id, &batch.batch_id),
        signature: settings.signature.clone(),
        recipient_user_ids: vec![recipient.clone()],
    }
}
