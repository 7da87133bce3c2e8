//! # コースバッチ通知サービス
//!
//! コンテンツメタデータ取得 → ターゲット解決 → 受信者ごとの送信を統合するサービス。
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: `dispatch()` は送信失敗してもエラーを返さない
//! - **失敗の局所化**: 1 名への送信失敗は後続の受信者・ターゲットに影響しない
//! - **メタデータ縮退**: メタデータ取得に失敗した場合はコース名・ロゴを空文字にして続行する
//! - **依存性注入**: `NotificationSender` と `ContentMetadataLookup` は trait で抽象化

use std::sync::Arc;

use batchnotify_domain::{
    course_batch::{BatchChange, BatchChangeEvent, CourseBatch},
    notification::ContentMetadata,
};
use batchnotify_infra::{ContentMetadataLookup, NotificationSender};
use batchnotify_shared::{
    event_log::{error as error_ctx, event},
    log_business_event,
};
use serde::Serialize;

use super::{build_payload, resolve_targets};
use crate::config::NotificationSettings;

/// ディスパッチ結果の集計
///
/// 呼び出し元の判断には使わず、ログと API レスポンスでの可視化に使う。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    /// 送信を試みた件数
    pub attempted: usize,
    /// 送信に成功した件数
    pub sent:      usize,
    /// 送信に失敗した件数
    pub failed:    usize,
}

/// コースバッチ通知サービス
pub struct CourseBatchNotificationService {
    sender:         Arc<dyn NotificationSender>,
    content_lookup: Arc<dyn ContentMetadataLookup>,
    settings:       NotificationSettings,
}

impl CourseBatchNotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        content_lookup: Arc<dyn ContentMetadataLookup>,
        settings: NotificationSettings,
    ) -> Self {
        Self {
            sender,
            content_lookup,
            settings,
        }
    }

    /// バッチ変更に伴う通知を送信する（fire-and-forget）
    ///
    /// ターゲットの生成順、ターゲット内では受信者の入力順に 1 名ずつ送信する。
    /// 重複した受信者もそのまま送信する。
    #[tracing::instrument(
        skip_all,
        fields(course_id = %batch_event.batch.course_id, batch_id = %batch_event.batch.batch_id)
    )]
    pub async fn dispatch(&self, batch_event: &BatchChangeEvent) -> DispatchSummary {
        let batch = &batch_event.batch;
        let metadata = self.fetch_metadata(batch).await;

        let change = batch_event.resolve();
        if !change.matches(batch) {
            tracing::warn!(
                resolved = %change.enrollment_type(),
                enrollment_type = %batch.enrollment_type,
                "バッチの登録方式と通知要求の形が一致しません"
            );
        }
        log_change(&change);

        let mut summary = DispatchSummary::default();
        for target in resolve_targets(&change) {
            let template: &str = target.template.into();
            for recipient in target.recipients {
                let payload = build_payload(
                    recipient,
                    batch,
                    &metadata,
                    target.subject,
                    target.template,
                    &self.settings,
                );

                summary.attempted += 1;
                match self.sender.send(&payload).await {
                    Ok(()) => {
                        summary.sent += 1;
                        log_business_event!(
                            event.category = event::category::NOTIFICATION,
                            event.action = event::action::NOTIFICATION_SENT,
                            event.entity_type = event::entity_type::COURSE_BATCH,
                            event.entity_id = %batch.batch_id,
                            event.result = event::result::SUCCESS,
                            notification.template = template,
                            notification.recipient = %recipient,
                            "通知送信成功"
                        );
                    }
                    Err(e) => {
                        summary.failed += 1;
                        log_business_event!(
                            event.category = event::category::NOTIFICATION,
                            event.action = event::action::NOTIFICATION_FAILED,
                            event.entity_type = event::entity_type::COURSE_BATCH,
                            event.entity_id = %batch.batch_id,
                            event.result = event::result::FAILURE,
                            notification.template = template,
                            notification.recipient = %recipient,
                            error.category = error_ctx::category::EXTERNAL_SERVICE,
                            error.kind = error_ctx::kind::NOTIFICATION_DELIVERY,
                            error = %e,
                            "通知送信失敗"
                        );
                    }
                }
            }
        }

        let result = if summary.failed == 0 {
            event::result::SUCCESS
        } else {
            event::result::FAILURE
        };
        log_business_event!(
            event.category = event::category::NOTIFICATION,
            event.action = event::action::BATCH_NOTIFICATION_DISPATCHED,
            event.entity_type = event::entity_type::COURSE_BATCH,
            event.entity_id = %batch.batch_id,
            event.result = result,
            notification.attempted = summary.attempted,
            notification.sent = summary.sent,
            notification.failed = summary.failed,
            "バッチ通知ディスパッチ完了"
        );

        summary
    }

    /// コンテンツメタデータを取得する
    ///
    /// 失敗時は空のメタデータで続行する。
    async fn fetch_metadata(&self, batch: &CourseBatch) -> ContentMetadata {
        match self.content_lookup.fetch(&batch.course_id).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::error!(
                    error.category = error_ctx::category::EXTERNAL_SERVICE,
                    error.kind = error_ctx::kind::CONTENT_LOOKUP,
                    error = %e,
                    "コンテンツメタデータの取得に失敗、空のメタデータで続行します"
                );
                ContentMetadata::default()
            }
        }
    }
}

fn log_change(change: &BatchChange<'_>) {
    match change {
        BatchChange::SelfEnrollment { user_id, operation } => {
            tracing::info!(%user_id, ?operation, "オープンバッチの通知");
        }
        BatchChange::MembershipUpdate {
            added_mentors,
            removed_mentors,
            added_participants,
            removed_participants,
        } => {
            tracing::info!(
                added_mentors = added_mentors.len(),
                removed_mentors = removed_mentors.len(),
                added_participants = added_participants.len(),
                removed_participants = removed_participants.len(),
                "招待制バッチの通知"
            );
        }
    }
}
