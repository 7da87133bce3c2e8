//! # 通知ターゲット解決
//!
//! バッチ変更を (受信者リスト, 件名, テンプレート) の組に写像する。
//!
//! | モード | 条件 | 件名 | テンプレート |
//! |-------|------|------|-------------|
//! | オープン | 操作種別 = add | `CourseInvitation` | `OpenBatchLearnerEnrol` |
//! | オープン | それ以外 | `UnenrollFromCourseBatch` | `OpenBatchLearnerUnenrol` |
//! | 招待制 | 追加メンター | `CourseInvitation` | `BatchMentorEnrol` |
//! | 招待制 | 削除メンター | `UnenrollFromCourseBatch` | `BatchMentorUnenrol` |
//! | 招待制 | 追加参加者 | `CourseInvitation` | `BatchLearnerEnrol` |
//! | 招待制 | 削除参加者 | `UnenrollFromCourseBatch` | `BatchLearnerUnenrol` |
//!
//! 招待制のターゲットは上の順で並び、受信者が空のものは生成しない。

use std::slice;

use batchnotify_domain::{
    course_batch::BatchChange,
    notification::{NotificationSubject, NotificationTarget, NotificationTemplate},
};

/// バッチ変更から通知ターゲットを解決する
///
/// 返り値の順序がそのまま送信順になる。
pub fn resolve_targets<'a>(change: &BatchChange<'a>) -> Vec<NotificationTarget<'a>> {
    match *change {
        BatchChange::SelfEnrollment { user_id, operation } => {
            let (subject, template) = if operation.is_some_and(|op| op.is_add()) {
                (
                    NotificationSubject::CourseInvitation,
                    NotificationTemplate::OpenBatchLearnerEnrol,
                )
            } else {
                (
                    NotificationSubject::UnenrollFromCourseBatch,
                    NotificationTemplate::OpenBatchLearnerUnenrol,
                )
            };

            vec![NotificationTarget {
                recipients: slice::from_ref(user_id),
                subject,
                template,
            }]
        }
        BatchChange::MembershipUpdate {
            added_mentors,
            removed_mentors,
            added_participants,
            removed_participants,
        } => [
            (
                added_mentors,
                NotificationSubject::CourseInvitation,
                NotificationTemplate::BatchMentorEnrol,
            ),
            (
                removed_mentors,
                NotificationSubject::UnenrollFromCourseBatch,
                NotificationTemplate::BatchMentorUnenrol,
            ),
            (
                added_participants,
                NotificationSubject::CourseInvitation,
                NotificationTemplate::BatchLearnerEnrol,
            ),
            (
                removed_participants,
                NotificationSubject::UnenrollFromCourseBatch,
                NotificationTemplate::BatchLearnerUnenrol,
            ),
        ]
        .into_iter()
        .filter(|(recipients, ..)| !recipients.is_empty())
        .map(|(recipients, subject, template)| NotificationTarget {
            recipients,
            subject,
            template,
        })
        .collect(),
    }
}
