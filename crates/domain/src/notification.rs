//! # 通知
//!
//! コースバッチ通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`NotificationTarget`] | 通知ターゲット | 受信者リスト・件名・テンプレートの組 |
//! | [`NotificationSubject`] | 件名種別 | 招待 / 受講解除 |
//! | [`NotificationTemplate`] | テンプレート種別 | 配信サービスが本文を生成するためのテンプレート名 |
//! | [`ContentMetadata`] | コンテンツメタデータ | コース表示名とアイコン URL |
//! | [`NotificationPayload`] | 通知ペイロード | 受信者 1 名分の配信リクエスト |
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: 通知送信の失敗はバッチ操作に影響しない
//! - **本文生成は配信サービスの責務**: ここではテンプレート名とプレースホルダ値だけを組み立てる

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::{
    course_batch::{BatchId, CourseId},
    user::UserId,
};

/// 配信サービスへ渡す本文のプレースホルダ
///
/// 実際の本文はテンプレートから配信サービスが生成する。
pub const BODY_PLACEHOLDER: &str = "Notification mail Body";

/// 通知エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// コンテンツメタデータの取得に失敗
    #[error("コンテンツメタデータの取得に失敗: {0}")]
    MetadataLookupFailed(String),

    /// 通知の送信に失敗
    #[error("通知の送信に失敗: {0}")]
    SendFailed(String),
}

/// 件名種別
///
/// 配信サービスには camelCase の識別子で渡す。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum NotificationSubject {
    /// 受講・メンター招待
    CourseInvitation,
    /// バッチからの登録解除
    UnenrollFromCourseBatch,
}

/// テンプレート種別
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum NotificationTemplate {
    /// オープンバッチ: 受講者の自己登録
    OpenBatchLearnerEnrol,
    /// オープンバッチ: 受講者の自己解除
    OpenBatchLearnerUnenrol,
    /// 招待制バッチ: メンター追加
    BatchMentorEnrol,
    /// 招待制バッチ: メンター削除
    BatchMentorUnenrol,
    /// 招待制バッチ: 参加者追加
    BatchLearnerEnrol,
    /// 招待制バッチ: 参加者削除
    BatchLearnerUnenrol,
}

/// 通知ターゲット
///
/// 1 つの通知意図（誰に・どの件名で・どのテンプレートで）を表す。
/// 受信者リストは空でないことを前提とし、空のターゲットは生成しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget<'a> {
    pub recipients: &'a [UserId],
    pub subject:    NotificationSubject,
    pub template:   NotificationTemplate,
}

/// コンテンツメタデータ
///
/// コンテンツサービスから取得したコースの表示情報。
/// 取得できなかった項目は空文字になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    /// コース表示名
    #[serde(default)]
    pub name:     String,
    /// コースアイコン URL
    #[serde(default)]
    pub app_icon: String,
}

/// 通知ペイロード
///
/// 受信者 1 名分の配信リクエスト。`NotificationSender` に渡される。
/// JSON のキー名は配信サービスの受け付ける camelCase に合わせる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub subject: NotificationSubject,
    pub email_template_type: NotificationTemplate,
    pub body: String,
    pub org_name: Option<String>,
    pub course_logo_url: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub course_id: CourseId,
    pub batch_name: String,
    pub course_name: String,
    pub course_batch_url: String,
    pub signature: String,
    pub recipient_user_ids: Vec<UserId>,
}

/// バッチ詳細ページの URL を組み立てる
///
/// `{base_url}/learn/course/{course_id}/batch/{batch_id}`
pub fn course_batch_url(base_url: &str, course_id: &CourseId, batch_id: &BatchId) -> String {
    format!("{base_url}/learn/course/{course_id}/batch/{batch_id}")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_course_batch_urlがパスを連結する() {
        let url = course_batch_url("https://x.org", &CourseId::new("c1"), &BatchId::new("b1"));

        assert_eq!(url, "https://x.org/learn/course/c1/batch/b1");
    }

    #[test]
    fn test_course_batch_urlはbase_urlが空でもパスを返す() {
        let url = course_batch_url("", &CourseId::new("c1"), &BatchId::new("b1"));

        assert_eq!(url, "/learn/course/c1/batch/b1");
    }

    #[rstest]
    #[case(NotificationTemplate::OpenBatchLearnerEnrol, "openBatchLearnerEnrol")]
    #[case(NotificationTemplate::OpenBatchLearnerUnenrol, "openBatchLearnerUnenrol")]
    #[case(NotificationTemplate::BatchMentorEnrol, "batchMentorEnrol")]
    #[case(NotificationTemplate::BatchMentorUnenrol, "batchMentorUnenrol")]
    #[case(NotificationTemplate::BatchLearnerEnrol, "batchLearnerEnrol")]
    #[case(NotificationTemplate::BatchLearnerUnenrol, "batchLearnerUnenrol")]
    fn test_テンプレート名の文字列変換(
        #[case] template: NotificationTemplate,
        #[case] expected: &str,
    ) {
        assert_eq!(template.to_string(), expected);
        assert_eq!(NotificationTemplate::from_str(expected).unwrap(), template);
        assert_eq!(
            serde_json::to_value(template).unwrap(),
            serde_json::Value::String(expected.to_string())
        );
    }

    #[test]
    fn test_件名の文字列変換() {
        assert_eq!(
            NotificationSubject::CourseInvitation.to_string(),
            "courseInvitation"
        );
        assert_eq!(
            NotificationSubject::UnenrollFromCourseBatch.to_string(),
            "unenrollFromCourseBatch"
        );
    }

    #[test]
    fn test_コンテンツメタデータは欠けた項目を空文字で補う() {
        let metadata: ContentMetadata = serde_json::from_str(r#"{"name": "Rust 入門"}"#).unwrap();

        assert_eq!(
            metadata,
            ContentMetadata {
                name:     "Rust 入門".to_string(),
                app_icon: String::new(),
            }
        );
    }

    #[test]
    fn test_ペイロードは配信サービスのキー名でシリアライズされる() {
        let payload = NotificationPayload {
            subject: NotificationSubject::CourseInvitation,
            email_template_type: NotificationTemplate::BatchLearnerEnrol,
            body: BODY_PLACEHOLDER.to_string(),
            org_name: Some("サンプル学園".to_string()),
            course_logo_url: "https://cdn.example.com/icon.png".to_string(),
            start_date: Some("2026-04-01".to_string()),
            end_date: None,
            course_id: CourseId::new("c1"),
            batch_name: "春期".to_string(),
            course_name: "Rust 入門".to_string(),
            course_batch_url: "https://x.org/learn/course/c1/batch/b1".to_string(),
            signature: "運営事務局".to_string(),
            recipient_user_ids: vec![UserId::new("u1")],
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "subject": "courseInvitation",
                "emailTemplateType": "batchLearnerEnrol",
                "body": "Notification mail Body",
                "orgName": "サンプル学園",
                "courseLogoUrl": "https://cdn.example.com/icon.png",
                "startDate": "2026-04-01",
                "endDate": null,
                "courseId": "c1",
                "batchName": "春期",
                "courseName": "Rust 入門",
                "courseBatchUrl": "https://x.org/learn/course/c1/batch/b1",
                "signature": "運営事務局",
                "recipientUserIds": ["u1"],
            })
        );
    }
}
