//! # テスト用モック
//!
//! ユースケーステストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! batchnotify-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use batchnotify_domain::{
    course_batch::CourseId,
    notification::{ContentMetadata, NotificationError, NotificationPayload},
};

use crate::{content::ContentMetadataLookup, notification::NotificationSender};

// ===== MockNotificationSender =====

/// 送信を記録するモック
///
/// `failing_on` で指定した呼び出し番号（1 始まり）では `SendFailed` を返す。
/// 失敗した呼び出しも `attempts` には記録される。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    attempts: Arc<Mutex<Vec<NotificationPayload>>>,
    sent:     Arc<Mutex<Vec<NotificationPayload>>>,
    fail_on:  Arc<HashSet<usize>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した呼び出し番号（1 始まり）で失敗するモックを作成する
    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            fail_on: Arc::new(calls.into_iter().collect()),
            ..Self::default()
        }
    }

    /// 送信を試みたペイロード（失敗分を含む）
    pub fn attempts(&self) -> Vec<NotificationPayload> {
        self.attempts.lock().unwrap().clone()
    }

    /// 送信に成功したペイロード
    pub fn sent_payloads(&self) -> Vec<NotificationPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(&self, payload: &NotificationPayload) -> Result<(), NotificationError> {
        let call_number = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(payload.clone());
            attempts.len()
        };

        if self.fail_on.contains(&call_number) {
            return Err(NotificationError::SendFailed(format!(
                "モック送信失敗（{call_number} 回目）"
            )));
        }

        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

// ===== MockContentMetadataLookup =====

/// 固定のメタデータを返すモック
///
/// `failing()` で作成すると常に `MetadataLookupFailed` を返す。
#[derive(Clone)]
pub struct MockContentMetadataLookup {
    metadata: Option<ContentMetadata>,
    requests: Arc<Mutex<Vec<CourseId>>>,
}

impl MockContentMetadataLookup {
    pub fn new(metadata: ContentMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            metadata: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 参照されたコース ID（呼び出し順）
    pub fn requests(&self) -> Vec<CourseId> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentMetadataLookup for MockContentMetadataLookup {
    async fn fetch(&self, course_id: &CourseId) -> Result<ContentMetadata, NotificationError> {
        self.requests.lock().unwrap().push(course_id.clone());

        self.metadata.clone().ok_or_else(|| {
            NotificationError::MetadataLookupFailed(format!("モック参照失敗: {course_id}"))
        })
    }
}
