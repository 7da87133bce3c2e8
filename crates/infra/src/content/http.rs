//! HTTP コンテンツ参照実装
//!
//! コンテンツサービスの `GET /content/v3/read/{course_id}?fields=name,appIcon` を呼び出す。

use async_trait::async_trait;
use batchnotify_domain::{
    course_batch::CourseId,
    notification::{ContentMetadata, NotificationError},
};
use serde::Deserialize;

use super::ContentMetadataLookup;

/// `GET /content/v3/read` のレスポンス
#[derive(Debug, Deserialize)]
struct ContentReadResponse {
    result: ContentReadResult,
}

#[derive(Debug, Deserialize)]
struct ContentReadResult {
    content: ContentMetadata,
}

/// HTTP コンテンツ参照
#[derive(Clone)]
pub struct HttpContentMetadataLookup {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpContentMetadataLookup {
    /// 新しいコンテンツ参照クライアントを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: コンテンツサービスのベース URL（例: `http://localhost:9001`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentMetadataLookup for HttpContentMetadataLookup {
    #[tracing::instrument(skip_all, level = "debug", fields(%course_id))]
    async fn fetch(&self, course_id: &CourseId) -> Result<ContentMetadata, NotificationError> {
        let url = format!(
            "{}/content/v3/read/{}?fields=name,appIcon",
            self.base_url,
            urlencoding::encode(course_id.as_str())
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            NotificationError::MetadataLookupFailed(format!("コンテンツサービス接続失敗: {e}"))
        })?;

        handle_response(response, course_id).await
    }
}

/// コンテンツサービスのレスポンスをメタデータに変換する
async fn handle_response(
    response: reqwest::Response,
    course_id: &CourseId,
) -> Result<ContentMetadata, NotificationError> {
    let status = response.status();

    if status.is_success() {
        let body = response.json::<ContentReadResponse>().await.map_err(|e| {
            NotificationError::MetadataLookupFailed(format!("レスポンス解析失敗: {e}"))
        })?;
        return Ok(body.result.content);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(NotificationError::MetadataLookupFailed(format!(
            "コンテンツが見つかりません: {course_id}"
        )));
    }

    let body = response.text().await.unwrap_or_default();
    Err(NotificationError::MetadataLookupFailed(format!(
        "予期しないステータス {status}: {body}"
    )))
}
