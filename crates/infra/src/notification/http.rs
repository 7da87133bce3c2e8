//! HTTP 通知送信実装
//!
//! 配信サービスの `POST /v1/notification/email` にペイロードを渡す。
//! 受信者のメールアドレス解決と本文生成は配信サービス側が行う。

use async_trait::async_trait;
use batchnotify_domain::notification::{NotificationError, NotificationPayload};
use serde::Serialize;

use super::NotificationSender;

/// 配信サービスのリクエストエンベロープ
#[derive(Debug, Serialize)]
struct SendNotificationRequest<'a> {
    request: &'a NotificationPayload,
}

/// HTTP 通知送信
///
/// `reqwest::Client` をラップする。
#[derive(Clone)]
pub struct HttpNotificationSender {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpNotificationSender {
    /// 新しい HTTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `base_url`: 配信サービスのベース URL（例: `http://localhost:9000`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotificationSender for HttpNotificationSender {
    #[tracing::instrument(skip_all, level = "debug", fields(course_id = %payload.course_id))]
    async fn send(&self, payload: &NotificationPayload) -> Result<(), NotificationError> {
        let url = format!("{}/v1/notification/email", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&SendNotificationRequest { request: payload })
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("配信サービス接続失敗: {e}")))?;

        check_response(response).await
    }
}

/// 配信サービスのレスポンスを検査する
///
/// 2xx 以外はすべて `SendFailed` とし、ステータスと本文をメッセージに含める。
async fn check_response(response: reqwest::Response) -> Result<(), NotificationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(NotificationError::SendFailed(format!(
        "予期しないステータス {status}: {body}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &str) -> reqwest::Response {
        let http_resp = ::http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap();
        reqwest::Response::from(http_resp)
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpNotificationSender>();
    }

    #[test]
    fn test_base_urlの末尾スラッシュを取り除く() {
        let sender = HttpNotificationSender::new("http://localhost:9000/");
        assert_eq!(sender.base_url, "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_2xxは成功として扱う() {
        let response = make_response(200, r#"{"result": "SUCCESS"}"#);

        assert!(check_response(response).await.is_ok());
    }

    #[tokio::test]
    async fn test_5xxはsend_failedを返す() {
        let response = make_response(502, "bad gateway");

        match check_response(response).await {
            Err(NotificationError::SendFailed(msg)) => {
                assert!(msg.contains("502"), "ステータスコードを含むこと: {msg}");
                assert!(msg.contains("bad gateway"), "本文を含むこと: {msg}");
            }
            other => panic!("SendFailed を期待したが {other:?} を受け取った"),
        }
    }
}
