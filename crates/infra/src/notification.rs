//! # 通知送信
//!
//! 通知ペイロードの配信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait で配信手段を抽象化
//! - **2 つの実装**: HTTP（配信サービス経由）、Noop（ログ出力のみ）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択

mod http;
mod noop;

use async_trait::async_trait;
use batchnotify_domain::notification::{NotificationError, NotificationPayload};
pub use http::HttpNotificationSender;
pub use noop::NoopNotificationSender;

/// 通知送信トレイト
///
/// 受信者 1 名分のペイロードを受け取り、配信を試みる。
/// 実装は複数のディスパッチから同時に呼ばれるため `Send + Sync` であること。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// 通知を送信する
    async fn send(&self, payload: &NotificationPayload) -> Result<(), NotificationError>;
}
