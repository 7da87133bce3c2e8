//! # BatchNotify インフラ層
//!
//! 外部サービスとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **通知配信**: 組み立て済みの通知ペイロードを配信サービスへ渡す（[`notification`]）
//! - **コンテンツ参照**: コースの表示名・アイコンをコンテンツサービスから取得する（[`content`]）
//!
//! どちらも trait で抽象化し、ユースケース層は `Arc<dyn Trait>` で受け取る。
//!
//! ## 依存関係
//!
//! ```text
//! notification-service → infra → domain
//! ```

pub mod content;
pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use content::{ContentMetadataLookup, HttpContentMetadataLookup};
pub use notification::{HttpNotificationSender, NoopNotificationSender, NotificationSender};
