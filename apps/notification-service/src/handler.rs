//! # HTTP ハンドラ
//!
//! - [`health`] - ヘルスチェック
//! - [`course_batch_notification`] - コースバッチ通知の受け付け

pub mod course_batch_notification;
pub mod health;

pub use course_batch_notification::{NotificationState, OperationRequest, dispatch_notification};
pub use health::health_check;
