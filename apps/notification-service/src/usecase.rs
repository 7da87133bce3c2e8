//! # ユースケース層
//!
//! - [`course_batch_notification`] - コースバッチ変更に伴う通知のディスパッチ

pub mod course_batch_notification;

pub use course_batch_notification::{CourseBatchNotificationService, DispatchSummary};
