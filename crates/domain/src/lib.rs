//! # BatchNotify ドメイン層
//!
//! コースバッチ通知の中核となるドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! notification-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（HTTP クライアント、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`course_batch`] - コースバッチとバッチ変更イベント
//! - [`notification`] - 通知ターゲット・ペイロード・エラー
//! - [`user`] - ユーザー ID
//!
//! ## 使用例
//!
//! ```rust
//! use batchnotify_domain::{
//!     course_batch::{BatchId, CourseId},
//!     notification::course_batch_url,
//! };
//!
//! let url = course_batch_url("https://x.org", &CourseId::new("c1"), &BatchId::new("b1"));
//! assert_eq!(url, "https://x.org/learn/course/c1/batch/b1");
//! ```

#[macro_use]
mod macros;

pub mod course_batch;
pub mod notification;
pub mod user;

pub use notification::NotificationError;
