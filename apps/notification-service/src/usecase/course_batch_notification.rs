//! # コースバッチ通知ユースケース
//!
//! バッチのメンバー変更から通知先を決定し、受信者ごとのペイロードを組み立てて送信する。
//!
//! ## モジュール構成
//!
//! - [`targeting`] - バッチ変更から通知ターゲット（受信者・件名・テンプレート）を決める
//! - [`payload`] - 受信者 1 名分のペイロードを組み立てる純粋関数
//! - [`service`] - メタデータ取得 + ターゲット解決 + 送信を統合するサービス

pub mod payload;
pub mod service;
pub mod targeting;

pub use payload::build_payload;
pub use service::{CourseBatchNotificationService, DispatchSummary};
pub use targeting::resolve_targets;
