//! # Notification Service ライブラリ
//!
//! コースバッチ通知のユースケースとハンドラを公開する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
