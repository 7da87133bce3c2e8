//! # Notification Service 設定
//!
//! 環境変数からサービスの設定を読み込む。
//! 署名とベース URL はプロセス起動時に一度だけ解決し、以後は不変として扱う。

use std::{env, str::FromStr};

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{key} の値が不正です: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Notification Service の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// コンテンツサービスの URL
    pub content_service_url: String,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationBackend {
    /// 配信サービスへ HTTP で送信
    Http,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `http`: 配信サービス経由で送信（`NOTIFICATION_SERVICE_URL` 必須）
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub backend:     NotificationBackend,
    /// 配信サービスの URL（backend=http の場合に使用）
    pub service_url: Option<String>,
    pub settings:    NotificationSettings,
}

/// ペイロードに埋め込む固定値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSettings {
    /// 通知末尾の署名
    pub signature: String,
    /// Web フロントエンドのベース URL（バッチページへのリンク用）
    pub base_url:  String,
}

impl NotifyConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// テストでは環境変数の競合を避けるため、この関数に直接値を渡す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = required(&lookup, "NOTIFY_PORT")?;
        let port = parse(&port, "NOTIFY_PORT")?;

        Ok(Self {
            host: lookup("NOTIFY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            content_service_url: required(&lookup, "CONTENT_SERVICE_URL")?,
            notification: NotificationConfig::from_lookup(&lookup)?,
        })
    }
}

impl NotificationConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match lookup("NOTIFICATION_BACKEND") {
            Some(value) => parse(&value, "NOTIFICATION_BACKEND")?,
            None => NotificationBackend::Noop,
        };

        let service_url = match backend {
            NotificationBackend::Http => Some(required(lookup, "NOTIFICATION_SERVICE_URL")?),
            NotificationBackend::Noop => lookup("NOTIFICATION_SERVICE_URL"),
        };

        Ok(Self {
            backend,
            service_url,
            settings: NotificationSettings {
                signature: lookup("COURSE_BATCH_NOTIFICATION_SIGNATURE").unwrap_or_default(),
                base_url:  lookup("WEB_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_default(),
            },
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse<T: FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
