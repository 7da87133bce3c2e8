//! # アプリケーション構築
//!
//! 設定から依存コンポーネントを組み立て、ルーターを構築する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use batchnotify_infra::{
    ContentMetadataLookup,
    HttpContentMetadataLookup,
    HttpNotificationSender,
    NoopNotificationSender,
    NotificationSender,
};
use tower_http::trace::TraceLayer;

use crate::{
    config::{ConfigError, NotificationBackend, NotificationConfig, NotifyConfig},
    handler::{NotificationState, dispatch_notification, health_check},
    usecase::CourseBatchNotificationService,
};

/// 設定に応じた送信バックエンドを作成する
///
/// `http` バックエンドで配信サービスの URL が無い場合は [`ConfigError::Missing`] を返す。
pub fn build_sender(
    config: &NotificationConfig,
) -> Result<Arc<dyn NotificationSender>, ConfigError> {
    match config.backend {
        NotificationBackend::Http => {
            let url = config
                .service_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .ok_or(ConfigError::Missing("NOTIFICATION_SERVICE_URL"))?;
            tracing::info!(url, "通知バックエンド: http");
            Ok(Arc::new(HttpNotificationSender::new(url)))
        }
        NotificationBackend::Noop => {
            tracing::info!("通知バックエンド: noop");
            Ok(Arc::new(NoopNotificationSender))
        }
    }
}

/// 設定から通知サービスを組み立てる
pub fn build_service(
    config: &NotifyConfig,
) -> Result<CourseBatchNotificationService, ConfigError> {
    let content_lookup: Arc<dyn ContentMetadataLookup> =
        Arc::new(HttpContentMetadataLookup::new(&config.content_service_url));

    Ok(CourseBatchNotificationService::new(
        build_sender(&config.notification)?,
        content_lookup,
        config.notification.settings.clone(),
    ))
}

/// ルーターを構築する
pub fn build_app(service: CourseBatchNotificationService) -> Router {
    let state = Arc::new(NotificationState { service });

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/internal/course-batch-notifications",
            post(dispatch_notification),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
