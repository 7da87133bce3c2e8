//! # Notification Service サーバー
//!
//! コースバッチのメンバー変更を受け取り、通知先を決めて配信サービスへ渡す内部サービス。
//!
//! ```text
//! ┌──────────────┐  POST   ┌──────────────────────┐  GET   ┌────────────────────┐
//! │ 上流サービス │────────►│ Notification Service │───────►│ コンテンツサービス │
//! └──────────────┘         └──────────────────────┘        └────────────────────┘
//!                                     │ POST（受信者ごと）
//!                                     ▼
//!                            ┌──────────────────┐
//!                            │   配信サービス   │
//!                            └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `NOTIFY_PORT` | **Yes** | ポート番号 |
//! | `CONTENT_SERVICE_URL` | **Yes** | コンテンツサービスの URL |
//! | `NOTIFICATION_BACKEND` | No | `http` / `noop`（デフォルト: `noop`） |
//! | `NOTIFICATION_SERVICE_URL` | backend=http のとき | 配信サービスの URL |
//! | `COURSE_BATCH_NOTIFICATION_SIGNATURE` | No | 通知末尾の署名 |
//! | `WEB_URL` | No | バッチページへのリンクのベース URL |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |

use std::net::SocketAddr;

use batchnotify_service::{
    app_builder::{build_app, build_service},
    config::NotifyConfig,
};
use batchnotify_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("notification-service");
    init_tracing(&tracing_config);

    let config = NotifyConfig::from_env()?;

    tracing::info!(
        service = %tracing_config.service_name,
        "Notification Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let app = build_app(build_service(&config)?);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Notification Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
