//! # コンテンツ参照
//!
//! コースの表示名とアイコン URL をコンテンツサービスから取得する。
//!
//! 通知 1 回のディスパッチにつき 1 度だけ呼ばれ、結果は全ターゲットで共有される。

mod http;

use async_trait::async_trait;
use batchnotify_domain::{
    course_batch::CourseId,
    notification::{ContentMetadata, NotificationError},
};
pub use http::HttpContentMetadataLookup;

/// コンテンツメタデータ参照トレイト
#[async_trait]
pub trait ContentMetadataLookup: Send + Sync {
    /// コース ID からメタデータを取得する
    ///
    /// コンテンツが存在しない場合も `MetadataLookupFailed` を返す。
    async fn fetch(&self, course_id: &CourseId) -> Result<ContentMetadata, NotificationError>;
}
