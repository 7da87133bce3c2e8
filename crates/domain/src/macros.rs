/// 外部システム由来の文字列 ID 型を定義する宣言型マクロ
///
/// コース・バッチ・ユーザーの ID は上流プラットフォームが採番する不透明な文字列のため、
/// UUID ではなく `String` をラップする。以下のボイラープレートを一括生成する:
///
/// - Newtype 構造体（`String` をラップ、serde では素の文字列として扱う）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)`
/// - `new()`: 任意の文字列から生成
/// - `as_str()`: 文字列参照
/// - `is_empty()`: 空文字の判定（空白は値として扱う）
///
/// # 使用例
///
/// ```rust
/// use batchnotify_domain::user::UserId;
///
/// let id = UserId::new("user-001");
/// assert_eq!(id.as_str(), "user-001");
/// assert!(!id.is_empty());
/// assert!(!UserId::new(" ").is_empty());
/// ```
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display, derive_more::From,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            /// 文字列から ID を作成する
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 空文字かどうか
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $Name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}
