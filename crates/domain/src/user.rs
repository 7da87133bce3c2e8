//! # ユーザー
//!
//! 通知の受信者を識別するユーザー ID を定義する。
//! ユーザー情報そのもの（氏名・メールアドレス）は配信サービス側が解決するため、
//! このクレートでは ID のみを扱う。

define_string_id! {
    /// ユーザー ID
    ///
    /// 上流プラットフォームが採番する不透明な文字列。
    pub struct UserId;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_jsonでは素の文字列としてシリアライズされる() {
        let id = UserId::new("user-001");

        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, r#""user-001""#);
    }

    #[test]
    fn test_素の文字列からデシリアライズできる() {
        let id: UserId = serde_json::from_str(r#""user-002""#).unwrap();

        assert_eq!(id, UserId::new("user-002"));
    }

    #[test]
    fn test_is_emptyは空文字だけを空とみなす() {
        assert!(UserId::new("").is_empty());
        assert!(!UserId::new("   ").is_empty());
        assert!(!UserId::new("u1").is_empty());
    }

    #[test]
    fn test_displayは内部の文字列をそのまま出力する() {
        assert_eq!(UserId::from("u1").to_string(), "u1");
    }
}
