//! # コースバッチ
//!
//! コースバッチとそのメンバー変更イベントを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`CourseBatch`] | コースバッチ | コースの開講単位。開始日・終了日・主催組織を持つ |
//! | [`EnrollmentType`] | 受講登録方式 | オープン（自己登録）か招待制か |
//! | [`BatchChangeEvent`] | バッチ変更イベント | 受講登録・解除、メンター追加・削除の通知要求 |
//! | [`BatchChange`] | 解決済みバッチ変更 | イベントをモード別に解釈した結果 |
//!
//! ## 設計方針
//!
//! - **受信形式と解釈の分離**: [`BatchChangeEvent`] は上流から届く形そのまま、
//!   [`BatchChange`] はモードを確定させた後の型。どちらの形が有効かは
//!   [`BatchChangeEvent::resolve`] だけが決める
//! - **操作種別の寛容な解釈**: `add` 以外の値（未知の値・欠落を含む）はすべて解除として扱う

use serde::{Deserialize, Serialize};

use crate::user::UserId;

define_string_id! {
    /// コース ID
    pub struct CourseId;
}

define_string_id! {
    /// バッチ ID
    pub struct BatchId;
}

/// 受講登録方式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EnrollmentType {
    /// 誰でも自己登録・解除できる
    Open,
    /// メンター・参加者リストで管理される
    InviteOnly,
}

/// 受講登録の操作種別
///
/// オープンバッチの自己登録・解除でのみ意味を持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// 受講登録
    Add,
    /// 受講解除
    Remove,
    /// 上記以外の値（解除として扱う）
    #[serde(other)]
    Unknown,
}

impl OperationType {
    pub fn is_add(self) -> bool {
        matches!(self, Self::Add)
    }
}

/// コースバッチ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBatch {
    pub batch_id:        BatchId,
    pub course_id:       CourseId,
    pub name:            String,
    #[serde(default)]
    pub start_date:      Option<String>,
    #[serde(default)]
    pub end_date:        Option<String>,
    #[serde(default)]
    pub org_name:        Option<String>,
    pub enrollment_type: EnrollmentType,
}

/// バッチ変更イベント
///
/// 上流から届く通知要求。オープンバッチでは `triggering_user_id` と
/// `operation_type` が、招待制バッチでは 4 つのユーザーリストが意味を持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchChangeEvent {
    #[serde(rename = "courseBatch")]
    pub batch: CourseBatch,
    #[serde(rename = "userId", default)]
    pub triggering_user_id: Option<UserId>,
    #[serde(default)]
    pub operation_type: Option<OperationType>,
    #[serde(default)]
    pub added_mentors: Vec<UserId>,
    #[serde(default)]
    pub removed_mentors: Vec<UserId>,
    #[serde(default)]
    pub added_participants: Vec<UserId>,
    #[serde(default)]
    pub removed_participants: Vec<UserId>,
}

/// モードを確定させたバッチ変更
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchChange<'a> {
    /// オープンバッチでの自己登録・解除
    SelfEnrollment {
        user_id:   &'a UserId,
        operation: Option<OperationType>,
    },
    /// 招待制バッチでのメンター・参加者の追加・削除
    MembershipUpdate {
        added_mentors:        &'a [UserId],
        removed_mentors:      &'a [UserId],
        added_participants:   &'a [UserId],
        removed_participants: &'a [UserId],
    },
}

impl BatchChangeEvent {
    /// イベントのモードを確定させる
    ///
    /// `triggering_user_id` が空でなければ自己登録、そうでなければメンバー更新。
    /// バッチの [`EnrollmentType`] とは独立に判定する（不一致の検出は
    /// [`BatchChange::matches`] で行う）。
    pub fn resolve(&self) -> BatchChange<'_> {
        match &self.triggering_user_id {
            Some(user_id) if !user_id.is_empty() => BatchChange::SelfEnrollment {
                user_id,
                operation: self.operation_type,
            },
            _ => BatchChange::MembershipUpdate {
                added_mentors:        &self.added_mentors,
                removed_mentors:      &self.removed_mentors,
                added_participants:   &self.added_participants,
                removed_participants: &self.removed_participants,
            },
        }
    }
}

impl BatchChange<'_> {
    /// この変更に対応する受講登録方式
    pub fn enrollment_type(&self) -> EnrollmentType {
        match self {
            Self::SelfEnrollment { .. } => EnrollmentType::Open,
            Self::MembershipUpdate { .. } => EnrollmentType::InviteOnly,
        }
    }

    /// バッチの受講登録方式と一致するか
    pub fn matches(&self, batch: &CourseBatch) -> bool {
        self.enrollment_type() == batch.enrollment_type
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn batch() -> CourseBatch {
        CourseBatch {
            batch_id:        BatchId::new("b1"),
            course_id:       CourseId::new("c1"),
            name:            "2026 年度 春期".to_string(),
            start_date:      Some("2026-04-01".to_string()),
            end_date:        Some("2026-06-30".to_string()),
            org_name:        Some("サンプル学園".to_string()),
            enrollment_type: EnrollmentType::InviteOnly,
        }
    }

    fn event(batch: CourseBatch) -> BatchChangeEvent {
        BatchChangeEvent {
            batch,
            triggering_user_id: None,
            operation_type: None,
            added_mentors: Vec::new(),
            removed_mentors: Vec::new(),
            added_participants: Vec::new(),
            removed_participants: Vec::new(),
        }
    }

    #[rstest]
    fn test_triggering_user_idがあれば自己登録に解決される(batch: CourseBatch) {
        let user = UserId::new("u1");
        let sut = BatchChangeEvent {
            triggering_user_id: Some(user.clone()),
            operation_type: Some(OperationType::Add),
            ..event(batch)
        };

        assert_eq!(
            sut.resolve(),
            BatchChange::SelfEnrollment {
                user_id:   &user,
                operation: Some(OperationType::Add),
            }
        );
    }

    #[rstest]
    fn test_triggering_user_idが空文字ならメンバー更新に解決される(batch: CourseBatch) {
        let sut = BatchChangeEvent {
            triggering_user_id: Some(UserId::new("")),
            added_mentors: vec![UserId::new("m1")],
            ..event(batch)
        };

        match sut.resolve() {
            BatchChange::MembershipUpdate { added_mentors, .. } => {
                assert_eq!(added_mentors, &[UserId::new("m1")]);
            }
            other => panic!("MembershipUpdate を期待したが {other:?} を受け取った"),
        }
    }

    #[rstest]
    fn test_空白だけのtriggering_user_idも自己登録に解決される(batch: CourseBatch) {
        let sut = BatchChangeEvent {
            triggering_user_id: Some(UserId::new(" ")),
            operation_type: Some(OperationType::Add),
            added_mentors: vec![UserId::new("m1")],
            ..event(batch)
        };

        match sut.resolve() {
            BatchChange::SelfEnrollment { user_id, operation } => {
                assert_eq!(user_id, &UserId::new(" "));
                assert_eq!(operation, Some(OperationType::Add));
            }
            other => panic!("SelfEnrollment を期待したが {other:?} を受け取った"),
        }
    }

    #[rstest]
    fn test_モードとバッチの登録方式の一致を判定できる(batch: CourseBatch) {
        let user = UserId::new("u1");
        let invite_only = event(batch.clone());
        let open = BatchChangeEvent {
            triggering_user_id: Some(user),
            ..event(batch.clone())
        };

        assert!(invite_only.resolve().matches(&batch));
        assert!(!open.resolve().matches(&batch));
    }

    #[rstest]
    #[case(r#""add""#, OperationType::Add)]
    #[case(r#""remove""#, OperationType::Remove)]
    #[case(r#""transfer""#, OperationType::Unknown)]
    fn test_操作種別のデシリアライズ(#[case] json: &str, #[case] expected: OperationType) {
        let parsed: OperationType = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_上流形式のjsonからイベントを復元できる() {
        let json = r#"{
            "courseBatch": {
                "batchId": "b1",
                "courseId": "c1",
                "name": "春期",
                "startDate": "2026-04-01",
                "enrollmentType": "open"
            },
            "userId": "u1",
            "operationType": "add"
        }"#;

        let sut: BatchChangeEvent = serde_json::from_str(json).unwrap();

        assert_eq!(sut.batch.enrollment_type, EnrollmentType::Open);
        assert_eq!(sut.batch.end_date, None);
        assert_eq!(sut.triggering_user_id, Some(UserId::new("u1")));
        assert_eq!(sut.operation_type, Some(OperationType::Add));
        assert!(sut.added_participants.is_empty());
    }

    #[test]
    fn test_登録方式の文字列表現() {
        assert_eq!(EnrollmentType::Open.to_string(), "open");
        assert_eq!(EnrollmentType::InviteOnly.to_string(), "invite-only");
    }
}
