use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// フォーム入力や API 境界でのバリデーション失敗理由。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValidationFailureKind {
    /// 汎用的なバリデーションエラー。
    Generic,
    /// レコードに存在しないフィールドを指定した場合。
    UnknownField,
    /// フィールドの型と値が一致しない場合。
    TypeMismatch,
    /// タブの所属エンティティが編集対象と一致しない場合。
    TabMismatch,
    /// 必須の識別子が空文字列の場合。
    EmptyContent,
}

impl ValidationFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFailureKind::Generic => "generic",
            ValidationFailureKind::UnknownField => "unknown_field",
            ValidationFailureKind::TypeMismatch => "type_mismatch",
            ValidationFailureKind::TabMismatch => "tab_mismatch",
            ValidationFailureKind::EmptyContent => "empty_content",
        }
    }
}

impl fmt::Display for ValidationFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationFailureKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(ValidationFailureKind::Generic),
            "unknown_field" => Ok(ValidationFailureKind::UnknownField),
            "type_mismatch" => Ok(ValidationFailureKind::TypeMismatch),
            "tab_mismatch" => Ok(ValidationFailureKind::TabMismatch),
            "empty_content" => Ok(ValidationFailureKind::EmptyContent),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_and_from_str_agree() {
        for kind in [
            ValidationFailureKind::Generic,
            ValidationFailureKind::UnknownField,
            ValidationFailureKind::TypeMismatch,
            ValidationFailureKind::TabMismatch,
            ValidationFailureKind::EmptyContent,
        ] {
            assert_eq!(ValidationFailureKind::from_str(kind.as_str()), Ok(kind));
        }
        assert!(ValidationFailureKind::from_str("too_large").is_err());
    }
}
