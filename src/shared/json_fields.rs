use serde_json::Value;

use super::error::AppError;
use super::validation::ValidationFailureKind;

/// ドット区切りのパスで JSON オブジェクトの 1 フィールドを置き換える。
///
/// 途中の `null` は空オブジェクトに置き換えて辿る。存在しないキーはエラー。
/// 兄弟フィールドはそのまま残る。
pub fn set_field(document: &mut Value, path: &str, value: Value) -> Result<(), AppError> {
    let segments: Vec<&str> = path.split('.').map(str::trim).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(AppError::validation(
            ValidationFailureKind::UnknownField,
            format!("Invalid field path: '{path}'"),
        ));
    }

    let Some((leaf, parents)) = segments.split_last() else {
        return Err(unknown_field(path));
    };

    let mut current = document;
    for segment in parents {
        let object = current.as_object_mut().ok_or_else(|| unknown_field(path))?;
        let next = object.get_mut(*segment).ok_or_else(|| unknown_field(path))?;
        if next.is_null() {
            *next = Value::Object(serde_json::Map::new());
        }
        current = next;
    }

    let object = current.as_object_mut().ok_or_else(|| unknown_field(path))?;
    match object.get_mut(*leaf) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(unknown_field(path)),
    }
}

fn unknown_field(path: &str) -> AppError {
    AppError::validation(
        ValidationFailureKind::UnknownField,
        format!("Unknown field: '{path}'"),
    )
}
