//! Rendering of homework records into notification text.

use serde_json::Value;
use thiserror::Error;
use tracing::error;

use super::catalog::verdict_for;

/// Errors raised when a homework record cannot be rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("данные о домашней работе не содержат ключ homework_name")]
    HomeworkNameNotFound,

    #[error("передан недокументированный статус домашней работы")]
    HomeworkStatusNotFound,
}

/// Builds the notification text for a single homework record.
///
/// The record must carry a `homework_name` key (presence is what is
/// checked) and a `status` whose value is a documented code. The output
/// template is an external contract relied upon by downstream consumers:
/// `Изменился статус проверки работы "{name}". {verdict}`.
///
/// # Errors
///
/// Returns [`ParseError::HomeworkNameNotFound`] when the name key is
/// absent and [`ParseError::HomeworkStatusNotFound`] when the status is
/// missing or not in the catalog.
pub fn parse_status(homework: &Value) -> Result<String, ParseError> {
    let Some(name) = homework.get("homework_name") else {
        error!("В ответе API не обнаружен ключ homework_name");
        return Err(ParseError::HomeworkNameNotFound);
    };

    let verdict = homework
        .get("status")
        .and_then(Value::as_str)
        .and_then(verdict_for)
        .ok_or_else(|| {
            error!("В ответе API обнаружен недокументированный статус домашней работы");
            ParseError::HomeworkStatusNotFound
        })?;

    let name = match name.as_str() {
        Some(s) => s.to_owned(),
        None => name.to_string(),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}
