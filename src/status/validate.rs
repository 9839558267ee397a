//! Validation of the raw Practicum API response shape.

use serde_json::Value;
use thiserror::Error;
use tracing::error;

/// Errors raised when the API response violates the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("ответ API передан не в виде словаря")]
    ResponseType,

    #[error("ответ API не содержит ожидаемых ключей")]
    ResponseKeys,

    #[error("домашние работы переданы не в виде списка")]
    HomeworksType,
}

/// Checks the decoded API response and extracts the homework list.
///
/// The response must be a JSON object carrying both `homeworks` and
/// `current_date`, with `homeworks` being an array. Individual records
/// are not inspected here; that is [`parse_status`](super::parse_status)'s
/// job. On success the array is returned unchanged, order preserved.
///
/// # Errors
///
/// Returns a [`ValidateError`] describing the first shape violation found.
pub fn check_response(response: &Value) -> Result<&[Value], ValidateError> {
    let Some(object) = response.as_object() else {
        error!("Некорректный ответ API: ожидался словарь");
        return Err(ValidateError::ResponseType);
    };

    if !object.contains_key("homeworks") || !object.contains_key("current_date") {
        error!("В ответе API отсутствуют ожидаемые ключи");
        return Err(ValidateError::ResponseKeys);
    }

    match object.get("homeworks").and_then(Value::as_array) {
        Some(homeworks) => Ok(homeworks),
        None => {
            error!("Не обнаружен список домашних работ под ключом \"homeworks\"");
            Err(ValidateError::HomeworksType)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_response_is_rejected() {
        for value in [json!([1, 2]), json!("text"), json!(42), json!(null), json!(true)] {
            assert_eq!(check_response(&value), Err(ValidateError::ResponseType));
        }
    }

    #[test]
    fn test_missing_homeworks_key() {
        let response = json!({ "current_date": 1000 });
        assert_eq!(check_response(&response), Err(ValidateError::ResponseKeys));
    }

    #[test]
    fn test_missing_current_date_key() {
        let response = json!({ "homeworks": [] });
        assert_eq!(check_response(&response), Err(ValidateError::ResponseKeys));
    }

    #[test]
    fn test_empty_object_is_missing_keys() {
        let response = json!({});
        assert_eq!(check_response(&response), Err(ValidateError::ResponseKeys));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        for homeworks in [json!("hw1"), json!(7), json!({ "a": 1 }), json!(null)] {
            let response = json!({ "homeworks": homeworks, "current_date": 1000 });
            assert_eq!(check_response(&response), Err(ValidateError::HomeworksType));
        }
    }

    #[test]
    fn test_well_formed_response_passes_through() {
        let response = json!({
            "homeworks": [
                { "homework_name": "hw1", "status": "approved" },
                { "homework_name": "hw2", "status": "reviewing" },
            ],
            "current_date": 1000,
        });

        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw1");
        assert_eq!(homeworks[1]["homework_name"], "hw2");
    }

    #[test]
    fn test_empty_homework_list_is_valid() {
        let response = json!({ "homeworks": [], "current_date": 1000 });
        let homeworks = check_response(&response).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let response = json!({
            "homeworks": [],
            "current_date": 1000,
            "unexpected": "value",
        });
        assert!(check_response(&response).is_ok());
    }
}
