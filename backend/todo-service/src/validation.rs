/// Write-payload validation
///
/// Runs on create and full-update bodies only; the partial-update path is
/// exempt. Rules are checked field by field in schema order and the first
/// failure wins, so the client always sees one message naming one field.
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AppError;
use crate::models::{NewTodo, Platform, TodoPayload, TodoStatus};

/// Validate a write payload and normalize it into a `NewTodo`.
///
/// Field order: title, brand, platform, dueDate, payment, status. A missing
/// `status` defaults to Draft.
pub fn validate_payload(payload: TodoPayload) -> Result<NewTodo, AppError> {
    let title = match payload.title {
        Some(title) if !title.is_empty() => title,
        Some(_) => return Err(validation_error("title is not allowed to be empty")),
        None => return Err(validation_error("title is required")),
    };

    let brand = match payload.brand {
        Some(brand) if !brand.is_empty() => brand,
        Some(_) => return Err(validation_error("brand is not allowed to be empty")),
        None => return Err(validation_error("brand is required")),
    };

    let platform = match payload.platform.as_deref() {
        Some(value) => Platform::parse(value).ok_or_else(|| {
            validation_error(&format!("platform must be one of {}", Platform::ALLOWED))
        })?,
        None => return Err(validation_error("platform is required")),
    };

    let due_date = match payload.due_date.as_deref() {
        Some(raw) => {
            parse_due_date(raw).ok_or_else(|| validation_error("dueDate must be a valid date"))?
        }
        None => return Err(validation_error("dueDate is required")),
    };

    if let Some(payment) = payload.payment {
        if payment < 0.0 {
            return Err(validation_error(
                "payment must be greater than or equal to 0",
            ));
        }
    }

    let status = match payload.status.as_deref() {
        Some(value) => TodoStatus::parse(value).ok_or_else(|| {
            validation_error(&format!("status must be one of {}", TodoStatus::ALLOWED))
        })?,
        None => TodoStatus::default(),
    };

    Ok(NewTodo {
        title,
        brand,
        platform,
        due_date,
        payment: payload.payment,
        status,
    })
}

/// Parse a due date from an RFC 3339 datetime or a plain `YYYY-MM-DD` date
/// (taken as midnight UTC).
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_payload() -> TodoPayload {
        TodoPayload {
            title: Some("Promo".to_string()),
            brand: Some("Acme".to_string()),
            platform: Some("Instagram".to_string()),
            due_date: Some("2025-01-01".to_string()),
            payment: None,
            status: None,
        }
    }

    #[test]
    fn valid_payload_normalizes_and_defaults_status() {
        let new_todo = validate_payload(valid_payload()).expect("payload is valid");

        assert_eq!(new_todo.title, "Promo");
        assert_eq!(new_todo.brand, "Acme");
        assert_eq!(new_todo.platform, Platform::Instagram);
        assert_eq!(new_todo.status, TodoStatus::Draft);
        assert_eq!(
            new_todo.due_date,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(new_todo.payment, None);
    }

    #[test]
    fn missing_required_fields_name_the_field() {
        let cases = [
            (TodoPayload { title: None, ..valid_payload() }, "title"),
            (TodoPayload { brand: None, ..valid_payload() }, "brand"),
            (TodoPayload { platform: None, ..valid_payload() }, "platform"),
            (TodoPayload { due_date: None, ..valid_payload() }, "dueDate"),
        ];

        for (payload, field) in cases {
            let err = validate_payload(payload).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "expected message naming {field}, got: {err}"
            );
        }
    }

    #[test]
    fn empty_title_is_rejected() {
        let payload = TodoPayload {
            title: Some(String::new()),
            ..valid_payload()
        };
        let err = validate_payload(payload).unwrap_err();
        assert_eq!(err.to_string(), "title is not allowed to be empty");
    }

    #[test]
    fn first_failing_field_wins() {
        // Both title and platform are bad; title is checked first.
        let payload = TodoPayload {
            title: None,
            platform: Some("MySpace".to_string()),
            ..valid_payload()
        };
        let err = validate_payload(payload).unwrap_err();
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let payload = TodoPayload {
            platform: Some("MySpace".to_string()),
            ..valid_payload()
        };
        let err = validate_payload(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "platform must be one of Instagram, Twitter, Facebook, TikTok, Other"
        );
    }

    #[test]
    fn platform_matching_is_case_sensitive() {
        let payload = TodoPayload {
            platform: Some("instagram".to_string()),
            ..valid_payload()
        };
        assert!(validate_payload(payload).is_err());
    }

    #[test]
    fn negative_payment_is_rejected() {
        let payload = TodoPayload {
            payment: Some(-1.0),
            ..valid_payload()
        };
        let err = validate_payload(payload).unwrap_err();
        assert_eq!(err.to_string(), "payment must be greater than or equal to 0");
    }

    #[test]
    fn zero_and_positive_payment_pass() {
        for payment in [0.0, 149.99] {
            let payload = TodoPayload {
                payment: Some(payment),
                ..valid_payload()
            };
            let new_todo = validate_payload(payload).expect("payment is valid");
            assert_eq!(new_todo.payment, Some(payment));
        }
    }

    #[test]
    fn explicit_status_is_kept() {
        let payload = TodoPayload {
            status: Some("Published".to_string()),
            ..valid_payload()
        };
        let new_todo = validate_payload(payload).unwrap();
        assert_eq!(new_todo.status, TodoStatus::Published);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let payload = TodoPayload {
            status: Some("Archived".to_string()),
            ..valid_payload()
        };
        let err = validate_payload(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "status must be one of Draft, Scheduled, Published"
        );
    }

    #[test]
    fn due_date_accepts_rfc3339() {
        let payload = TodoPayload {
            due_date: Some("2025-03-05T14:30:00Z".to_string()),
            ..valid_payload()
        };
        let new_todo = validate_payload(payload).unwrap();
        assert_eq!(
            new_todo.due_date,
            Utc.with_ymd_and_hms(2025, 3, 5, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn due_date_accepts_offset_datetimes() {
        let parsed = parse_due_date("2025-03-05T14:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 5, 12, 30, 0).unwrap());
    }

    #[test]
    fn garbage_due_date_is_rejected() {
        let payload = TodoPayload {
            due_date: Some("next tuesday".to_string()),
            ..valid_payload()
        };
        let err = validate_payload(payload).unwrap_err();
        assert_eq!(err.to_string(), "dueDate must be a valid date");
    }
}
