//! Request DTOs for the birthdays API
//!
//! Defines the structure of incoming HTTP request bodies.

use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for PUT /hello/:username
///
/// # Fields
/// - `date_of_birth`: the user's date of birth as `YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
pub struct PutUserRequest {
    /// The date of birth to store
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: NaiveDate,
}

impl PutUserRequest {
    /// Validates the request data against a given "today".
    ///
    /// A date of birth must lie strictly in the past; today itself is rejected.
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self, today: NaiveDate) -> Option<String> {
        if self.date_of_birth >= today {
            return Some("date of birth must be in the past".to_string());
        }
        None
    }
}

/// Validates a username from the request path.
///
/// Usernames must be non-empty and contain only ASCII letters.
/// Returns an error message if validation fails, None if valid.
pub fn validate_username(username: &str) -> Option<String> {
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some("username must contain letters only".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_put_request_deserialize() {
        let json = r#"{"dateOfBirth": "2000-05-05"}"#;
        let req: PutUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.date_of_birth, date(2000, 5, 5));
    }

    #[test]
    fn test_put_request_rejects_malformed_date() {
        let json = r#"{"dateOfBirth": "05/05/2000"}"#;
        assert!(serde_json::from_str::<PutUserRequest>(json).is_err());
    }

    #[test]
    fn test_validate_past_date() {
        let req = PutUserRequest {
            date_of_birth: date(2000, 5, 5),
        };
        assert!(req.validate(date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_validate_rejects_today() {
        let req = PutUserRequest {
            date_of_birth: date(2024, 1, 1),
        };
        assert!(req.validate(date(2024, 1, 1)).is_some());
    }

    #[test]
    fn test_validate_rejects_future_date() {
        let req = PutUserRequest {
            date_of_birth: date(2030, 1, 1),
        };
        assert!(req.validate(date(2024, 1, 1)).is_some());
    }

    #[test]
    fn test_validate_username_valid() {
        assert!(validate_username("joe").is_none());
        assert!(validate_username("JoeBloggs").is_none());
    }

    #[test]
    fn test_validate_username_rejects_empty() {
        assert!(validate_username("").is_some());
    }

    #[test]
    fn test_validate_username_rejects_non_letters() {
        assert!(validate_username("joe42").is_some());
        assert!(validate_username("joe bloggs").is_some());
        assert!(validate_username("joe-bloggs").is_some());
    }
}
