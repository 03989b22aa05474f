//! Common validation utilities for ticket and form inputs.

use chrono::{DateTime, Duration, Utc};
use validator::ValidationError;

/// Maximum allowed future timestamp tolerance in seconds (5 minutes for clock skew).
const MAX_FUTURE_TOLERANCE_SECS: i64 = 300;

/// Validates that a response deadline does not fall after the solution deadline.
///
/// Deadlines arrive pre-computed from the SLA engine; an inverted pair means the
/// upstream record is corrupt and the form must be rejected.
pub fn validate_deadline_order(
    response_deadline: DateTime<Utc>,
    solution_deadline: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if response_deadline <= solution_deadline {
        Ok(())
    } else {
        let mut err = ValidationError::new("deadline_order");
        err.message = Some("Response deadline must not be after solution deadline".into());
        Err(err)
    }
}

/// Validates that an event timestamp (first response, resolution) is not in the
/// future beyond clock-skew tolerance.
pub fn validate_not_future(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ValidationError> {
    let future_limit = now + Duration::seconds(MAX_FUTURE_TOLERANCE_SECS);
    if timestamp <= future_limit {
        Ok(())
    } else {
        let mut err = ValidationError::new("timestamp_future");
        err.message = Some("Timestamp cannot be in the future".into());
        Err(err)
    }
}

/// Validates that a ticket subject is non-blank after trimming.
///
/// Length bounds are handled by `validator` derive attributes; this catches
/// whitespace-only subjects the length check lets through.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap()
    }

    // Deadline order tests
    #[test]
    fn test_validate_deadline_order_ok() {
        assert!(validate_deadline_order(ts(10), ts(18)).is_ok());
    }

    #[test]
    fn test_validate_deadline_order_equal() {
        // Equal deadlines are degenerate but not inverted
        assert!(validate_deadline_order(ts(12), ts(12)).is_ok());
    }

    #[test]
    fn test_validate_deadline_order_inverted() {
        let err = validate_deadline_order(ts(18), ts(10)).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Response deadline must not be after solution deadline"
        );
    }

    // Future timestamp tests
    #[test]
    fn test_validate_not_future_past() {
        assert!(validate_not_future(ts(10), ts(12)).is_ok());
    }

    #[test]
    fn test_validate_not_future_within_skew() {
        let now = ts(12);
        let slight_future = now + Duration::minutes(4);
        assert!(validate_not_future(slight_future, now).is_ok());
    }

    #[test]
    fn test_validate_not_future_beyond_skew() {
        let now = ts(12);
        let far_future = now + Duration::minutes(10);
        let err = validate_not_future(far_future, now).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Timestamp cannot be in the future"
        );
    }

    // Blank value tests
    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Impressora parou").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }
}
