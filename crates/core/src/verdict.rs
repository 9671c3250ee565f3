//! Proctor verdict constants and validation.
//!
//! Defines the valid integrity-status values a proctor may assign at
//! verification and the bounds for proctor ratings, used by both the DB and
//! API layers.

/// No integrity concerns were observed.
pub const INTEGRITY_CLEAR: &str = "clear";

/// Minor flags were raised and reviewed without affecting the verdict.
pub const INTEGRITY_MINOR_FLAGS_REVIEWED: &str = "minor_flags_reviewed";

/// Major integrity flags stand against the recording.
pub const INTEGRITY_MAJOR_FLAGS: &str = "major_flags";

/// All valid integrity status values.
pub const VALID_INTEGRITY_STATUSES: &[&str] = &[
    INTEGRITY_CLEAR,
    INTEGRITY_MINOR_FLAGS_REVIEWED,
    INTEGRITY_MAJOR_FLAGS,
];

/// Inclusive bounds for a proctor rating.
pub const PROCTOR_RATING_MIN: f64 = 0.0;
pub const PROCTOR_RATING_MAX: f64 = 5.0;

/// Validate that an integrity status string is one of the accepted values.
pub fn validate_integrity_status(status: &str) -> Result<(), String> {
    if VALID_INTEGRITY_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid integrity status '{status}'. Must be one of: {}",
            VALID_INTEGRITY_STATUSES.join(", ")
        ))
    }
}

/// Validate that a proctor rating is a finite number within bounds.
pub fn validate_proctor_rating(rating: f64) -> Result<(), String> {
    if rating.is_finite() && (PROCTOR_RATING_MIN..=PROCTOR_RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(format!(
            "Invalid proctor rating {rating}. Must be between {PROCTOR_RATING_MIN} and {PROCTOR_RATING_MAX}"
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_integrity_statuses_accepted() {
        assert!(validate_integrity_status(INTEGRITY_CLEAR).is_ok());
        assert!(validate_integrity_status(INTEGRITY_MINOR_FLAGS_REVIEWED).is_ok());
        assert!(validate_integrity_status(INTEGRITY_MAJOR_FLAGS).is_ok());
    }

    #[test]
    fn test_invalid_integrity_status_rejected() {
        let result = validate_integrity_status("suspicious");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid integrity status"));
    }

    #[test]
    fn test_empty_integrity_status_rejected() {
        assert!(validate_integrity_status("").is_err());
    }

    #[test]
    fn test_integrity_status_is_case_sensitive() {
        assert!(validate_integrity_status("Clear").is_err());
    }

    #[test]
    fn test_rating_bounds_accepted() {
        assert!(validate_proctor_rating(0.0).is_ok());
        assert!(validate_proctor_rating(2.5).is_ok());
        assert!(validate_proctor_rating(5.0).is_ok());
    }

    #[test]
    fn test_rating_out_of_bounds_rejected() {
        assert!(validate_proctor_rating(-0.1).is_err());
        assert!(validate_proctor_rating(5.1).is_err());
    }

    #[test]
    fn test_non_finite_rating_rejected() {
        assert!(validate_proctor_rating(f64::NAN).is_err());
        assert!(validate_proctor_rating(f64::INFINITY).is_err());
    }

    #[test]
    fn test_integrity_statuses_complete() {
        assert_eq!(VALID_INTEGRITY_STATUSES.len(), 3);
    }
}
