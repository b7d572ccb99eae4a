//! Testimonial rating rules.

use crate::error::CoreError;

/// Highest rating a testimonial can carry.
pub const MAX_RATING: f64 = 5.0;

/// Validate a testimonial rating: 0 to 5 inclusive, in half-star steps.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between 0 and {MAX_RATING} (got {rating})"
        )));
    }
    if (rating * 2.0).fract() != 0.0 {
        return Err(CoreError::Validation(format!(
            "Rating must be a multiple of 0.5 (got {rating})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn whole_and_half_steps_accepted() {
        for rating in [0.0, 0.5, 3.0, 4.5, 5.0] {
            assert!(validate_rating(rating).is_ok(), "{rating} should be valid");
        }
    }

    #[test]
    fn out_of_range_rejected() {
        assert_matches!(validate_rating(-0.5), Err(CoreError::Validation(_)));
        assert_matches!(validate_rating(5.5), Err(CoreError::Validation(_)));
        assert_matches!(validate_rating(f64::NAN), Err(CoreError::Validation(_)));
    }

    #[test]
    fn non_half_step_rejected() {
        assert_matches!(validate_rating(4.3), Err(CoreError::Validation(_)));
    }
}
