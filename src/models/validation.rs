//! Entry-boundary checks shared by both record types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("male + female must equal the total (male {male} + female {female} != total {total})")]
    GenderSumMismatch { male: u32, female: u32, total: u32 },
}

/// Checks `male + female == total` without overflowing.
pub fn check_gender_sum(male: u32, female: u32, total: u32) -> Result<(), ValidationError> {
    if u64::from(male) + u64::from(female) == u64::from(total) {
        Ok(())
    } else {
        Err(ValidationError::GenderSumMismatch {
            male,
            female,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_sum() {
        assert!(check_gender_sum(20, 30, 50).is_ok());
        assert!(check_gender_sum(0, 0, 0).is_ok());
    }

    #[test]
    fn rejects_mismatch_and_names_the_rule() {
        let err = check_gender_sum(20, 31, 50).unwrap_err();
        assert_eq!(
            err,
            ValidationError::GenderSumMismatch {
                male: 20,
                female: 31,
                total: 50
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("male + female must equal the total"));
        assert!(msg.contains("!= total 50"));
    }

    #[test]
    fn large_counts_do_not_wrap() {
        assert!(check_gender_sum(u32::MAX, 1, 0).is_err());
    }
}
