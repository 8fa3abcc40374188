use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub struct SubmitFeedbackInput {
    pub rating: i32,
    pub accuracy_score: i32,
    pub comment: String,
    pub scan_id: Option<Uuid>,
}

impl SubmitFeedbackInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::Invalid("rating must be between 1 and 5".to_string()));
        }
        if !(0..=5).contains(&self.accuracy_score) {
            return Err(CoreError::Invalid(
                "accuracy score must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rating: i32, accuracy_score: i32) -> SubmitFeedbackInput {
        SubmitFeedbackInput {
            rating,
            accuracy_score,
            comment: String::new(),
            scan_id: None,
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(input(1, 0).validate().is_ok());
        assert!(input(5, 5).validate().is_ok());
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert!(matches!(input(0, 3).validate(), Err(CoreError::Invalid(_))));
        assert!(matches!(input(6, 3).validate(), Err(CoreError::Invalid(_))));
        assert!(matches!(input(3, -1).validate(), Err(CoreError::Invalid(_))));
        assert!(matches!(input(3, 6).validate(), Err(CoreError::Invalid(_))));
    }
}
