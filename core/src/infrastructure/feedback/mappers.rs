use crate::{domain::feedback::entities::Feedback, entity::feedback};

impl From<&feedback::Model> for Feedback {
    fn from(model: &feedback::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            username: model.username.clone(),
            rating: model.rating,
            accuracy_score: model.accuracy_score,
            comment: model.comment.clone(),
            scan_id: model.scan_id,
            timestamp: model.created_at.to_utc(),
        }
    }
}

impl From<feedback::Model> for Feedback {
    fn from(model: feedback::Model) -> Self {
        Self::from(&model)
    }
}
