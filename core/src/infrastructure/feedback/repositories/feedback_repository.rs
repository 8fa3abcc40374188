use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    feedback::{entities::Feedback, ports::FeedbackRepository},
};
use crate::entity::feedback::{
    ActiveModel as FeedbackActiveModel, Column as FeedbackColumn, Entity as FeedbackEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresFeedbackRepository {
    pub db: DatabaseConnection,
}

impl PostgresFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FeedbackRepository for PostgresFeedbackRepository {
    async fn create_feedback(&self, feedback: Feedback) -> Result<Feedback, CoreError> {
        let created = FeedbackEntity::insert(FeedbackActiveModel {
            id: Set(feedback.id),
            user_id: Set(feedback.user_id),
            username: Set(feedback.username),
            rating: Set(feedback.rating),
            accuracy_score: Set(feedback.accuracy_score),
            comment: Set(feedback.comment),
            scan_id: Set(feedback.scan_id),
            created_at: Set(feedback.timestamp.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to store feedback: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created.into())
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, CoreError> {
        let feedback = FeedbackEntity::find()
            .order_by_desc(FeedbackColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list feedback: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Feedback::from)
            .collect::<Vec<Feedback>>();

        Ok(feedback)
    }
}
