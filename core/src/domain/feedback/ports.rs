use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    feedback::{entities::Feedback, value_objects::SubmitFeedbackInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait FeedbackRepository: Send + Sync {
    fn create_feedback(
        &self,
        feedback: Feedback,
    ) -> impl Future<Output = Result<Feedback, CoreError>> + Send;

    fn list_feedback(&self) -> impl Future<Output = Result<Vec<Feedback>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedbackService: Send + Sync {
    fn submit_feedback(
        &self,
        identity: Option<Identity>,
        input: SubmitFeedbackInput,
    ) -> impl Future<Output = Result<Feedback, CoreError>> + Send;

    fn get_feedback(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Feedback>, CoreError>> + Send;
}
