use std::future::Future;

use crate::domain::{chat::value_objects::ChatInput, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    /// Stateless: the caller resends the whole history on every message.
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<String, CoreError>> + Send;
}
