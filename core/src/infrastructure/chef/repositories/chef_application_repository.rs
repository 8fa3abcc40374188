use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    chef::{entities::ChefApplication, ports::ChefApplicationRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::chef_applications::{
    ActiveModel as ApplicationActiveModel, Column as ApplicationColumn,
    Entity as ApplicationEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresChefApplicationRepository {
    pub db: DatabaseConnection,
}

impl PostgresChefApplicationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ChefApplicationRepository for PostgresChefApplicationRepository {
    async fn list_applications(&self) -> Result<Vec<ChefApplication>, CoreError> {
        let applications = ApplicationEntity::find()
            .order_by_desc(ApplicationColumn::AppliedDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list chef applications: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ChefApplication::from)
            .collect::<Vec<ChefApplication>>();

        Ok(applications)
    }

    async fn get_by_id(&self, application_id: Uuid) -> Result<Option<ChefApplication>, CoreError> {
        let application = ApplicationEntity::find_by_id(application_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get chef application: {}", e);
                CoreError::InternalServerError
            })?
            .map(ChefApplication::from);

        Ok(application)
    }

    async fn create_application(
        &self,
        application: ChefApplication,
    ) -> Result<ChefApplication, CoreError> {
        let created = ApplicationEntity::insert(ApplicationActiveModel::from(application))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create chef application: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn update_application(
        &self,
        application: ChefApplication,
    ) -> Result<ChefApplication, CoreError> {
        let application_id = application.id;
        let updated = ApplicationEntity::update(ApplicationActiveModel::from(application))
            .filter(ApplicationColumn::Id.eq(application_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update chef application: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated.into())
    }
}
