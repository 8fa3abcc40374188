use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    chef::{entities::ChefProfile, ports::ChefRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::chefs::{ActiveModel as ChefActiveModel, Column as ChefColumn, Entity as ChefEntity};

#[derive(Debug, Clone)]
pub struct PostgresChefRepository {
    pub db: DatabaseConnection,
}

impl PostgresChefRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ChefRepository for PostgresChefRepository {
    async fn list_chefs(&self) -> Result<Vec<ChefProfile>, CoreError> {
        let chefs = ChefEntity::find()
            .order_by_desc(ChefColumn::Rating)
            .order_by_asc(ChefColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list chefs: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ChefProfile::from)
            .collect::<Vec<ChefProfile>>();

        Ok(chefs)
    }

    async fn get_by_id(&self, chef_id: Uuid) -> Result<Option<ChefProfile>, CoreError> {
        let chef = ChefEntity::find_by_id(chef_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get chef by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(ChefProfile::from);

        Ok(chef)
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<ChefProfile>, CoreError> {
        let chef = ChefEntity::find()
            .filter(ChefColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get chef by user id: {}", e);
                CoreError::InternalServerError
            })?
            .map(ChefProfile::from);

        Ok(chef)
    }

    async fn create_chef(&self, chef: ChefProfile) -> Result<ChefProfile, CoreError> {
        let created = ChefEntity::insert(ChefActiveModel::try_from(&chef)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create chef: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn update_chef(&self, chef: ChefProfile) -> Result<ChefProfile, CoreError> {
        let updated = ChefEntity::update(ChefActiveModel::try_from(&chef)?)
            .filter(ChefColumn::Id.eq(chef.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update chef: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated.into())
    }
}
