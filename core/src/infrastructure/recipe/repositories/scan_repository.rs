use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Scan, ports::ScanRepository},
};
use crate::entity::scans::{ActiveModel as ScanActiveModel, Entity as ScanEntity};

#[derive(Debug, Clone)]
pub struct PostgresScanRepository {
    pub db: DatabaseConnection,
}

impl PostgresScanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ScanRepository for PostgresScanRepository {
    async fn create_scan(&self, scan: Scan) -> Result<Scan, CoreError> {
        let created = ScanEntity::insert(ScanActiveModel {
            id: Set(scan.id),
            user_id: Set(scan.user_id),
            recipe_count: Set(scan.recipe_count),
            meal_type: Set(scan.meal_type.as_str().to_string()),
            created_at: Set(scan.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to record scan: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created.into())
    }

    async fn count_scans(&self) -> Result<u64, CoreError> {
        ScanEntity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count scans: {}", e);
            CoreError::InternalServerError
        })
    }
}
