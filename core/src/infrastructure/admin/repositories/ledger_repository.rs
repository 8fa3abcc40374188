use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    admin::{
        entities::{Payout, Transaction},
        ports::LedgerRepository,
    },
    common::entities::app_errors::CoreError,
};
use crate::entity::{
    payouts::{ActiveModel as PayoutActiveModel, Column as PayoutColumn, Entity as PayoutEntity},
    transactions::{
        ActiveModel as TransactionActiveModel, Column as TransactionColumn,
        Entity as TransactionEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresLedgerRepository {
    pub db: DatabaseConnection,
}

impl PostgresLedgerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl LedgerRepository for PostgresLedgerRepository {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        let transactions = TransactionEntity::find()
            .order_by_desc(TransactionColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list transactions: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Transaction::from)
            .collect::<Vec<Transaction>>();

        Ok(transactions)
    }

    async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction, CoreError> {
        let created = TransactionEntity::insert(TransactionActiveModel::from(transaction))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create transaction: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn list_payouts(&self) -> Result<Vec<Payout>, CoreError> {
        let payouts = PayoutEntity::find()
            .order_by_desc(PayoutColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list payouts: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Payout::from)
            .collect::<Vec<Payout>>();

        Ok(payouts)
    }

    async fn get_payout(&self, payout_id: Uuid) -> Result<Option<Payout>, CoreError> {
        let payout = PayoutEntity::find_by_id(payout_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get payout: {}", e);
                CoreError::InternalServerError
            })?
            .map(Payout::from);

        Ok(payout)
    }

    async fn create_payout(&self, payout: Payout) -> Result<Payout, CoreError> {
        let created = PayoutEntity::insert(PayoutActiveModel::from(payout))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create payout: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn update_payout(&self, payout: Payout) -> Result<Payout, CoreError> {
        let payout_id = payout.id;
        let updated = PayoutEntity::update(PayoutActiveModel::from(payout))
            .filter(PayoutColumn::Id.eq(payout_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update payout: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated.into())
    }
}
