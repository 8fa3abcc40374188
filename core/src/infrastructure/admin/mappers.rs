use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    domain::admin::entities::{Payout, Transaction},
    entity::{payouts, transactions},
};

impl From<&transactions::Model> for Transaction {
    fn from(model: &transactions::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind.as_str().into(),
            party: model.party.clone(),
            date: model.date.clone(),
            amount: model.amount,
            status: model.status.as_str().into(),
        }
    }
}

impl From<transactions::Model> for Transaction {
    fn from(model: transactions::Model) -> Self {
        Self::from(&model)
    }
}

impl From<Transaction> for transactions::ActiveModel {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: Set(transaction.id),
            kind: Set(transaction.kind.as_str().to_string()),
            party: Set(transaction.party),
            date: Set(transaction.date),
            amount: Set(transaction.amount),
            status: Set(transaction.status.as_str().to_string()),
            created_at: NotSet,
        }
    }
}

impl From<&payouts::Model> for Payout {
    fn from(model: &payouts::Model) -> Self {
        Self {
            id: model.id,
            chef_name: model.chef_name.clone(),
            amount: model.amount,
            last_payout_date: model.last_payout_date.clone(),
            status: model.status.as_str().into(),
        }
    }
}

impl From<payouts::Model> for Payout {
    fn from(model: payouts::Model) -> Self {
        Self::from(&model)
    }
}

impl From<Payout> for payouts::ActiveModel {
    fn from(payout: Payout) -> Self {
        Self {
            id: Set(payout.id),
            chef_name: Set(payout.chef_name),
            amount: Set(payout.amount),
            last_payout_date: Set(payout.last_payout_date),
            status: Set(payout.status.as_str().to_string()),
            created_at: NotSet,
        }
    }
}
