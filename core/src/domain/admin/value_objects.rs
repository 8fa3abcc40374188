use crate::domain::admin::entities::{TransactionStatus, TransactionType};

pub struct RecordTransactionInput {
    pub kind: TransactionType,
    pub party: String,
    pub amount: i64,
    pub status: TransactionStatus,
}

pub struct CreatePayoutInput {
    pub chef_name: String,
    pub amount: i64,
}
