use crate::models::TransactionType;
use crate::types::{AccountId, Monetary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Amount [${amount}] must be positive for {transaction_type} on account [{account_id}]")]
    NonPositiveAmount {
        account_id: AccountId,
        transaction_type: TransactionType,
        amount: Monetary
    },
    #[error("Initial deposit [${amount}] must not be negative for account [{account_id}]")]
    NegativeInitialDeposit {
        account_id: AccountId,
        amount: Monetary
    },
    #[error("Transaction denied: insufficient funds in savings account [{account_id}] for withdrawal of [${amount}]")]
    InsufficientFunds {
        account_id: AccountId,
        amount: Monetary
    },
    #[error("Transaction denied: withdrawal of [${amount}] exceeds overdraft limit of [${overdraft_limit}] on account [{account_id}]")]
    OverdraftExceeded {
        account_id: AccountId,
        amount: Monetary,
        overdraft_limit: Monetary
    },
    #[error("Numeric overflow occurred for {transaction_type} on account [{account_id}]")]
    Overflow {
        account_id: AccountId,
        transaction_type: TransactionType
    }
}

impl AccountError {
    pub fn non_positive_amount(account_id: AccountId, transaction_type: TransactionType, amount: Monetary) -> Self {
        Self::NonPositiveAmount { account_id, transaction_type, amount }
    }

    pub fn overflow(account_id: AccountId, transaction_type: TransactionType) -> Self {
        Self::Overflow { account_id, transaction_type }
    }
}

#[derive(Debug, Error)]
#[error("Unknown account type [{0}], expected 'Saving' or 'Current'")]
pub struct UnknownAccountType(pub String);
