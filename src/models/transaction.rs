use chrono::{DateTime, Local};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::{Account, TransactionType};
use crate::types::{AccountId, Monetary, TransactionId};

const TRANSACTION_ID_RANGE: std::ops::RangeInclusive<TransactionId> = 100_000..=999_999;

/// An immutable record of one balance-affecting event.
///
/// Only an [`Account`] creates these, after it has already validated and applied
/// the change. The `amount` is always the positive magnitude; the direction is
/// implied by the `transaction_type`.
#[derive(Debug, Clone)]
pub struct Transaction {
    transaction_id: TransactionId,
    account_id: AccountId,
    timestamp: DateTime<Local>,
    amount: Monetary,
    transaction_type: TransactionType,
    description: String
}

impl Transaction {
    /// Creates a record stamped with the current local time and a random six digit ID.
    ///
    /// IDs are not checked for collisions.
    pub(crate) fn new(account_id: AccountId, amount: Monetary, transaction_type: TransactionType, description: String) -> Self {
        Self {
            transaction_id: rand::random_range(TRANSACTION_ID_RANGE),
            account_id,
            timestamp: Local::now(),
            amount,
            transaction_type,
            description
        }
    }

    /// Hook run before the record is appended. Validation already happened in the account.
    pub fn execute(&self, _account: &Account) -> bool {
        true
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn amount(&self) -> Monetary {
        self.amount
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount with the sign it had on the balance: withdrawals negative, everything else positive.
    #[cfg(test)]
    pub fn signed_amount(&self) -> Monetary {
        match self.transaction_type {
            TransactionType::Withdraw => Monetary::from(-self.amount.as_decimal()),
            TransactionType::Deposit | TransactionType::Interest => self.amount
        }
    }
}

impl Display for Transaction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "[{}] ID: {} | Type: {} | Amount: ${} | Desc: {}",
            self.timestamp().format("%Y-%m-%d %H:%M:%S"),
            self.transaction_id(),
            self.transaction_type().as_str().to_uppercase(),
            self.amount(),
            self.description()
        )
    }
}
