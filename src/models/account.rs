use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::errors::AccountError;
use crate::models::{AccountType, Transaction, TransactionType};
use crate::types::{AccountId, Monetary};

/// 0.02, applied to savings balances.
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);
/// 0.005, applied to positive current account balances.
pub const CURRENT_ACCOUNT_INTEREST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);
/// 500.00
pub const DEFAULT_OVERDRAFT_LIMIT: Monetary = Monetary::from_decimal(Decimal::from_parts(500, 0, 0, false, 0));

/// Variant specific terms, fixed when the account is opened.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AccountKind {
    Saving {
        interest_rate: Decimal
    },
    Current {
        overdraft_limit: Monetary
    }
}

impl AccountKind {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Saving { .. } => AccountType::Saving,
            AccountKind::Current { .. } => AccountType::Current
        }
    }
}

impl From<AccountType> for AccountKind {
    fn from(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Saving => AccountKind::Saving { interest_rate: DEFAULT_INTEREST_RATE },
            AccountType::Current => AccountKind::Current { overdraft_limit: DEFAULT_OVERDRAFT_LIMIT }
        }
    }
}

/// A single savings or current account.
///
/// The balance only changes through [`deposit`](Account::deposit),
/// [`withdraw`](Account::withdraw) and [`calculate_interest`](Account::calculate_interest),
/// and every change appends exactly one [`Transaction`]. A failed operation leaves
/// both the balance and the log untouched.
#[derive(Debug, Clone)]
pub struct Account {
    account_id: AccountId,
    kind: AccountKind,
    balance: Monetary,
    opened_date: NaiveDate,
    /// Append-only, in the order the changes happened.
    transactions: Vec<Transaction>
}

impl Account {
    /// Opens an account, recording an "Initial Deposit" when the deposit is positive.
    ///
    /// # Errors
    /// Returns `AccountError::NegativeInitialDeposit` if `initial_deposit` is below zero.
    pub fn open(account_id: AccountId, kind: AccountKind, initial_deposit: Monetary) -> Result<Self, AccountError> {
        if initial_deposit.is_negative() {
            return Err(AccountError::NegativeInitialDeposit { account_id, amount: initial_deposit })
        }

        let mut account = Self {
            account_id,
            kind,
            balance: initial_deposit,
            opened_date: Local::now().date_naive(),
            transactions: Vec::new()
        };

        if initial_deposit.is_positive() {
            account.record_transaction(initial_deposit, TransactionType::Deposit, "Initial Deposit".to_string());
        }

        Ok(account)
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    pub fn balance(&self) -> Monetary {
        self.balance
    }

    pub fn opened_date(&self) -> NaiveDate {
        self.opened_date
    }

    pub fn get_transaction_history(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn deposit(&mut self, amount: Monetary) -> Result<(), AccountError> {
        self.ensure_positive(amount, TransactionType::Deposit)?;

        self.balance = self.balance.checked_add(amount)
            .ok_or_else(|| AccountError::overflow(self.account_id, TransactionType::Deposit))?;

        self.record_transaction(amount, TransactionType::Deposit, format!("Deposit of {}", amount.as_decimal().normalize()));

        Ok(())
    }

    /// Withdraws under the account's rule.
    ///
    /// Savings accounts never go below zero; current accounts may go down to
    /// minus their overdraft limit, inclusive.
    ///
    /// # Errors
    /// Returns `AccountError` if:
    /// - The amount is zero or negative.
    /// - A savings balance is smaller than the amount.
    /// - A current balance plus overdraft limit is smaller than the amount.
    pub fn withdraw(&mut self, amount: Monetary) -> Result<(), AccountError> {
        self.ensure_positive(amount, TransactionType::Withdraw)?;

        match self.kind {
            AccountKind::Saving { .. } => {
                if self.balance < amount {
                    return Err(AccountError::InsufficientFunds { account_id: self.account_id, amount })
                }
            }
            AccountKind::Current { overdraft_limit } => {
                let max_allowed = self.balance.checked_add(overdraft_limit)
                    .ok_or_else(|| AccountError::overflow(self.account_id, TransactionType::Withdraw))?;

                if max_allowed < amount {
                    return Err(AccountError::OverdraftExceeded { account_id: self.account_id, amount, overdraft_limit })
                }
            }
        }

        self.balance = self.balance.checked_sub(amount)
            .ok_or_else(|| AccountError::overflow(self.account_id, TransactionType::Withdraw))?;

        self.record_transaction(amount, TransactionType::Withdraw, format!("Withdrawal of {}", amount.as_decimal().normalize()));

        Ok(())
    }

    /// Applies one period of interest and returns the amount credited.
    ///
    /// Only a positive balance accrues anything. A zero or overdrawn current
    /// account is not charged a fee; the result is simply zero and no
    /// transaction is recorded.
    pub fn calculate_interest(&mut self) -> Result<Monetary, AccountError> {
        let (rate, description) = match self.kind {
            AccountKind::Saving { interest_rate } => (interest_rate, "Annual Interest Applied"),
            AccountKind::Current { .. } => (CURRENT_ACCOUNT_INTEREST_RATE, "Small Interest Applied")
        };

        if !self.balance.is_positive() {
            return Ok(Monetary::ZERO)
        }

        let interest = self.balance.checked_mul_rate(rate)
            .ok_or_else(|| AccountError::overflow(self.account_id, TransactionType::Interest))?;

        if !interest.is_positive() {
            return Ok(Monetary::ZERO)
        }

        self.balance = self.balance.checked_add(interest)
            .ok_or_else(|| AccountError::overflow(self.account_id, TransactionType::Interest))?;

        self.record_transaction(interest, TransactionType::Interest, description.to_string());

        Ok(interest)
    }

    fn ensure_positive(&self, amount: Monetary, transaction_type: TransactionType) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::non_positive_amount(self.account_id, transaction_type, amount))
        }

        Ok(())
    }

    fn record_transaction(&mut self, amount: Monetary, transaction_type: TransactionType, description: String) {
        let transaction = Transaction::new(self.account_id, amount, transaction_type, description);

        let executed = transaction.execute(self);

        debug!(
            "Transaction [{}]:[{}] of [${}] recorded for account [{}] (executed: {executed}), balance now [${}]",
            transaction.transaction_id(), transaction_type, amount, transaction.account_id(), self.balance
        );

        self.transactions.push(transaction);
    }
}
