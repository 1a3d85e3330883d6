mod account;
mod errors;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use account::{Account, AccountKind};
pub use errors::{AccountError, UnknownAccountType};
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransactionType {
    Deposit,
    Withdraw,
    Interest
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdraw => "withdraw",
            TransactionType::Interest => "interest"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// The two account products a user can open.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AccountType {
    Saving,
    Current
}

impl AccountType {
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Saving => "Saving",
            AccountType::Current => "Current"
        }
    }
}

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("saving") {
            Ok(AccountType::Saving)
        } else if value.eq_ignore_ascii_case("current") {
            Ok(AccountType::Current)
        } else {
            Err(UnknownAccountType(value.to_string()))
        }
    }
}
