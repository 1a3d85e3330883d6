use crate::models::{AccountError, UnknownAccountType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid name [{name}]: only letters and spaces are allowed")]
    InvalidName {
        name: String
    },
    #[error(transparent)]
    UnknownAccountType(#[from] UnknownAccountType),
    #[error("Account ID '{account_id}' not found")]
    AccountNotFound {
        account_id: String
    },
    #[error("No account IDs left to assign")]
    SequenceExhausted,
    #[error(transparent)]
    Account(#[from] AccountError)
}
