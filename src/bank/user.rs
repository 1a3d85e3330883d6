use tracing::info;

use crate::bank::{AccountSequence, UserError};
use crate::models::{Account, AccountKind, AccountType};
use crate::storage::{AccountStorage, Storage};
use crate::types::{AccountId, Monetary};

/// The single customer of a session and the accounts they opened.
///
/// The user also owns the account ID sequence, so IDs are unique for as long
/// as the user exists.
#[derive(Debug)]
pub struct User<S: Storage = AccountStorage> {
    name: String,
    accounts: S,
    sequence: AccountSequence
}

impl User {
    /// Creates a user with empty in-memory storage and IDs starting at 1000.
    ///
    /// # Errors
    /// Returns `UserError::InvalidName` unless the trimmed name is non-empty and
    /// made of ASCII letters and whitespace only.
    pub fn new(name: &str) -> Result<Self, UserError> {
        Self::with_storage(name, AccountStorage::new(), AccountSequence::default())
    }
}

impl<S: Storage> User<S> {
    pub fn with_storage(name: &str, accounts: S, sequence: AccountSequence) -> Result<Self, UserError> {
        let name = name.trim();

        if !is_valid_name(name) {
            return Err(UserError::InvalidName { name: name.to_string() })
        }

        Ok(Self {
            name: name.to_string(),
            accounts,
            sequence
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opens a `saving` or `current` account (case-insensitive) and returns its new ID.
    ///
    /// Nothing is created, and no ID is used up, when the type is unknown or
    /// the deposit is negative.
    pub fn open_account(&mut self, account_type: &str, initial_deposit: Monetary) -> Result<AccountId, UserError> {
        self.open_account_of_type(account_type.parse()?, initial_deposit)
    }

    /// Same as [`open_account`](User::open_account) for a type that is already parsed.
    pub fn open_account_of_type(&mut self, account_type: AccountType, initial_deposit: Monetary) -> Result<AccountId, UserError> {
        let account_id = self.sequence.peek().ok_or(UserError::SequenceExhausted)?;

        let account = Account::open(account_id, AccountKind::from(account_type), initial_deposit)?;

        self.sequence.advance();
        self.accounts.insert(account);

        info!("Opened {} account [{}] for [{}] with initial deposit [${}]", account_type.label(), account_id, self.name, initial_deposit);

        Ok(account_id)
    }

    pub fn get_account(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    pub fn get_account_mut(&mut self, account_id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(account_id)
    }

    pub fn get_all_account_ids(&self) -> Vec<AccountId> {
        self.accounts.account_ids()
    }

    /// Resolves an ID typed by the user to an account that exists.
    pub fn find_account_id(&self, raw: &str) -> Result<AccountId, UserError> {
        raw.trim().parse::<AccountId>().ok()
            .filter(|account_id| self.accounts.get(*account_id).is_some())
            .ok_or_else(|| UserError::AccountNotFound { account_id: raw.trim().to_string() })
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|character| character.is_ascii_alphabetic() || character.is_whitespace())
}
