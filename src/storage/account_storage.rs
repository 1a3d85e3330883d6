use crate::models::Account;
use crate::storage::Storage;
use crate::types::AccountId;
use std::collections::BTreeMap;

/// In-memory account book for a single run.
///
/// Keyed by a `BTreeMap`: account IDs only ever increase, so key order is also opening order.
#[derive(Debug, Default)]
pub struct AccountStorage {
    accounts: BTreeMap<AccountId, Account>
}

impl AccountStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for AccountStorage {
    fn insert(&mut self, account: Account) {
        self.accounts.insert(account.account_id(), account);
    }

    fn get(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.get(&account_id)
    }

    fn get_mut(&mut self, account_id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&account_id)
    }

    fn account_ids(&self) -> Vec<AccountId> {
        self.accounts.keys().copied().collect()
    }
}
