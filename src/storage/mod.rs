mod account_storage;

use crate::models::Account;
use crate::types::AccountId;

pub use account_storage::AccountStorage;

pub trait Storage {
    fn insert(&mut self, account: Account);
    fn get(&self, account_id: AccountId) -> Option<&Account>;
    fn get_mut(&mut self, account_id: AccountId) -> Option<&mut Account>;
    /// IDs in the order the accounts were opened.
    fn account_ids(&self) -> Vec<AccountId>;
}
