use crate::types::AccountId;

pub const FIRST_ACCOUNT_ID: AccountId = 1000;

/// Hands out account IDs in strictly increasing order.
///
/// `peek` and `advance` are separate so an ID is only used up once an account
/// was actually created with it.
#[derive(Debug, Clone)]
pub struct AccountSequence {
    next: Option<AccountId>
}

impl AccountSequence {
    pub fn starting_at(first: AccountId) -> Self {
        Self { next: Some(first) }
    }

    /// The ID the next account will receive, `None` once exhausted.
    pub fn peek(&self) -> Option<AccountId> {
        self.next
    }

    pub fn advance(&mut self) {
        self.next = self.next.and_then(|account_id| account_id.checked_add(1));
    }
}

impl Default for AccountSequence {
    fn default() -> Self {
        Self::starting_at(FIRST_ACCOUNT_ID)
    }
}
