//! Account balances and the transactions applied to them.

pub mod entity;
pub mod error;

pub use error::*;

use tracing::{info, instrument, warn};

use crate::domain::{Account, TransactionKind, TransactionRecord};
use crate::store_framework::KeyedEntityStore;

/// Outcome of [`Ledger::process_batch`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Ids assigned to the applied transactions, in input order.
    pub applied: Vec<u32>,
    /// Input position and reason of every rejected transaction.
    pub rejected: Vec<(usize, TransactionError)>,
}

/// Accounts plus the history of applied transactions.
#[derive(Debug)]
pub struct Ledger {
    accounts: KeyedEntityStore<Account>,
    history: KeyedEntityStore<TransactionRecord>,
    next_id: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: KeyedEntityStore::new(),
            history: KeyedEntityStore::new(),
            next_id: 1,
        }
    }

    /// Fixed sample accounts used by the demo.
    pub fn sample() -> Result<Self, TransactionError> {
        let mut ledger = Self::new();
        ledger.open_account(Account::new(1, "Alice", 50_000))?;
        ledger.open_account(Account::new(2, "Bob", 12_500))?;
        ledger.open_account(Account::new(3, "Carol", 0))?;
        Ok(ledger)
    }

    #[instrument(fields(account = account.id, holder = %account.holder), skip(self, account))]
    pub fn open_account(&mut self, account: Account) -> Result<(), TransactionError> {
        self.accounts.insert(account)?;
        info!("Account opened");
        Ok(())
    }

    pub fn account(&self, id: u32) -> Result<&Account, TransactionError> {
        Ok(self.accounts.get_by_id(&id)?)
    }

    pub fn balance(&self, id: u32) -> Result<i64, TransactionError> {
        Ok(self.account(id)?.balance)
    }

    /// Accounts ordered by id.
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts = self.accounts.list_all();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    /// Applied transactions ordered by id.
    pub fn history(&self) -> Vec<TransactionRecord> {
        let mut history = self.history.list_all();
        history.sort_by_key(|record| record.id);
        history
    }

    /// Validates and applies one transaction, returning its id.
    #[instrument(fields(transaction = %kind), skip(self, kind))]
    pub fn process(&mut self, kind: TransactionKind) -> Result<u32, TransactionError> {
        let amount = kind.amount();
        if amount <= 0 {
            return Err(TransactionError::InvalidAmount(amount));
        }

        match kind {
            TransactionKind::Deposit { account, amount } => {
                let current = self.balance(account)?;
                let updated = current
                    .checked_add(amount)
                    .ok_or(TransactionError::BalanceOverflow(account))?;
                self.accounts.get_by_id_mut(&account)?.balance = updated;
            }
            TransactionKind::Withdrawal { account, amount } => {
                let current = self.balance(account)?;
                Self::ensure_funds(account, current, amount)?;
                self.accounts.get_by_id_mut(&account)?.balance = current - amount;
            }
            TransactionKind::Transfer { from, to, amount } => {
                if from == to {
                    return Err(TransactionError::SameAccount(from));
                }
                let source = self.balance(from)?;
                let destination = self.balance(to)?;
                Self::ensure_funds(from, source, amount)?;
                let credited = destination
                    .checked_add(amount)
                    .ok_or(TransactionError::BalanceOverflow(to))?;
                self.accounts.get_by_id_mut(&from)?.balance = source - amount;
                self.accounts.get_by_id_mut(&to)?.balance = credited;
            }
        }

        let id = self.next_id;
        self.history.insert(TransactionRecord { id, kind })?;
        self.next_id += 1;
        info!(transaction_id = id, "Transaction applied");
        Ok(id)
    }

    /// Processes every transaction, skipping and reporting the rejected ones.
    pub fn process_batch(
        &mut self,
        kinds: impl IntoIterator<Item = TransactionKind>,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for (index, kind) in kinds.into_iter().enumerate() {
            match self.process(kind) {
                Ok(id) => summary.applied.push(id),
                Err(e) => {
                    warn!(index, error = %e, "Transaction rejected");
                    summary.rejected.push((index, e));
                }
            }
        }
        summary
    }

    fn ensure_funds(account: u32, available: i64, requested: i64) -> Result<(), TransactionError> {
        if available < requested {
            return Err(TransactionError::InsufficientFunds {
                account,
                requested,
                available,
            });
        }
        Ok(())
    }
}
