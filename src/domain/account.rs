use std::fmt;

/// A customer account. Balances are kept in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: u32,
    pub holder: String,
    pub balance: i64,
}

impl Account {
    pub fn new(id: u32, holder: impl Into<String>, balance: i64) -> Self {
        Self {
            id,
            holder: holder.into(),
            balance,
        }
    }
}

/// A request to move money. Amounts are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit { account: u32, amount: i64 },
    Withdrawal { account: u32, amount: i64 },
    Transfer { from: u32, to: u32, amount: i64 },
}

impl TransactionKind {
    pub fn amount(&self) -> i64 {
        match *self {
            TransactionKind::Deposit { amount, .. }
            | TransactionKind::Withdrawal { amount, .. }
            | TransactionKind::Transfer { amount, .. } => amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit { account, amount } => {
                write!(f, "deposit {} into #{}", Cents(*amount), account)
            }
            TransactionKind::Withdrawal { account, amount } => {
                write!(f, "withdraw {} from #{}", Cents(*amount), account)
            }
            TransactionKind::Transfer { from, to, amount } => {
                write!(f, "transfer {} from #{} to #{}", Cents(*amount), from, to)
            }
        }
    }
}

/// An applied transaction kept in the ledger history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: u32,
    pub kind: TransactionKind,
}

/// Formats an amount in cents as dollars, e.g. `$12.05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cents(pub i64);

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}
