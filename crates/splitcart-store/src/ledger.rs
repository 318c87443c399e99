//! Per-user credit ledger.
//!
//! Credit is an internal prepaid balance, mutated only by engine
//! operations: order creation debits, matching debits, cancellation and
//! expiry refund. All mutations are atomic: either the full operation
//! succeeds or the balance is unchanged, and a balance never goes
//! negative.

use std::collections::HashMap;

use splitcart_types::{Result, SplitcartError, UserId};

/// The source of truth for all credit balances.
#[derive(Debug, Default)]
pub struct Ledger {
    balances: HashMap<UserId, i64>,
}

impl Ledger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Top up a user's balance.
    pub fn deposit(&mut self, user_id: UserId, amount: i64) {
        *self.balances.entry(user_id).or_default() += amount;
    }

    /// Charge a user. Validates before mutating.
    ///
    /// # Errors
    /// Returns `InsufficientCredit` if the balance cannot cover `amount`.
    pub fn debit(&mut self, user_id: UserId, amount: i64) -> Result<()> {
        let balance = self.balances.entry(user_id).or_default();
        if *balance < amount {
            return Err(SplitcartError::InsufficientCredit {
                needed: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }

    /// Refund a user (cancellation or expiry).
    pub fn credit(&mut self, user_id: UserId, amount: i64) {
        *self.balances.entry(user_id).or_default() += amount;
    }

    /// Current balance. Zero for users that never held credit.
    #[must_use]
    pub fn balance(&self, user_id: UserId) -> i64 {
        self.balances.get(&user_id).copied().unwrap_or(0)
    }

    /// Sum of all balances. Audit helper: debits and matching refunds
    /// must keep this value consistent with deposits.
    #[must_use]
    pub fn total_supply(&self) -> i64 {
        self.balances.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_increases_balance() {
        let mut ledger = Ledger::new();
        let user = UserId::new();
        ledger.deposit(user, 20000);
        assert_eq!(ledger.balance(user), 20000);
    }

    #[test]
    fn debit_reduces_balance() {
        let mut ledger = Ledger::new();
        let user = UserId::new();
        ledger.deposit(user, 20000);
        ledger.debit(user, 11000).unwrap();
        assert_eq!(ledger.balance(user), 9000);
    }

    #[test]
    fn debit_insufficient_fails_unchanged() {
        let mut ledger = Ledger::new();
        let user = UserId::new();
        ledger.deposit(user, 5000);
        let err = ledger.debit(user, 11000).unwrap_err();
        assert!(matches!(
            err,
            SplitcartError::InsufficientCredit {
                needed: 11000,
                available: 5000,
            }
        ));
        assert_eq!(ledger.balance(user), 5000);
    }

    #[test]
    fn exact_balance_debits_to_zero() {
        let mut ledger = Ledger::new();
        let user = UserId::new();
        ledger.deposit(user, 11000);
        ledger.debit(user, 11000).unwrap();
        assert_eq!(ledger.balance(user), 0);
    }

    #[test]
    fn credit_refunds() {
        let mut ledger = Ledger::new();
        let user = UserId::new();
        ledger.deposit(user, 20000);
        ledger.debit(user, 14000).unwrap();
        ledger.credit(user, 14000);
        assert_eq!(ledger.balance(user), 20000);
    }

    #[test]
    fn unknown_user_has_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(UserId::new()), 0);
    }

    #[test]
    fn total_supply_sums_users() {
        let mut ledger = Ledger::new();
        ledger.deposit(UserId::new(), 10000);
        ledger.deposit(UserId::new(), 5000);
        assert_eq!(ledger.total_supply(), 15000);
    }
}
