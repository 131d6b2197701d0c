//! Bank account with a private balance.

use std::fmt;

use crate::capsule::{CapabilityModule, Capsule};

/// A bank account whose balance can only be changed by deposits and
/// withdrawals and only be seen through [`check_balance`](Self::check_balance).
///
/// Withdrawals are not checked against the balance, so it may go negative.
///
/// # Examples
///
/// ```rust
/// use capcell::capsule::CapabilityModule;
/// use capcell::module::Account;
///
/// let mut account = Account::create();
/// assert_eq!(account.deposit(100.0), 100.0);
/// assert_eq!(account.withdraw(30.0), 70.0);
/// assert_eq!(account.check_balance().to_string(), "Account has a balance of 70");
/// ```
pub struct Account {
    balance: Capsule<f64>,
}

impl Account {
    /// Adds `amount` to the balance and returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> f64 {
        let balance = *self.balance.modify(|balance| *balance += amount);
        tracing::trace!(module = Self::NAME, amount, balance, "deposit");
        balance
    }

    /// Takes `amount` from the balance and returns the new balance.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        let balance = *self.balance.modify(|balance| *balance -= amount);
        tracing::trace!(module = Self::NAME, amount, balance, "withdraw");
        balance
    }

    /// Reports the current balance without changing it.
    #[must_use]
    pub fn check_balance(&self) -> BalanceStatement {
        self.balance.gets(|balance| BalanceStatement { amount: *balance })
    }
}

impl CapabilityModule for Account {
    const NAME: &'static str = "Account";
    const CAPABILITIES: &'static [&'static str] = &["deposit", "withdraw", "check_balance"];

    fn create() -> Self {
        Self {
            balance: Capsule::new(0.0),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct(Self::NAME).finish_non_exhaustive()
    }
}

/// The answer to a balance check.
///
/// Displays as `Account has a balance of <amount>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceStatement {
    amount: f64,
}

impl BalanceStatement {
    /// The balance at the time of the check.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for BalanceStatement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Account has a balance of {}", self.amount)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_account_has_zero_balance() {
        let account = Account::create();
        assert_eq!(account.check_balance().amount(), 0.0);
        assert_eq!(
            account.check_balance().to_string(),
            "Account has a balance of 0"
        );
    }

    #[rstest]
    fn deposit_then_withdraw() {
        let mut account = Account::create();
        assert_eq!(account.deposit(100.0), 100.0);
        assert_eq!(account.withdraw(30.0), 70.0);
        assert_eq!(account.check_balance().amount(), 70.0);
    }

    #[rstest]
    fn withdraw_may_overdraw() {
        let mut account = Account::create();
        account.deposit(10.0);
        assert_eq!(account.withdraw(25.0), -15.0);
        assert_eq!(
            account.check_balance().to_string(),
            "Account has a balance of -15"
        );
    }

    #[rstest]
    fn check_balance_does_not_mutate() {
        let mut account = Account::create();
        account.deposit(5.0);
        let first = account.check_balance();
        let second = account.check_balance();
        assert_eq!(first, second);
        assert_eq!(account.deposit(0.0), 5.0);
    }

    #[rstest]
    fn fractional_balance_is_rendered_as_is() {
        let mut account = Account::create();
        account.deposit(12.5);
        assert_eq!(
            account.check_balance().to_string(),
            "Account has a balance of 12.5"
        );
    }

    #[rstest]
    fn debug_does_not_reveal_balance() {
        assert_eq!(format!("{:?}", Account::create()), "Account { .. }");
    }
}
