//! Results of liquidity operations.

use core::fmt;

use super::{Amount, Shares};

/// Token amounts taken in and shares minted by a deposit.
///
/// The caller moves `amount_a` and `amount_b` into the pool vaults and
/// mints `shares` to the depositor.  One side is zero for a single-token
/// deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositReceipt {
    amount_a: Amount,
    amount_b: Amount,
    shares: Shares,
}

impl DepositReceipt {
    /// Creates a deposit receipt.
    pub const fn new(amount_a: Amount, amount_b: Amount, shares: Shares) -> Self {
        Self {
            amount_a,
            amount_b,
            shares,
        }
    }

    /// Returns the token A amount deposited.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the token B amount deposited.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares minted.
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(a={}, b={}, minted={})",
            self.amount_a, self.amount_b, self.shares
        )
    }
}

/// Token amounts paid out and shares consumed by a withdrawal.
///
/// `shares_burned` is the full count the holder gives up.  The
/// `owner_withdraw_fee` is the part of it that earns no tokens; it is
/// burned as well, which leaves its value with the remaining holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawReceipt {
    amount_a: Amount,
    amount_b: Amount,
    shares_burned: Shares,
    owner_withdraw_fee: Shares,
}

impl WithdrawReceipt {
    /// Creates a withdraw receipt.
    pub const fn new(
        amount_a: Amount,
        amount_b: Amount,
        shares_burned: Shares,
        owner_withdraw_fee: Shares,
    ) -> Self {
        Self {
            amount_a,
            amount_b,
            shares_burned,
            owner_withdraw_fee,
        }
    }

    /// Returns the token A amount paid out.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the token B amount paid out.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the total shares removed from supply.
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Returns the owner withdraw fee, in shares.
    pub const fn owner_withdraw_fee(&self) -> Shares {
        self.owner_withdraw_fee
    }
}

impl fmt::Display for WithdrawReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdraw(a={}, b={}, burned={}, fee={})",
            self.amount_a, self.amount_b, self.shares_burned, self.owner_withdraw_fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_accessors() {
        let r = DepositReceipt::new(Amount::new(1), Amount::new(2), Shares::new(3));
        assert_eq!(r.amount_a(), Amount::new(1));
        assert_eq!(r.amount_b(), Amount::new(2));
        assert_eq!(r.shares(), Shares::new(3));
        assert_eq!(r.to_string(), "Deposit(a=1, b=2, minted=3 shares)");
    }

    #[test]
    fn withdraw_accessors() {
        let r = WithdrawReceipt::new(Amount::new(4), Amount::new(5), Shares::new(6), Shares::new(1));
        assert_eq!(r.amount_a(), Amount::new(4));
        assert_eq!(r.amount_b(), Amount::new(5));
        assert_eq!(r.shares_burned(), Shares::new(6));
        assert_eq!(r.owner_withdraw_fee(), Shares::new(1));
    }
}
