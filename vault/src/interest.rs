use common_constants::SECONDS_PER_YEAR;
use common_structs::Position;

use crate::cache::Cache;

multiversx_sc::imports!();

/// Lazy interest accrual over the pooled debt.
///
/// Positions own a portion of `total_debt_amount`. Accruing interest only grows
/// the total, so each position's share grows with it without touching the
/// position records. Interest is recognised as collectable fees as it accrues.
#[multiversx_sc::module]
pub trait InterestModule: crate::storage::Storage + common_events::EventsModule {
    /// Simple interest on the whole debt since the last accrual.
    fn pending_interest(&self, cache: &Cache<Self>) -> BigUint {
        if cache.timestamp <= cache.last_accrual || cache.total_debt_amount == BigUint::zero() {
            return BigUint::zero();
        }

        let elapsed = cache.timestamp - cache.last_accrual;
        let yearly = cache
            .settings
            .debt_interest_apr
            .apply(&cache.total_debt_amount);

        yearly / BigUint::from(SECONDS_PER_YEAR) * BigUint::from(elapsed)
    }

    /// Folds pending interest into the cached totals. Nothing is written until the cache drops.
    fn accrue(&self, cache: &mut Cache<Self>) -> BigUint {
        let interest = self.pending_interest(cache);
        if interest > BigUint::zero() {
            cache.total_debt_amount += &interest;
            cache.total_fee_collected += &interest;
        }
        cache.last_accrual = cache.timestamp;

        interest
    }

    /// Brings the ledger up to date. Every state changing operation starts here.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        let interest = self.accrue(cache);
        if interest > BigUint::zero() {
            self.interest_accrued_event(&interest, &cache.total_debt_amount, cache.timestamp);
        }
    }

    /// Records `amount` of new principal on `position`.
    fn add_debt(&self, cache: &mut Cache<Self>, position: &mut Position<Self::Api>, amount: &BigUint) {
        // No outstanding share means no outstanding debt, rounding dust included
        if cache.total_debt_portion == BigUint::zero() {
            cache.total_debt_amount = BigUint::zero();
        }

        let added_portion = if cache.total_debt_amount == BigUint::zero() {
            amount.clone()
        } else {
            &cache.total_debt_portion * amount / &cache.total_debt_amount
        };

        cache.total_debt_portion += &added_portion;
        cache.total_debt_principal += amount;
        cache.total_debt_amount += amount;
        position.debt_portion += added_portion;
        position.debt_principal += amount;
    }

    /// Applies a repayment of `amount`, at most `owed`. Interest is paid first.
    ///
    /// Returns the principal part of the repayment.
    fn remove_debt(
        &self,
        cache: &mut Cache<Self>,
        position: &mut Position<Self::Api>,
        amount: &BigUint,
        owed: &BigUint,
    ) -> BigUint {
        let interest = owed - &position.debt_principal;
        let principal_paid = if amount > &interest {
            amount - &interest
        } else {
            BigUint::zero()
        };

        let removed_portion = if principal_paid == position.debt_principal {
            position.debt_portion.clone()
        } else if cache.total_debt_amount == BigUint::zero() {
            BigUint::zero()
        } else {
            let share = &cache.total_debt_portion * amount / &cache.total_debt_amount;
            core::cmp::min(share, position.debt_portion.clone())
        };

        cache.total_debt_portion -= &removed_portion;
        cache.total_debt_principal -= &principal_paid;
        cache.total_debt_amount = saturating_sub(&cache.total_debt_amount, amount);
        position.debt_portion -= removed_portion;
        position.debt_principal -= &principal_paid;

        principal_paid
    }

    /// Takes a position off the ledger entirely, as when it is liquidated or migrated.
    ///
    /// Returns what the position owed.
    fn write_off_debt(&self, cache: &mut Cache<Self>, position: &mut Position<Self::Api>) -> BigUint {
        let owed = cache.owed(position);

        cache.total_debt_portion -= &position.debt_portion;
        cache.total_debt_principal -= &position.debt_principal;
        cache.total_debt_amount = saturating_sub(&cache.total_debt_amount, &owed);
        position.debt_portion = BigUint::zero();
        position.debt_principal = BigUint::zero();

        owed
    }
}

fn saturating_sub<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> BigUint<M> {
    if a > b {
        a - b
    } else {
        BigUint::zero()
    }
}
