use common_errors::*;

use crate::{cache::Cache, interest, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + validation::ValidationModule
    + interest::InterestModule
    + common_events::EventsModule
{
    /// Repays up to `available` stablecoin of the debt of item `nonce` and burns it.
    ///
    /// Returns the amount actually used, never more than what is owed.
    fn process_repay(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        nonce: u64,
        available: &BigUint,
    ) -> BigUint {
        self.require_amount_greater_than_zero(available);

        let mut position = self.require_position_holder(nonce, caller);
        require!(!position.is_liquidated(), ERROR_POSITION_LIQUIDATED);

        let owed = cache.owed(&position);
        require!(owed > BigUint::zero(), ERROR_INVALID_AMOUNT);

        let amount = core::cmp::min(available.clone(), owed.clone());
        let principal_paid = self.remove_debt(cache, &mut position, &amount, &owed);
        self.positions(nonce).set(&position);
        self.repay_event(caller, nonce, &amount, &principal_paid);

        self.send()
            .esdt_local_burn(&self.stablecoin().get(), 0, &amount);

        amount
    }
}
