use common_errors::*;
use common_structs::{BoostKind, BoostLock};

use crate::{cache::Cache, oracle, storage, validation, valuation};

use super::locks;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait LtvBoostModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + valuation::ValuationModule
    + locks::BoostLockModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Locks boost currency to raise the credit and liquidation limit rates of each item.
    ///
    /// # Arguments
    /// - `nonces`: Items to boost.
    /// - `rate_increases_bps`: Rate increase bought for the item at the same index, in basis points.
    ///
    /// # Payment
    /// - The current boost token. An active lock can only be replaced by a larger
    ///   one, and its funds go back to its owner.
    #[payable]
    #[endpoint(applyLtvBoost)]
    fn apply_ltv_boost(&self, nonces: ManagedVec<u64>, rate_increases_bps: ManagedVec<u64>) {
        self.require_not_flashing();
        require!(nonces.len() == rate_increases_bps.len(), ERROR_INVALID_LENGTH);
        self.require_items_count(nonces.len());

        let payment = self.call_value().single_esdt().clone();
        self.require_boost_payment(&payment);
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new_view(self);
        let boost_price = self.get_boost_price(&mut cache);

        let mut required = BigUint::zero();
        for (index, nonce) in nonces.iter().enumerate() {
            let rate_increase_bps = rate_increases_bps.get(index);
            let amount = self.ltv_boost_lock_amount(rate_increase_bps, &boost_price, &mut cache);
            require!(amount > BigUint::zero(), ERROR_INVALID_AMOUNT);

            if let Some(existing) = self.boost_locks(BoostKind::Ltv).get(&nonce) {
                if existing.is_active(cache.timestamp) {
                    require!(amount > self.lock_value(&existing), ERROR_INVALID_AMOUNT);
                }
            }

            required += &amount;
            self.replace_lock(BoostKind::Ltv, nonce, BoostLock::new(caller.clone(), amount));
            self.ltv_boost_rate_increase(nonce).set(rate_increase_bps);
        }

        require!(payment.amount >= required, ERROR_INVALID_AMOUNT);
        self.send_boost(&caller, &(&payment.amount - &required));
    }

    #[endpoint(queueLtvBoostRelease)]
    fn queue_ltv_boost_release(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());
        self.queue_release(BoostKind::Ltv, &nonces);
    }

    #[endpoint(cancelLtvBoostRelease)]
    fn cancel_ltv_boost_release(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());
        self.cancel_release(BoostKind::Ltv, &nonces);
    }

    #[endpoint(withdrawLtvBoost)]
    fn withdraw_ltv_boost(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());
        self.withdraw_released(BoostKind::Ltv, &nonces);
    }
}
