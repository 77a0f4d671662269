use common_errors::*;
use common_structs::{BoostKind, BoostLock};

use crate::{cache::Cache, oracle, storage, validation, valuation};

use super::locks;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait TraitBoostModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + valuation::ValuationModule
    + locks::BoostLockModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Locks boost currency so each item is valued at its trait type multiplier.
    ///
    /// # Payment
    /// - The current boost token, at least the sum of the required locks. The excess is refunded.
    #[payable]
    #[endpoint(applyTraitBoost)]
    fn apply_trait_boost(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());

        let payment = self.call_value().single_esdt().clone();
        self.require_boost_payment(&payment);
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new_view(self);
        let boost_price = self.get_boost_price(&mut cache);

        let mut required = BigUint::zero();
        for nonce in nonces.iter() {
            let nft_type = self.nft_type(nonce).get();
            require!(!nft_type.is_empty(), ERROR_INVALID_NFT_TYPE);

            if let Some(existing) = self.boost_locks(BoostKind::Trait).get(&nonce) {
                require!(!existing.is_active(cache.timestamp), ERROR_LOCK_EXISTS);
            }

            let amount = self.trait_boost_lock_amount(&nft_type, &boost_price, &mut cache);
            require!(amount > BigUint::zero(), ERROR_INVALID_AMOUNT);

            required += &amount;
            self.replace_lock(BoostKind::Trait, nonce, BoostLock::new(caller.clone(), amount));
        }

        require!(payment.amount >= required, ERROR_INVALID_AMOUNT);
        self.send_boost(&caller, &(&payment.amount - &required));
    }

    #[endpoint(queueTraitBoostRelease)]
    fn queue_trait_boost_release(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());
        self.queue_release(BoostKind::Trait, &nonces);
    }

    #[endpoint(cancelTraitBoostRelease)]
    fn cancel_trait_boost_release(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());
        self.cancel_release(BoostKind::Trait, &nonces);
    }

    #[endpoint(withdrawTraitBoost)]
    fn withdraw_trait_boost(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());
        self.withdraw_released(BoostKind::Trait, &nonces);
    }
}
