use common_proxies::proxy_staking;
use common_structs::{BoostKind, Position};

use crate::cache::Cache;

multiversx_sc::imports!();

/// Credit and liquidation limits.
///
/// Both limits are `value_in_stable * rate`. A rate starts from its base, grows
/// by the staking increase while the holder stakes, grows by the LTV boost of
/// the item while that boost is active, and is finally capped.
#[multiversx_sc::module]
pub trait CreditModule:
    crate::storage::Storage
    + crate::oracle::OracleModule
    + crate::valuation::ValuationModule
    + common_math::SharedMathModule
{
    fn credit_limit_rate(
        &self,
        holder: &ManagedAddress,
        nonce: u64,
        cache: &Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let base = self.rate_to_ray(&cache.valuation.base_credit_limit_rate);
        let cap = self.rate_to_ray(&cache.valuation.credit_limit_rate_cap);

        self.rate_after_boosts(base, cap, holder, nonce, cache)
    }

    fn liquidation_limit_rate(
        &self,
        holder: &ManagedAddress,
        nonce: u64,
        cache: &Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let base = self.rate_to_ray(&cache.valuation.base_liquidation_limit_rate);
        let cap = self.rate_to_ray(&cache.valuation.liquidation_limit_rate_cap);

        self.rate_after_boosts(base, cap, holder, nonce, cache)
    }

    fn rate_after_boosts(
        &self,
        base: ManagedDecimal<Self::Api, NumDecimals>,
        cap: ManagedDecimal<Self::Api, NumDecimals>,
        holder: &ManagedAddress,
        nonce: u64,
        cache: &Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut rate = base;

        if self.is_holder_staking(holder) {
            let increase = self.rate_to_ray(&cache.valuation.staking_rate_increase);
            rate = self.add_ray(&rate, &increase);
        }

        if let Some(lock) = self.boost_locks(BoostKind::Ltv).get(&nonce) {
            if lock.is_active(cache.timestamp) {
                let increase = self.bps_to_ray(self.ltv_boost_rate_increase(nonce).get());
                rate = self.add_ray(&rate, &increase);
            }
        }

        self.get_min(rate, cap)
    }

    fn is_holder_staking(&self, holder: &ManagedAddress) -> bool {
        let registry = self.staking_registry();
        if registry.is_empty() {
            return false;
        }

        self.tx()
            .to(registry.get())
            .typed(proxy_staking::StakingProxy)
            .is_user_staking(holder)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn credit_limit(&self, holder: &ManagedAddress, nonce: u64, cache: &mut Cache<Self>) -> BigUint {
        let value = self.nft_value_in_stable(nonce, cache);
        let rate = self.credit_limit_rate(holder, nonce, cache);

        self.apply_ray_rate(&value, &rate)
    }

    fn liquidation_limit(
        &self,
        holder: &ManagedAddress,
        nonce: u64,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let value = self.nft_value_in_stable(nonce, cache);
        let rate = self.liquidation_limit_rate(holder, nonce, cache);

        self.apply_ray_rate(&value, &rate)
    }

    /// Open and strictly above its liquidation limit.
    fn is_position_liquidatable(
        &self,
        holder: &ManagedAddress,
        nonce: u64,
        position: &Position<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> bool {
        if position.is_liquidated() {
            return false;
        }

        let owed = cache.owed(position);
        if owed == BigUint::zero() {
            return false;
        }

        owed > self.liquidation_limit(holder, nonce, cache)
    }
}
