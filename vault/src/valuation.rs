use common_errors::{ERROR_INVALID_NFT_TYPE, ERROR_INVALID_RATE};
use common_structs::{BoostKind, Rate};

use crate::cache::Cache;

multiversx_sc::imports!();

/// Values collateral items and sizes boost locks.
///
/// Item values are expressed in reference asset units with 18 decimals. A trait
/// boost lifts an item from the collection floor to `floor * multiplier` of its
/// trait type for as long as the lock backing it is active.
#[multiversx_sc::module]
pub trait ValuationModule:
    crate::storage::Storage + crate::oracle::OracleModule + common_math::SharedMathModule
{
    fn nft_value(&self, nonce: u64, cache: &mut Cache<Self>) -> BigUint {
        let floor = self.get_floor_value(cache).into_raw_units().clone();

        match self.active_type_multiplier(nonce, cache.timestamp) {
            Some(multiplier) => multiplier.apply(&floor),
            None => floor,
        }
    }

    fn nft_value_in_stable(&self, nonce: u64, cache: &mut Cache<Self>) -> BigUint {
        let value = self.nft_value(nonce, cache);
        let reference_price = self.get_reference_price(cache);

        self.apply_wad_price(&value, &reference_price)
    }

    /// The multiplier of the item's trait type, when a trait boost is active on it.
    fn active_type_multiplier(&self, nonce: u64, now: u64) -> Option<Rate> {
        let lock = self.boost_locks(BoostKind::Trait).get(&nonce)?;
        if !lock.is_active(now) {
            return None;
        }

        let nft_type = self.nft_type(nonce).get();
        if nft_type.is_empty() {
            return None;
        }

        let multiplier = self.nft_type_multiplier(&nft_type);
        if multiplier.is_empty() {
            return None;
        }

        Some(multiplier.get())
    }

    /// Boost currency to lock so an item of `nft_type` is valued at its type multiplier.
    ///
    /// Locks `trait_boost_lock_rate` of the value the multiplier adds over the floor,
    /// converted at `boost_price` (reference units per boost unit, WAD).
    fn trait_boost_lock_amount(
        &self,
        nft_type: &ManagedBuffer,
        boost_price: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let multiplier_mapper = self.nft_type_multiplier(nft_type);
        require!(
            !nft_type.is_empty() && !multiplier_mapper.is_empty(),
            ERROR_INVALID_NFT_TYPE
        );
        let multiplier = multiplier_mapper.get();

        let floor = self.get_floor_value(cache).into_raw_units().clone();
        let boosted = multiplier.apply(&floor);
        let added_value = boosted - &floor;
        let to_lock = cache.valuation.trait_boost_lock_rate.apply(&added_value);

        self.divide_by_wad_price(&to_lock, boost_price)
    }

    /// Boost currency to lock so the credit limit rate of an item grows by `rate_increase_bps`.
    fn ltv_boost_lock_amount(
        &self,
        rate_increase_bps: u64,
        boost_price: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        require!(
            rate_increase_bps > 0 && rate_increase_bps <= cache.valuation.max_ltv_boost_bps,
            ERROR_INVALID_RATE
        );

        let floor = self.get_floor_value(cache).into_raw_units().clone();
        let base_rate = self.rate_to_ray(&cache.valuation.base_credit_limit_rate);
        let boosted_rate = self.add_ray(&base_rate, &self.bps_to_ray(rate_increase_bps));

        let base_credit = self.apply_ray_rate(&floor, &base_rate);
        let boosted_credit = self.apply_ray_rate(&floor, &boosted_rate);
        let to_lock = cache
            .valuation
            .ltv_boost_lock_rate
            .apply(&(boosted_credit - base_credit));

        self.divide_by_wad_price(&to_lock, boost_price)
    }
}
