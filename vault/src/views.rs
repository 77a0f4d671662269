use common_errors::{ERROR_INVALID_POSITION, ERROR_INVALID_PRICE};
use common_structs::{BoostKind, BoostLock, LedgerTotals, PositionView};

use crate::{cache::Cache, credit, interest, oracle, storage, valuation};

multiversx_sc::imports!();

/// Read-only endpoints. Every figure includes interest accrued up to the current block.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + valuation::ValuationModule
    + credit::CreditModule
    + interest::InterestModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[view(openPositionsIndexes)]
    fn open_positions_indexes(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for nonce in self.open_positions().iter() {
            result.push(nonce);
        }
        result
    }

    #[view(totalPositions)]
    fn total_positions(&self) -> usize {
        self.open_positions().len()
    }

    #[view(getHolderPositions)]
    fn get_holder_positions(&self, holder: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for nonce in self.holder_positions(&holder).iter() {
            result.push(nonce);
        }
        result
    }

    /// Principal plus accrued interest owed by the position of `nonce`.
    #[view(getDebtAmount)]
    fn get_debt_amount(&self, nonce: u64) -> BigUint {
        if self.position_owner(nonce).is_empty() {
            return BigUint::zero();
        }

        let position = self.positions(nonce).get();
        let cache = self.synced_view_cache();

        cache.owed(&position)
    }

    #[view(getDebtInterest)]
    fn get_debt_interest(&self, nonce: u64) -> BigUint {
        if self.position_owner(nonce).is_empty() {
            return BigUint::zero();
        }

        let position = self.positions(nonce).get();
        let cache = self.synced_view_cache();

        cache.owed(&position) - &position.debt_principal
    }

    #[view(getCreditLimit)]
    fn get_credit_limit(&self, holder: ManagedAddress, nonce: u64) -> BigUint {
        let mut cache = Cache::new_view(self);
        self.credit_limit(&holder, nonce, &mut cache)
    }

    #[view(getLiquidationLimit)]
    fn get_liquidation_limit(&self, holder: ManagedAddress, nonce: u64) -> BigUint {
        let mut cache = Cache::new_view(self);
        self.liquidation_limit(&holder, nonce, &mut cache)
    }

    /// RAY precision.
    #[view(getCreditLimitRate)]
    fn get_credit_limit_rate(
        &self,
        holder: ManagedAddress,
        nonce: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let cache = Cache::new_view(self);
        self.credit_limit_rate(&holder, nonce, &cache)
    }

    /// RAY precision.
    #[view(getLiquidationLimitRate)]
    fn get_liquidation_limit_rate(
        &self,
        holder: ManagedAddress,
        nonce: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let cache = Cache::new_view(self);
        self.liquidation_limit_rate(&holder, nonce, &cache)
    }

    #[view(isLiquidatable)]
    fn is_liquidatable(&self, nonce: u64) -> bool {
        let owner = self.position_owner(nonce);
        if owner.is_empty() {
            return false;
        }

        let position = self.positions(nonce).get();
        let mut cache = self.synced_view_cache();
        self.is_position_liquidatable(&owner.get(), nonce, &position, &mut cache)
    }

    /// Value of item `nonce` in reference asset units, trait boost included.
    #[view(getNftValue)]
    fn get_nft_value(&self, nonce: u64) -> BigUint {
        let mut cache = Cache::new_view(self);
        self.nft_value(nonce, &mut cache)
    }

    #[view(getNftValueInStable)]
    fn get_nft_value_in_stable(&self, nonce: u64) -> BigUint {
        let mut cache = Cache::new_view(self);
        self.nft_value_in_stable(nonce, &mut cache)
    }

    #[view(getFloorValue)]
    fn get_floor_value_view(&self) -> BigUint {
        let mut cache = Cache::new_view(self);
        self.get_floor_value(&mut cache).into_raw_units().clone()
    }

    /// Boost currency a trait boost on an item of `nft_type` would lock at `boost_price` (WAD).
    #[view(calculateTraitBoostLock)]
    fn calculate_trait_boost_lock(&self, nft_type: ManagedBuffer, boost_price: BigUint) -> BigUint {
        require!(boost_price > BigUint::zero(), ERROR_INVALID_PRICE);
        let mut cache = Cache::new_view(self);
        let boost_price = self.to_decimal_wad(boost_price);

        self.trait_boost_lock_amount(&nft_type, &boost_price, &mut cache)
    }

    /// Boost currency an LTV boost of `rate_increase_bps` would lock at `boost_price` (WAD).
    #[view(calculateLtvBoostLock)]
    fn calculate_ltv_boost_lock(&self, boost_price: BigUint, rate_increase_bps: u64) -> BigUint {
        require!(boost_price > BigUint::zero(), ERROR_INVALID_PRICE);
        let mut cache = Cache::new_view(self);
        let boost_price = self.to_decimal_wad(boost_price);

        self.ltv_boost_lock_amount(rate_increase_bps, &boost_price, &mut cache)
    }

    #[view(getTraitBoostLock)]
    fn get_trait_boost_lock(&self, nonce: u64) -> Option<BoostLock<Self::Api>> {
        self.boost_locks(BoostKind::Trait).get(&nonce)
    }

    #[view(getLtvBoostLock)]
    fn get_ltv_boost_lock(&self, nonce: u64) -> Option<BoostLock<Self::Api>> {
        self.boost_locks(BoostKind::Ltv).get(&nonce)
    }

    #[view(getLedgerTotals)]
    fn get_ledger_totals(&self) -> LedgerTotals<Self::Api> {
        self.synced_view_cache().totals()
    }

    #[view(getPositionView)]
    fn get_position_view(&self, nonce: u64) -> PositionView<Self::Api> {
        let owner = self.position_owner(nonce);
        require!(!owner.is_empty(), ERROR_INVALID_POSITION);
        let holder = owner.get();
        let position = self.positions(nonce).get();
        let mut cache = self.synced_view_cache();

        let debt_amount = if position.is_liquidated() {
            position.debt_amount_for_repurchase.clone()
        } else {
            cache.owed(&position)
        };
        let credit_limit = self.credit_limit(&holder, nonce, &mut cache);
        let liquidation_limit = self.liquidation_limit(&holder, nonce, &mut cache);
        let is_liquidatable = self.is_position_liquidatable(&holder, nonce, &position, &mut cache);

        PositionView {
            nonce,
            holder,
            position,
            debt_amount,
            credit_limit,
            liquidation_limit,
            is_liquidatable,
        }
    }

    fn synced_view_cache(&self) -> Cache<Self> {
        let mut cache = Cache::new_view(self);
        self.accrue(&mut cache);
        cache
    }
}
