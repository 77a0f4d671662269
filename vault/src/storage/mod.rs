use common_structs::{BoostKind, BoostLock, Position, Rate, ValuationSettings, VaultSettings};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The NFT collection accepted as collateral.
    #[view(getCollection)]
    #[storage_mapper("collection")]
    fn collection(&self) -> SingleValueMapper<TokenIdentifier>;

    /// The stablecoin lent out by the vault. The vault holds its local mint and burn roles.
    #[view(getStablecoin)]
    #[storage_mapper("stablecoin")]
    fn stablecoin(&self) -> SingleValueMapper<TokenIdentifier>;

    /// The currency locked by boosts.
    #[view(getBoostToken)]
    #[storage_mapper("boost_token")]
    fn boost_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// The boost currency that was active before the last migration.
    #[view(getLegacyBoostToken)]
    #[storage_mapper("legacy_boost_token")]
    fn legacy_boost_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// New boost currency units paid out per legacy unit.
    #[view(getLegacyConversionRate)]
    #[storage_mapper("legacy_conversion_rate")]
    fn legacy_conversion_rate(&self) -> SingleValueMapper<Rate>;

    /// Contract answering capability checks.
    #[view(getAccessManager)]
    #[storage_mapper("access_manager")]
    fn access_manager(&self) -> SingleValueMapper<ManagedAddress>;

    /// Floor price of the collection, in reference asset units.
    #[view(getFloorFeed)]
    #[storage_mapper("floor_feed")]
    fn floor_feed(&self) -> SingleValueMapper<ManagedAddress>;

    /// Price of one reference asset unit in stablecoin.
    #[view(getReferenceFeed)]
    #[storage_mapper("reference_feed")]
    fn reference_feed(&self) -> SingleValueMapper<ManagedAddress>;

    /// Price of one boost currency unit in reference asset units.
    #[view(getBoostFeed)]
    #[storage_mapper("boost_feed")]
    fn boost_feed(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStakingRegistry)]
    #[storage_mapper("staking_registry")]
    fn staking_registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getVaultSettings)]
    #[storage_mapper("settings")]
    fn settings(&self) -> SingleValueMapper<VaultSettings<Self::Api>>;

    #[view(getValuationSettings)]
    #[storage_mapper("valuation_settings")]
    fn valuation_settings(&self) -> SingleValueMapper<ValuationSettings>;

    #[view(isFloorOverridden)]
    #[storage_mapper("use_floor_override")]
    fn use_floor_override(&self) -> SingleValueMapper<bool>;

    #[view(getFloorOverride)]
    #[storage_mapper("floor_override")]
    fn floor_override(&self) -> SingleValueMapper<BigUint>;

    #[view(getNftType)]
    #[storage_mapper("nft_type")]
    fn nft_type(&self, nonce: u64) -> SingleValueMapper<ManagedBuffer>;

    #[view(getNftTypeMultiplier)]
    #[storage_mapper("nft_type_multiplier")]
    fn nft_type_multiplier(&self, nft_type: &ManagedBuffer) -> SingleValueMapper<Rate>;

    #[view(getPosition)]
    #[storage_mapper("positions")]
    fn positions(&self, nonce: u64) -> SingleValueMapper<Position<Self::Api>>;

    #[view(getPositionOwner)]
    #[storage_mapper("position_owner")]
    fn position_owner(&self, nonce: u64) -> SingleValueMapper<ManagedAddress>;

    /// Every collateral item with a position record.
    #[storage_mapper("open_positions")]
    fn open_positions(&self) -> UnorderedSetMapper<u64>;

    #[storage_mapper("holder_positions")]
    fn holder_positions(&self, holder: &ManagedAddress) -> UnorderedSetMapper<u64>;

    // Ledger totals, see `Cache`
    #[storage_mapper("total_debt_amount")]
    fn total_debt_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("total_debt_principal")]
    fn total_debt_principal(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("total_debt_portion")]
    fn total_debt_portion(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("total_fee_collected")]
    fn total_fee_collected(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("total_debt_accrued_at")]
    fn total_debt_accrued_at(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("boost_locks")]
    fn boost_locks(&self, kind: BoostKind) -> MapMapper<u64, BoostLock<Self::Api>>;

    /// Rate increase, in basis points, bought by the LTV boost of an item.
    #[view(getLtvBoostRateIncrease)]
    #[storage_mapper("ltv_boost_rate_increase")]
    fn ltv_boost_rate_increase(&self, nonce: u64) -> SingleValueMapper<u64>;

    #[view(getStrategies)]
    #[storage_mapper("strategies")]
    fn strategies(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(isFlashOngoing)]
    #[storage_mapper("flash_ongoing")]
    fn flash_ongoing(&self) -> SingleValueMapper<bool>;
}
