use common_constants::BPS;
use common_errors::*;
use common_structs::{Capability, Rate, ValuationSettings, VaultSettings};

use crate::{access, cache::Cache, interest, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + access::AccessModule
    + validation::ValidationModule
    + interest::InterestModule
    + common_events::EventsModule
{
    /// Replaces the debt parameters. Interest up to now accrues at the previous rate.
    #[endpoint(setVaultSettings)]
    fn set_vault_settings(&self, settings: VaultSettings<Self::Api>) {
        self.require_capability(Capability::Admin);
        self.require_valid_vault_settings(&settings);

        {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
        }

        self.vault_settings_event(&settings);
        self.settings().set(settings);
    }

    #[endpoint(setValuationSettings)]
    fn set_valuation_settings(&self, settings: ValuationSettings) {
        self.require_capability(Capability::Admin);
        self.require_valid_valuation_settings(&settings);

        self.valuation_settings_event(&settings);
        self.valuation_settings().set(settings);
    }

    /// Assigns the trait type `nft_type` to every item in `nonces`. An empty type clears it.
    #[endpoint(setNftType)]
    fn set_nft_type(&self, nft_type: ManagedBuffer, nonces: MultiValueEncoded<u64>) {
        self.require_capability(Capability::Admin);

        for nonce in nonces {
            if nft_type.is_empty() {
                self.nft_type(nonce).clear();
            } else {
                self.nft_type(nonce).set(&nft_type);
            }
            self.nft_type_event(nonce, &nft_type);
        }
    }

    #[endpoint(setNftTypeMultiplier)]
    fn set_nft_type_multiplier(&self, nft_type: ManagedBuffer, multiplier: Rate) {
        self.require_capability(Capability::Admin);
        require!(!nft_type.is_empty(), ERROR_INVALID_NFT_TYPE);
        require!(multiplier.is_valid_multiplier(), ERROR_INVALID_RATE);

        self.nft_type_multiplier(&nft_type).set(multiplier);
        self.nft_type_multiplier_event(&nft_type, &multiplier);
    }

    /// Prices every item at `value` (reference units, WAD) instead of the floor feed.
    ///
    /// Affects all positions at once, including which of them are liquidatable.
    #[endpoint(overrideFloor)]
    fn override_floor(&self, value: BigUint) {
        let caller = self.require_capability(Capability::Admin);
        self.require_amount_greater_than_zero(&value);

        self.use_floor_override().set(true);
        self.floor_override().set(&value);
        self.floor_override_event(&caller, true, &value);
    }

    #[endpoint(disableFloorOverride)]
    fn disable_floor_override(&self) {
        let caller = self.require_capability(Capability::Admin);

        self.use_floor_override().set(false);
        self.floor_override().clear();
        self.floor_override_event(&caller, false, &BigUint::zero());
    }

    #[endpoint(setPriceFeeds)]
    fn set_price_feeds(
        &self,
        floor_feed: ManagedAddress,
        reference_feed: ManagedAddress,
        boost_feed: ManagedAddress,
    ) {
        self.require_capability(Capability::Admin);
        self.store_price_feeds(&floor_feed, &reference_feed, &boost_feed);
    }

    /// Sets the registry queried for the staking rate increase. No argument disables it.
    #[endpoint(setStakingRegistry)]
    fn set_staking_registry(&self, registry: OptionalValue<ManagedAddress>) {
        self.require_capability(Capability::Admin);

        match registry {
            OptionalValue::Some(address) => {
                require!(
                    self.blockchain().is_smart_contract(&address),
                    ERROR_INVALID_ADDRESS
                );
                self.staking_registry().set(address);
            },
            OptionalValue::None => self.staking_registry().clear(),
        }
    }

    fn store_price_feeds(
        &self,
        floor_feed: &ManagedAddress,
        reference_feed: &ManagedAddress,
        boost_feed: &ManagedAddress,
    ) {
        for feed in [floor_feed, reference_feed, boost_feed] {
            require!(
                self.blockchain().is_smart_contract(feed),
                ERROR_INVALID_ADDRESS
            );
        }

        self.floor_feed().set(floor_feed);
        self.reference_feed().set(reference_feed);
        self.boost_feed().set(boost_feed);
    }

    fn require_valid_vault_settings(&self, settings: &VaultSettings<Self::Api>) {
        require!(settings.has_valid_rates(), ERROR_INVALID_RATE);
        require!(settings.has_affordable_fees(), ERROR_INVALID_RATE);
    }

    fn require_valid_valuation_settings(&self, settings: &ValuationSettings) {
        require!(settings.has_valid_rates(), ERROR_INVALID_RATE);
        require!(settings.has_ordered_limits(), ERROR_INVALID_RATE);
        require!(settings.max_ltv_boost_bps < BPS, ERROR_INVALID_RATE);
    }
}
