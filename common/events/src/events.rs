#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] amount: &BigUint,
        #[indexed] fee: &BigUint,
        #[indexed] insured: bool,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] amount: &BigUint,
        #[indexed] principal_paid: &BigUint,
    );

    #[event("position_closed")]
    fn position_closed_event(&self, #[indexed] holder: &ManagedAddress, #[indexed] nonce: u64);

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] holder: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] debt_amount: &BigUint,
        #[indexed] insured: bool,
    );

    #[event("repurchase")]
    fn repurchase_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] paid: &BigUint,
        #[indexed] new_principal: &BigUint,
    );

    #[event("insurance_claimed")]
    fn insurance_claimed_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] nonce: u64,
    );

    #[event("position_force_closed")]
    fn position_force_closed_event(
        &self,
        #[indexed] router: &ManagedAddress,
        #[indexed] holder: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] debt_amount: &BigUint,
    );

    #[event("position_imported")]
    fn position_imported_event(
        &self,
        #[indexed] router: &ManagedAddress,
        #[indexed] holder: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] debt_amount: &BigUint,
    );

    #[event("strategy_deposit")]
    fn strategy_deposit_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] nonces: &ManagedVec<u64>,
    );

    #[event("strategy_withdraw")]
    fn strategy_withdraw_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] nonce: u64,
    );

    #[event("strategy_flash")]
    fn strategy_flash_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] nonces: &ManagedVec<u64>,
    );

    // Emitted whenever pending interest is realised into the ledger
    #[event("interest_accrued")]
    fn interest_accrued_event(
        &self,
        #[indexed] interest: &BigUint,
        #[indexed] total_debt_amount: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("fees_collected")]
    fn fees_collected_event(&self, #[indexed] recipient: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("boost_locked")]
    fn boost_locked_event(
        &self,
        #[indexed] kind: BoostKind,
        #[indexed] nonce: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("boost_release_queued")]
    fn boost_release_queued_event(
        &self,
        #[indexed] kind: BoostKind,
        #[indexed] nonce: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] unlock_at: u64,
    );

    #[event("boost_release_cancelled")]
    fn boost_release_cancelled_event(
        &self,
        #[indexed] kind: BoostKind,
        #[indexed] nonce: u64,
        #[indexed] owner: &ManagedAddress,
    );

    #[event("boost_withdrawn")]
    fn boost_withdrawn_event(
        &self,
        #[indexed] kind: BoostKind,
        #[indexed] nonce: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("boost_forfeited")]
    fn boost_forfeited_event(
        &self,
        #[indexed] kind: BoostKind,
        #[indexed] nonce: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] burned: &BigUint,
    );

    #[event("boost_currency_migrated")]
    fn boost_currency_migrated_event(
        &self,
        #[indexed] legacy_token: &TokenIdentifier,
        #[indexed] new_token: &TokenIdentifier,
        #[indexed] conversion_rate: &Rate,
        #[indexed] legacy_amount: &BigUint,
    );

    #[event("floor_override")]
    fn floor_override_event(
        &self,
        #[indexed] admin: &ManagedAddress,
        #[indexed] enabled: bool,
        #[indexed] value: &BigUint,
    );

    #[event("vault_settings")]
    fn vault_settings_event(&self, #[indexed] settings: &VaultSettings<Self::Api>);

    #[event("valuation_settings")]
    fn valuation_settings_event(&self, #[indexed] settings: &ValuationSettings);

    #[event("nft_type")]
    fn nft_type_event(&self, #[indexed] nonce: u64, #[indexed] nft_type: &ManagedBuffer);

    #[event("nft_type_multiplier")]
    fn nft_type_multiplier_event(&self, #[indexed] nft_type: &ManagedBuffer, #[indexed] multiplier: &Rate);

    #[event("strategy_whitelist")]
    fn strategy_whitelist_event(&self, #[indexed] strategy: &ManagedAddress, #[indexed] whitelisted: bool);
}
