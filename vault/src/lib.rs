#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod access;
pub mod boosts;
pub mod cache;
pub mod config;
pub mod credit;
pub mod interest;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod strategy;
pub mod validation;
pub mod valuation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

/// Lends a stablecoin against NFTs of a single collection.
///
/// Each collateral item backs at most one position, identified by the item's
/// nonce. Debt accrues simple interest over a shared ledger, boosts raise the
/// value or the limit rates of an item, and insured positions can be bought
/// back for a while after being liquidated.
#[multiversx_sc::contract]
pub trait NftVault:
    positions::account::PositionAccountModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::close::PositionCloseModule
    + positions::liquidation::PositionLiquidationModule
    + positions::insurance::PositionInsuranceModule
    + positions::migration::PositionMigrationModule
    + boosts::locks::BoostLockModule
    + boosts::trait_boost::TraitBoostModule
    + boosts::ltv_boost::LtvBoostModule
    + boosts::migration::BoostMigrationModule
    + strategy::CustodyModule
    + config::ConfigModule
    + views::ViewsModule
    + storage::Storage
    + access::AccessModule
    + oracle::OracleModule
    + valuation::ValuationModule
    + credit::CreditModule
    + interest::InterestModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Initializes the vault.
    ///
    /// # Arguments
    /// - `collection`: NFT collection accepted as collateral.
    /// - `stablecoin`: Token lent out. The vault needs its local mint and burn roles.
    /// - `boost_token`: Token locked by boosts. The vault needs its local burn role.
    /// - `access_manager`: Contract answering capability checks.
    /// - `floor_feed`, `reference_feed`, `boost_feed`: Price feeds, see `Storage`.
    /// - `vault_settings`, `valuation_settings`: Initial parameters.
    #[init]
    fn init(
        &self,
        collection: TokenIdentifier,
        stablecoin: TokenIdentifier,
        boost_token: TokenIdentifier,
        access_manager: ManagedAddress,
        floor_feed: ManagedAddress,
        reference_feed: ManagedAddress,
        boost_feed: ManagedAddress,
        vault_settings: VaultSettings<Self::Api>,
        valuation_settings: ValuationSettings,
    ) {
        require!(
            collection.is_valid_esdt_identifier()
                && stablecoin.is_valid_esdt_identifier()
                && boost_token.is_valid_esdt_identifier(),
            ERROR_INVALID_PAYMENT
        );
        require!(
            self.blockchain().is_smart_contract(&access_manager),
            ERROR_INVALID_ADDRESS
        );
        self.require_valid_vault_settings(&vault_settings);
        self.require_valid_valuation_settings(&valuation_settings);

        self.collection().set(collection);
        self.stablecoin().set(stablecoin);
        self.boost_token().set(boost_token);
        self.access_manager().set(access_manager);
        self.store_price_feeds(&floor_feed, &reference_feed, &boost_feed);
        self.settings().set(vault_settings);
        self.valuation_settings().set(valuation_settings);
        self.total_debt_accrued_at()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Borrows stablecoin against a collateral item.
    ///
    /// # Arguments
    /// - `nonce`: The collateral item.
    /// - `amount`: Gross amount borrowed. Fees are deducted from what is sent out.
    /// - `insure`: Whether a new position is insured. Ignored for existing positions.
    ///
    /// # Payment
    /// - The item itself when opening a position, nothing afterwards.
    #[payable]
    #[endpoint(borrow)]
    fn borrow(&self, nonce: u64, amount: BigUint, insure: bool) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();

        let payments = self.call_value().all_esdt_transfers().clone_value();
        require!(payments.len() <= 1, ERROR_INVALID_PAYMENT);
        let deposited = !payments.is_empty();
        if deposited {
            let item = payments.get(0);
            self.require_collateral_payment(&item);
            require!(item.token_nonce == nonce, ERROR_INVALID_NFT);
        }

        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);
        self.process_borrow(&mut cache, &caller, nonce, &amount, insure, deposited);
    }

    /// Repays debt of a position. The excess over what is owed is refunded.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, nonce: u64) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt().clone();
        self.require_stablecoin_payment(&payment);

        let used = {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
            self.process_repay(&mut cache, &caller, nonce, &payment.amount)
        };

        self.refund_stablecoin(&caller, &(&payment.amount - &used));
    }

    /// Deletes a debt free position and returns the item to its holder.
    #[endpoint(closePosition)]
    fn close_position(&self, nonce: u64) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();

        let custodian = {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
            self.process_close(&cache, &caller, nonce)
        };

        self.deliver_collateral(nonce, custodian, &caller, &caller);
    }

    /// Liquidates a position above its liquidation limit.
    ///
    /// # Arguments
    /// - `nonce`: The collateral item.
    /// - `receiver`: Receives the item of an uninsured position. Defaults to the caller.
    ///
    /// # Payment
    /// - Stablecoin covering the whole debt. The excess is refunded.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(&self, nonce: u64, receiver: OptionalValue<ManagedAddress>) {
        self.require_not_flashing();
        let caller = self.require_capability(Capability::Liquidator);
        let payment = self.call_value().single_esdt().clone();
        self.require_stablecoin_payment(&payment);
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        let liquidation = {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
            self.process_liquidation(&mut cache, &caller, nonce, &payment.amount)
        };

        if liquidation.insured {
            self.secure_collateral(nonce, liquidation.custodian, &liquidation.holder);
        } else {
            self.deliver_collateral(nonce, liquidation.custodian, &liquidation.holder, &receiver);
        }

        self.refund_stablecoin(&caller, &(&payment.amount - &liquidation.debt_amount));
    }

    /// Buys back a liquidated insured position while the repurchase window is open.
    ///
    /// # Arguments
    /// - `nonce`: The collateral item.
    /// - `max_amount`: Most stablecoin the holder accepts to pay.
    #[payable]
    #[endpoint(repurchase)]
    fn repurchase(&self, nonce: u64, max_amount: BigUint) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt().clone();
        self.require_stablecoin_payment(&payment);

        let used = {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
            self.process_repurchase(&mut cache, &caller, nonce, &max_amount, &payment.amount)
        };

        self.refund_stablecoin(&caller, &(&payment.amount - &used));
    }

    /// Takes the item of an insured position whose repurchase window has expired.
    #[endpoint(claimExpiredInsuranceNFT)]
    fn claim_expired_insurance_nft(&self, nonce: u64, receiver: OptionalValue<ManagedAddress>) {
        self.require_not_flashing();
        let caller = self.require_capability(Capability::Liquidator);
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());

        {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
            self.process_insurance_claim(&cache, &caller, nonce);
        }
        self.insurance_claimed_event(&caller, &receiver, nonce);

        self.tx()
            .to(&receiver)
            .single_esdt(&self.collection().get(), nonce, &BigUint::from(1u64))
            .transfer();
    }

    /// Removes a position without settling its debt and hands the item to the router.
    #[endpoint(forceClosePosition)]
    fn force_close_position(&self, nonce: u64) -> MigratedPosition<Self::Api> {
        self.require_not_flashing();
        let router = self.require_capability(Capability::Router);

        let (migrated, custodian) = {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
            self.process_force_close(&mut cache, &router, nonce)
        };

        self.deliver_collateral(nonce, custodian, &migrated.holder, &router);

        migrated
    }

    /// Opens a position carried over from another vault.
    ///
    /// # Payment
    /// - The collateral item.
    #[payable]
    #[endpoint(importPosition)]
    fn import_position(&self, holder: ManagedAddress, debt_amount: BigUint, insured: bool) {
        self.require_not_flashing();
        let router = self.require_capability(Capability::Router);
        let item = self.call_value().single_esdt().clone();
        self.require_collateral_payment(&item);

        let mut cache = Cache::new(self);
        self.global_sync(&mut cache);
        self.process_import(&mut cache, &router, &holder, item.token_nonce, &debt_amount, insured);
    }

    /// Mints every collected fee to the caller.
    #[endpoint(collect)]
    fn collect(&self) {
        self.require_not_flashing();
        let caller = self.require_capability(Capability::Admin);

        let amount = {
            let mut cache = Cache::new(self);
            self.global_sync(&mut cache);
            let collected = cache.total_fee_collected.clone();
            cache.total_fee_collected = BigUint::zero();
            collected
        };
        if amount == BigUint::zero() {
            return;
        }

        self.fees_collected_event(&caller, &amount);
        let stablecoin = self.stablecoin().get();
        self.send().esdt_local_mint(&stablecoin, 0, &amount);
        self.tx()
            .to(&caller)
            .single_esdt(&stablecoin, 0, &amount)
            .transfer();
    }

    /// Runs several position operations in one call, all or nothing.
    ///
    /// # Payment
    /// - Collateral items, consumed by the borrows opening their positions.
    /// - Stablecoin, a budget drawn by repayments and repurchases.
    ///
    /// Whatever is left of either is refunded at the end.
    #[payable]
    #[endpoint(doActions)]
    fn do_actions(&self, actions: MultiValueEncoded<VaultAction<Self::Api>>) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();
        let collection = self.collection().get();

        let mut items = ManagedVec::<Self::Api, u64>::new();
        let mut budget = BigUint::zero();
        for payment in self.call_value().all_esdt_transfers().iter() {
            if payment.token_identifier == collection {
                self.require_collateral_payment(&payment);
                items.push(payment.token_nonce);
            } else {
                self.require_stablecoin_payment(&payment);
                budget += &payment.amount;
            }
        }

        for action in actions {
            match action {
                VaultAction::Borrow {
                    nonce,
                    amount,
                    insure,
                } => {
                    let deposited = take_item(&mut items, nonce);
                    let mut cache = Cache::new(self);
                    self.global_sync(&mut cache);
                    self.process_borrow(&mut cache, &caller, nonce, &amount, insure, deposited);
                },
                VaultAction::Repay { nonce, amount } => {
                    require!(amount <= budget, ERROR_INVALID_AMOUNT);
                    let mut cache = Cache::new(self);
                    self.global_sync(&mut cache);
                    let used = self.process_repay(&mut cache, &caller, nonce, &amount);
                    budget -= used;
                },
                VaultAction::ClosePosition { nonce } => {
                    let custodian = {
                        let mut cache = Cache::new(self);
                        self.global_sync(&mut cache);
                        self.process_close(&cache, &caller, nonce)
                    };
                    self.deliver_collateral(nonce, custodian, &caller, &caller);
                },
                VaultAction::Repurchase { nonce, max_amount } => {
                    let mut cache = Cache::new(self);
                    self.global_sync(&mut cache);
                    let used =
                        self.process_repurchase(&mut cache, &caller, nonce, &max_amount, &budget);
                    budget -= used;
                },
                VaultAction::DepositInStrategy {
                    nonces,
                    strategy,
                    data,
                } => {
                    self.process_strategy_deposit(&caller, &nonces, &strategy, &data);
                },
                VaultAction::WithdrawFromStrategy { nonces } => {
                    self.process_strategy_withdraw(&caller, &nonces);
                },
            }
        }

        self.refund_stablecoin(&caller, &budget);
        for nonce in items.iter() {
            self.tx()
                .to(&caller)
                .single_esdt(&collection, nonce, &BigUint::from(1u64))
                .transfer();
        }
    }

    fn refund_stablecoin(&self, receiver: &ManagedAddress, amount: &BigUint) {
        if amount == &BigUint::zero() {
            return;
        }

        self.tx()
            .to(receiver)
            .single_esdt(&self.stablecoin().get(), 0, amount)
            .transfer();
    }
}

/// Removes `nonce` from the items brought with the call, telling whether it was there.
fn take_item<M: ManagedTypeApi>(items: &mut ManagedVec<M, u64>, nonce: u64) -> bool {
    match items.iter().position(|item| item == nonce) {
        Some(index) => {
            items.remove(index);
            true
        },
        None => false,
    }
}
