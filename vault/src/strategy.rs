use common_errors::*;
use common_proxies::proxy_strategy;
use common_structs::Capability;

use crate::{access, storage, validation};

multiversx_sc::imports!();

/// Custody of collateral by whitelisted strategy contracts.
///
/// A strategy holds items on behalf of the vault while the vault keeps the
/// positions. Every hand-over is acknowledged by the strategy, and items coming
/// back are checked against the vault balance instead of trusting the reply.
/// Position records are updated before any strategy is called.
#[multiversx_sc::module]
pub trait CustodyModule:
    storage::Storage
    + validation::ValidationModule
    + access::AccessModule
    + common_events::EventsModule
{
    /// Hands items of the caller to `strategy`.
    ///
    /// # Arguments
    /// - `strategy`: Whitelisted strategy contract receiving the items.
    /// - `data`: Opaque payload forwarded to the strategy.
    /// - `nonces`: Items to deposit, all held by the caller and not in custody yet.
    #[endpoint(depositInStrategy)]
    fn deposit_in_strategy(
        &self,
        strategy: ManagedAddress,
        data: ManagedBuffer,
        nonces: MultiValueEncoded<u64>,
    ) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();
        self.process_strategy_deposit(&caller, &nonces.to_vec(), &strategy, &data);
    }

    /// Brings items of the caller back from their strategies.
    #[endpoint(withdrawFromStrategy)]
    fn withdraw_from_strategy(&self, nonces: MultiValueEncoded<u64>) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();
        self.process_strategy_withdraw(&caller, &nonces.to_vec());
    }

    /// Lets the strategy holding the items lend them to `receiver` for the duration of the call.
    ///
    /// The strategy must acknowledge both the start and the end of the loan.
    /// Every vault entry point is blocked until the loan ends.
    #[endpoint(flashStrategy)]
    fn flash_strategy(
        &self,
        receiver: ManagedAddress,
        data: ManagedBuffer,
        nonces: MultiValueEncoded<u64>,
    ) {
        self.require_not_flashing();
        let caller = self.blockchain().get_caller();
        let nonces = nonces.to_vec();
        self.require_items_count(nonces.len());

        let custodian = self.flashable_custodian(nonces.get(0), &caller);
        for nonce in nonces.iter() {
            require!(
                self.flashable_custodian(nonce, &caller) == custodian,
                ERROR_INVALID_STRATEGY
            );
        }

        self.flash_ongoing().set(true);

        let started = self
            .tx()
            .to(&custodian)
            .typed(proxy_strategy::NftStrategyProxy)
            .flash_loan_start(&caller, &receiver, nonces.clone(), &data)
            .returns(ReturnsResult)
            .sync_call();
        require!(started, ERROR_INVALID_STRATEGY);

        let ended = self
            .tx()
            .to(&custodian)
            .typed(proxy_strategy::NftStrategyProxy)
            .flash_loan_end(&caller, nonces.clone(), &data)
            .returns(ReturnsResult)
            .sync_call();
        require!(ended, ERROR_INVALID_STRATEGY);

        self.flash_ongoing().set(false);
        self.strategy_flash_event(&caller, &custodian, &receiver, &nonces);
    }

    /// Strategy holding item `nonce` of `caller`, the only kind of item that can be flashed.
    fn flashable_custodian(&self, nonce: u64, caller: &ManagedAddress) -> ManagedAddress {
        let position = self.require_position_holder(nonce, caller);
        require!(!position.is_liquidated(), ERROR_POSITION_LIQUIDATED);

        match position.custodian {
            Some(custodian) => custodian,
            None => sc_panic!(ERROR_INVALID_POSITION),
        }
    }

    #[endpoint(addStrategy)]
    fn add_strategy(&self, strategy: ManagedAddress) {
        self.require_capability(Capability::Admin);
        require!(
            self.blockchain().is_smart_contract(&strategy),
            ERROR_INVALID_ADDRESS
        );
        if self.strategies().insert(strategy.clone()) {
            self.strategy_whitelist_event(&strategy, true);
        }
    }

    #[endpoint(removeStrategy)]
    fn remove_strategy(&self, strategy: ManagedAddress) {
        self.require_capability(Capability::Admin);
        if self.strategies().swap_remove(&strategy) {
            self.strategy_whitelist_event(&strategy, false);
        }
    }

    fn process_strategy_deposit(
        &self,
        caller: &ManagedAddress,
        nonces: &ManagedVec<u64>,
        strategy: &ManagedAddress,
        data: &ManagedBuffer,
    ) {
        self.require_items_count(nonces.len());
        require!(self.strategies().contains(strategy), ERROR_INVALID_STRATEGY);

        let collection = self.collection().get();
        let mut items = ManagedVec::<Self::Api, EsdtTokenPayment>::new();
        for nonce in nonces.iter() {
            let mut position = self.require_position_holder(nonce, caller);
            require!(!position.is_liquidated(), ERROR_POSITION_LIQUIDATED);
            require!(!position.is_in_custody(), ERROR_INVALID_POSITION);

            position.custodian = Some(strategy.clone());
            self.positions(nonce).set(&position);
            items.push(EsdtTokenPayment::new(
                collection.clone(),
                nonce,
                BigUint::from(1u64),
            ));
        }
        self.strategy_deposit_event(caller, strategy, nonces);

        let acknowledged = self
            .tx()
            .to(strategy)
            .typed(proxy_strategy::NftStrategyProxy)
            .after_deposit(caller, nonces.clone(), data)
            .multi_esdt(items)
            .returns(ReturnsResult)
            .sync_call();
        require!(acknowledged, ERROR_INVALID_STRATEGY);
    }

    fn process_strategy_withdraw(&self, caller: &ManagedAddress, nonces: &ManagedVec<u64>) {
        self.require_items_count(nonces.len());

        for nonce in nonces.iter() {
            let mut position = self.require_position_holder(nonce, caller);
            let custodian = match position.custodian.take() {
                Some(address) => address,
                None => sc_panic!(ERROR_INVALID_POSITION),
            };
            self.positions(nonce).set(&position);

            self.recall_from_custodian(&custodian, caller, nonce);
        }
    }

    /// Asks `custodian` to return item `nonce` and checks that it did.
    fn recall_from_custodian(&self, custodian: &ManagedAddress, holder: &ManagedAddress, nonce: u64) {
        let vault = self.blockchain().get_sc_address();
        let acknowledged = self
            .tx()
            .to(custodian)
            .typed(proxy_strategy::NftStrategyProxy)
            .withdraw(holder, &vault, nonce)
            .returns(ReturnsResult)
            .sync_call();
        require!(acknowledged, ERROR_INVALID_STRATEGY);

        let collection = EgldOrEsdtTokenIdentifier::esdt(self.collection().get());
        require!(
            self.blockchain().get_sc_balance(&collection, nonce) > BigUint::zero(),
            ERROR_INVALID_STRATEGY
        );
        self.strategy_withdraw_event(holder, custodian, nonce);
    }

    /// Sends item `nonce` to `receiver`, recalling it from its strategy first.
    fn deliver_collateral(
        &self,
        nonce: u64,
        custodian: Option<ManagedAddress>,
        holder: &ManagedAddress,
        receiver: &ManagedAddress,
    ) {
        if let Some(custodian) = custodian {
            self.recall_from_custodian(&custodian, holder, nonce);
        }

        self.tx()
            .to(receiver)
            .single_esdt(&self.collection().get(), nonce, &BigUint::from(1u64))
            .transfer();
    }

    /// Pulls item `nonce` back into the vault when a strategy holds it.
    fn secure_collateral(&self, nonce: u64, custodian: Option<ManagedAddress>, holder: &ManagedAddress) {
        if let Some(custodian) = custodian {
            self.recall_from_custodian(&custodian, holder, nonce);
        }
    }
}
