use crate::constants::*;

use common_structs::{
    BoostLock, Capability, LedgerTotals, MigratedPosition, Position, PositionView, Rate,
    ValuationSettings, VaultAction, VaultSettings,
};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EsdtLocalRole, EsdtTokenPayment, ManagedAddress, ManagedBuffer, ManagedVec,
        MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestEsdtTransfer,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress, TestTokenIdentifier},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};
use nft_vault::{
    proxy_access_manager, proxy_flash_mock, proxy_price_feed, proxy_staking,
    proxy_strategy_mock::{self, StrategyMode},
    proxy_vault,
    storage::Storage,
};

pub static STABLE_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];
pub static BOOST_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Burn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(VAULT_PATH, nft_vault::ContractBuilder);
    blockchain.register_contract(ACCESS_MANAGER_PATH, access_manager::ContractBuilder);
    blockchain.register_contract(PRICE_FEED_PATH, price_feed::ContractBuilder);
    blockchain.register_contract(STAKING_MOCK_PATH, staking_mock::ContractBuilder);
    blockchain.register_contract(STRATEGY_MOCK_PATH, strategy_mock::ContractBuilder);
    blockchain.register_contract(FLASH_MOCK_PATH, flash_mock::ContractBuilder);

    blockchain
}

pub struct VaultTestState {
    pub world: ScenarioWorld,
    pub vault: ManagedAddress<StaticApi>,
    pub access_manager: ManagedAddress<StaticApi>,
    pub floor_feed: ManagedAddress<StaticApi>,
    pub reference_feed: ManagedAddress<StaticApi>,
    pub boost_feed: ManagedAddress<StaticApi>,
    pub staking: ManagedAddress<StaticApi>,
    pub strategy: ManagedAddress<StaticApi>,
    pub flash_mock: ManagedAddress<StaticApi>,
}

impl VaultTestState {
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(BASE_TIMESTAMP);

        setup_accounts(&mut world);

        let access_manager = setup_access_manager(&mut world);
        let floor_feed = setup_price_feed(&mut world, b"APES / REF", wad(FLOOR_PRICE));
        let reference_feed = setup_price_feed(&mut world, b"REF / USD", wad(REFERENCE_PRICE));
        let boost_feed = setup_price_feed(&mut world, b"BOOST / REF", wad(BOOST_PRICE));

        let vault = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_vault::NftVaultProxy)
            .init(
                COLLECTION.to_token_identifier(),
                STABLE_TOKEN.to_token_identifier(),
                BOOST_TOKEN.to_token_identifier(),
                &access_manager,
                &floor_feed,
                &reference_feed,
                &boost_feed,
                default_vault_settings(),
                default_valuation_settings(),
            )
            .code(VAULT_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world.set_esdt_local_roles(vault.clone(), STABLE_TOKEN.as_bytes(), STABLE_ROLES);
        world.set_esdt_local_roles(vault.clone(), BOOST_TOKEN.as_bytes(), BOOST_ROLES);
        world.set_esdt_local_roles(vault.clone(), NEW_BOOST_TOKEN.as_bytes(), BOOST_ROLES);

        let staking = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_staking::StakingProxy)
            .init()
            .code(STAKING_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let strategy = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_strategy_mock::StrategyMockProxy)
            .init(&vault, COLLECTION.to_token_identifier())
            .code(STRATEGY_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let flash_mock = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_flash_mock::FlashMockProxy)
            .init()
            .code(FLASH_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&vault)
            .typed(proxy_vault::NftVaultProxy)
            .add_strategy(&strategy)
            .run();

        Self {
            world,
            vault,
            access_manager,
            floor_feed,
            reference_feed,
            boost_feed,
            staking,
            strategy,
            flash_mock,
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Positions

    /// Borrows against `nonce`, sending the item along when `with_item` is set.
    pub fn borrow(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        amount: BigUint<StaticApi>,
        insure: bool,
        with_item: bool,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .borrow(nonce, amount, insure);
        if with_item {
            call.esdt(TestEsdtTransfer(COLLECTION, nonce, 1u64)).run();
        } else {
            call.run();
        }
    }

    pub fn borrow_error(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        amount: BigUint<StaticApi>,
        insure: bool,
        with_item: bool,
        error_message: &[u8],
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .borrow(nonce, amount, insure);
        let expected = ExpectMessage(core::str::from_utf8(error_message).unwrap());
        if with_item {
            call.esdt(TestEsdtTransfer(COLLECTION, nonce, 1u64))
                .returns(expected)
                .run();
        } else {
            call.returns(expected).run();
        }
    }

    pub fn repay(&mut self, from: &TestAddress, nonce: u64, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .repay(nonce)
            .single_esdt(&STABLE_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn repay_error(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .repay(nonce)
            .single_esdt(&STABLE_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn close_position(&mut self, from: &TestAddress, nonce: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .close_position(nonce)
            .run();
    }

    pub fn close_position_error(&mut self, from: &TestAddress, nonce: u64, error_message: &str) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .close_position(nonce)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn liquidate(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        payment: BigUint<StaticApi>,
        receiver: OptionalValue<TestAddress>,
    ) {
        let receiver: OptionalValue<ManagedAddress<StaticApi>> = match receiver {
            OptionalValue::Some(address) => OptionalValue::Some(address.to_managed_address()),
            OptionalValue::None => OptionalValue::None,
        };
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .liquidate(nonce, receiver)
            .single_esdt(&STABLE_TOKEN.to_token_identifier(), 0, &payment)
            .run();
    }

    pub fn liquidate_error(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .liquidate(nonce, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .single_esdt(&STABLE_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repurchase(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        max_amount: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .repurchase(nonce, max_amount)
            .single_esdt(&STABLE_TOKEN.to_token_identifier(), 0, &payment)
            .run();
    }

    pub fn repurchase_error(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        max_amount: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .repurchase(nonce, max_amount)
            .single_esdt(&STABLE_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn claim_expired_insurance(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .claim_expired_insurance_nft(nonce, OptionalValue::<ManagedAddress<StaticApi>>::None);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn force_close_position(
        &mut self,
        from: &TestAddress,
        nonce: u64,
    ) -> MigratedPosition<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .force_close_position(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn force_close_position_error(
        &mut self,
        from: &TestAddress,
        nonce: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .force_close_position(nonce)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn import_position(
        &mut self,
        from: &TestAddress,
        holder: &TestAddress,
        nonce: u64,
        debt_amount: BigUint<StaticApi>,
        insured: bool,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .import_position(*holder, debt_amount, insured)
            .esdt(TestEsdtTransfer(COLLECTION, nonce, 1u64));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn collect(&mut self, from: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .collect()
            .run();
    }

    pub fn collect_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .collect()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn do_actions(
        &mut self,
        from: &TestAddress,
        actions: Vec<VaultAction<StaticApi>>,
        payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>>,
        error_message: Option<&[u8]>,
    ) {
        let mut encoded = MultiValueEncoded::new();
        for action in actions {
            encoded.push(action);
        }

        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .do_actions(encoded)
            .multi_esdt(payments);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    // Boosts

    pub fn apply_trait_boost(
        &mut self,
        from: &TestAddress,
        nonces: &[u64],
        payment: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let payment_token_id = BOOST_TOKEN.to_token_identifier();
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .apply_trait_boost(encode_nonces(nonces))
            .single_esdt(&payment_token_id, 0, &payment);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn queue_trait_boost_release(
        &mut self,
        from: &TestAddress,
        nonces: &[u64],
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .queue_trait_boost_release(encode_nonces(nonces));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn cancel_trait_boost_release(
        &mut self,
        from: &TestAddress,
        nonces: &[u64],
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .cancel_trait_boost_release(encode_nonces(nonces));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn withdraw_trait_boost(
        &mut self,
        from: &TestAddress,
        nonces: &[u64],
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .withdraw_trait_boost(encode_nonces(nonces));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn apply_ltv_boost(
        &mut self,
        from: &TestAddress,
        nonces: &[u64],
        rate_increases_bps: &[u64],
        payment: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let mut nonce_vec = ManagedVec::<StaticApi, u64>::new();
        for nonce in nonces {
            nonce_vec.push(*nonce);
        }
        let mut bps_vec = ManagedVec::<StaticApi, u64>::new();
        for bps in rate_increases_bps {
            bps_vec.push(*bps);
        }

        let payment_token_id = BOOST_TOKEN.to_token_identifier();
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .apply_ltv_boost(nonce_vec, bps_vec)
            .single_esdt(&payment_token_id, 0, &payment);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn queue_ltv_boost_release(&mut self, from: &TestAddress, nonces: &[u64]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .queue_ltv_boost_release(encode_nonces(nonces))
            .run();
    }

    pub fn withdraw_ltv_boost(
        &mut self,
        from: &TestAddress,
        nonces: &[u64],
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .withdraw_ltv_boost(encode_nonces(nonces));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn migrate_boost_currency(
        &mut self,
        from: &TestAddress,
        conversion_rate: Rate,
        payment_token: TestTokenIdentifier,
        payment: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let payment_token_id = payment_token.to_token_identifier();
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .migrate_boost_currency(conversion_rate)
            .single_esdt(&payment_token_id, 0, &payment);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    // Custody

    pub fn deposit_in_strategy(
        &mut self,
        from: &TestAddress,
        strategy: &ManagedAddress<StaticApi>,
        nonces: &[u64],
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .deposit_in_strategy(strategy, ManagedBuffer::<StaticApi>::new(), encode_nonces(nonces));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn withdraw_from_strategy(
        &mut self,
        from: &TestAddress,
        nonces: &[u64],
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .withdraw_from_strategy(encode_nonces(nonces));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    /// Flashes items held by the strategy to the flash mock, which handles them in `endpoint`.
    pub fn flash_strategy(
        &mut self,
        from: &TestAddress,
        endpoint: &[u8],
        nonces: &[u64],
        error_message: Option<&[u8]>,
    ) {
        let receiver = self.flash_mock.clone();
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .flash_strategy(receiver, ManagedBuffer::<StaticApi>::from(endpoint), encode_nonces(nonces));
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_strategy_mode(&mut self, mode: StrategyMode) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy_mock::StrategyMockProxy)
            .set_mode(mode)
            .run();
    }

    pub fn add_strategy(
        &mut self,
        from: &TestAddress,
        strategy: &ManagedAddress<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .add_strategy(strategy);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn remove_strategy(&mut self, strategy: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .remove_strategy(strategy)
            .run();
    }

    // Configuration

    pub fn set_nft_type(&mut self, nft_type: &[u8], nonces: &[u64]) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .set_nft_type(ManagedBuffer::<StaticApi>::from(nft_type), encode_nonces(nonces))
            .run();
    }

    pub fn set_nft_type_multiplier(
        &mut self,
        nft_type: &[u8],
        multiplier: Rate,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .set_nft_type_multiplier(ManagedBuffer::<StaticApi>::from(nft_type), multiplier);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn override_floor(&mut self, value: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .override_floor(value)
            .run();
    }

    pub fn disable_floor_override(&mut self) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .disable_floor_override()
            .run();
    }

    pub fn set_vault_settings(
        &mut self,
        from: &TestAddress,
        settings: VaultSettings<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .set_vault_settings(settings);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn set_valuation_settings(
        &mut self,
        settings: ValuationSettings,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .set_valuation_settings(settings);
        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn enable_staking_registry(&mut self) {
        let staking = self.staking.clone();
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .set_staking_registry(OptionalValue::Some(staking))
            .run();
    }

    pub fn disable_staking_registry(&mut self) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .set_staking_registry(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .run();
    }

    pub fn set_user_staking(&mut self, user: &TestAddress, staking: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking)
            .typed(proxy_staking::StakingProxy)
            .set_staking(*user, staking)
            .run();
    }

    pub fn submit_price(&mut self, feed: &ManagedAddress<StaticApi>, answer: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(ORACLE_ADDRESS)
            .to(feed)
            .typed(proxy_price_feed::PriceFeedProxy)
            .submit(answer)
            .run();
    }

    pub fn grant_capability(&mut self, capability: Capability, account: &TestAddress) {
        let mut accounts = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        accounts.push(account.to_managed_address());
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.access_manager)
            .typed(proxy_access_manager::AccessManagerProxy)
            .grant_capability(capability, accounts)
            .run();
    }

    // Views

    pub fn get_position(&mut self, nonce: u64) -> Position<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .positions(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_position_view(&mut self, nonce: u64) -> PositionView<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_position_view(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_debt_amount(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_debt_amount(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_debt_interest(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_debt_interest(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_credit_limit(&mut self, holder: &TestAddress, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_credit_limit(*holder, nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_liquidation_limit(
        &mut self,
        holder: &TestAddress,
        nonce: u64,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_liquidation_limit(*holder, nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_liquidatable(&mut self, nonce: u64) -> bool {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .is_liquidatable(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_nft_value(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_nft_value(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_nft_value_in_stable(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_nft_value_in_stable(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_floor_value(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_floor_value_view()
            .returns(ReturnsResult)
            .run()
    }

    pub fn calculate_trait_boost_lock(
        &mut self,
        nft_type: &[u8],
        boost_price: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .calculate_trait_boost_lock(ManagedBuffer::<StaticApi>::from(nft_type), boost_price)
            .returns(ReturnsResult)
            .run()
    }

    pub fn calculate_ltv_boost_lock(
        &mut self,
        boost_price: BigUint<StaticApi>,
        rate_increase_bps: u64,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .calculate_ltv_boost_lock(boost_price, rate_increase_bps)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_trait_boost_lock(&mut self, nonce: u64) -> Option<BoostLock<StaticApi>> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_trait_boost_lock(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_ltv_boost_lock(&mut self, nonce: u64) -> Option<BoostLock<StaticApi>> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_ltv_boost_lock(nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_ledger_totals(&mut self) -> LedgerTotals<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_ledger_totals()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_positions(&mut self) -> usize {
        self.world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .total_positions()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_holder_positions(&mut self, holder: &TestAddress) -> Vec<u64> {
        let positions = self
            .world
            .query()
            .to(&self.vault)
            .typed(proxy_vault::NftVaultProxy)
            .get_holder_positions(*holder)
            .returns(ReturnsResult)
            .run();

        let mut nonces: Vec<u64> = positions.to_vec().iter().collect();
        nonces.sort();
        nonces
    }

    pub fn flash_uses(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.flash_mock)
            .typed(proxy_flash_mock::FlashMockProxy)
            .flash_uses()
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_flash_holder(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.flash_mock)
            .typed(proxy_flash_mock::FlashMockProxy)
            .last_flash_holder()
            .returns(ReturnsResult)
            .run()
    }

    // Checks

    /// The item sits with `owner`.
    pub fn check_item_owner(&mut self, owner: &ManagedAddress<StaticApi>, nonce: u64) {
        self.world
            .check_account(owner.clone())
            .esdt_nft_balance_and_attributes(COLLECTION, nonce, BigUint::from(1u64), ManagedBuffer::<StaticApi>::new());
    }

    pub fn check_stable_balance(
        &mut self,
        account: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .check_account(account.clone())
            .esdt_balance(STABLE_TOKEN, amount);
    }

    pub fn check_boost_balance(
        &mut self,
        account: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .check_account(account.clone())
            .esdt_balance(token, amount);
    }

    /// Sum of every position's principal and portion matches the ledger totals.
    pub fn assert_debt_conservation(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault)
            .whitebox(nft_vault::contract_obj, |sc| {
                let mut principal = BigUint::zero();
                let mut portion = BigUint::zero();
                for nonce in sc.open_positions().iter() {
                    let position = sc.positions(nonce).get();
                    principal += &position.debt_principal;
                    portion += &position.debt_portion;
                }

                assert_eq!(principal, sc.total_debt_principal().get());
                assert_eq!(portion, sc.total_debt_portion().get());
            });
    }
}

pub fn encode_nonces(nonces: &[u64]) -> MultiValueEncoded<StaticApi, u64> {
    let mut encoded = MultiValueEncoded::new();
    for nonce in nonces {
        encoded.push(*nonce);
    }
    encoded
}

/// A collateral item as a payment.
pub fn item_payment(nonce: u64) -> EsdtTokenPayment<StaticApi> {
    EsdtTokenPayment::new(COLLECTION.to_token_identifier(), nonce, BigUint::from(1u64))
}

pub fn stable_payment(amount: BigUint<StaticApi>) -> EsdtTokenPayment<StaticApi> {
    EsdtTokenPayment::new(STABLE_TOKEN.to_token_identifier(), 0, amount)
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(ORACLE_ADDRESS).nonce(1);
    world
        .account(ADMIN_ADDRESS)
        .nonce(1)
        .esdt_balance(NEW_BOOST_TOKEN, wad(1_000))
        .esdt_balance(BOOST_TOKEN, wad(1_000));

    {
        let mut holder = world
            .account(HOLDER_ADDRESS)
            .nonce(1)
            .esdt_balance(STABLE_TOKEN, wad(1_000))
            .esdt_balance(BOOST_TOKEN, wad(1_000));
        for nonce in HOLDER_NONCES {
            holder = holder.esdt_nft_balance(COLLECTION, nonce, BigUint::from(1u64), ());
        }
    }

    world
        .account(OTHER_ADDRESS)
        .nonce(1)
        .esdt_balance(STABLE_TOKEN, wad(1_000))
        .esdt_balance(BOOST_TOKEN, wad(1_000))
        .esdt_nft_balance(COLLECTION, OTHER_NONCE, BigUint::from(1u64), ());

    world
        .account(LIQUIDATOR_ADDRESS)
        .nonce(1)
        .esdt_balance(STABLE_TOKEN, wad(10_000));

    let mut router = world.account(ROUTER_ADDRESS).nonce(1);
    for nonce in ROUTER_NONCES {
        router = router.esdt_nft_balance(COLLECTION, nonce, BigUint::from(1u64), ());
    }
}

pub fn setup_access_manager(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let mut admins = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
    admins.push(ADMIN_ADDRESS.to_managed_address());

    let access_manager = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_access_manager::AccessManagerProxy)
        .init(admins)
        .code(ACCESS_MANAGER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (capability, account) in [
        (Capability::Liquidator, LIQUIDATOR_ADDRESS),
        (Capability::Router, ROUTER_ADDRESS),
    ] {
        let mut accounts = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        accounts.push(account.to_managed_address());
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&access_manager)
            .typed(proxy_access_manager::AccessManagerProxy)
            .grant_capability(capability, accounts)
            .run();
    }

    access_manager
}

pub fn setup_price_feed(
    world: &mut ScenarioWorld,
    description: &[u8],
    answer: BigUint<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let mut oracles = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
    oracles.push(ORACLE_ADDRESS.to_managed_address());

    let feed = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_feed::PriceFeedProxy)
        .init(FEED_DECIMALS, ManagedBuffer::<StaticApi>::from(description), oracles)
        .code(PRICE_FEED_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(ORACLE_ADDRESS)
        .to(&feed)
        .typed(proxy_price_feed::PriceFeedProxy)
        .submit(answer)
        .run();

    feed
}
