#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// How the mock answers the vault.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrategyMode {
    /// Moves collateral as asked and acknowledges
    Honest,
    /// Acknowledges withdrawals but keeps the collateral
    NoReturn,
    /// Refuses every call
    Reject,
}

/// Custody strategy used in tests: holds collateral on behalf of the vault.
#[multiversx_sc::contract]
pub trait StrategyMock {
    #[init]
    fn init(&self, vault: ManagedAddress, collection: TokenIdentifier) {
        self.vault().set(vault);
        self.collection().set(collection);
        self.mode().set(StrategyMode::Honest);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setMode)]
    fn set_mode(&self, mode: StrategyMode) {
        self.mode().set(mode);
    }

    #[payable]
    #[endpoint(afterDeposit)]
    fn after_deposit(
        &self,
        holder: ManagedAddress,
        nonces: ManagedVec<u64>,
        _data: ManagedBuffer,
    ) -> bool {
        self.require_vault();
        if self.mode().get() == StrategyMode::Reject {
            return false;
        }

        let collection = self.collection().get();
        let payments = self.call_value().all_esdt_transfers();
        if payments.len() != nonces.len() {
            return false;
        }
        for (payment, nonce) in payments.iter().zip(nonces.iter()) {
            if payment.token_identifier != collection || payment.token_nonce != nonce {
                return false;
            }
            self.deposits(nonce).set(&holder);
        }
        true
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, _holder: ManagedAddress, receiver: ManagedAddress, nonce: u64) -> bool {
        self.require_vault();
        match self.mode().get() {
            StrategyMode::Reject => false,
            StrategyMode::NoReturn => true,
            StrategyMode::Honest => {
                self.deposits(nonce).clear();
                self.tx()
                    .to(&receiver)
                    .single_esdt(&self.collection().get(), nonce, &BigUint::from(1u64))
                    .transfer();
                true
            },
        }
    }

    /// Lends the items to `receiver`, calling the endpoint named by `data` with them attached.
    #[endpoint(flashLoanStart)]
    fn flash_loan_start(
        &self,
        holder: ManagedAddress,
        receiver: ManagedAddress,
        nonces: ManagedVec<u64>,
        data: ManagedBuffer,
    ) -> bool {
        self.require_vault();
        if self.mode().get() == StrategyMode::Reject {
            return false;
        }

        let collection = self.collection().get();
        let mut payments = ManagedVec::<Self::Api, EsdtTokenPayment>::new();
        for nonce in nonces.iter() {
            payments.push(EsdtTokenPayment::new(
                collection.clone(),
                nonce,
                BigUint::from(1u64),
            ));
        }

        self.tx()
            .to(&receiver)
            .raw_call(data)
            .argument(&holder)
            .multi_esdt(payments)
            .sync_call();
        true
    }

    /// Confirms every flashed item came back.
    #[endpoint(flashLoanEnd)]
    fn flash_loan_end(
        &self,
        _holder: ManagedAddress,
        nonces: ManagedVec<u64>,
        _data: ManagedBuffer,
    ) -> bool {
        self.require_vault();
        let collection = EgldOrEsdtTokenIdentifier::esdt(self.collection().get());
        nonces
            .iter()
            .all(|nonce| self.blockchain().get_sc_balance(&collection, nonce) > BigUint::zero())
    }

    fn require_vault(&self) {
        require!(
            self.blockchain().get_caller() == self.vault().get(),
            "Only the vault may call"
        );
    }

    #[view(getDepositor)]
    #[storage_mapper("deposits")]
    fn deposits(&self, nonce: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("vault")]
    fn vault(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("collection")]
    fn collection(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getMode)]
    #[storage_mapper("mode")]
    fn mode(&self) -> SingleValueMapper<StrategyMode>;
}
