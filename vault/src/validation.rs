use common_constants::MAX_ITEMS_PER_CALL;
use common_errors::*;
use common_structs::{Position, Rate};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ValidationModule: crate::storage::Storage {
    /// Blocks every state changing entry point while collateral is out on a flash loan.
    fn require_not_flashing(&self) {
        require!(!self.flash_ongoing().get(), ERROR_FLASH_ONGOING);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
    }

    fn require_items_count(&self, count: usize) {
        require!(count > 0, ERROR_INVALID_LENGTH);
        require!(count <= MAX_ITEMS_PER_CALL, ERROR_TOO_MANY_ITEMS);
    }

    fn require_valid_fraction(&self, rate: &Rate) {
        require!(rate.is_valid_fraction(), ERROR_INVALID_RATE);
    }

    fn require_valid_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_INVALID_ADDRESS);
    }

    /// Loads the position of `nonce` and checks that `caller` holds it.
    fn require_position_holder(
        &self,
        nonce: u64,
        caller: &ManagedAddress,
    ) -> Position<Self::Api> {
        let owner = self.position_owner(nonce);
        require!(!owner.is_empty(), ERROR_INVALID_POSITION);
        require!(&owner.get() == caller, ERROR_UNAUTHORIZED);

        self.positions(nonce).get()
    }

    /// One item of the collateral collection.
    fn require_collateral_payment(&self, payment: &EsdtTokenPayment) {
        require!(
            payment.token_identifier == self.collection().get()
                && payment.amount == BigUint::from(1u64),
            ERROR_INVALID_NFT
        );
    }

    fn require_stablecoin_payment(&self, payment: &EsdtTokenPayment) {
        require!(
            payment.token_identifier == self.stablecoin().get() && payment.token_nonce == 0,
            ERROR_INVALID_PAYMENT
        );
        self.require_amount_greater_than_zero(&payment.amount);
    }

    fn require_boost_payment(&self, payment: &EsdtTokenPayment) {
        require!(
            payment.token_identifier == self.boost_token().get() && payment.token_nonce == 0,
            ERROR_INVALID_PAYMENT
        );
    }
}
