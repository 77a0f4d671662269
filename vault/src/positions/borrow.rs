use common_errors::*;
use common_structs::Position;

use crate::{cache::Cache, credit, interest, oracle, storage, validation, valuation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + valuation::ValuationModule
    + credit::CreditModule
    + interest::InterestModule
    + account::PositionAccountModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Borrows `amount` of stablecoin against item `nonce`.
    ///
    /// `deposited` tells whether the item arrived with this call, which is how a
    /// new position is opened. Later borrows must come from the recorded holder.
    /// The organization fee, and the insurance premium for insured positions, are
    /// kept by the vault and the net amount is minted to the holder.
    fn process_borrow(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        nonce: u64,
        amount: &BigUint,
        insure: bool,
        deposited: bool,
    ) {
        self.require_amount_greater_than_zero(amount);

        let is_new = self.position_owner(nonce).is_empty();
        let mut position = if is_new {
            require!(deposited, ERROR_INVALID_NFT);
            Position::new(insure)
        } else {
            let position = self.require_position_holder(nonce, caller);
            require!(!position.is_liquidated(), ERROR_POSITION_LIQUIDATED);
            position
        };

        let owed = cache.owed(&position);
        let credit_limit = self.credit_limit(caller, nonce, cache);
        require!(&owed + amount <= credit_limit, "Invalid amount: {}", (amount.clone()));
        require!(
            &cache.total_debt_amount + amount <= cache.settings.borrow_amount_cap,
            ERROR_DEBT_CAP_REACHED
        );

        let mut fee = cache.settings.organization_fee_rate.apply(amount);
        if position.insured {
            fee += cache.settings.insurance_purchase_rate.apply(amount);
        }
        cache.total_fee_collected += &fee;
        self.add_debt(cache, &mut position, amount);

        if is_new {
            self.record_position(nonce, caller, &position);
        } else {
            self.positions(nonce).set(&position);
        }
        self.borrow_event(caller, nonce, amount, &fee, position.insured);

        let stablecoin = self.stablecoin().get();
        let net_amount = amount - &fee;
        if net_amount > BigUint::zero() {
            self.send().esdt_local_mint(&stablecoin, 0, &net_amount);
            self.tx()
                .to(caller)
                .single_esdt(&stablecoin, 0, &net_amount)
                .transfer();
        }
    }
}
