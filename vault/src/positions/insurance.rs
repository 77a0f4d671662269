use common_errors::*;

use crate::{cache::Cache, credit, interest, oracle, storage, validation, valuation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionInsuranceModule:
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
    /// Buys back a liquidated insured position within the repurchase window.
    ///
    /// The position reopens with a principal of `min(credit_limit, frozen_debt)`.
    /// The holder pays the rest of the frozen debt plus the liquidation penalty.
    /// The liquidator is made whole with the payment plus the newly minted principal.
    ///
    /// Returns the stablecoin taken from `available`.
    fn process_repurchase(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        nonce: u64,
        max_amount: &BigUint,
        available: &BigUint,
    ) -> BigUint {
        let mut position = self.require_position_holder(nonce, caller);
        require!(position.is_liquidated(), ERROR_INVALID_POSITION);
        require!(
            cache.timestamp
                < position.liquidated_at + cache.settings.insurance_repurchase_time_limit,
            ERROR_POSITION_INSURANCE_EXPIRED
        );
        let liquidator = match position.liquidator.clone() {
            Some(liquidator) => liquidator,
            None => sc_panic!(ERROR_INVALID_POSITION),
        };

        let frozen_debt = position.debt_amount_for_repurchase.clone();
        let penalty = cache
            .settings
            .insurance_liquidation_penalty_rate
            .apply(&frozen_debt);
        let credit_limit = self.credit_limit(caller, nonce, cache);
        let new_principal = core::cmp::min(credit_limit, frozen_debt.clone());

        let cost = &frozen_debt - &new_principal + &penalty;
        require!(&cost <= max_amount && &cost <= available, ERROR_INVALID_AMOUNT);
        require!(
            &cache.total_debt_amount + &new_principal <= cache.settings.borrow_amount_cap,
            ERROR_DEBT_CAP_REACHED
        );

        position.clear_liquidation();
        if new_principal > BigUint::zero() {
            self.add_debt(cache, &mut position, &new_principal);
        }
        self.positions(nonce).set(&position);
        self.repurchase_event(caller, nonce, &cost, &new_principal);

        let stablecoin = self.stablecoin().get();
        if new_principal > BigUint::zero() {
            self.send()
                .esdt_local_mint(&stablecoin, 0, &new_principal);
        }
        self.tx()
            .to(&liquidator)
            .single_esdt(&stablecoin, 0, &(&cost + &new_principal))
            .transfer_if_not_empty();

        cost
    }

    /// Lets the liquidator of an insured position take the item once the repurchase window is over.
    ///
    /// Returns the holder the position belonged to.
    fn process_insurance_claim(
        &self,
        cache: &Cache<Self>,
        caller: &ManagedAddress,
        nonce: u64,
    ) -> ManagedAddress {
        let owner = self.position_owner(nonce);
        require!(!owner.is_empty(), ERROR_INVALID_POSITION);
        let holder = owner.get();

        let position = self.positions(nonce).get();
        require!(position.is_liquidated(), ERROR_INVALID_POSITION);
        require!(
            cache.timestamp
                >= position.liquidated_at + cache.settings.insurance_repurchase_time_limit,
            ERROR_POSITION_INSURANCE_NOT_EXPIRED
        );
        require!(
            position.liquidator.as_ref() == Some(caller),
            ERROR_UNAUTHORIZED
        );

        self.remove_position(nonce, &holder);

        holder
    }
}
