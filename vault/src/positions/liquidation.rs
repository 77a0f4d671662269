use common_errors::*;

use crate::{boosts, cache::Cache, credit, interest, oracle, storage, validation, valuation};

use super::account;

multiversx_sc::imports!();

/// Outcome of a liquidation, settled once the ledger has been committed.
pub struct Liquidation<M: ManagedTypeApi> {
    pub holder: ManagedAddress<M>,
    pub debt_amount: BigUint<M>,
    pub insured: bool,
    pub custodian: Option<ManagedAddress<M>>,
}

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + valuation::ValuationModule
    + credit::CreditModule
    + interest::InterestModule
    + account::PositionAccountModule
    + boosts::locks::BoostLockModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Repays the whole debt of a position above its liquidation limit.
    ///
    /// The repaid stablecoin is burned and the boosts of the item are forfeited.
    /// An uninsured position is deleted and its item goes to the liquidator's
    /// receiver. An insured position is frozen with its owed amount, leaving the
    /// holder a window to repurchase the item.
    fn process_liquidation(
        &self,
        cache: &mut Cache<Self>,
        liquidator: &ManagedAddress,
        nonce: u64,
        available: &BigUint,
    ) -> Liquidation<Self::Api> {
        let owner = self.position_owner(nonce);
        require!(!owner.is_empty(), ERROR_INVALID_POSITION);
        let holder = owner.get();

        let mut position = self.positions(nonce).get();
        require!(
            self.is_position_liquidatable(&holder, nonce, &position, cache),
            ERROR_INVALID_POSITION
        );

        let debt_amount = self.write_off_debt(cache, &mut position);
        require!(available >= &debt_amount, ERROR_INVALID_AMOUNT);

        let custodian = position.custodian.take();
        let insured = position.insured;
        if insured {
            position.debt_amount_for_repurchase = debt_amount.clone();
            position.liquidated_at = cache.timestamp;
            position.liquidator = Some(liquidator.clone());
            self.positions(nonce).set(&position);
        } else {
            self.remove_position(nonce, &holder);
        }

        self.forfeit_boosts(nonce);
        self.liquidation_event(liquidator, &holder, nonce, &debt_amount, insured);

        self.send()
            .esdt_local_burn(&self.stablecoin().get(), 0, &debt_amount);

        Liquidation {
            holder,
            debt_amount,
            insured,
            custodian,
        }
    }
}
