use common_errors::*;
use common_structs::{MigratedPosition, Position};

use crate::{cache::Cache, credit, interest, oracle, storage, validation, valuation};

use super::account;

multiversx_sc::imports!();

/// Moves positions between vaults through a router.
///
/// Force closing takes a position off this ledger without burning its debt, the
/// router carries it over and imports it into another vault with the same amount.
#[multiversx_sc::module]
pub trait PositionMigrationModule:
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
    fn process_force_close(
        &self,
        cache: &mut Cache<Self>,
        router: &ManagedAddress,
        nonce: u64,
    ) -> (MigratedPosition<Self::Api>, Option<ManagedAddress>) {
        let owner = self.position_owner(nonce);
        require!(!owner.is_empty(), ERROR_INVALID_POSITION);
        let holder = owner.get();

        let mut position = self.positions(nonce).get();
        require!(!position.is_liquidated(), ERROR_POSITION_LIQUIDATED);

        let debt_amount = self.write_off_debt(cache, &mut position);
        self.remove_position(nonce, &holder);
        self.position_force_closed_event(router, &holder, nonce, &debt_amount);

        let migrated = MigratedPosition {
            holder,
            debt_amount,
            insured: position.insured,
        };

        (migrated, position.custodian)
    }

    /// Opens a position for `holder` on an item brought by the router, with `debt_amount` of principal.
    fn process_import(
        &self,
        cache: &mut Cache<Self>,
        router: &ManagedAddress,
        holder: &ManagedAddress,
        nonce: u64,
        debt_amount: &BigUint,
        insured: bool,
    ) {
        require!(self.position_owner(nonce).is_empty(), ERROR_INVALID_POSITION);
        self.require_valid_address(holder);

        let mut position = Position::new(insured);
        if debt_amount > &BigUint::zero() {
            let credit_limit = self.credit_limit(holder, nonce, cache);
            require!(
                debt_amount <= &credit_limit,
                "Invalid amount: {}",
                (debt_amount.clone())
            );
            require!(
                &cache.total_debt_amount + debt_amount <= cache.settings.borrow_amount_cap,
                ERROR_DEBT_CAP_REACHED
            );
            self.add_debt(cache, &mut position, debt_amount);
        }

        self.record_position(nonce, holder, &position);
        self.position_imported_event(router, holder, nonce, debt_amount);
    }
}
