use common_errors::*;

use crate::{cache::Cache, storage, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionCloseModule:
    storage::Storage
    + validation::ValidationModule
    + account::PositionAccountModule
    + common_events::EventsModule
{
    /// Deletes a debt free position.
    ///
    /// Returns the strategy holding the item, if any. The caller hands the item
    /// back to the holder once the cache is committed.
    fn process_close(
        &self,
        cache: &Cache<Self>,
        caller: &ManagedAddress,
        nonce: u64,
    ) -> Option<ManagedAddress> {
        let position = self.require_position_holder(nonce, caller);
        require!(!position.is_liquidated(), ERROR_POSITION_LIQUIDATED);

        let owed = cache.owed(&position);
        require!(owed == BigUint::zero(), "Non-zero debt: {}", owed);

        self.remove_position(nonce, caller);
        self.position_closed_event(caller, nonce);

        position.custodian
    }
}
