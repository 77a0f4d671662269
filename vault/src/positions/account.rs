use common_structs::Position;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAccountModule: storage::Storage {
    /// Registers a freshly opened position and indexes it under its holder.
    fn record_position(&self, nonce: u64, holder: &ManagedAddress, position: &Position<Self::Api>) {
        self.position_owner(nonce).set(holder);
        self.positions(nonce).set(position);
        self.open_positions().insert(nonce);
        self.holder_positions(holder).insert(nonce);
    }

    /// Deletes every trace of a position. The collateral must leave the vault right after.
    fn remove_position(&self, nonce: u64, holder: &ManagedAddress) {
        self.positions(nonce).clear();
        self.position_owner(nonce).clear();
        self.open_positions().swap_remove(&nonce);
        self.holder_positions(holder).swap_remove(&nonce);
    }
}
