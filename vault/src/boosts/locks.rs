use common_errors::ERROR_UNAUTHORIZED;
use common_structs::{BoostKind, BoostLock};

use crate::storage;

multiversx_sc::imports!();

/// Bookkeeping shared by trait and LTV boosts.
///
/// A lock stays active until its owner queues a release and the release delay
/// elapses. Released locks keep their funds in the vault until withdrawn or
/// replaced. Amounts of locks flagged legacy are converted at the migration
/// rate whenever they are paid out or burned.
#[multiversx_sc::module]
pub trait BoostLockModule: storage::Storage + common_events::EventsModule {
    /// What a lock is worth in the current boost token.
    fn lock_value(&self, lock: &BoostLock<Self::Api>) -> BigUint {
        if lock.is_legacy {
            self.legacy_conversion_rate().get().apply(&lock.amount)
        } else {
            lock.amount.clone()
        }
    }

    /// Stores `lock` for `nonce`, refunding whatever lock it replaces to that lock's owner.
    fn replace_lock(&self, kind: BoostKind, nonce: u64, lock: BoostLock<Self::Api>) {
        self.boost_locked_event(kind, nonce, &lock.owner, &lock.amount);

        if let Some(previous) = self.boost_locks(kind).insert(nonce, lock) {
            let refund = self.lock_value(&previous);
            self.send_boost(&previous.owner, &refund);
        }
    }

    fn queue_release(&self, kind: BoostKind, nonces: &ManagedVec<u64>) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let delay = self.valuation_settings().get().lock_release_delay;

        let mut locks = self.boost_locks(kind);
        for nonce in nonces.iter() {
            let mut lock = self.require_lock_owner(kind, nonce, &caller);
            require!(!lock.is_queued(), ERROR_UNAUTHORIZED);

            lock.unlock_at = now + delay;
            self.boost_release_queued_event(kind, nonce, &caller, lock.unlock_at);
            locks.insert(nonce, lock);
        }
    }

    fn cancel_release(&self, kind: BoostKind, nonces: &ManagedVec<u64>) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        let mut locks = self.boost_locks(kind);
        for nonce in nonces.iter() {
            let mut lock = self.require_lock_owner(kind, nonce, &caller);
            require!(lock.is_queued() && lock.is_active(now), ERROR_UNAUTHORIZED);

            lock.unlock_at = 0;
            self.boost_release_cancelled_event(kind, nonce, &caller);
            locks.insert(nonce, lock);
        }
    }

    fn withdraw_released(&self, kind: BoostKind, nonces: &ManagedVec<u64>) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        let mut locks = self.boost_locks(kind);
        let mut total = BigUint::zero();
        for nonce in nonces.iter() {
            let lock = self.require_lock_owner(kind, nonce, &caller);
            require!(lock.is_queued() && lock.is_released(now), ERROR_UNAUTHORIZED);

            let amount = self.lock_value(&lock);
            self.boost_withdrawn_event(kind, nonce, &caller, &amount);
            total += amount;

            locks.remove(&nonce);
            if kind == BoostKind::Ltv {
                self.ltv_boost_rate_increase(nonce).clear();
            }
        }

        self.send_boost(&caller, &total);
    }

    /// Burns every lock held against `nonce`. Called when its position is liquidated.
    fn forfeit_boosts(&self, nonce: u64) {
        let mut burned = BigUint::zero();
        for kind in [BoostKind::Trait, BoostKind::Ltv] {
            if let Some(lock) = self.boost_locks(kind).remove(&nonce) {
                let amount = self.lock_value(&lock);
                self.boost_forfeited_event(kind, nonce, &lock.owner, &amount);
                burned += amount;
            }
        }
        self.ltv_boost_rate_increase(nonce).clear();

        if burned > BigUint::zero() {
            self.send()
                .esdt_local_burn(&self.boost_token().get(), 0, &burned);
        }
    }

    fn require_lock_owner(
        &self,
        kind: BoostKind,
        nonce: u64,
        caller: &ManagedAddress,
    ) -> BoostLock<Self::Api> {
        match self.boost_locks(kind).get(&nonce) {
            Some(lock) if &lock.owner == caller => lock,
            _ => sc_panic!(ERROR_UNAUTHORIZED),
        }
    }

    fn send_boost(&self, receiver: &ManagedAddress, amount: &BigUint) {
        if amount == &BigUint::zero() {
            return;
        }

        self.tx()
            .to(receiver)
            .single_esdt(&self.boost_token().get(), 0, amount)
            .transfer();
    }
}
