use common_errors::*;
use common_structs::{BoostKind, Capability, Rate};

use crate::{access, storage, validation};

use super::locks;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait BoostMigrationModule:
    storage::Storage
    + access::AccessModule
    + validation::ValidationModule
    + locks::BoostLockModule
    + common_events::EventsModule
{
    /// Switches the boost currency. Can only happen once.
    ///
    /// Every existing lock is flagged legacy and from then on pays out
    /// `amount * conversion_rate` of the new token. The caller funds those
    /// payouts and receives the legacy tokens the vault held.
    ///
    /// # Payment
    /// - The new boost token, at least the converted value of every lock. The excess is refunded.
    #[payable]
    #[endpoint(migrateBoostCurrency)]
    fn migrate_boost_currency(&self, conversion_rate: Rate) {
        self.require_not_flashing();
        let caller = self.require_capability(Capability::Admin);
        require!(self.legacy_boost_token().is_empty(), ERROR_MIGRATION_DONE);
        require!(
            conversion_rate.denominator > 0 && !conversion_rate.is_zero(),
            ERROR_INVALID_RATE
        );

        let payment = self.call_value().single_esdt().clone();
        let legacy_token = self.boost_token().get();
        require!(payment.token_nonce == 0, ERROR_INVALID_PAYMENT);
        require!(
            payment.token_identifier != legacy_token,
            ERROR_SAME_BOOST_TOKEN
        );

        let mut legacy_total = BigUint::zero();
        let mut converted_total = BigUint::zero();
        for kind in [BoostKind::Trait, BoostKind::Ltv] {
            let mut locks = self.boost_locks(kind);
            let mut nonces = ManagedVec::<Self::Api, u64>::new();
            for nonce in locks.keys() {
                nonces.push(nonce);
            }
            for nonce in nonces.iter() {
                if let Some(mut lock) = locks.get(&nonce) {
                    legacy_total += &lock.amount;
                    converted_total += conversion_rate.apply(&lock.amount);
                    lock.is_legacy = true;
                    locks.insert(nonce, lock);
                }
            }
        }
        require!(payment.amount >= converted_total, ERROR_INVALID_AMOUNT);

        self.legacy_boost_token().set(&legacy_token);
        self.legacy_conversion_rate().set(conversion_rate);
        self.boost_token().set(&payment.token_identifier);
        self.boost_currency_migrated_event(
            &legacy_token,
            &payment.token_identifier,
            &conversion_rate,
            &legacy_total,
        );

        if legacy_total > BigUint::zero() {
            self.tx()
                .to(&caller)
                .single_esdt(&legacy_token, 0, &legacy_total)
                .transfer();
        }
        self.send_boost(&caller, &(&payment.amount - &converted_total));
    }
}
