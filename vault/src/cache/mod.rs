use common_structs::{LedgerTotals, Position, ValuationSettings, VaultSettings};

multiversx_sc::imports!();

/// In-memory snapshot of the debt ledger and the vault parameters.
///
/// Every state changing endpoint works on one `Cache` and lets it write the
/// ledger totals back when it goes out of scope. Calls into other contracts are
/// only made after the cache that prepared them has been dropped, so a callee
/// that re-enters the vault always reads the committed ledger.
///
/// Prices are fetched lazily and at most once per cache.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub total_debt_amount: BigUint<C::Api>,
    pub total_debt_principal: BigUint<C::Api>,
    pub total_debt_portion: BigUint<C::Api>,
    pub total_fee_collected: BigUint<C::Api>,
    /// Timestamp up to which interest is included in `total_debt_amount`
    pub last_accrual: u64,
    pub timestamp: u64,
    pub settings: VaultSettings<C::Api>,
    pub valuation: ValuationSettings,
    pub floor_value: Option<ManagedDecimal<C::Api, NumDecimals>>,
    pub reference_price: Option<ManagedDecimal<C::Api, NumDecimals>>,
    pub boost_price: Option<ManagedDecimal<C::Api, NumDecimals>>,
    commit_on_drop: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Self::load(sc_ref, true)
    }

    /// A snapshot that is never written back. Used by views.
    pub fn new_view(sc_ref: &'a C) -> Self {
        Self::load(sc_ref, false)
    }

    fn load(sc_ref: &'a C, commit_on_drop: bool) -> Self {
        Cache {
            total_debt_amount: sc_ref.total_debt_amount().get(),
            total_debt_principal: sc_ref.total_debt_principal().get(),
            total_debt_portion: sc_ref.total_debt_portion().get(),
            total_fee_collected: sc_ref.total_fee_collected().get(),
            last_accrual: sc_ref.total_debt_accrued_at().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            settings: sc_ref.settings().get(),
            valuation: sc_ref.valuation_settings().get(),
            floor_value: None,
            reference_price: None,
            boost_price: None,
            commit_on_drop,
            sc_ref,
        }
    }

    /// Amount currently owed by a position: its share of the global debt, never
    /// less than the principal it borrowed.
    pub fn owed(&self, position: &Position<C::Api>) -> BigUint<C::Api> {
        let share = if self.total_debt_portion == BigUint::zero() {
            BigUint::zero()
        } else {
            &position.debt_portion * &self.total_debt_amount / &self.total_debt_portion
        };

        if share > position.debt_principal {
            share
        } else {
            position.debt_principal.clone()
        }
    }

    pub fn totals(&self) -> LedgerTotals<C::Api> {
        LedgerTotals {
            total_debt_amount: self.total_debt_amount.clone(),
            total_debt_principal: self.total_debt_principal.clone(),
            total_debt_portion: self.total_debt_portion.clone(),
            total_fee_collected: self.total_fee_collected.clone(),
            total_debt_accrued_at: self.last_accrual,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        if !self.commit_on_drop {
            return;
        }

        self.sc_ref.total_debt_amount().set(&self.total_debt_amount);
        self.sc_ref
            .total_debt_principal()
            .set(&self.total_debt_principal);
        self.sc_ref.total_debt_portion().set(&self.total_debt_portion);
        self.sc_ref.total_fee_collected().set(&self.total_fee_collected);
        self.sc_ref.total_debt_accrued_at().set(self.last_accrual);
    }
}
