#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A non-negative rational number `numerator / denominator`.
///
/// Rates are applied to amounts with floor truncation: `amount * numerator / denominator`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rate {
    pub numerator: u64,
    pub denominator: u64,
}

impl Rate {
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Rate {
            numerator,
            denominator,
        }
    }

    pub const fn zero() -> Self {
        Rate {
            numerator: 0,
            denominator: 1,
        }
    }

    /// A proper fraction in `[0, 1]`.
    pub fn is_valid_fraction(&self) -> bool {
        self.denominator > 0 && self.numerator <= self.denominator
    }

    /// A multiplier that never lowers the value it is applied to.
    pub fn is_valid_multiplier(&self) -> bool {
        self.denominator > 0 && self.numerator >= self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Exact comparison through cross multiplication.
    pub fn greater_than(&self, other: &Rate) -> bool {
        (self.numerator as u128) * (other.denominator as u128)
            > (other.numerator as u128) * (self.denominator as u128)
    }

    pub fn apply<M: ManagedTypeApi>(&self, amount: &BigUint<M>) -> BigUint<M> {
        if self.denominator == 0 {
            return BigUint::zero();
        }
        amount * &BigUint::from(self.numerator) / BigUint::from(self.denominator)
    }
}

/// Process-wide debt parameters, mutated only by administrators.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct VaultSettings<M: ManagedTypeApi> {
    pub debt_interest_apr: Rate,
    pub organization_fee_rate: Rate,
    pub insurance_purchase_rate: Rate,
    pub insurance_liquidation_penalty_rate: Rate,
    /// Seconds after a liquidation during which the holder may repurchase
    pub insurance_repurchase_time_limit: u64,
    pub borrow_amount_cap: BigUint<M>,
}

impl<M: ManagedTypeApi> VaultSettings<M> {
    pub fn has_valid_rates(&self) -> bool {
        self.debt_interest_apr.is_valid_fraction()
            && self.organization_fee_rate.is_valid_fraction()
            && self.insurance_purchase_rate.is_valid_fraction()
            && self.insurance_liquidation_penalty_rate.is_valid_fraction()
    }

    /// An insured borrow pays both fees out of the borrowed amount, so together they stay within 1.
    pub fn has_affordable_fees(&self) -> bool {
        let organization = &self.organization_fee_rate;
        let insurance = &self.insurance_purchase_rate;
        (organization.numerator as u128) * (insurance.denominator as u128)
            + (insurance.numerator as u128) * (organization.denominator as u128)
            <= (organization.denominator as u128) * (insurance.denominator as u128)
    }
}

/// Parameters of the valuation engine and the credit limit calculator.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ValuationSettings {
    pub base_credit_limit_rate: Rate,
    pub base_liquidation_limit_rate: Rate,
    pub credit_limit_rate_cap: Rate,
    pub liquidation_limit_rate_cap: Rate,
    /// Added to both limit rates when the holder is staking
    pub staking_rate_increase: Rate,
    /// Highest rate increase, in basis points, an LTV boost may buy
    pub max_ltv_boost_bps: u64,
    pub trait_boost_lock_rate: Rate,
    pub ltv_boost_lock_rate: Rate,
    /// Seconds between queueing a boost release and being able to withdraw it
    pub lock_release_delay: u64,
}

impl ValuationSettings {
    pub fn has_valid_rates(&self) -> bool {
        self.base_credit_limit_rate.is_valid_fraction()
            && self.base_liquidation_limit_rate.is_valid_fraction()
            && self.credit_limit_rate_cap.is_valid_fraction()
            && self.liquidation_limit_rate_cap.is_valid_fraction()
            && self.staking_rate_increase.is_valid_fraction()
            && self.trait_boost_lock_rate.is_valid_fraction()
            && self.ltv_boost_lock_rate.is_valid_fraction()
    }

    /// The liquidation limit must sit above the credit limit, and each base under its cap.
    pub fn has_ordered_limits(&self) -> bool {
        self.base_liquidation_limit_rate
            .greater_than(&self.base_credit_limit_rate)
            && !self
                .base_credit_limit_rate
                .greater_than(&self.credit_limit_rate_cap)
            && !self
                .base_liquidation_limit_rate
                .greater_than(&self.liquidation_limit_rate_cap)
            && !self
                .credit_limit_rate_cap
                .greater_than(&self.liquidation_limit_rate_cap)
    }
}

/// Debt record of one collateral item.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Position<M: ManagedTypeApi> {
    /// Fixed when the position is opened
    pub insured: bool,
    pub debt_principal: BigUint<M>,
    /// Share of the global debt, used to derive accrued interest lazily
    pub debt_portion: BigUint<M>,
    /// Owed amount frozen at liquidation time, for insured positions
    pub debt_amount_for_repurchase: BigUint<M>,
    /// Zero while healthy
    pub liquidated_at: u64,
    pub liquidator: Option<ManagedAddress<M>>,
    /// Strategy currently holding the collateral
    pub custodian: Option<ManagedAddress<M>>,
}

impl<M: ManagedTypeApi> Position<M> {
    pub fn new(insured: bool) -> Self {
        Position {
            insured,
            debt_principal: BigUint::zero(),
            debt_portion: BigUint::zero(),
            debt_amount_for_repurchase: BigUint::zero(),
            liquidated_at: 0,
            liquidator: None,
            custodian: None,
        }
    }

    pub fn is_liquidated(&self) -> bool {
        self.liquidated_at != 0
    }

    pub fn is_in_custody(&self) -> bool {
        self.custodian.is_some()
    }

    pub fn has_debt(&self) -> bool {
        self.debt_principal > BigUint::zero() || self.debt_portion > BigUint::zero()
    }

    pub fn clear_liquidation(&mut self) {
        self.debt_amount_for_repurchase = BigUint::zero();
        self.liquidated_at = 0;
        self.liquidator = None;
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoostKind {
    Trait,
    Ltv,
}

/// Boost currency locked against a collateral item.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct BoostLock<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub amount: BigUint<M>,
    /// Zero until a release is queued
    pub unlock_at: u64,
    /// Amount is denominated in the boost currency that preceded the last migration
    pub is_legacy: bool,
}

impl<M: ManagedTypeApi> BoostLock<M> {
    pub fn new(owner: ManagedAddress<M>, amount: BigUint<M>) -> Self {
        BoostLock {
            owner,
            amount,
            unlock_at: 0,
            is_legacy: false,
        }
    }

    pub fn is_queued(&self) -> bool {
        self.unlock_at != 0
    }

    /// The boost still applies: never queued, or queued but the delay has not elapsed.
    pub fn is_active(&self, now: u64) -> bool {
        self.unlock_at == 0 || self.unlock_at > now
    }

    pub fn is_released(&self, now: u64) -> bool {
        !self.is_active(now)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Capability {
    Admin,
    Liquidator,
    Router,
}

/// One step of a batched `doActions` call.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub enum VaultAction<M: ManagedTypeApi> {
    Borrow {
        nonce: u64,
        amount: BigUint<M>,
        insure: bool,
    },
    Repay {
        nonce: u64,
        amount: BigUint<M>,
    },
    ClosePosition {
        nonce: u64,
    },
    Repurchase {
        nonce: u64,
        max_amount: BigUint<M>,
    },
    DepositInStrategy {
        nonces: ManagedVec<M, u64>,
        strategy: ManagedAddress<M>,
        data: ManagedBuffer<M>,
    },
    WithdrawFromStrategy {
        nonces: ManagedVec<M, u64>,
    },
}

/// What a router receives when it force closes a position.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct MigratedPosition<M: ManagedTypeApi> {
    pub holder: ManagedAddress<M>,
    pub debt_amount: BigUint<M>,
    pub insured: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PositionView<M: ManagedTypeApi> {
    pub nonce: u64,
    pub holder: ManagedAddress<M>,
    pub position: Position<M>,
    pub debt_amount: BigUint<M>,
    pub credit_limit: BigUint<M>,
    pub liquidation_limit: BigUint<M>,
    pub is_liquidatable: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LedgerTotals<M: ManagedTypeApi> {
    pub total_debt_amount: BigUint<M>,
    pub total_debt_principal: BigUint<M>,
    pub total_debt_portion: BigUint<M>,
    pub total_fee_collected: BigUint<M>,
    pub total_debt_accrued_at: u64,
}
