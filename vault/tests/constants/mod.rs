use common_structs::{Rate, ValuationSettings, VaultSettings};
use multiversx_sc::types::{BigUint, TestAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestTokenIdentifier},
};

pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Tests start from a realistic block time, a zero `liquidated_at` means "healthy"
pub const BASE_TIMESTAMP: u64 = 1_700_000_000;

pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const COLLECTION: TestTokenIdentifier = TestTokenIdentifier::new("APES-abcdef");
pub const STABLE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USD-abcdef");
pub const BOOST_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BOOST-abcdef");
pub const NEW_BOOST_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NBOOST-abcdef");

pub const FLOOR_PRICE: u64 = 50; // 50 reference units per item
pub const REFERENCE_PRICE: u64 = 1; // 1 stablecoin per reference unit
pub const BOOST_PRICE: u64 = 2; // 2 reference units per boost token
pub const FEED_DECIMALS: u8 = 18;

pub const CREDIT_LIMIT_RATE: Rate = Rate::new(32, 100);
pub const LIQUIDATION_LIMIT_RATE: Rate = Rate::new(40, 100);
pub const CREDIT_LIMIT_RATE_CAP: Rate = Rate::new(60, 100);
pub const LIQUIDATION_LIMIT_RATE_CAP: Rate = Rate::new(75, 100);
pub const STAKING_RATE_INCREASE: Rate = Rate::new(5, 100);
pub const MAX_LTV_BOOST_BPS: u64 = 2_000; // 20%
pub const TRAIT_BOOST_LOCK_RATE: Rate = Rate::new(10, 100);
pub const LTV_BOOST_LOCK_RATE: Rate = Rate::new(10, 100);
pub const LOCK_RELEASE_DELAY: u64 = 7 * SECONDS_PER_DAY;

pub const DEBT_INTEREST_APR: Rate = Rate::new(10, 100);
pub const ORGANIZATION_FEE_RATE: Rate = Rate::new(5, 1000);
pub const INSURANCE_PURCHASE_RATE: Rate = Rate::new(2, 100);
pub const INSURANCE_PENALTY_RATE: Rate = Rate::new(5, 100);
pub const REPURCHASE_TIME_LIMIT: u64 = 2 * SECONDS_PER_DAY;
pub const BORROW_AMOUNT_CAP: u64 = 1_000_000;

pub const GOLD_TYPE: &[u8] = b"gold";

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const ADMIN_ADDRESS: TestAddress = TestAddress::new("admin");
pub const HOLDER_ADDRESS: TestAddress = TestAddress::new("holder");
pub const OTHER_ADDRESS: TestAddress = TestAddress::new("other");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const ROUTER_ADDRESS: TestAddress = TestAddress::new("router");
pub const ORACLE_ADDRESS: TestAddress = TestAddress::new("oracle");

/// Items minted to the holder at setup
pub const HOLDER_NONCES: [u64; 4] = [1, 2, 3, 4];
/// Items minted to the router at setup
pub const ROUTER_NONCES: [u64; 2] = [7, 8];
/// Item minted to the other account at setup
pub const OTHER_NONCE: u64 = 9;

pub const VAULT_PATH: MxscPath = MxscPath::new("output/nft-vault.mxsc.json");
pub const ACCESS_MANAGER_PATH: MxscPath =
    MxscPath::new("../access_manager/output/access-manager.mxsc.json");
pub const PRICE_FEED_PATH: MxscPath = MxscPath::new("../price_feed/output/price-feed.mxsc.json");
pub const STAKING_MOCK_PATH: MxscPath =
    MxscPath::new("../staking_mock/output/staking-mock.mxsc.json");
pub const STRATEGY_MOCK_PATH: MxscPath =
    MxscPath::new("../strategy_mock/output/strategy-mock.mxsc.json");
pub const FLASH_MOCK_PATH: MxscPath = MxscPath::new("../flash_mock/output/flash-mock.mxsc.json");

/// `units` whole tokens with 18 decimals.
pub fn wad(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(WAD)
}

/// `numerator / denominator` whole tokens with 18 decimals, for fractional amounts.
pub fn wad_fraction(numerator: u64, denominator: u64) -> BigUint<StaticApi> {
    BigUint::from(numerator) * BigUint::from(WAD) / BigUint::from(denominator)
}

pub fn default_vault_settings() -> VaultSettings<StaticApi> {
    VaultSettings {
        debt_interest_apr: DEBT_INTEREST_APR,
        organization_fee_rate: ORGANIZATION_FEE_RATE,
        insurance_purchase_rate: INSURANCE_PURCHASE_RATE,
        insurance_liquidation_penalty_rate: INSURANCE_PENALTY_RATE,
        insurance_repurchase_time_limit: REPURCHASE_TIME_LIMIT,
        borrow_amount_cap: wad(BORROW_AMOUNT_CAP),
    }
}

pub fn default_valuation_settings() -> ValuationSettings {
    ValuationSettings {
        base_credit_limit_rate: CREDIT_LIMIT_RATE,
        base_liquidation_limit_rate: LIQUIDATION_LIMIT_RATE,
        credit_limit_rate_cap: CREDIT_LIMIT_RATE_CAP,
        liquidation_limit_rate_cap: LIQUIDATION_LIMIT_RATE_CAP,
        staking_rate_increase: STAKING_RATE_INCREASE,
        max_ltv_boost_bps: MAX_LTV_BOOST_BPS,
        trait_boost_lock_rate: TRAIT_BOOST_LOCK_RATE,
        ltv_boost_lock_rate: LTV_BOOST_LOCK_RATE,
        lock_release_delay: LOCK_RELEASE_DELAY,
    }
}
