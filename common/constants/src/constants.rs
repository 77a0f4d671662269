#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// One unit of the reference asset or of the stablecoin, both carry 18 decimals
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Feeds reporting more decimals than this are rejected on registration
pub const MAX_FEED_DECIMALS: u8 = 27;

/// Maximum number of collateral items a single batched call may touch
pub const MAX_ITEMS_PER_CALL: usize = 50;
