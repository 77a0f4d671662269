#![no_std]

// Validation
pub static ERROR_INVALID_NFT: &[u8] = b"Invalid NFT.";
pub static ERROR_INVALID_AMOUNT: &[u8] = b"Invalid amount.";
pub static ERROR_INVALID_LENGTH: &[u8] = b"Invalid length.";
pub static ERROR_INVALID_RATE: &[u8] = b"Invalid rate.";
pub static ERROR_INVALID_NFT_TYPE: &[u8] = b"Invalid NFT type.";
pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment.";
pub static ERROR_INVALID_PRICE: &[u8] = b"Invalid price.";
pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid feed decimals.";
pub static ERROR_INVALID_ADDRESS: &[u8] = b"Invalid address.";
pub static ERROR_TOO_MANY_ITEMS: &[u8] = b"Too many items in a single call.";

// Authorization
pub static ERROR_UNAUTHORIZED: &[u8] = b"Unauthorized.";

// State
pub static ERROR_POSITION_LIQUIDATED: &[u8] = b"Position liquidated.";
pub static ERROR_INVALID_POSITION: &[u8] = b"Invalid position.";
pub static ERROR_POSITION_INSURANCE_EXPIRED: &[u8] = b"Position insurance expired.";
pub static ERROR_POSITION_INSURANCE_NOT_EXPIRED: &[u8] = b"Position insurance not expired.";
pub static ERROR_LOCK_EXISTS: &[u8] = b"Lock exists.";
pub static ERROR_NON_ZERO_DEBT: &[u8] = b"Non-zero debt: ";
pub static ERROR_DEBT_CAP_REACHED: &[u8] = b"Debt cap reached.";
pub static ERROR_FLASH_ONGOING: &[u8] = b"Flash operation ongoing.";
pub static ERROR_MIGRATION_DONE: &[u8] = b"Boost currency already migrated.";
pub static ERROR_SAME_BOOST_TOKEN: &[u8] = b"New boost token must differ from the current one.";

// Collaborators
pub static ERROR_INVALID_STRATEGY: &[u8] = b"Invalid strategy.";

// Oracle
pub static ERROR_NOT_AN_ORACLE: &[u8] = b"Only whitelisted oracles may submit.";
pub static ERROR_NO_ANSWER: &[u8] = b"No answer submitted yet.";
pub static ERROR_FEED_PAUSED: &[u8] = b"Price feed is paused.";
