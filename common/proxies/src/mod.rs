#![no_std]

pub mod proxy_access_manager;
pub mod proxy_flash_mock;
pub mod proxy_price_feed;
pub mod proxy_staking;
pub mod proxy_strategy;
pub mod proxy_strategy_mock;
pub mod proxy_vault;
