pub mod account;
pub mod borrow;
pub mod close;
pub mod insurance;
pub mod liquidation;
pub mod migration;
pub mod repay;
