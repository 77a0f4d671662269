pub mod locks;
pub mod ltv_boost;
pub mod migration;
pub mod trait_boost;
