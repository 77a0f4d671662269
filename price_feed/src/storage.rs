multiversx_sc::imports!();

use crate::structs::Round;

#[multiversx_sc::module]
pub trait StorageModule {
    #[storage_mapper("oracles")]
    fn oracles(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("decimals")]
    fn feed_decimals(&self) -> SingleValueMapper<u8>;

    #[view(description)]
    #[storage_mapper("description")]
    fn description(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("latest_round")]
    fn latest_round(&self) -> SingleValueMapper<Round<Self::Api>>;
}
