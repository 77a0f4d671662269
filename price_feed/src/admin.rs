use common_constants::MAX_FEED_DECIMALS;
use common_errors::ERROR_INVALID_DECIMALS;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    #[init]
    fn init(
        &self,
        decimals: u8,
        description: ManagedBuffer,
        oracles: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(decimals <= MAX_FEED_DECIMALS, ERROR_INVALID_DECIMALS);
        self.feed_decimals().set(decimals);
        self.description().set(description);
        self.add_oracles(oracles);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addOracles)]
    fn add_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.oracles();
        for oracle in oracles {
            mapper.insert(oracle);
        }
    }

    #[only_owner]
    #[endpoint(removeOracles)]
    fn remove_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.oracles();
        for oracle in oracles {
            mapper.swap_remove(&oracle);
        }
    }
}
