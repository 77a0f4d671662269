multiversx_sc::imports!();

use common_errors::{ERROR_FEED_PAUSED, ERROR_NOT_AN_ORACLE, ERROR_NO_ANSWER};

use crate::structs::Round;

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    fn require_is_oracle(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.oracles().contains(&caller), ERROR_NOT_AN_ORACLE);
    }

    /// Latest published answer, scaled by `decimals`.
    #[view(latestAnswer)]
    fn latest_answer(&self) -> BigUint {
        self.latest_round_data().answer
    }

    #[view(latestRoundData)]
    fn latest_round_data(&self) -> Round<Self::Api> {
        require!(self.not_paused(), ERROR_FEED_PAUSED);

        let round = self.latest_round();
        require!(!round.is_empty(), ERROR_NO_ANSWER);
        round.get()
    }

    #[view(decimals)]
    fn decimals(&self) -> u8 {
        self.feed_decimals().get()
    }

    #[view(getOracles)]
    fn get_oracles(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for oracle in self.oracles().iter() {
            result.push(oracle);
        }
        result
    }
}
