#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod storage;
pub mod structs;
pub mod views;

use common_errors::ERROR_INVALID_PRICE;
use structs::Round;

/// Single-answer price feed: whitelisted oracles push the latest answer,
/// consumers read `latestAnswer` together with `decimals`.
#[multiversx_sc::contract]
pub trait PriceFeed:
    multiversx_sc_modules::pause::PauseModule
    + events::EventsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Publishes a new answer. The previous one is overwritten.
    #[endpoint(submit)]
    fn submit(&self, answer: BigUint) {
        self.require_not_paused();
        self.require_is_oracle();
        require!(answer > BigUint::zero(), ERROR_INVALID_PRICE);

        let round_mapper = self.latest_round();
        let round_id = if round_mapper.is_empty() {
            1
        } else {
            round_mapper.get().round_id + 1
        };

        let round = Round {
            round_id,
            answer,
            timestamp: self.blockchain().get_block_timestamp(),
        };
        self.new_answer_event(&self.blockchain().get_caller(), &round);
        round_mapper.set(round);
    }
}
