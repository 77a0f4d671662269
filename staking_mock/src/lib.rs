#![no_std]

multiversx_sc::imports!();

/// Stand-in for the staking contract whose stakers earn a higher credit limit rate.
#[multiversx_sc::contract]
pub trait StakingMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setStaking)]
    fn set_staking(&self, user: ManagedAddress, staking: bool) {
        if staking {
            self.stakers().insert(user);
        } else {
            self.stakers().swap_remove(&user);
        }
    }

    #[view(isUserStaking)]
    fn is_user_staking(&self, user: ManagedAddress) -> bool {
        self.stakers().contains(&user)
    }

    #[storage_mapper("stakers")]
    fn stakers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
