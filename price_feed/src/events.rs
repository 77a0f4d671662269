multiversx_sc::imports!();

use crate::structs::Round;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("new_answer")]
    fn new_answer_event(&self, #[indexed] oracle: &ManagedAddress, round: &Round<Self::Api>);
}
