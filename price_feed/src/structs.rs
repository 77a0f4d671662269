use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq)]
pub struct Round<M: ManagedTypeApi> {
    pub round_id: u64,
    pub answer: BigUint<M>,
    pub timestamp: u64,
}
