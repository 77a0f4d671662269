#![no_std]

multiversx_sc::imports!();

/// Receiver of collateral flashed out of a custody strategy.
#[multiversx_sc::contract]
pub trait FlashMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // Success case: uses the items and hands them straight back to the lender
    #[payable]
    #[endpoint(onNftFlash)]
    fn on_nft_flash(&self, holder: ManagedAddress) {
        let payments = self.call_value().all_esdt_transfers().clone_value();
        let caller = self.blockchain().get_caller();

        self.flash_uses().update(|uses| *uses += 1);
        self.last_flash_holder().set(holder);

        self.tx().to(&caller).multi_esdt(payments).transfer();
    }

    // Keeps the items, the lender has to detect the missing collateral
    #[payable]
    #[endpoint(onNftFlashKeep)]
    fn on_nft_flash_keep(&self, _holder: ManagedAddress) {
        let held = self.call_value().all_esdt_transfers().len() as u64;
        sc_print!("FlashKeep: holding {} items", BigUint::from(held));
    }

    #[view(getFlashUses)]
    #[storage_mapper("flash_uses")]
    fn flash_uses(&self) -> SingleValueMapper<u64>;

    #[view(getLastFlashHolder)]
    #[storage_mapper("last_flash_holder")]
    fn last_flash_holder(&self) -> SingleValueMapper<ManagedAddress>;
}
