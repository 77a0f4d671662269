use common_errors::ERROR_UNAUTHORIZED;
use common_proxies::proxy_access_manager;
use common_structs::Capability;

multiversx_sc::imports!();

/// Role checks delegated to the access manager contract.
#[multiversx_sc::module]
pub trait AccessModule: crate::storage::Storage {
    fn require_capability(&self, capability: Capability) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            self.has_capability(&caller, capability),
            ERROR_UNAUTHORIZED
        );
        caller
    }

    fn has_capability(&self, account: &ManagedAddress, capability: Capability) -> bool {
        self.tx()
            .to(self.access_manager().get())
            .typed(proxy_access_manager::AccessManagerProxy)
            .has_capability(account, capability)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
