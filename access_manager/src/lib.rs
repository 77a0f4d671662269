#![no_std]

multiversx_sc::imports!();

use common_structs::Capability;

/// Authorization provider consulted by the vault on every privileged call.
///
/// Each capability owns an address set; the contract owner is the only one
/// allowed to change membership.
#[multiversx_sc::contract]
pub trait AccessManager {
    #[init]
    fn init(&self, admins: MultiValueEncoded<ManagedAddress>) {
        let mut holders = self.capability_holders(Capability::Admin);
        for admin in admins {
            holders.insert(admin);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Grants `capability` to every address in `accounts`.
    #[only_owner]
    #[endpoint(grantCapability)]
    fn grant_capability(
        &self,
        capability: Capability,
        accounts: MultiValueEncoded<ManagedAddress>,
    ) {
        let mut holders = self.capability_holders(capability);
        for account in accounts {
            if holders.insert(account.clone()) {
                self.capability_granted_event(capability, &account);
            }
        }
    }

    #[only_owner]
    #[endpoint(revokeCapability)]
    fn revoke_capability(
        &self,
        capability: Capability,
        accounts: MultiValueEncoded<ManagedAddress>,
    ) {
        let mut holders = self.capability_holders(capability);
        for account in accounts {
            if holders.swap_remove(&account) {
                self.capability_revoked_event(capability, &account);
            }
        }
    }

    #[view(hasCapability)]
    fn has_capability(&self, account: ManagedAddress, capability: Capability) -> bool {
        self.capability_holders(capability).contains(&account)
    }

    #[view(getCapabilityHolders)]
    fn get_capability_holders(&self, capability: Capability) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for holder in self.capability_holders(capability).iter() {
            result.push(holder);
        }
        result
    }

    #[storage_mapper("capability_holders")]
    fn capability_holders(&self, capability: Capability) -> UnorderedSetMapper<ManagedAddress>;

    #[event("capability_granted")]
    fn capability_granted_event(
        &self,
        #[indexed] capability: Capability,
        #[indexed] account: &ManagedAddress,
    );

    #[event("capability_revoked")]
    fn capability_revoked_event(
        &self,
        #[indexed] capability: Capability,
        #[indexed] account: &ManagedAddress,
    );
}
