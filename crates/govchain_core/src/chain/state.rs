use alloy_primitives::Address;
use govchain_chainbase::{ObjectStore, Savepoint};
use govchain_error::ChainError;
use spdlog::info;

use crate::chain::{
    chain_owners::ChainOwners,
    genesis::Genesis,
    network_fee::NetworkFeeObject,
    pricing::{L1PricingState, L2PricingState},
};

/// Governance state of the chain, layered over an object store.
///
/// The views handed out borrow the store mutably, so at most one of them is
/// alive at a time.
pub struct ChainState<S: ObjectStore> {
    store: S,
}

impl<S: ObjectStore> ChainState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes the genesis owners, fee account and pricing parameters.
    pub fn initialize(&mut self, genesis: &Genesis) -> Result<(), ChainError> {
        {
            let mut owners = self.chain_owners();
            for owner in genesis.initial_owners() {
                owners.add(*owner)?;
            }
        }
        self.set_network_fee_account(genesis.network_fee_account())?;

        let pricing = genesis.pricing();
        self.l1_pricing()
            .set_l1_gas_price_estimate_wei(pricing.l1_gas_price_estimate_wei)?;
        let mut l2 = self.l2_pricing();
        l2.set_gas_price_wei(pricing.l2_gas_price_wei)?;
        l2.set_speed_limit_per_second(pricing.speed_limit_per_second)?;
        l2.set_gas_pool_seconds(pricing.gas_pool_seconds)?;
        l2.set_small_gas_pool_seconds(pricing.small_gas_pool_seconds)?;
        l2.set_max_per_block_gas_limit(pricing.max_per_block_gas_limit)?;

        info!(
            "initialized chain state with {} owner(s)",
            genesis.initial_owners().len()
        );
        Ok(())
    }

    pub fn chain_owners(&mut self) -> ChainOwners<'_, S> {
        ChainOwners::new(&mut self.store)
    }

    pub fn l1_pricing(&mut self) -> L1PricingState<'_, S> {
        L1PricingState::new(&mut self.store)
    }

    pub fn l2_pricing(&mut self) -> L2PricingState<'_, S> {
        L2PricingState::new(&mut self.store)
    }

    pub fn network_fee_account(&mut self) -> Result<Address, ChainError> {
        Ok(self
            .store
            .find::<NetworkFeeObject>(())?
            .unwrap_or_default()
            .account)
    }

    pub fn set_network_fee_account(&mut self, account: Address) -> Result<(), ChainError> {
        self.store.upsert(&NetworkFeeObject { account })?;
        info!("network fee account set to {}", account);
        Ok(())
    }

    pub fn savepoint(&self) -> Savepoint {
        self.store.savepoint()
    }

    pub fn revert_to(&mut self, savepoint: Savepoint) -> Result<(), ChainError> {
        Ok(self.store.revert_to(savepoint)?)
    }

    pub fn store(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
