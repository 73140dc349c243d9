use alloy_primitives::U256;
use govchain_chainbase::{ChainbaseObject, ObjectStore};
use govchain_error::ChainError;
use govchain_proc_macros::{NumBytes, Read, Write};
use spdlog::info;

use crate::chain::{config::L2_PRICING_TABLE, utils::singleton_key};

#[derive(Debug, Clone, PartialEq, Eq, Default, Read, Write, NumBytes)]
pub struct L2PricingObject {
    pub gas_price_wei: U256,
    pub speed_limit_per_second: u64,
    pub gas_pool_seconds: u64,
    pub small_gas_pool_seconds: u64,
    pub max_per_block_gas_limit: u64,
}

impl ChainbaseObject for L2PricingObject {
    type PrimaryKey = ();

    fn primary_key(&self) -> Vec<u8> {
        singleton_key()
    }

    fn primary_key_to_bytes(_: Self::PrimaryKey) -> Vec<u8> {
        singleton_key()
    }

    fn table_name() -> &'static str {
        L2_PRICING_TABLE
    }
}

/// L2 pricing parameters. Fields are independent: no setter checks one
/// against another.
pub struct L2PricingState<'a, S: ObjectStore> {
    store: &'a mut S,
}

impl<'a, S: ObjectStore> L2PricingState<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn parameters(&mut self) -> Result<L2PricingObject, ChainError> {
        Ok(self.store.find::<L2PricingObject>(())?.unwrap_or_default())
    }

    fn update<F>(&mut self, f: F) -> Result<(), ChainError>
    where
        F: FnOnce(&mut L2PricingObject),
    {
        let mut pricing = self.parameters()?;
        f(&mut pricing);
        self.store.upsert(&pricing)?;
        Ok(())
    }

    pub fn gas_price_wei(&mut self) -> Result<U256, ChainError> {
        Ok(self.parameters()?.gas_price_wei)
    }

    pub fn set_gas_price_wei(&mut self, price_in_wei: U256) -> Result<(), ChainError> {
        self.update(|p| p.gas_price_wei = price_in_wei)?;
        info!("l2 gas price set to {} wei", price_in_wei);
        Ok(())
    }

    pub fn speed_limit_per_second(&mut self) -> Result<u64, ChainError> {
        Ok(self.parameters()?.speed_limit_per_second)
    }

    pub fn set_speed_limit_per_second(&mut self, limit: u64) -> Result<(), ChainError> {
        self.update(|p| p.speed_limit_per_second = limit)?;
        info!("speed limit set to {} per second", limit);
        Ok(())
    }

    pub fn gas_pool_seconds(&mut self) -> Result<u64, ChainError> {
        Ok(self.parameters()?.gas_pool_seconds)
    }

    pub fn set_gas_pool_seconds(&mut self, seconds: u64) -> Result<(), ChainError> {
        self.update(|p| p.gas_pool_seconds = seconds)?;
        info!("gas pool duration set to {}s", seconds);
        Ok(())
    }

    pub fn small_gas_pool_seconds(&mut self) -> Result<u64, ChainError> {
        Ok(self.parameters()?.small_gas_pool_seconds)
    }

    pub fn set_small_gas_pool_seconds(&mut self, seconds: u64) -> Result<(), ChainError> {
        self.update(|p| p.small_gas_pool_seconds = seconds)?;
        info!("small gas pool duration set to {}s", seconds);
        Ok(())
    }

    pub fn max_per_block_gas_limit(&mut self) -> Result<u64, ChainError> {
        Ok(self.parameters()?.max_per_block_gas_limit)
    }

    pub fn set_max_per_block_gas_limit(&mut self, limit: u64) -> Result<(), ChainError> {
        self.update(|p| p.max_per_block_gas_limit = limit)?;
        info!("max per-block gas limit set to {}", limit);
        Ok(())
    }
}
