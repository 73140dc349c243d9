use alloy_primitives::U256;
use govchain_chainbase::{ChainbaseObject, ObjectStore};
use govchain_error::ChainError;
use govchain_proc_macros::{NumBytes, Read, Write};
use spdlog::info;

use crate::chain::{config::L1_PRICING_TABLE, utils::singleton_key};

#[derive(Debug, Clone, PartialEq, Eq, Default, Read, Write, NumBytes)]
pub struct L1PricingObject {
    pub l1_gas_price_estimate_wei: U256,
}

impl ChainbaseObject for L1PricingObject {
    type PrimaryKey = ();

    fn primary_key(&self) -> Vec<u8> {
        singleton_key()
    }

    fn primary_key_to_bytes(_: Self::PrimaryKey) -> Vec<u8> {
        singleton_key()
    }

    fn table_name() -> &'static str {
        L1_PRICING_TABLE
    }
}

/// L1 pricing parameters. A value written here is the estimate until the
/// estimator overwrites it; there is no separate override flag.
pub struct L1PricingState<'a, S: ObjectStore> {
    store: &'a mut S,
}

impl<'a, S: ObjectStore> L1PricingState<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    fn load(&mut self) -> Result<L1PricingObject, ChainError> {
        Ok(self.store.find::<L1PricingObject>(())?.unwrap_or_default())
    }

    pub fn l1_gas_price_estimate_wei(&mut self) -> Result<U256, ChainError> {
        Ok(self.load()?.l1_gas_price_estimate_wei)
    }

    pub fn set_l1_gas_price_estimate_wei(&mut self, price_in_wei: U256) -> Result<(), ChainError> {
        let mut pricing = self.load()?;
        pricing.l1_gas_price_estimate_wei = price_in_wei;
        self.store.upsert(&pricing)?;
        info!("l1 gas price estimate set to {} wei", price_in_wei);
        Ok(())
    }
}
