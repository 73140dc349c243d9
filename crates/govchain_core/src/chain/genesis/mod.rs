use core::str;

use alloy_primitives::{Address, U256};
use govchain_error::ChainError;
use serde::{Deserialize, Serialize};

use crate::chain::{
    config::{
        INITIAL_GAS_POOL_SECONDS, INITIAL_GAS_PRICE_WEI, INITIAL_L1_GAS_PRICE_ESTIMATE_WEI,
        INITIAL_PER_BLOCK_GAS_LIMIT, INITIAL_SMALL_GAS_POOL_SECONDS,
        INITIAL_SPEED_LIMIT_PER_SECOND,
    },
    utils::gov_assert,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PricingConfig {
    pub l1_gas_price_estimate_wei: U256,
    pub l2_gas_price_wei: U256,
    pub speed_limit_per_second: u64,
    pub gas_pool_seconds: u64,
    pub small_gas_pool_seconds: u64,
    pub max_per_block_gas_limit: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            l1_gas_price_estimate_wei: U256::from(INITIAL_L1_GAS_PRICE_ESTIMATE_WEI),
            l2_gas_price_wei: U256::from(INITIAL_GAS_PRICE_WEI),
            speed_limit_per_second: INITIAL_SPEED_LIMIT_PER_SECOND,
            gas_pool_seconds: INITIAL_GAS_POOL_SECONDS,
            small_gas_pool_seconds: INITIAL_SMALL_GAS_POOL_SECONDS,
            max_per_block_gas_limit: INITIAL_PER_BLOCK_GAS_LIMIT,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Genesis {
    initial_owners: Vec<Address>,
    #[serde(default)]
    network_fee_account: Address,
    #[serde(default)]
    pricing: PricingConfig,
}

impl Genesis {
    pub fn new(
        initial_owners: Vec<Address>,
        network_fee_account: Address,
        pricing: PricingConfig,
    ) -> Self {
        Genesis {
            initial_owners,
            network_fee_account,
            pricing,
        }
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ChainError> {
        let genesis = str::from_utf8(bytes)
            .map_err(|_| ChainError::GenesisError("invalid UTF-8".to_string()))?;
        let genesis: Genesis = serde_json::from_str(genesis)
            .map_err(|e| ChainError::GenesisError(format!("{}", e)))?;
        Ok(genesis)
    }

    /// Only genesis insists on an owner; afterwards the set may be emptied.
    pub fn validate(self) -> Result<Self, ChainError> {
        gov_assert(
            !self.initial_owners.is_empty(),
            ChainError::GenesisError("at least one initial chain owner is required".to_string()),
        )?;
        Ok(self)
    }

    pub fn initial_owners(&self) -> &[Address] {
        &self.initial_owners
    }

    pub fn network_fee_account(&self) -> Address {
        self.network_fee_account
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }
}
