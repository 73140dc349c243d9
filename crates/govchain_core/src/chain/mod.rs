pub mod admin;
pub mod chain_owners;
pub mod config;
pub mod genesis;
pub mod network_fee;
pub mod pricing;
pub mod state;
pub mod utils;

pub mod error {
    pub use govchain_error::ChainError;
}

pub use alloy_primitives::{Address, U256};
pub use govchain_error::ChainError;
