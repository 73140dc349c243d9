use alloy_primitives::Address;
use govchain_chainbase::ChainbaseObject;
use govchain_proc_macros::{NumBytes, Read, Write};

use crate::chain::{config::NETWORK_FEE_TABLE, utils::singleton_key};

/// Recipient of the network's share of fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Read, Write, NumBytes)]
pub struct NetworkFeeObject {
    pub account: Address,
}

impl ChainbaseObject for NetworkFeeObject {
    type PrimaryKey = ();

    fn primary_key(&self) -> Vec<u8> {
        singleton_key()
    }

    fn primary_key_to_bytes(_: Self::PrimaryKey) -> Vec<u8> {
        singleton_key()
    }

    fn table_name() -> &'static str {
        NETWORK_FEE_TABLE
    }
}
