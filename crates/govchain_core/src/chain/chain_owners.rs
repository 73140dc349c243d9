use alloy_primitives::Address;
use govchain_chainbase::{ChainbaseObject, ObjectStore};
use govchain_error::ChainError;
use govchain_proc_macros::{NumBytes, Read, Write};
use spdlog::{debug, info};

use crate::chain::{
    config::{CHAIN_OWNERS_META_TABLE, CHAIN_OWNERS_TABLE},
    utils::singleton_key,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Read, Write, NumBytes)]
pub struct ChainOwnerObject {
    pub owner: Address,
}

impl ChainbaseObject for ChainOwnerObject {
    type PrimaryKey = Address;

    fn primary_key(&self) -> Vec<u8> {
        ChainOwnerObject::primary_key_to_bytes(self.owner)
    }

    fn primary_key_to_bytes(key: Self::PrimaryKey) -> Vec<u8> {
        key.to_vec()
    }

    fn table_name() -> &'static str {
        CHAIN_OWNERS_TABLE
    }
}

/// Member count, kept alongside the member rows so `size` does not scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Read, Write, NumBytes)]
pub struct ChainOwnersMetaObject {
    pub size: u64,
}

impl ChainbaseObject for ChainOwnersMetaObject {
    type PrimaryKey = ();

    fn primary_key(&self) -> Vec<u8> {
        singleton_key()
    }

    fn primary_key_to_bytes(_: Self::PrimaryKey) -> Vec<u8> {
        singleton_key()
    }

    fn table_name() -> &'static str {
        CHAIN_OWNERS_META_TABLE
    }
}

/// The set of addresses allowed to administer the chain.
///
/// Members are stored one row per address, so enumeration follows the
/// storage order of the raw address bytes and is identical on every node.
pub struct ChainOwners<'a, S: ObjectStore> {
    store: &'a mut S,
}

impl<'a, S: ObjectStore> ChainOwners<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn is_member(&mut self, address: Address) -> Result<bool, ChainError> {
        Ok(self.store.exists::<ChainOwnerObject>(address)?)
    }

    /// Adding an existing member is a no-op.
    pub fn add(&mut self, address: Address) -> Result<(), ChainError> {
        if self.is_member(address)? {
            debug!("{} is already a chain owner", address);
            return Ok(());
        }
        self.store.insert(&ChainOwnerObject { owner: address })?;
        let size = self.size()?;
        self.store
            .upsert(&ChainOwnersMetaObject { size: size + 1 })?;
        info!("added chain owner {}", address);
        Ok(())
    }

    /// Removing an address that is not a member is a no-op.
    pub fn remove(&mut self, address: Address) -> Result<(), ChainError> {
        let Some(member) = self.store.find::<ChainOwnerObject>(address)? else {
            debug!("{} is not a chain owner, nothing to remove", address);
            return Ok(());
        };
        self.store.remove(member)?;
        let size = self.size()?;
        let size = size.checked_sub(1).ok_or_else(|| {
            ChainError::StateAccessError("chain owner count underflow".to_string())
        })?;
        self.store.upsert(&ChainOwnersMetaObject { size })?;
        info!("removed chain owner {}", address);
        Ok(())
    }

    pub fn size(&mut self) -> Result<u64, ChainError> {
        Ok(self
            .store
            .find::<ChainOwnersMetaObject>(())?
            .unwrap_or_default()
            .size)
    }

    pub fn all_members(&mut self) -> Result<Vec<Address>, ChainError> {
        Ok(self
            .store
            .all::<ChainOwnerObject>()?
            .into_iter()
            .map(|member| member.owner)
            .collect())
    }
}
