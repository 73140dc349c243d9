use alloy_primitives::{Address, U256};
use govchain_error::ChainError;
use govchain_serialization::{NumBytes, Read, Write};

use crate::chain::{
    admin::{AdminMethod, Selector},
    utils::gov_assert,
};

/// A decoded admin call: the method and its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCall {
    AddChainOwner(Address),
    RemoveChainOwner(Address),
    IsChainOwner(Address),
    GetAllChainOwners,
    SetL1GasPriceEstimate(U256),
    SetL2GasPrice(U256),
    SetMinimumGasPrice(U256),
    SetSpeedLimit(u64),
    SetGasPoolSeconds(u64),
    SetSmallGasPoolSeconds(u64),
    SetMaxTxGasLimit(u64),
    GetNetworkFeeAccount,
    SetNetworkFeeAccount(Address),
}

impl AdminCall {
    /// Decodes `selector || packed arguments`. The arguments must be consumed
    /// exactly.
    pub fn decode(input: &[u8]) -> Result<Self, ChainError> {
        let selector: Selector = input
            .get(..4)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| {
                ChainError::InvalidArgument(format!(
                    "call input of {} bytes has no selector",
                    input.len()
                ))
            })?;
        let method = AdminMethod::from_selector(&selector).ok_or_else(|| {
            ChainError::InvalidArgument(format!(
                "unknown method selector 0x{}",
                selector.iter().map(|b| format!("{:02x}", b)).collect::<String>()
            ))
        })?;
        let args = &input[4..];

        let call = match method {
            AdminMethod::AddChainOwner => AdminCall::AddChainOwner(Address::unpack(args)?),
            AdminMethod::RemoveChainOwner => AdminCall::RemoveChainOwner(Address::unpack(args)?),
            AdminMethod::IsChainOwner => AdminCall::IsChainOwner(Address::unpack(args)?),
            AdminMethod::GetAllChainOwners => {
                no_arguments(method, args)?;
                AdminCall::GetAllChainOwners
            }
            AdminMethod::SetL1GasPriceEstimate => {
                AdminCall::SetL1GasPriceEstimate(U256::unpack(args)?)
            }
            AdminMethod::SetL2GasPrice => AdminCall::SetL2GasPrice(U256::unpack(args)?),
            AdminMethod::SetMinimumGasPrice => AdminCall::SetMinimumGasPrice(U256::unpack(args)?),
            AdminMethod::SetSpeedLimit => AdminCall::SetSpeedLimit(u64::unpack(args)?),
            AdminMethod::SetGasPoolSeconds => AdminCall::SetGasPoolSeconds(u64::unpack(args)?),
            AdminMethod::SetSmallGasPoolSeconds => {
                AdminCall::SetSmallGasPoolSeconds(u64::unpack(args)?)
            }
            AdminMethod::SetMaxTxGasLimit => AdminCall::SetMaxTxGasLimit(u64::unpack(args)?),
            AdminMethod::GetNetworkFeeAccount => {
                no_arguments(method, args)?;
                AdminCall::GetNetworkFeeAccount
            }
            AdminMethod::SetNetworkFeeAccount => {
                AdminCall::SetNetworkFeeAccount(Address::unpack(args)?)
            }
        };
        Ok(call)
    }

    pub fn method(&self) -> AdminMethod {
        match self {
            AdminCall::AddChainOwner(_) => AdminMethod::AddChainOwner,
            AdminCall::RemoveChainOwner(_) => AdminMethod::RemoveChainOwner,
            AdminCall::IsChainOwner(_) => AdminMethod::IsChainOwner,
            AdminCall::GetAllChainOwners => AdminMethod::GetAllChainOwners,
            AdminCall::SetL1GasPriceEstimate(_) => AdminMethod::SetL1GasPriceEstimate,
            AdminCall::SetL2GasPrice(_) => AdminMethod::SetL2GasPrice,
            AdminCall::SetMinimumGasPrice(_) => AdminMethod::SetMinimumGasPrice,
            AdminCall::SetSpeedLimit(_) => AdminMethod::SetSpeedLimit,
            AdminCall::SetGasPoolSeconds(_) => AdminMethod::SetGasPoolSeconds,
            AdminCall::SetSmallGasPoolSeconds(_) => AdminMethod::SetSmallGasPoolSeconds,
            AdminCall::SetMaxTxGasLimit(_) => AdminMethod::SetMaxTxGasLimit,
            AdminCall::GetNetworkFeeAccount => AdminMethod::GetNetworkFeeAccount,
            AdminCall::SetNetworkFeeAccount(_) => AdminMethod::SetNetworkFeeAccount,
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>, ChainError> {
        let args = match self {
            AdminCall::AddChainOwner(address)
            | AdminCall::RemoveChainOwner(address)
            | AdminCall::IsChainOwner(address)
            | AdminCall::SetNetworkFeeAccount(address) => address.pack()?,
            AdminCall::SetL1GasPriceEstimate(wei)
            | AdminCall::SetL2GasPrice(wei)
            | AdminCall::SetMinimumGasPrice(wei) => wei.pack()?,
            AdminCall::SetSpeedLimit(value)
            | AdminCall::SetGasPoolSeconds(value)
            | AdminCall::SetSmallGasPoolSeconds(value)
            | AdminCall::SetMaxTxGasLimit(value) => value.pack()?,
            AdminCall::GetAllChainOwners | AdminCall::GetNetworkFeeAccount => Vec::new(),
        };
        let mut input = self.method().selector().to_vec();
        input.extend_from_slice(&args);
        Ok(input)
    }
}

fn no_arguments(method: AdminMethod, args: &[u8]) -> Result<(), ChainError> {
    gov_assert(
        args.is_empty(),
        ChainError::SerializationError(format!(
            "{} takes no arguments, got {} bytes",
            method.signature(),
            args.len()
        )),
    )
}

/// Value returned by an admin call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminOutput {
    None,
    Bool(bool),
    Address(Address),
    Addresses(Vec<Address>),
}

impl AdminOutput {
    pub fn pack(&self) -> Result<Vec<u8>, ChainError> {
        let bytes = match self {
            AdminOutput::None => Vec::new(),
            AdminOutput::Bool(value) => value.pack()?,
            AdminOutput::Address(address) => address.pack()?,
            AdminOutput::Addresses(addresses) => addresses.pack()?,
        };
        Ok(bytes)
    }

    pub fn num_bytes(&self) -> usize {
        match self {
            AdminOutput::None => 0,
            AdminOutput::Bool(value) => value.num_bytes(),
            AdminOutput::Address(address) => address.num_bytes(),
            AdminOutput::Addresses(addresses) => addresses.num_bytes(),
        }
    }
}
