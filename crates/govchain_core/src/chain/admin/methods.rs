use std::{collections::HashMap, sync::LazyLock};

use alloy_primitives::keccak256;

pub type Selector = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminMethod {
    AddChainOwner,
    RemoveChainOwner,
    IsChainOwner,
    GetAllChainOwners,
    SetL1GasPriceEstimate,
    SetL2GasPrice,
    SetMinimumGasPrice,
    SetSpeedLimit,
    SetGasPoolSeconds,
    SetSmallGasPoolSeconds,
    SetMaxTxGasLimit,
    GetNetworkFeeAccount,
    SetNetworkFeeAccount,
}

impl AdminMethod {
    pub const ALL: [AdminMethod; 13] = [
        AdminMethod::AddChainOwner,
        AdminMethod::RemoveChainOwner,
        AdminMethod::IsChainOwner,
        AdminMethod::GetAllChainOwners,
        AdminMethod::SetL1GasPriceEstimate,
        AdminMethod::SetL2GasPrice,
        AdminMethod::SetMinimumGasPrice,
        AdminMethod::SetSpeedLimit,
        AdminMethod::SetGasPoolSeconds,
        AdminMethod::SetSmallGasPoolSeconds,
        AdminMethod::SetMaxTxGasLimit,
        AdminMethod::GetNetworkFeeAccount,
        AdminMethod::SetNetworkFeeAccount,
    ];

    pub fn signature(&self) -> &'static str {
        match self {
            AdminMethod::AddChainOwner => "addChainOwner(address)",
            AdminMethod::RemoveChainOwner => "removeChainOwner(address)",
            AdminMethod::IsChainOwner => "isChainOwner(address)",
            AdminMethod::GetAllChainOwners => "getAllChainOwners()",
            AdminMethod::SetL1GasPriceEstimate => "setL1GasPriceEstimate(uint256)",
            AdminMethod::SetL2GasPrice => "setL2GasPrice(uint256)",
            AdminMethod::SetMinimumGasPrice => "setMinimumGasPrice(uint256)",
            AdminMethod::SetSpeedLimit => "setSpeedLimit(uint64)",
            AdminMethod::SetGasPoolSeconds => "setGasPoolSeconds(uint64)",
            AdminMethod::SetSmallGasPoolSeconds => "setSmallGasPoolSeconds(uint64)",
            AdminMethod::SetMaxTxGasLimit => "setMaxTxGasLimit(uint64)",
            AdminMethod::GetNetworkFeeAccount => "getNetworkFeeAccount()",
            AdminMethod::SetNetworkFeeAccount => "setNetworkFeeAccount(address)",
        }
    }

    pub fn selector(&self) -> Selector {
        let hash = keccak256(self.signature().as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    pub fn from_selector(selector: &Selector) -> Option<AdminMethod> {
        METHODS_BY_SELECTOR.get(selector).copied()
    }

    /// Read-only methods never touch state and never emit an event.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            AdminMethod::IsChainOwner
                | AdminMethod::GetAllChainOwners
                | AdminMethod::GetNetworkFeeAccount
        )
    }
}

static METHODS_BY_SELECTOR: LazyLock<HashMap<Selector, AdminMethod>> = LazyLock::new(|| {
    AdminMethod::ALL
        .iter()
        .map(|method| (method.selector(), *method))
        .collect()
});
