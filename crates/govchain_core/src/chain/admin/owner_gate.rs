use alloy_primitives::Address;
use govchain_chainbase::ObjectStore;
use govchain_error::ChainError;
use spdlog::{info, warn};

use crate::chain::{
    admin::{AdminCall, AdminOutput, ChainOwnerAdmin, Selector},
    state::ChainState,
};

/// Emitted for every successful state-changing admin call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerActs {
    pub method: Selector,
    pub owner: Address,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminReceipt {
    pub output: AdminOutput,
    pub event: Option<OwnerActs>,
}

/// Entry point for admin calls: only chain owners get through.
pub struct OwnerGate;

impl OwnerGate {
    pub fn invoke<S: ObjectStore>(
        state: &mut ChainState<S>,
        caller: Address,
        input: &[u8],
    ) -> Result<AdminReceipt, ChainError> {
        if !state.chain_owners().is_member(caller)? {
            warn!("rejected admin call from non-owner {}", caller);
            return Err(ChainError::AuthorizationError(
                "unauthorized caller to access-controlled method".to_string(),
            ));
        }

        let call = AdminCall::decode(input)?;
        let method = call.method();
        let output = ChainOwnerAdmin::execute(state, &call)?;

        let event = if method.is_read_only() {
            None
        } else {
            info!("owner {} called {}", caller, method.signature());
            Some(OwnerActs {
                method: method.selector(),
                owner: caller,
                data: input.to_vec(),
            })
        };

        Ok(AdminReceipt { output, event })
    }
}
