use alloy_primitives::{Address, U256};
use govchain_chainbase::ObjectStore;
use govchain_error::ChainError;
use spdlog::{debug, error, warn};

use crate::chain::{
    admin::{AdminCall, AdminOutput},
    state::ChainState,
};

/// Administrative operations on chain governance state.
///
/// Callers are expected to have been authorized already, see
/// [`OwnerGate`](crate::chain::admin::OwnerGate).
pub struct ChainOwnerAdmin;

impl ChainOwnerAdmin {
    /// Runs `call` against `state`. Either every change the call makes is
    /// kept, or none is.
    ///
    /// If the changes cannot be undone the state is left inconsistent, which
    /// is reported as `InternalError` carrying both failures.
    pub fn execute<S: ObjectStore>(
        state: &mut ChainState<S>,
        call: &AdminCall,
    ) -> Result<AdminOutput, ChainError> {
        let savepoint = state.savepoint();
        let e = match Self::dispatch(state, call) {
            Ok(output) => return Ok(output),
            Err(e) => e,
        };

        debug!("{:?} failed, reverting: {}", call.method(), e);
        if let Err(revert_error) = state.revert_to(savepoint) {
            error!(
                "{:?} failed with `{}` and could not be reverted: {}",
                call.method(),
                e,
                revert_error
            );
            return Err(ChainError::InternalError(Some(format!(
                "{} failed with `{}` and could not be reverted: {}",
                call.method().signature(),
                e,
                revert_error
            ))));
        }
        Err(e)
    }

    fn dispatch<S: ObjectStore>(
        state: &mut ChainState<S>,
        call: &AdminCall,
    ) -> Result<AdminOutput, ChainError> {
        let output = match *call {
            AdminCall::AddChainOwner(owner) => {
                Self::add_chain_owner(state, owner)?;
                AdminOutput::None
            }
            AdminCall::RemoveChainOwner(owner) => {
                Self::remove_chain_owner(state, owner)?;
                AdminOutput::None
            }
            AdminCall::IsChainOwner(address) => {
                AdminOutput::Bool(Self::is_chain_owner(state, address)?)
            }
            AdminCall::GetAllChainOwners => {
                AdminOutput::Addresses(Self::get_all_chain_owners(state)?)
            }
            AdminCall::SetL1GasPriceEstimate(price_in_wei) => {
                Self::set_l1_gas_price_estimate(state, price_in_wei)?;
                AdminOutput::None
            }
            AdminCall::SetL2GasPrice(price_in_wei) => {
                Self::set_l2_gas_price(state, price_in_wei)?;
                AdminOutput::None
            }
            AdminCall::SetMinimumGasPrice(price_in_wei) => {
                Self::set_minimum_gas_price(state, price_in_wei)?;
                AdminOutput::None
            }
            AdminCall::SetSpeedLimit(limit) => {
                Self::set_speed_limit(state, limit)?;
                AdminOutput::None
            }
            AdminCall::SetGasPoolSeconds(seconds) => {
                Self::set_gas_pool_seconds(state, seconds)?;
                AdminOutput::None
            }
            AdminCall::SetSmallGasPoolSeconds(seconds) => {
                Self::set_small_gas_pool_seconds(state, seconds)?;
                AdminOutput::None
            }
            AdminCall::SetMaxTxGasLimit(limit) => {
                Self::set_max_tx_gas_limit(state, limit)?;
                AdminOutput::None
            }
            AdminCall::GetNetworkFeeAccount => {
                AdminOutput::Address(Self::get_network_fee_account(state)?)
            }
            AdminCall::SetNetworkFeeAccount(account) => {
                Self::set_network_fee_account(state, account)?;
                AdminOutput::None
            }
        };
        Ok(output)
    }

    pub fn add_chain_owner<S: ObjectStore>(
        state: &mut ChainState<S>,
        new_owner: Address,
    ) -> Result<(), ChainError> {
        state.chain_owners().add(new_owner)
    }

    pub fn remove_chain_owner<S: ObjectStore>(
        state: &mut ChainState<S>,
        owner: Address,
    ) -> Result<(), ChainError> {
        if !Self::is_chain_owner(state, owner)? {
            return Err(ChainError::NotAMember(owner));
        }
        let mut owners = state.chain_owners();
        owners.remove(owner)?;
        if owners.size()? == 0 {
            warn!("removed the last chain owner {}, chain has no owners left", owner);
        }
        Ok(())
    }

    pub fn is_chain_owner<S: ObjectStore>(
        state: &mut ChainState<S>,
        address: Address,
    ) -> Result<bool, ChainError> {
        state.chain_owners().is_member(address)
    }

    pub fn get_all_chain_owners<S: ObjectStore>(
        state: &mut ChainState<S>,
    ) -> Result<Vec<Address>, ChainError> {
        state.chain_owners().all_members()
    }

    /// Overrides the estimate until the estimator next updates it.
    pub fn set_l1_gas_price_estimate<S: ObjectStore>(
        state: &mut ChainState<S>,
        price_in_wei: U256,
    ) -> Result<(), ChainError> {
        state.l1_pricing().set_l1_gas_price_estimate_wei(price_in_wei)
    }

    pub fn set_l2_gas_price<S: ObjectStore>(
        state: &mut ChainState<S>,
        price_in_wei: U256,
    ) -> Result<(), ChainError> {
        state.l2_pricing().set_gas_price_wei(price_in_wei)
    }

    /// Writes the same field as [`ChainOwnerAdmin::set_l2_gas_price`].
    pub fn set_minimum_gas_price<S: ObjectStore>(
        state: &mut ChainState<S>,
        price_in_wei: U256,
    ) -> Result<(), ChainError> {
        state.l2_pricing().set_gas_price_wei(price_in_wei)
    }

    pub fn set_speed_limit<S: ObjectStore>(
        state: &mut ChainState<S>,
        limit: u64,
    ) -> Result<(), ChainError> {
        state.l2_pricing().set_speed_limit_per_second(limit)
    }

    pub fn set_gas_pool_seconds<S: ObjectStore>(
        state: &mut ChainState<S>,
        seconds: u64,
    ) -> Result<(), ChainError> {
        state.l2_pricing().set_gas_pool_seconds(seconds)
    }

    pub fn set_small_gas_pool_seconds<S: ObjectStore>(
        state: &mut ChainState<S>,
        seconds: u64,
    ) -> Result<(), ChainError> {
        state.l2_pricing().set_small_gas_pool_seconds(seconds)
    }

    pub fn set_max_tx_gas_limit<S: ObjectStore>(
        state: &mut ChainState<S>,
        limit: u64,
    ) -> Result<(), ChainError> {
        state.l2_pricing().set_max_per_block_gas_limit(limit)
    }

    pub fn get_network_fee_account<S: ObjectStore>(
        state: &mut ChainState<S>,
    ) -> Result<Address, ChainError> {
        state.network_fee_account()
    }

    pub fn set_network_fee_account<S: ObjectStore>(
        state: &mut ChainState<S>,
        account: Address,
    ) -> Result<(), ChainError> {
        state.set_network_fee_account(account)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;
    use govchain_chainbase::{Database, UndoSession};

    use super::*;

    fn state() -> (tempfile::TempDir, Database, ChainState<UndoSession>) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::temporary(dir.path()).unwrap();
        let session = db.undo_session().unwrap();
        (dir, db, ChainState::new(session))
    }

    #[test]
    fn test_remove_non_member_changes_nothing() {
        let (_dir, _db, mut state) = state();
        let owner = address!("0x0000000000000000000000000000000000000001");
        let stranger = address!("0x0000000000000000000000000000000000000002");
        ChainOwnerAdmin::add_chain_owner(&mut state, owner).unwrap();
        let changes = state.store().change_count();

        assert_eq!(
            ChainOwnerAdmin::remove_chain_owner(&mut state, stranger),
            Err(ChainError::NotAMember(stranger))
        );
        assert_eq!(state.store().change_count(), changes);
        assert_eq!(
            ChainOwnerAdmin::get_all_chain_owners(&mut state).unwrap(),
            vec![owner]
        );
    }

    #[test]
    fn test_minimum_gas_price_aliases_l2_gas_price() {
        let (_dir, _db, mut state) = state();
        ChainOwnerAdmin::set_l2_gas_price(&mut state, U256::from(5u64)).unwrap();
        assert_eq!(state.l2_pricing().gas_price_wei().unwrap(), U256::from(5u64));
        ChainOwnerAdmin::set_minimum_gas_price(&mut state, U256::from(9u64)).unwrap();
        assert_eq!(state.l2_pricing().gas_price_wei().unwrap(), U256::from(9u64));
    }

    #[test]
    fn test_execute_routes_calls() {
        let (_dir, _db, mut state) = state();
        let owner = address!("0x0000000000000000000000000000000000000007");
        assert_eq!(
            ChainOwnerAdmin::execute(&mut state, &AdminCall::AddChainOwner(owner)).unwrap(),
            AdminOutput::None
        );
        assert_eq!(
            ChainOwnerAdmin::execute(&mut state, &AdminCall::IsChainOwner(owner)).unwrap(),
            AdminOutput::Bool(true)
        );
        ChainOwnerAdmin::execute(&mut state, &AdminCall::SetMaxTxGasLimit(30_000_000)).unwrap();
        assert_eq!(
            state.l2_pricing().max_per_block_gas_limit().unwrap(),
            30_000_000
        );
        assert_eq!(
            ChainOwnerAdmin::execute(&mut state, &AdminCall::GetNetworkFeeAccount).unwrap(),
            AdminOutput::Address(Address::ZERO)
        );
    }
}
