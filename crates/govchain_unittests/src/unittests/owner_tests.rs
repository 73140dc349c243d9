#[cfg(test)]
mod owner_tests {
    use anyhow::Result;
    use govchain_core::{
        admin::{AdminCall, AdminOutput, ChainOwnerAdmin},
        config::CHAIN_OWNERS_TABLE,
        error::ChainError,
    };

    use crate::tests::{FaultyStore, Testing, account, default_genesis, genesis_owner};

    #[test]
    fn test_add_chain_owner() -> Result<()> {
        let mut chain = Testing::new();
        let alice = account(2);
        assert_eq!(
            chain.invoke(genesis_owner(), AdminCall::IsChainOwner(alice))?.output,
            AdminOutput::Bool(false)
        );
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(alice))?;
        assert_eq!(
            chain.invoke(genesis_owner(), AdminCall::IsChainOwner(alice))?.output,
            AdminOutput::Bool(true)
        );
        Ok(())
    }

    #[test]
    fn test_add_existing_owner_is_idempotent() -> Result<()> {
        let mut chain = Testing::new();
        let alice = account(2);
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(alice))?;
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(alice))?;
        assert_eq!(chain.owners(), vec![genesis_owner(), alice]);
        assert_eq!(chain.state.chain_owners().size()?, 2);
        Ok(())
    }

    #[test]
    fn test_remove_non_member() -> Result<()> {
        let mut chain = Testing::new();
        let bob = account(3);
        assert_eq!(
            chain
                .invoke(genesis_owner(), AdminCall::RemoveChainOwner(bob))
                .err(),
            Some(ChainError::NotAMember(bob))
        );
        assert_eq!(chain.owners(), vec![genesis_owner()]);
        Ok(())
    }

    #[test]
    fn test_remove_member() -> Result<()> {
        let mut chain = Testing::new();
        let alice = account(2);
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(alice))?;
        chain.invoke(genesis_owner(), AdminCall::RemoveChainOwner(alice))?;
        assert_eq!(
            chain.invoke(genesis_owner(), AdminCall::IsChainOwner(alice))?.output,
            AdminOutput::Bool(false)
        );
        assert_eq!(chain.state.chain_owners().size()?, 1);
        Ok(())
    }

    #[test]
    fn test_get_all_chain_owners() -> Result<()> {
        let mut chain = Testing::new();
        for n in [5, 3, 4, 2] {
            chain.invoke(genesis_owner(), AdminCall::AddChainOwner(account(n)))?;
        }
        chain.invoke(genesis_owner(), AdminCall::RemoveChainOwner(account(4)))?;
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(account(3)))?;

        // ordered by address bytes, not insertion
        assert_eq!(
            chain
                .invoke(genesis_owner(), AdminCall::GetAllChainOwners)?
                .output,
            AdminOutput::Addresses(vec![genesis_owner(), account(2), account(3), account(5)])
        );
        Ok(())
    }

    #[test]
    fn test_owner_rotation() -> Result<()> {
        let mut chain = Testing::new();
        let o1 = account(2);
        let o2 = account(3);
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(o1))?;
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(o2))?;
        chain.invoke(o2, AdminCall::RemoveChainOwner(o1))?;
        chain.invoke(o2, AdminCall::RemoveChainOwner(genesis_owner()))?;

        assert_eq!(chain.owners(), vec![o2]);
        assert_eq!(
            chain.invoke(o2, AdminCall::IsChainOwner(o1))?.output,
            AdminOutput::Bool(false)
        );
        assert_eq!(
            chain.invoke(o2, AdminCall::RemoveChainOwner(o1)).err(),
            Some(ChainError::NotAMember(o1))
        );
        Ok(())
    }

    #[test]
    fn test_remove_last_owner() -> Result<()> {
        let mut chain = Testing::new();
        chain.invoke(genesis_owner(), AdminCall::RemoveChainOwner(genesis_owner()))?;
        assert!(chain.owners().is_empty());
        assert_eq!(chain.state.chain_owners().size()?, 0);

        // nobody can administer the chain anymore
        assert!(matches!(
            chain.invoke(genesis_owner(), AdminCall::AddChainOwner(genesis_owner())),
            Err(ChainError::AuthorizationError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_membership_lookup_failure_propagates() -> Result<()> {
        let mut chain = Testing::with_store(&default_genesis(), FaultyStore::new);
        chain.invoke(genesis_owner(), AdminCall::AddChainOwner(account(2)))?;
        chain.state.store().failing_reads = Some(CHAIN_OWNERS_TABLE);
        let refused = ChainError::StateAccessError(
            "internal error: read from chain_owners refused".into(),
        );

        assert_eq!(
            ChainOwnerAdmin::is_chain_owner(&mut chain.state, account(2)).err(),
            Some(refused.clone())
        );
        // a failed lookup is not mistaken for a missing member
        assert_eq!(
            ChainOwnerAdmin::remove_chain_owner(&mut chain.state, account(2)).err(),
            Some(refused.clone())
        );
        assert_eq!(
            ChainOwnerAdmin::remove_chain_owner(&mut chain.state, account(3)).err(),
            Some(refused.clone())
        );
        assert_eq!(
            chain
                .invoke(genesis_owner(), AdminCall::IsChainOwner(account(2)))
                .err(),
            Some(refused)
        );

        chain.state.store().failing_reads = None;
        assert_eq!(chain.owners(), vec![genesis_owner(), account(2)]);
        Ok(())
    }
}
