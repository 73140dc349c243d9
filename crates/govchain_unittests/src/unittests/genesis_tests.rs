#[cfg(test)]
mod genesis_tests {
    use alloy_primitives::U256;
    use anyhow::Result;
    use govchain_core::{
        config::{GWEI, INITIAL_PER_BLOCK_GAS_LIMIT, INITIAL_SPEED_LIMIT_PER_SECOND},
        genesis::Genesis,
    };
    use serde_json::json;

    use crate::tests::{Testing, account};

    #[test]
    fn test_initialize_from_json() -> Result<()> {
        let genesis = json!({
            "initial_owners": [account(3).to_string(), account(2).to_string()],
            "network_fee_account": account(8).to_string(),
            "pricing": { "gas_pool_seconds": 300 }
        });
        let genesis = Genesis::parse(genesis.to_string().as_bytes())?.validate()?;
        let mut chain = Testing::with_genesis(&genesis);

        assert_eq!(chain.owners(), vec![account(2), account(3)]);
        assert_eq!(chain.state.network_fee_account()?, account(8));
        assert_eq!(
            chain.state.l1_pricing().l1_gas_price_estimate_wei()?,
            U256::from(50 * GWEI)
        );

        let params = chain.state.l2_pricing().parameters()?;
        assert_eq!(params.gas_price_wei, U256::from(GWEI));
        assert_eq!(params.gas_pool_seconds, 300);
        assert_eq!(params.speed_limit_per_second, INITIAL_SPEED_LIMIT_PER_SECOND);
        assert_eq!(params.max_per_block_gas_limit, INITIAL_PER_BLOCK_GAS_LIMIT);
        Ok(())
    }

    #[test]
    fn test_duplicate_initial_owners_collapse() -> Result<()> {
        let genesis = json!({ "initial_owners": [account(2).to_string(), account(2).to_string()] });
        let genesis = Genesis::parse(genesis.to_string().as_bytes())?.validate()?;
        let mut chain = Testing::with_genesis(&genesis);
        assert_eq!(chain.owners(), vec![account(2)]);
        assert_eq!(chain.state.chain_owners().size()?, 1);
        Ok(())
    }
}
