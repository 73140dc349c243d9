pub const GWEI: u64 = 1_000_000_000;

pub const INITIAL_L1_GAS_PRICE_ESTIMATE_WEI: u64 = 50 * GWEI;
pub const INITIAL_GAS_PRICE_WEI: u64 = GWEI;
pub const INITIAL_SPEED_LIMIT_PER_SECOND: u64 = 1_000_000;
pub const INITIAL_GAS_POOL_SECONDS: u64 = 10 * 60;
pub const INITIAL_SMALL_GAS_POOL_SECONDS: u64 = 60;
pub const INITIAL_PER_BLOCK_GAS_LIMIT: u64 = 20 * 1_000_000;

// Table names
pub const CHAIN_OWNERS_TABLE: &str = "chain_owners";
pub const CHAIN_OWNERS_META_TABLE: &str = "chain_owners_meta";
pub const L1_PRICING_TABLE: &str = "l1_pricing";
pub const L2_PRICING_TABLE: &str = "l2_pricing";
pub const NETWORK_FEE_TABLE: &str = "network_fee";
