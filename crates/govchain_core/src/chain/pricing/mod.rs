mod l1_pricing;
pub use l1_pricing::*;

mod l2_pricing;
pub use l2_pricing::*;
