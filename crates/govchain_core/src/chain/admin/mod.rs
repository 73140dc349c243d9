mod call;
pub use call::*;

mod chain_owner_admin;
pub use chain_owner_admin::*;

mod methods;
pub use methods::*;

mod owner_gate;
pub use owner_gate::*;
