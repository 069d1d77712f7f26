pub mod pair;
pub mod staking;

pub use pair::*;
pub use staking::*;
