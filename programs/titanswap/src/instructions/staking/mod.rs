pub mod create_stake_pool;
pub mod deposit;
pub mod initialize_staking;
pub mod withdraw;

pub use create_stake_pool::*;
pub use deposit::*;
pub use initialize_staking::*;
pub use withdraw::*;
