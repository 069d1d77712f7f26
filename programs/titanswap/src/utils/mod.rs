pub mod math;
pub mod pair_math;
pub mod staking_math;
pub mod transfer;

pub use math::*;
pub use pair_math::*;
pub use staking_math::*;
pub use transfer::*;
