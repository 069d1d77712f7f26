pub mod pair;
pub mod share_position;
pub mod staking;

pub use pair::*;
pub use share_position::*;
pub use staking::*;
