pub mod add_liquidity;
pub mod create_pair;
pub mod get_price;
pub mod remove_liquidity;
pub mod send_liquidity;
pub mod swap;

pub use add_liquidity::*;
pub use create_pair::*;
pub use get_price::*;
pub use remove_liquidity::*;
pub use send_liquidity::*;
pub use swap::*;
