use anchor_lang::prelude::*;

use crate::state::PairPool;
use crate::utils::pair_math;

#[derive(Accounts)]
pub struct GetPrice<'info> {
    pub pair: Account<'info, PairPool>,
}

/// Spot price of `asset` in units of the other leg, scaled by 10^9,
/// returned as instruction return data.
pub fn get_price(ctx: Context<GetPrice>, asset: Pubkey) -> Result<u64> {
    let pair = &ctx.accounts.pair;
    let side = pair.side_of(&asset)?;
    let price = pair_math::spot_price(pair.reserve(side), pair.reserve(side.other()))?;

    msg!("price of {}: {}", asset, price);

    Ok(price)
}
