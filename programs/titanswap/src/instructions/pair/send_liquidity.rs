use anchor_lang::prelude::*;

use crate::constants::{SEED_PAIR, SEED_SHARES};
use crate::errors::AmmError;
use crate::events;
use crate::state::{PairPool, SharePosition};

#[derive(Accounts)]
pub struct SendLiquidity<'info> {
    #[account(mut)]
    pub from: Signer<'info>,

    /// CHECK: identity receiving the shares.
    pub to: UncheckedAccount<'info>,

    #[account(
        seeds = [SEED_PAIR, pair.asset_a.as_ref(), pair.asset_b.as_ref()],
        bump = pair.bump
    )]
    pub pair: Account<'info, PairPool>,

    #[account(
        mut,
        seeds = [SEED_SHARES, pair.key().as_ref(), from.key().as_ref()],
        bump = from_shares.bump
    )]
    pub from_shares: Account<'info, SharePosition>,

    #[account(
        init_if_needed,
        payer = from,
        space = SharePosition::LEN,
        seeds = [SEED_SHARES, pair.key().as_ref(), to.key().as_ref()],
        bump
    )]
    pub to_shares: Account<'info, SharePosition>,

    pub system_program: Program<'info, System>,
}

/// Pure share transfer between holders; reserves are untouched.
pub fn send_liquidity(ctx: Context<SendLiquidity>, amount: u64) -> Result<()> {
    require!(amount > 0, AmmError::InvalidAmount);
    require!(
        ctx.accounts.from.key() != Pubkey::default()
            && ctx.accounts.to.key() != Pubkey::default(),
        AmmError::ZeroAddress
    );
    require!(
        ctx.accounts.from_shares.amount >= amount,
        AmmError::InsufficientShares
    );

    let from_shares = &mut ctx.accounts.from_shares;
    from_shares.amount -= amount;

    let to_shares = &mut ctx.accounts.to_shares;
    to_shares.pair = ctx.accounts.pair.key();
    to_shares.owner = ctx.accounts.to.key();
    to_shares.bump = ctx.bumps.to_shares;
    to_shares.amount = to_shares
        .amount
        .checked_add(amount)
        .ok_or(AmmError::MathOverflow)?;

    emit!(events::ShareTransfer {
        amount,
        from: ctx.accounts.from.key(),
        to: ctx.accounts.to.key(),
    });

    Ok(())
}
