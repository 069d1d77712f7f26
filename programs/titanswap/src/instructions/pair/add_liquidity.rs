use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::constants::{SEED_PAIR, SEED_SHARES};
use crate::errors::AmmError;
use crate::events;
use crate::state::{PairPool, PairSide, SharePosition};
use crate::utils::{pair_math, transfer};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_PAIR, pair.asset_a.as_ref(), pair.asset_b.as_ref()],
        bump = pair.bump
    )]
    pub pair: Account<'info, PairPool>,

    /// CHECK: must be the pair's recorded vault; the transfer CPI enforces
    /// the rest.
    #[account(mut, address = pair.vault_a @ AmmError::InvalidVault)]
    pub vault_a: UncheckedAccount<'info>,

    /// CHECK: must be the pair's recorded vault.
    #[account(mut, address = pair.vault_b @ AmmError::InvalidVault)]
    pub vault_b: UncheckedAccount<'info>,

    /// CHECK: caller's source account for leg A (unused for a native leg,
    /// where the lamports come from the caller directly).
    #[account(mut)]
    pub user_account_a: UncheckedAccount<'info>,

    /// CHECK: caller's source account for leg B.
    #[account(mut)]
    pub user_account_b: UncheckedAccount<'info>,

    /// CHECK: identity credited with the minted shares.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = SharePosition::LEN,
        seeds = [SEED_SHARES, pair.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub recipient_shares: Account<'info, SharePosition>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
    require!(amount_a > 0 && amount_b > 0, AmmError::InvalidAmount);

    let pair = &ctx.accounts.pair;
    // The full nominal amounts are absorbed regardless of ratio; an
    // off-ratio deposit mints the worse of the two ratios and donates the
    // rest to existing holders. A zero mint is not an error.
    let minted = pair_math::shares_to_mint(
        amount_a,
        amount_b,
        pair.reserve_a,
        pair.reserve_b,
        pair.total_shares,
    )?;
    let kind_a = pair.kind_a;
    let kind_b = pair.kind_b;

    let user_ai = ctx.accounts.user.to_account_info();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let system_program_ai = ctx.accounts.system_program.to_account_info();

    transfer::pull_leg(
        kind_a,
        amount_a,
        &ctx.accounts.user_account_a.to_account_info(),
        &ctx.accounts.vault_a.to_account_info(),
        &user_ai,
        &token_program_ai,
        &system_program_ai,
    )?;
    transfer::pull_leg(
        kind_b,
        amount_b,
        &ctx.accounts.user_account_b.to_account_info(),
        &ctx.accounts.vault_b.to_account_info(),
        &user_ai,
        &token_program_ai,
        &system_program_ai,
    )?;

    let pair = &mut ctx.accounts.pair;
    pair.credit(PairSide::A, amount_a)?;
    pair.credit(PairSide::B, amount_b)?;
    pair.total_shares = pair
        .total_shares
        .checked_add(minted)
        .ok_or(AmmError::MathOverflow)?;

    let shares = &mut ctx.accounts.recipient_shares;
    shares.pair = ctx.accounts.pair.key();
    shares.owner = ctx.accounts.recipient.key();
    shares.bump = ctx.bumps.recipient_shares;
    shares.amount = shares
        .amount
        .checked_add(minted)
        .ok_or(AmmError::MathOverflow)?;

    emit!(events::AddLiquidity {
        asset_a: ctx.accounts.pair.asset_a,
        asset_b: ctx.accounts.pair.asset_b,
        amount_a,
        amount_b,
        minted,
        recipient: ctx.accounts.recipient.key(),
    });

    Ok(())
}
