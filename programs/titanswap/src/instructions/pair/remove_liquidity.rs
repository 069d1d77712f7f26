use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::constants::{SEED_NATIVE_VAULT, SEED_PAIR, SEED_SHARES};
use crate::errors::AmmError;
use crate::events;
use crate::state::{LegKind, PairPool, PairSide, SharePosition};
use crate::utils::{pair_math, transfer};

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_PAIR, pair.asset_a.as_ref(), pair.asset_b.as_ref()],
        bump = pair.bump
    )]
    pub pair: Account<'info, PairPool>,

    /// CHECK: must be the pair's recorded vault.
    #[account(mut, address = pair.vault_a @ AmmError::InvalidVault)]
    pub vault_a: UncheckedAccount<'info>,

    /// CHECK: must be the pair's recorded vault.
    #[account(mut, address = pair.vault_b @ AmmError::InvalidVault)]
    pub vault_b: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SEED_SHARES, pair.key().as_ref(), user.key().as_ref()],
        bump = user_shares.bump
    )]
    pub user_shares: Account<'info, SharePosition>,

    /// CHECK: identity receiving the withdrawn value; lamports land here
    /// directly for a native leg.
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    /// CHECK: recipient's token account for leg A (ignored for a native leg).
    #[account(mut)]
    pub recipient_account_a: UncheckedAccount<'info>,

    /// CHECK: recipient's token account for leg B (ignored for a native leg).
    #[account(mut)]
    pub recipient_account_b: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, share_amount: u64) -> Result<()> {
    require!(share_amount > 0, AmmError::InvalidAmount);
    require!(
        ctx.accounts.user_shares.amount >= share_amount,
        AmmError::InsufficientShares
    );

    let pair = &ctx.accounts.pair;
    let (amount_a, amount_b) = pair_math::amounts_out(
        share_amount,
        pair.reserve_a,
        pair.reserve_b,
        pair.total_shares,
    )?;
    let asset_a = pair.asset_a;
    let asset_b = pair.asset_b;
    let kind_a = pair.kind_a;
    let kind_b = pair.kind_b;
    let pair_key = pair.key();

    // Burn shares and debit reserves before any value leaves the pool, so a
    // re-entrant call observes post-mutation state.
    let user_shares = &mut ctx.accounts.user_shares;
    user_shares.amount -= share_amount;
    let pair = &mut ctx.accounts.pair;
    pair.total_shares = pair
        .total_shares
        .checked_sub(share_amount)
        .ok_or(AmmError::MathOverflow)?;
    pair.debit(PairSide::A, amount_a)?;
    pair.debit(PairSide::B, amount_b)?;

    let pair_ai = ctx.accounts.pair.to_account_info();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let system_program_ai = ctx.accounts.system_program.to_account_info();
    let recipient_ai = ctx.accounts.recipient.to_account_info();

    let pair_bump = [ctx.accounts.pair.bump];
    let pair_seeds = &[SEED_PAIR, asset_a.as_ref(), asset_b.as_ref(), &pair_bump][..];
    let native_bump = [ctx.accounts.pair.native_vault_bump];
    let native_seeds = &[SEED_NATIVE_VAULT, pair_key.as_ref(), &native_bump][..];

    for (kind, amount, vault, token_destination) in [
        (
            kind_a,
            amount_a,
            ctx.accounts.vault_a.to_account_info(),
            ctx.accounts.recipient_account_a.to_account_info(),
        ),
        (
            kind_b,
            amount_b,
            ctx.accounts.vault_b.to_account_info(),
            ctx.accounts.recipient_account_b.to_account_info(),
        ),
    ] {
        match kind {
            LegKind::Ledger => transfer::push_leg(
                kind,
                amount,
                &vault,
                &token_destination,
                &pair_ai,
                &token_program_ai,
                &system_program_ai,
                &[pair_seeds],
            )?,
            LegKind::Native => transfer::push_leg(
                kind,
                amount,
                &vault,
                &recipient_ai,
                &vault,
                &token_program_ai,
                &system_program_ai,
                &[native_seeds],
            )?,
        }
    }

    emit!(events::RemoveLiquidity {
        share_amount,
        amount_a,
        amount_b,
        recipient: ctx.accounts.recipient.key(),
    });

    Ok(())
}
