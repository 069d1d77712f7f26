use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::constants::{SEED_NATIVE_VAULT, SEED_PAIR};
use crate::errors::AmmError;
use crate::events;
use crate::state::{LegKind, PairPool, PairSide};
use crate::utils::{pair_math, transfer};

#[derive(Accounts)]
pub struct Swap<'info> {
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

    /// CHECK: caller's source account for the input leg (ignored for a
    /// native input, which comes from the caller's lamports).
    #[account(mut)]
    pub user_source: UncheckedAccount<'info>,

    /// CHECK: identity receiving the output leg.
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    /// CHECK: recipient's token account for the output leg (ignored for a
    /// native output).
    #[account(mut)]
    pub recipient_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn swap(
    ctx: Context<Swap>,
    asset_in: Pubkey,
    amount_in: u64,
    fee_asset: Pubkey,
) -> Result<()> {
    require!(amount_in > 0, AmmError::InvalidAmount);

    let pair = &ctx.accounts.pair;
    let side_in = pair.side_of(&asset_in)?;
    pair.side_of(&fee_asset)?;
    let side_out = side_in.other();

    // The fee leg only moves where the 997/1000 truncation lands; the full
    // nominal input always enters the reserves.
    let fee_on_input = fee_asset == asset_in;
    let amount_out = pair_math::swap_output(
        amount_in,
        pair.reserve(side_in),
        pair.reserve(side_out),
        fee_on_input,
    )?;
    require!(amount_out > 0, AmmError::InsufficientOutput);

    let asset_out = pair.asset(side_out);
    let kind_in = pair.kind(side_in);
    let kind_out = pair.kind(side_out);
    let asset_a = pair.asset_a;
    let asset_b = pair.asset_b;
    let pair_key = pair.key();

    let (vault_in, vault_out) = match side_in {
        PairSide::A => (&ctx.accounts.vault_a, &ctx.accounts.vault_b),
        PairSide::B => (&ctx.accounts.vault_b, &ctx.accounts.vault_a),
    };
    let vault_in_ai = vault_in.to_account_info();
    let vault_out_ai = vault_out.to_account_info();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let system_program_ai = ctx.accounts.system_program.to_account_info();

    transfer::pull_leg(
        kind_in,
        amount_in,
        &ctx.accounts.user_source.to_account_info(),
        &vault_in_ai,
        &ctx.accounts.user.to_account_info(),
        &token_program_ai,
        &system_program_ai,
    )?;

    let pair = &mut ctx.accounts.pair;
    pair.credit(side_in, amount_in)?;
    pair.debit(side_out, amount_out)?;

    let pair_ai = ctx.accounts.pair.to_account_info();
    let pair_bump = [ctx.accounts.pair.bump];
    let pair_seeds = &[SEED_PAIR, asset_a.as_ref(), asset_b.as_ref(), &pair_bump][..];
    let native_bump = [ctx.accounts.pair.native_vault_bump];
    let native_seeds = &[SEED_NATIVE_VAULT, pair_key.as_ref(), &native_bump][..];

    match kind_out {
        LegKind::Ledger => transfer::push_leg(
            kind_out,
            amount_out,
            &vault_out_ai,
            &ctx.accounts.recipient_account.to_account_info(),
            &pair_ai,
            &token_program_ai,
            &system_program_ai,
            &[pair_seeds],
        )?,
        LegKind::Native => transfer::push_leg(
            kind_out,
            amount_out,
            &vault_out_ai,
            &ctx.accounts.recipient.to_account_info(),
            &vault_out_ai,
            &token_program_ai,
            &system_program_ai,
            &[native_seeds],
        )?,
    }

    emit!(events::Swap {
        asset_in,
        amount_in,
        asset_out,
        amount_out,
        fee_asset,
        recipient: ctx.accounts.recipient.key(),
    });

    Ok(())
}
