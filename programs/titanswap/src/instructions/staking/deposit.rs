use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SEED_STAKE_POOL, SEED_STAKE_VAULT, SEED_STAKER};
use crate::errors::AmmError;
use crate::events;
use crate::state::{StakePool, StakerPosition};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_STAKE_POOL, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        constraint = pool.id == pool_id @ AmmError::PoolNotFound
    )]
    pub pool: Account<'info, StakePool>,

    #[account(
        mut,
        seeds = [SEED_STAKE_VAULT, pool.key().as_ref()],
        bump
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = staker_source.mint == pool.asset @ AmmError::UnknownAsset
    )]
    pub staker_source: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = staker,
        space = StakerPosition::LEN,
        seeds = [SEED_STAKER, pool_id.to_le_bytes().as_ref(), staker.key().as_ref()],
        bump
    )]
    pub position: Account<'info, StakerPosition>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, pool_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, AmmError::InvalidAmount);

    let staker_key = ctx.accounts.staker.key();
    let pool = &mut ctx.accounts.pool;
    let position = &mut ctx.accounts.position;

    if !position.exists {
        pool.register(staker_key)?;
        position.pool_id = pool_id;
        position.owner = staker_key;
        position.amount_deposited = amount;
        position.last_action_block = Clock::get()?.slot;
        position.rewards_collected = 0;
        position.exists = true;
        position.bump = ctx.bumps.position;
    } else {
        // Top-up: the principal grows but last_action_block stays at the
        // first deposit. Rewards are settled lazily at withdrawal over the
        // whole original interval with the enlarged amount.
        position.amount_deposited = position
            .amount_deposited
            .checked_add(amount)
            .ok_or(AmmError::MathOverflow)?;
    }

    pool.total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(AmmError::MathOverflow)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.staker_source.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
                authority: ctx.accounts.staker.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(events::Deposit {
        staker: staker_key,
        pool_id,
        amount,
    });

    Ok(())
}
