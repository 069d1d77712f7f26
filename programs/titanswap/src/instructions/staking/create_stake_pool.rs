use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{SEED_STAKE_POOL, SEED_STAKE_VAULT, SEED_STAKING_CONFIG};
use crate::errors::AmmError;
use crate::events;
use crate::state::{StakePool, StakingConfig};

#[derive(Accounts)]
pub struct CreateStakePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_STAKING_CONFIG],
        bump = config.bump,
        constraint = config.admin == admin.key() @ AmmError::NotAuthorized
    )]
    pub config: Account<'info, StakingConfig>,

    pub asset_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = StakePool::LEN,
        seeds = [SEED_STAKE_POOL, config.pool_count.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, StakePool>,

    #[account(
        init,
        payer = admin,
        seeds = [SEED_STAKE_VAULT, pool.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = pool,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn create_stake_pool(ctx: Context<CreateStakePool>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let pool = &mut ctx.accounts.pool;

    pool.id = config.pool_count;
    pool.asset = ctx.accounts.asset_mint.key();
    pool.total_staked = 0;
    pool.stakers = Vec::new();
    pool.bump = ctx.bumps.pool;

    config.pool_count = config
        .pool_count
        .checked_add(1)
        .ok_or(AmmError::MathOverflow)?;

    emit!(events::PoolCreated { pool_id: pool.id });

    Ok(())
}
