use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::constants::{SEED_STAKE_POOL, SEED_STAKE_VAULT, SEED_STAKER, SEED_STAKING_CONFIG};
use crate::errors::AmmError;
use crate::events;
use crate::state::{StakePool, StakerPosition, StakingConfig};
use crate::utils::staking_math;

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(
        seeds = [SEED_STAKING_CONFIG],
        bump = config.bump
    )]
    pub config: Account<'info, StakingConfig>,

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
        seeds = [SEED_STAKER, pool_id.to_le_bytes().as_ref(), staker.key().as_ref()],
        bump = position.bump,
        constraint = position.exists @ AmmError::StakerNotFound
    )]
    pub position: Account<'info, StakerPosition>,

    #[account(mut, address = config.reward_mint)]
    pub reward_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = staker_reward_account.mint == config.reward_mint @ AmmError::UnknownAsset
    )]
    pub staker_reward_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = staker_destination.mint == pool.asset @ AmmError::UnknownAsset
    )]
    pub staker_destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<Withdraw>, pool_id: u64) -> Result<()> {
    let pool = &ctx.accounts.pool;
    require!(
        pool.has_withdrawal_quorum(),
        AmmError::InsufficientStakerQuorum
    );

    let position = &ctx.accounts.position;
    let current_block = Clock::get()?.slot;
    let elapsed = current_block
        .checked_sub(position.last_action_block)
        .ok_or(AmmError::MathOverflow)?;
    let reward = staking_math::pending_reward(
        position.amount_deposited,
        elapsed,
        ctx.accounts.config.reward_rate_per_block,
        pool.total_staked,
    )?;
    let principal = position.amount_deposited;

    // Authoritative state first; the registry entry and the record persist
    // with a zeroed principal.
    let position = &mut ctx.accounts.position;
    position.amount_deposited = 0;
    position.rewards_collected = position
        .rewards_collected
        .checked_add(reward)
        .ok_or(AmmError::MathOverflow)?;
    let pool = &mut ctx.accounts.pool;
    pool.total_staked = pool
        .total_staked
        .checked_sub(principal)
        .ok_or(AmmError::MathOverflow)?;

    let config_ai = ctx.accounts.config.to_account_info();
    let pool_ai = ctx.accounts.pool.to_account_info();
    let token_program_ai = ctx.accounts.token_program.to_account_info();

    let config_bump = [ctx.accounts.config.bump];
    let config_seeds = &[SEED_STAKING_CONFIG, &config_bump][..];
    token::mint_to(
        CpiContext::new_with_signer(
            token_program_ai.clone(),
            MintTo {
                mint: ctx.accounts.reward_mint.to_account_info(),
                to: ctx.accounts.staker_reward_account.to_account_info(),
                authority: config_ai,
            },
            &[config_seeds],
        ),
        reward,
    )?;

    let pool_id_bytes = pool_id.to_le_bytes();
    let pool_bump = [ctx.accounts.pool.bump];
    let pool_seeds = &[SEED_STAKE_POOL, pool_id_bytes.as_ref(), &pool_bump][..];
    token::transfer(
        CpiContext::new_with_signer(
            token_program_ai,
            Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.staker_destination.to_account_info(),
                authority: pool_ai,
            },
            &[pool_seeds],
        ),
        principal,
    )?;

    let staker_key = ctx.accounts.staker.key();
    emit!(events::Withdraw {
        staker: staker_key,
        pool_id,
        principal,
    });
    emit!(events::HarvestRewards {
        staker: staker_key,
        pool_id,
        reward,
    });

    Ok(())
}
