use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{REWARD_MINT_DECIMALS, SEED_REWARD_MINT, SEED_STAKING_CONFIG};
use crate::state::StakingConfig;

#[derive(Accounts)]
pub struct InitializeStaking<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = StakingConfig::LEN,
        seeds = [SEED_STAKING_CONFIG],
        bump
    )]
    pub config: Account<'info, StakingConfig>,

    /// The engine's own reward asset; minted on withdrawal, with the config
    /// PDA as the only authority.
    #[account(
        init,
        payer = admin,
        seeds = [SEED_REWARD_MINT],
        bump,
        mint::decimals = REWARD_MINT_DECIMALS,
        mint::authority = config,
    )]
    pub reward_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_staking(ctx: Context<InitializeStaking>, reward_rate_per_block: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.reward_mint = ctx.accounts.reward_mint.key();
    config.reward_rate_per_block = reward_rate_per_block;
    config.pool_count = 0;
    config.bump = ctx.bumps.config;

    msg!(
        "staking initialized: admin {}, {} reward units per block",
        config.admin,
        reward_rate_per_block
    );

    Ok(())
}
