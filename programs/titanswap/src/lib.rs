use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::LegKind;

declare_id!("83nVYGY37pgA2wLkna7sX4aPUFUrtjoP9DiGyaDudpH2");

#[program]
pub mod titanswap {
    use super::*;

    // --- PAIR ENGINE ---

    pub fn create_pair(ctx: Context<CreatePair>, kind_a: LegKind, kind_b: LegKind) -> Result<()> {
        pair::create_pair(ctx, kind_a, kind_b)
    }

    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<()> {
        pair::add_liquidity(ctx, amount_a, amount_b)
    }

    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, share_amount: u64) -> Result<()> {
        pair::remove_liquidity(ctx, share_amount)
    }

    pub fn swap(
        ctx: Context<Swap>,
        asset_in: Pubkey,
        amount_in: u64,
        fee_asset: Pubkey,
    ) -> Result<()> {
        pair::swap(ctx, asset_in, amount_in, fee_asset)
    }

    pub fn get_price(ctx: Context<GetPrice>, asset: Pubkey) -> Result<u64> {
        pair::get_price(ctx, asset)
    }

    pub fn send_liquidity(ctx: Context<SendLiquidity>, amount: u64) -> Result<()> {
        pair::send_liquidity(ctx, amount)
    }

    // --- STAKING ENGINE ---

    pub fn initialize_staking(
        ctx: Context<InitializeStaking>,
        reward_rate_per_block: u64,
    ) -> Result<()> {
        staking::initialize_staking(ctx, reward_rate_per_block)
    }

    pub fn create_stake_pool(ctx: Context<CreateStakePool>) -> Result<()> {
        staking::create_stake_pool(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, pool_id: u64, amount: u64) -> Result<()> {
        staking::deposit(ctx, pool_id, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, pool_id: u64) -> Result<()> {
        staking::withdraw(ctx, pool_id)
    }
}
