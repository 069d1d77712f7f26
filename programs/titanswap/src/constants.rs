use anchor_lang::prelude::*;
use anchor_lang::pubkey;

pub const SEED_STAKING_CONFIG: &[u8] = b"staking_config_v1";
pub const SEED_PAIR: &[u8] = b"pair";
pub const SEED_NATIVE_VAULT: &[u8] = b"native_vault";
pub const SEED_SHARES: &[u8] = b"shares";
pub const SEED_STAKE_POOL: &[u8] = b"stake_pool";
pub const SEED_STAKE_VAULT: &[u8] = b"stake_vault";
pub const SEED_STAKER: &[u8] = b"staker";
pub const SEED_REWARD_MINT: &[u8] = b"reward_mint";

/// Swap fee ratio: 0.3%, applied as floor(x * 997 / 1000).
pub const FEE_NUMERATOR: u128 = 997;
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Fixed-point scale for spot price queries.
pub const PRICE_SCALE: u128 = 1_000_000_000;

/// Minimum number of historical stakers a pool needs before withdrawals.
pub const MIN_STAKER_QUORUM: usize = 3;

/// Capacity of the append-only staker registry per pool.
pub const MAX_POOL_STAKERS: usize = 64;

pub const REWARD_MINT_DECIMALS: u8 = 9;

/// Identifier recorded for a native (lamport) leg of a pair.
pub const NATIVE_ASSET_ID: Pubkey = pubkey!("So11111111111111111111111111111111111111112");
