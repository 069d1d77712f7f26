use anchor_lang::prelude::*;

use crate::constants::{MAX_POOL_STAKERS, MIN_STAKER_QUORUM};
use crate::errors::AmmError;

#[account]
pub struct StakingConfig {
    /// The only identity allowed to create staking pools.
    pub admin: Pubkey,

    /// Mint of the engine's own reward asset; authority is this config PDA.
    pub reward_mint: Pubkey,

    /// Reward units accrued per block per unit of stake share. Fixed at
    /// initialization.
    pub reward_rate_per_block: u64,

    /// Next pool id to allocate.
    pub pool_count: u64,

    pub bump: u8,
}

impl StakingConfig {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 1;
}

#[account]
pub struct StakePool {
    pub id: u64,
    pub asset: Pubkey,

    /// Sum of all current staker deposits. Zeroed stakers contribute 0 but
    /// stay in the registry below.
    pub total_staked: u64,

    /// Append-only registry of every identity that has ever deposited.
    /// Membership is never removed, so the quorum count is monotonic.
    pub stakers: Vec<Pubkey>,

    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8 + 8 + 32 + 8 + (4 + 32 * MAX_POOL_STAKERS) + 1;

    pub fn register(&mut self, staker: Pubkey) -> Result<()> {
        require!(self.stakers.len() < MAX_POOL_STAKERS, AmmError::StakerRegistryFull);
        self.stakers.push(staker);
        Ok(())
    }

    /// Withdrawals only open once enough distinct identities have ever
    /// deposited; zeroed-out stakers still count.
    pub fn has_withdrawal_quorum(&self) -> bool {
        self.stakers.len() >= MIN_STAKER_QUORUM
    }
}

/// One record per (pool, staker), created on first deposit and never
/// deleted. `last_action_block` is written exactly once, on that first
/// deposit; later deposits grow the principal without checkpointing.
#[account]
pub struct StakerPosition {
    pub pool_id: u64,
    pub owner: Pubkey,
    pub amount_deposited: u64,
    pub last_action_block: u64,
    /// Total reward units minted to this staker so far.
    pub rewards_collected: u64,
    pub exists: bool,
    pub bump: u8,
}

impl StakerPosition {
    pub const LEN: usize = 8 + 8 + 32 + 8 + 8 + 8 + 1 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_append_only_and_bounded() {
        let mut pool = StakePool {
            id: 0,
            asset: Pubkey::default(),
            total_staked: 0,
            stakers: Vec::new(),
            bump: 255,
        };
        for i in 0..MAX_POOL_STAKERS {
            pool.register(Pubkey::new_from_array([i as u8; 32])).unwrap();
        }
        assert_eq!(pool.stakers.len(), MAX_POOL_STAKERS);
        assert!(pool.register(Pubkey::default()).is_err());
    }

    #[test]
    fn withdrawal_quorum_needs_three_historical_stakers() {
        let mut pool = StakePool {
            id: 0,
            asset: Pubkey::default(),
            total_staked: 0,
            stakers: Vec::new(),
            bump: 255,
        };
        pool.register(Pubkey::new_from_array([1; 32])).unwrap();
        assert!(!pool.has_withdrawal_quorum());
        pool.register(Pubkey::new_from_array([2; 32])).unwrap();
        assert!(!pool.has_withdrawal_quorum());
        pool.register(Pubkey::new_from_array([3; 32])).unwrap();
        assert!(pool.has_withdrawal_quorum());
        // registry membership is permanent, so the quorum never regresses
        pool.total_staked = 0;
        assert!(pool.has_withdrawal_quorum());
    }
}
