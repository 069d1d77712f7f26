use anchor_lang::prelude::*;

/// Per-holder share balance for one pair pool. One PDA per (pair, owner);
/// together these form the pool's share ledger, and the pool invariant is
/// total_shares == sum of all position amounts.
#[account]
pub struct SharePosition {
    pub pair: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl SharePosition {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;
}
