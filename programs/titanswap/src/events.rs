use anchor_lang::prelude::*;

// --- PAIR ENGINE ---

#[event]
pub struct PairCreated {
    pub asset_a: Pubkey,
    pub asset_b: Pubkey,
    pub pair: Pubkey,
}

#[event]
pub struct AddLiquidity {
    pub asset_a: Pubkey,
    pub asset_b: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub minted: u64,
    pub recipient: Pubkey,
}

#[event]
pub struct RemoveLiquidity {
    pub share_amount: u64,
    pub amount_a: u64,
    pub amount_b: u64,
    pub recipient: Pubkey,
}

#[event]
pub struct Swap {
    pub asset_in: Pubkey,
    pub amount_in: u64,
    pub asset_out: Pubkey,
    pub amount_out: u64,
    pub fee_asset: Pubkey,
    pub recipient: Pubkey,
}

#[event]
pub struct ShareTransfer {
    pub amount: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}

// --- STAKING ---

#[event]
pub struct PoolCreated {
    pub pool_id: u64,
}

#[event]
pub struct Deposit {
    pub staker: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
}

#[event]
pub struct Withdraw {
    pub staker: Pubkey,
    pub pool_id: u64,
    pub principal: u64,
}

#[event]
pub struct HarvestRewards {
    pub staker: Pubkey,
    pub pool_id: u64,
    pub reward: u64,
}
