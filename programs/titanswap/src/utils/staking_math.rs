use anchor_lang::prelude::*;

use crate::errors::AmmError;

/// Reward accrued by a staker since their first deposit into a pool.
///
/// floor(amount_deposited * elapsed_blocks * rate / total_staked), with
/// `total_staked` read at withdrawal time, not a historical snapshot. The
/// deposit amount is the current one even if it grew partway through the
/// interval; deposits deliberately do not checkpoint pending rewards.
pub fn pending_reward(
    amount_deposited: u64,
    elapsed_blocks: u64,
    reward_rate_per_block: u64,
    total_staked: u64,
) -> Result<u64> {
    if amount_deposited == 0 {
        return Ok(0);
    }
    let reward = u128::from(amount_deposited)
        .checked_mul(u128::from(elapsed_blocks))
        .ok_or(AmmError::MathOverflow)?
        .checked_mul(u128::from(reward_rate_per_block))
        .ok_or(AmmError::MathOverflow)?
        .checked_div(u128::from(total_staked))
        .ok_or(AmmError::MathOverflow)?;
    reward.try_into().map_err(|_| AmmError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_is_block_proportional() {
        // three stakers 1000/600/700, rate 10 per block
        for elapsed in [1u64, 203, 1_000] {
            assert_eq!(
                pending_reward(1_000, elapsed, 10, 2_300).unwrap(),
                1_000 * elapsed * 10 / 2_300
            );
        }
        assert_eq!(pending_reward(1_000, 203, 10, 2_300).unwrap(), 882);
    }

    #[test]
    fn reward_uses_current_deposit_over_whole_interval() {
        // a staker who topped up 600 -> 1100 accrues on 1100 for the whole
        // window, against the stake base at withdrawal time
        assert_eq!(
            pending_reward(1_100, 1_004, 10, 1_800).unwrap(),
            1_100u64 * 1_004 * 10 / 1_800
        );
    }

    #[test]
    fn zeroed_staker_accrues_nothing() {
        assert_eq!(pending_reward(0, 10_000, 10, 0).unwrap(), 0);
        assert_eq!(pending_reward(0, 10_000, 10, 500).unwrap(), 0);
    }
}
