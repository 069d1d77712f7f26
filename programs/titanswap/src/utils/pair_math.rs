use anchor_lang::prelude::*;

use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR, PRICE_SCALE};
use crate::errors::AmmError;
use crate::utils::math::isqrt;

/// Shares minted for a deposit of both legs.
///
/// Empty pool: isqrt(amount_a * amount_b); the first depositor sets the
/// exchange rate and bears the rounding risk (a tiny first deposit can mint
/// zero shares; no minimum-liquidity floor).
///
/// Non-empty pool: min of the two pro-rata figures, so the worse of the two
/// ratios wins. Both full amounts still enter the reserves, and an
/// off-ratio deposit donates the excess to existing holders.
pub fn shares_to_mint(
    amount_a: u64,
    amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u64,
) -> Result<u64> {
    let minted = if total_shares == 0 {
        isqrt(u128::from(amount_a) * u128::from(amount_b))
    } else {
        let shares = u128::from(total_shares);
        let by_a = u128::from(amount_a)
            .checked_mul(shares)
            .ok_or(AmmError::MathOverflow)?
            .checked_div(u128::from(reserve_a))
            .ok_or(AmmError::MathOverflow)?;
        let by_b = u128::from(amount_b)
            .checked_mul(shares)
            .ok_or(AmmError::MathOverflow)?
            .checked_div(u128::from(reserve_b))
            .ok_or(AmmError::MathOverflow)?;
        by_a.min(by_b)
    };
    minted.try_into().map_err(|_| AmmError::MathOverflow.into())
}

/// Proportional reserve amounts returned for burning `share_amount` shares.
pub fn amounts_out(
    share_amount: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u64,
) -> Result<(u64, u64)> {
    let shares = u128::from(total_shares);
    let amount_a = u128::from(share_amount)
        .checked_mul(u128::from(reserve_a))
        .ok_or(AmmError::MathOverflow)?
        .checked_div(shares)
        .ok_or(AmmError::MathOverflow)?;
    let amount_b = u128::from(share_amount)
        .checked_mul(u128::from(reserve_b))
        .ok_or(AmmError::MathOverflow)?
        .checked_div(shares)
        .ok_or(AmmError::MathOverflow)?;
    Ok((
        amount_a.try_into().map_err(|_| AmmError::MathOverflow)?,
        amount_b.try_into().map_err(|_| AmmError::MathOverflow)?,
    ))
}

/// Constant-product swap output for a given input.
///
/// The 997/1000 fee truncation is applied on the input leg or on the output
/// leg depending on which asset the caller chose to absorb the fee; the
/// formula is otherwise the same. The caller records the full nominal input
/// into reserves in both cases, so the fee stays in the pool.
pub fn swap_output(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_on_input: bool,
) -> Result<u64> {
    let amount_in = u128::from(amount_in);
    let reserve_in = u128::from(reserve_in);
    let reserve_out = u128::from(reserve_out);

    let amount_out = if fee_on_input {
        let effective_in = amount_in
            .checked_mul(FEE_NUMERATOR)
            .ok_or(AmmError::MathOverflow)?
            / FEE_DENOMINATOR;
        effective_in
            .checked_mul(reserve_out)
            .ok_or(AmmError::MathOverflow)?
            .checked_div(
                reserve_in
                    .checked_add(effective_in)
                    .ok_or(AmmError::MathOverflow)?,
            )
            .ok_or(AmmError::MathOverflow)?
    } else {
        let raw_out = amount_in
            .checked_mul(reserve_out)
            .ok_or(AmmError::MathOverflow)?
            .checked_div(
                reserve_in
                    .checked_add(amount_in)
                    .ok_or(AmmError::MathOverflow)?,
            )
            .ok_or(AmmError::MathOverflow)?;
        raw_out
            .checked_mul(FEE_NUMERATOR)
            .ok_or(AmmError::MathOverflow)?
            / FEE_DENOMINATOR
    };
    amount_out.try_into().map_err(|_| AmmError::MathOverflow.into())
}

/// Spot price of the queried leg in units of the other leg, scaled by 10^9.
pub fn spot_price(this_reserve: u64, other_reserve: u64) -> Result<u64> {
    require!(this_reserve > 0, AmmError::InvalidState);
    let price = u128::from(other_reserve)
        .checked_mul(PRICE_SCALE)
        .ok_or(AmmError::MathOverflow)?
        / u128::from(this_reserve);
    price.try_into().map_err(|_| AmmError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_deposit_mints_geometric_mean() {
        assert_eq!(shares_to_mint(101, 400_623, 0, 0, 0).unwrap(), 6_361);
        assert_eq!(shares_to_mint(1_000, 4_000, 0, 0, 0).unwrap(), 2_000);
        assert_eq!(shares_to_mint(100, 993_700, 0, 0, 0).unwrap(), 9_968);
        // the product can round all the way down to zero shares
        assert_eq!(shares_to_mint(1, 0, 0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn proportional_deposit_mints_pro_rata() {
        // reserves 200000/300000, 244948 shares outstanding
        let shares = shares_to_mint(200_000, 300_000, 0, 0, 0).unwrap();
        assert_eq!(shares, 244_948);
        assert_eq!(
            shares_to_mint(600, 900, 200_000, 300_000, shares).unwrap(),
            734
        );
    }

    #[test]
    fn off_ratio_deposit_mints_worse_ratio() {
        // donation scenario: the depositor is penalized with the worse leg
        assert_eq!(
            shares_to_mint(100_000, 9_937, 100, 993_700, 9_968).unwrap(),
            99
        );
        // tiny follow-up deposit rounds down to zero shares, tokens absorbed
        assert_eq!(
            shares_to_mint(10, 20, 100_100, 1_003_637, 10_067).unwrap(),
            0
        );
    }

    #[test]
    fn removal_is_proportional() {
        assert_eq!(amounts_out(1_010, 1_000, 4_000, 2_000).unwrap(), (505, 2_020));
        // disproportionate depositor gets back the pro-rata split, not what
        // they put in
        assert_eq!(
            amounts_out(1_200, 5_000, 27_320, 2_000).unwrap(),
            (3_000, 16_392)
        );
    }

    #[test]
    fn sole_holder_round_trip_drains_pool() {
        let minted = shares_to_mint(1_234, 777_777, 0, 0, 0).unwrap();
        let (a, b) = amounts_out(minted, 1_234, 777_777, minted).unwrap();
        assert_eq!((a, b), (1_234, 777_777));
    }

    #[test]
    fn swap_fee_on_input_leg() {
        assert_eq!(swap_output(333, 10_000, 30_000, true).unwrap(), 963);
        assert_eq!(swap_output(200, 30_000, 10_000, true).unwrap(), 65);
    }

    #[test]
    fn swap_fee_on_output_leg() {
        assert_eq!(swap_output(444, 10_000, 30_000, false).unwrap(), 1_271);
        assert_eq!(swap_output(300, 30_000, 10_000, false).unwrap(), 98);
    }

    #[test]
    fn swap_dust_input_yields_zero() {
        assert_eq!(swap_output(1, 10_000, 30_000, true).unwrap(), 0);
    }

    #[test]
    fn swap_never_decreases_reserve_product() {
        let cases = [
            (10_000u64, 30_000u64, 333u64, true),
            (10_000, 30_000, 444, false),
            (30_000, 10_000, 200, true),
            (30_000, 10_000, 300, false),
            (7, 9_999_999, 1_000_000, true),
            (7, 9_999_999, 1_000_000, false),
        ];
        for (reserve_in, reserve_out, amount_in, fee_on_input) in cases {
            let out = swap_output(amount_in, reserve_in, reserve_out, fee_on_input).unwrap();
            let before = u128::from(reserve_in) * u128::from(reserve_out);
            let after = (u128::from(reserve_in) + u128::from(amount_in))
                * (u128::from(reserve_out) - u128::from(out));
            assert!(after >= before, "product decreased for input {}", amount_in);
        }
    }

    #[test]
    fn spot_price_is_scaled_ratio() {
        assert_eq!(spot_price(5_000, 9_999).unwrap(), 1_999_800_000);
        assert_eq!(spot_price(9_999, 5_000).unwrap(), 500_050_005);
        assert_eq!(spot_price(10_000, 10_000).unwrap(), 1_000_000_000);
        assert_eq!(spot_price(353_434, 10_010).unwrap(), 28_322_119);
        assert_eq!(spot_price(10_010, 353_434).unwrap(), 35_308_091_908);
    }

    #[test]
    fn spot_price_rejects_empty_reserve() {
        assert!(spot_price(0, 10).is_err());
    }
}
