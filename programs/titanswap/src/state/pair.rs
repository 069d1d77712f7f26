use anchor_lang::prelude::*;

use crate::errors::AmmError;

/// How value moves on one side of a pair: an SPL token ledger, or the
/// chain's native lamports. Formulas are identical for both kinds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LegKind {
    Ledger,
    Native,
}

/// Which side of the pair an asset identifier resolves to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PairSide {
    A,
    B,
}

#[account]
pub struct PairPool {
    /// Asset identifiers, fixed at creation, canonically ordered (a < b).
    pub asset_a: Pubkey,
    pub asset_b: Pubkey,

    pub kind_a: LegKind,
    pub kind_b: LegKind,

    /// Vault addresses holding each leg's value on behalf of the pool.
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,

    /// The engine's own accounting of held balances. Changes only via
    /// add/remove/swap, never via direct vault inspection.
    pub reserve_a: u64,
    pub reserve_b: u64,

    /// Sum of all holder share balances.
    pub total_shares: u64,

    pub bump: u8,
    pub native_vault_bump: u8,
}

impl PairPool {
    pub const LEN: usize = 8 + 32 + 32 + 1 + 1 + 32 + 32 + 8 + 8 + 8 + 1 + 1;

    /// Resolves an asset identifier to a side of the pair.
    pub fn side_of(&self, asset: &Pubkey) -> Result<PairSide> {
        if *asset == self.asset_a {
            Ok(PairSide::A)
        } else if *asset == self.asset_b {
            Ok(PairSide::B)
        } else {
            Err(AmmError::UnknownAsset.into())
        }
    }

    pub fn reserve(&self, side: PairSide) -> u64 {
        match side {
            PairSide::A => self.reserve_a,
            PairSide::B => self.reserve_b,
        }
    }

    pub fn kind(&self, side: PairSide) -> LegKind {
        match side {
            PairSide::A => self.kind_a,
            PairSide::B => self.kind_b,
        }
    }

    pub fn asset(&self, side: PairSide) -> Pubkey {
        match side {
            PairSide::A => self.asset_a,
            PairSide::B => self.asset_b,
        }
    }

    pub fn credit(&mut self, side: PairSide, amount: u64) -> Result<()> {
        let reserve = match side {
            PairSide::A => &mut self.reserve_a,
            PairSide::B => &mut self.reserve_b,
        };
        *reserve = reserve.checked_add(amount).ok_or(AmmError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, side: PairSide, amount: u64) -> Result<()> {
        let reserve = match side {
            PairSide::A => &mut self.reserve_a,
            PairSide::B => &mut self.reserve_b,
        };
        *reserve = reserve.checked_sub(amount).ok_or(AmmError::MathOverflow)?;
        Ok(())
    }
}

impl PairSide {
    pub fn other(self) -> PairSide {
        match self {
            PairSide::A => PairSide::B,
            PairSide::B => PairSide::A,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(reserve_a: u64, reserve_b: u64) -> PairPool {
        PairPool {
            asset_a: Pubkey::new_from_array([1; 32]),
            asset_b: Pubkey::new_from_array([2; 32]),
            kind_a: LegKind::Ledger,
            kind_b: LegKind::Ledger,
            vault_a: Pubkey::default(),
            vault_b: Pubkey::default(),
            reserve_a,
            reserve_b,
            total_shares: 0,
            bump: 255,
            native_vault_bump: 255,
        }
    }

    #[test]
    fn side_resolution() {
        let p = pair(10, 20);
        assert_eq!(p.side_of(&p.asset_a).unwrap(), PairSide::A);
        assert_eq!(p.side_of(&p.asset_b).unwrap(), PairSide::B);
        assert!(p.side_of(&Pubkey::new_from_array([9; 32])).is_err());
    }

    #[test]
    fn credit_and_debit_track_reserves() {
        let mut p = pair(100, 200);
        p.credit(PairSide::A, 33).unwrap();
        p.debit(PairSide::B, 150).unwrap();
        assert_eq!(p.reserve_a, 133);
        assert_eq!(p.reserve_b, 50);
        assert!(p.debit(PairSide::B, 51).is_err());
    }
}
