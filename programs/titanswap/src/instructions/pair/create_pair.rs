use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{NATIVE_ASSET_ID, SEED_NATIVE_VAULT, SEED_PAIR};
use crate::errors::AmmError;
use crate::events;
use crate::state::{LegKind, PairPool};

#[derive(Accounts)]
pub struct CreatePair<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: only the address is recorded as the leg identifier.
    pub asset_a: UncheckedAccount<'info>,

    /// CHECK: only the address is recorded as the leg identifier.
    pub asset_b: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = PairPool::LEN,
        seeds = [SEED_PAIR, asset_a.key().as_ref(), asset_b.key().as_ref()],
        bump
    )]
    pub pair: Account<'info, PairPool>,

    /// CHECK: validated in the handler against the leg kind.
    pub vault_a: UncheckedAccount<'info>,

    /// CHECK: validated in the handler against the leg kind.
    pub vault_b: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_pair(ctx: Context<CreatePair>, kind_a: LegKind, kind_b: LegKind) -> Result<()> {
    let asset_a = ctx.accounts.asset_a.key();
    let asset_b = ctx.accounts.asset_b.key();

    require!(
        asset_a != Pubkey::default() && asset_b != Pubkey::default(),
        AmmError::ZeroAddress
    );
    require!(asset_a != asset_b, AmmError::IdenticalAssets);
    // One pool per unordered pair: the PDA is derived from the canonical
    // (sorted) order, so a reversed registration resolves to the same
    // address and fails account creation.
    require!(asset_a < asset_b, AmmError::UnsortedAssets);

    let pair_key = ctx.accounts.pair.key();
    let bump_a = validate_vault(
        kind_a,
        &ctx.accounts.vault_a.to_account_info(),
        &asset_a,
        &pair_key,
    )?;
    let bump_b = validate_vault(
        kind_b,
        &ctx.accounts.vault_b.to_account_info(),
        &asset_b,
        &pair_key,
    )?;

    let pair = &mut ctx.accounts.pair;
    pair.asset_a = asset_a;
    pair.asset_b = asset_b;
    pair.kind_a = kind_a;
    pair.kind_b = kind_b;
    pair.vault_a = ctx.accounts.vault_a.key();
    pair.vault_b = ctx.accounts.vault_b.key();
    pair.reserve_a = 0;
    pair.reserve_b = 0;
    pair.total_shares = 0;
    pair.bump = ctx.bumps.pair;
    pair.native_vault_bump = bump_a.or(bump_b).unwrap_or(0);

    emit!(events::PairCreated {
        asset_a,
        asset_b,
        pair: pair_key,
    });

    Ok(())
}

/// For a ledger leg the vault must be a token account of the leg's mint,
/// held by the token program and owned by the pair PDA; for a native leg it
/// must be the pair's derived lamport vault and the identifier must be the
/// native asset id.
fn validate_vault(
    kind: LegKind,
    vault: &AccountInfo,
    asset: &Pubkey,
    pair: &Pubkey,
) -> Result<Option<u8>> {
    match kind {
        LegKind::Ledger => {
            // Token-account-shaped data under a foreign program must not
            // pass; the recorded vault is permanent for the pair.
            require_keys_eq!(*vault.owner, anchor_spl::token::ID, AmmError::InvalidVault);
            let data = vault.try_borrow_data()?;
            let token_account = TokenAccount::try_deserialize(&mut &data[..])?;
            require_keys_eq!(token_account.mint, *asset, AmmError::InvalidVault);
            require_keys_eq!(token_account.owner, *pair, AmmError::InvalidVault);
            Ok(None)
        }
        LegKind::Native => {
            require_keys_eq!(*asset, NATIVE_ASSET_ID, AmmError::UnknownAsset);
            let (expected, bump) =
                Pubkey::find_program_address(&[SEED_NATIVE_VAULT, pair.as_ref()], &crate::ID);
            require_keys_eq!(expected, vault.key(), AmmError::InvalidVault);
            Ok(Some(bump))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::program_option::COption;
    use anchor_lang::solana_program::program_pack::Pack;
    use anchor_spl::token::spl_token::state::{Account as SplTokenAccount, AccountState};

    fn packed_vault(mint: Pubkey, owner: Pubkey) -> Vec<u8> {
        let account = SplTokenAccount {
            mint,
            owner,
            amount: 0,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0u8; SplTokenAccount::LEN];
        SplTokenAccount::pack(account, &mut data).unwrap();
        data
    }

    fn check_ledger(
        program_owner: &Pubkey,
        data: &mut [u8],
        asset: &Pubkey,
        pair: &Pubkey,
    ) -> Result<Option<u8>> {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            data,
            program_owner,
            false,
            0,
        );
        validate_vault(LegKind::Ledger, &info, asset, pair)
    }

    #[test]
    fn ledger_vault_must_be_held_by_the_token_program() {
        let asset = Pubkey::new_unique();
        let pair = Pubkey::new_unique();
        let data = packed_vault(asset, pair);
        assert!(check_ledger(&anchor_spl::token::ID, &mut data.clone(), &asset, &pair).is_ok());
        // identical bytes under a foreign program are rejected
        let foreign = Pubkey::new_unique();
        assert!(check_ledger(&foreign, &mut data.clone(), &asset, &pair).is_err());
    }

    #[test]
    fn ledger_vault_must_match_mint_and_pair() {
        let asset = Pubkey::new_unique();
        let pair = Pubkey::new_unique();
        let mut wrong_mint = packed_vault(Pubkey::new_unique(), pair);
        assert!(check_ledger(&anchor_spl::token::ID, &mut wrong_mint, &asset, &pair).is_err());
        let mut wrong_owner = packed_vault(asset, Pubkey::new_unique());
        assert!(check_ledger(&anchor_spl::token::ID, &mut wrong_owner, &asset, &pair).is_err());
    }

    #[test]
    fn native_vault_must_be_the_derived_address() {
        let pair = Pubkey::new_unique();
        let (expected, bump) =
            Pubkey::find_program_address(&[SEED_NATIVE_VAULT, pair.as_ref()], &crate::ID);
        let system = anchor_lang::system_program::ID;
        let mut lamports = 0u64;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(
            &expected,
            false,
            false,
            &mut lamports,
            &mut data,
            &system,
            false,
            0,
        );
        assert_eq!(
            validate_vault(LegKind::Native, &info, &NATIVE_ASSET_ID, &pair).unwrap(),
            Some(bump)
        );

        let other = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(
            &other,
            false,
            false,
            &mut lamports,
            &mut data,
            &system,
            false,
            0,
        );
        assert!(validate_vault(LegKind::Native, &info, &NATIVE_ASSET_ID, &pair).is_err());
    }
}
